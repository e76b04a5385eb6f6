// Common constants shared by the library and the binary
pub mod constants;
