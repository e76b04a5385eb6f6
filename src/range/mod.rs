//! Date ranges and category selection.
//!
//! [`DateRangeBuilder`] produces a [`DateRange`] of classified days, and
//! [`filter_by_significance`] / [`select_dates`] pick days out of it by
//! [`Category`](crate::calendar::Category).

pub mod builder;
pub mod index;

pub use builder::{DateRange, DateRangeBuilder};
pub use index::{
    SelectOptions, SignificantDayIndex, filter_by_significance, filter_by_significance_named,
    select_dates, select_dates_named,
};

#[cfg(test)]
mod tests;
