//! Application-wide constants and defaults.

// # Zmanim

/// Minutes before sunset that candles are lit unless configured otherwise.
pub const DEFAULT_CANDLE_LIGHTING_OFFSET: u32 = 18;
pub const MAXIMUM_CANDLE_LIGHTING_OFFSET: u32 = 120;

/// Sun depression for alos (dawn), in degrees below the horizon.
pub const ALOS_DEPRESSION_DEGREES: f64 = 16.1;
/// Sun depression for tzais (nightfall), in degrees below the horizon.
pub const TZAIS_DEPRESSION_DEGREES: f64 = 8.5;
/// Fixed offset for the 72-minute dawn and nightfall variants.
pub const FIXED_TWILIGHT_MINUTES: i64 = 72;

// # Configuration

pub const CONFIG_DIR_NAME: &str = "zmanim-batch";
pub const CONFIG_FILE_NAME: &str = "zmanim-batch.toml";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Days covered when no end date is configured.
pub const DEFAULT_RANGE_DAYS: u64 = 30;

pub const DEFAULT_LOCATION_NAME: &str = "Lakewood, NJ";
pub const DEFAULT_LATITUDE: f64 = 40.0721087;
pub const DEFAULT_LONGITUDE: f64 = -74.2400243;
pub const DEFAULT_TIMEZONE: &str = "America/New_York";
pub const DEFAULT_ELEVATION: f64 = 15.0;

// # Process

pub const EXIT_FAILURE: i32 = 1;
