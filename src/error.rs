//! Error types for range construction, filtering and zmanim collection.
//!
//! Library operations return [`ZmanimError`]. A zman that simply does not
//! apply on a given day is not an error; it is reported as `None` in the
//! result. Everything in this enum is a genuine fault the caller should see.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the batch pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ZmanimError {
    /// The end of a date range precedes its start.
    #[error("invalid date range: end {end} precedes start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A requested zman name is not known.
    #[error("unknown zman name '{0}' (see --list-zmanim)")]
    UnknownZmanName(String),

    /// A requested significant-day category is not known.
    #[error("unknown significant-day category '{0}' (see --list-categories)")]
    UnknownCategory(String),

    /// The Gregorian date could not be converted to the Hebrew calendar.
    #[error("cannot convert {date} to the Hebrew calendar: {reason}")]
    InvalidDate { date: NaiveDate, reason: String },

    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("unknown timezone '{0}'")]
    InvalidTimezone(String),

    #[error("elevation must be a finite, non-negative number of metres (got {0})")]
    InvalidElevation(f64),

    #[error("candle lighting offset must be at most 120 minutes (got {0})")]
    InvalidCandleLightingOffset(u32),

    /// A zman computation failed unexpectedly. Aborts the whole collection.
    #[error("failed to compute {zman} for {date}: {reason}")]
    Computation {
        date: NaiveDate,
        zman: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ZmanimError>;
