//! # zmanim-batch Library
//!
//! Batch computation of zmanim (halachic times) over a Gregorian date range,
//! optionally narrowed to days of chosen significance in the Jewish calendar.
//!
//! This library exists to enable testing of the pipeline and provide clean
//! separation between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! - **Calendar**: `calendar` classifies each Gregorian day (Hebrew date, significant
//!   day, day predicates)
//! - **Range**: `range` builds date ranges and selects days by category
//! - **Zmanim**: `zmanim` computes named zmanim per day and collects them in batch
//! - **Geographic**: `geo` holds the location zmanim are computed for
//! - **Configuration**: `config` for TOML-based settings
//! - **Output**: `report` prints text or JSON; `logger` provides the visual log style
//! - **Entry Point**: [`BatchRunner`] runs one batch end to end
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use chrono_tz::America;
//! use zmanim_batch::calendar::SignificantDay;
//! use zmanim_batch::geo::GeoContext;
//! use zmanim_batch::range::{DateRangeBuilder, SelectOptions};
//! use zmanim_batch::zmanim::{Zman, ZmanimBatchCollector};
//!
//! let geo = GeoContext::new("Lakewood, NJ", 40.0721087, -74.2400243, America::New_York)?
//!     .with_elevation(15.0)?;
//! let range = DateRangeBuilder::new().build(
//!     NaiveDate::from_ymd_opt(2019, 12, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2020, 1, 30).unwrap(),
//! )?;
//! let chanukah = range.select(&[SignificantDay::Chanukah.into()], SelectOptions::default());
//!
//! let collector = ZmanimBatchCollector::new(chanukah, &geo)?;
//! let result = collector.collect(&[Zman::CandleLighting, Zman::MinchaGedola])?;
//! assert_eq!(result.len(), 8);
//! # Ok::<(), zmanim_batch::error::ZmanimError>(())
//! ```

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod calendar;
pub mod common;
pub mod config;
pub mod error;
pub mod geo;
pub mod range;
pub mod report;
pub mod zmanim;

mod runner;

pub use error::{Result, ZmanimError};
pub use runner::BatchRunner;
