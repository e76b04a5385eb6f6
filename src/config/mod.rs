//! Configuration system for zmanim-batch.
//!
//! The configuration file holds the location zmanim are computed for, calendar
//! options, and a default query. Command-line flags override the query.
//!
//! ## Configuration Sources
//!
//! 1. The file given with `--config <file>`; it must exist.
//! 2. **XDG_CONFIG_HOME**/zmanim-batch/zmanim-batch.toml, created with defaults
//!    on first use.
//!
//! ## Configuration Structure
//!
//! ```toml
//! #[Calendar]
//! candle_lighting_offset = 18    # Minutes before sunset candles are lit (0-120)
//! in_israel = false              # Use the Israeli festival calendar
//! use_elevation = false          # Use elevation-adjusted sunrise/sunset for hanetz/shkia
//! use_modern_holidays = false    # Classify Yom HaShoah, Yom HaZikaron, Yom HaAtzmaut, Yom Yerushalayim
//!
//! [location]
//! name = "Lakewood, NJ"
//! latitude = 40.072109           # Geographic latitude (-90 to 90)
//! longitude = -74.240024         # Geographic longitude (-180 to 180)
//! timezone = "America/New_York"  # IANA timezone name
//! elevation = 15.0               # Meters above sea level (>= 0)
//!
//! [query]
//! start = "2019-12-01"           # First day (YYYY-MM-DD), defaults to today
//! end = "2020-01-30"             # Last day (YYYY-MM-DD), defaults to start + 29 days
//! categories = ["chanukah"]      # Day categories to keep, empty keeps every day
//! zmanim = ["candle_lighting"]   # Zmanim to compute, empty computes the default list
//! invert = false                 # Keep days matching none of the categories
//! dedup = false                  # List a day once even if several categories match
//! format = "text"                # "text" or "json"
//! ```
//!
//! ## Validation and Error Handling
//!
//! Values are checked by [`validation::validate_config`] right after parsing, and
//! again after command-line overrides are merged in [`Config::resolve_query`].

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

use crate::args::QueryOverrides;
use crate::calendar::{CalendarOptions, Category};
use crate::common::constants::*;
use crate::geo::GeoContext;
use crate::range::SelectOptions;
use crate::zmanim::Zman;

// Re-export public API
pub use builder::create_default_config;
pub use loading::{get_config_path, load, load_from_path};

/// How the report is printed.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn text through the logger.
    #[default]
    Text,
    /// A JSON document on stdout.
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// The `[location]` table.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct LocationConfig {
    pub name: Option<String>,
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: Option<f64>,
    /// IANA timezone name, e.g. "America/New_York"
    pub timezone: Option<String>,
    /// Meters above sea level
    pub elevation: Option<f64>,
}

/// The `[query]` table: what to compute when no flags say otherwise.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct QueryConfig {
    pub start: Option<String>,
    pub end: Option<String>,
    pub categories: Option<Vec<String>>,
    pub zmanim: Option<Vec<String>>,
    pub invert: Option<bool>,
    pub dedup: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Configuration structure for zmanim-batch.
///
/// Every field is optional in the file; [`loading::load_from_path`] fills in
/// defaults after validation.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Minutes before sunset that candles are lit (0-120).
    pub candle_lighting_offset: Option<u32>,
    /// Use the Israeli festival calendar (no second festival days).
    pub in_israel: Option<bool>,
    /// Use elevation-adjusted sunrise and sunset for hanetz and shkia.
    pub use_elevation: Option<bool>,
    /// Classify the modern Israeli holidays.
    pub use_modern_holidays: Option<bool>,

    #[serde(default)]
    pub location: LocationConfig,

    #[serde(default)]
    pub query: QueryConfig,
}

/// A fully resolved query, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Empty means every day in the range.
    pub categories: Vec<Category>,
    pub zmanim: Vec<Zman>,
    pub select: SelectOptions,
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration using automatic path detection.
    pub fn load() -> Result<Self> {
        loading::load()
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self> {
        loading::load_from_path(path)
    }

    fn timezone(&self) -> Result<Tz> {
        let name = self.location.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE);
        name.parse::<Tz>()
            .map_err(|_| anyhow::anyhow!("Unknown timezone '{name}'"))
    }

    /// The location zmanim are computed for.
    pub fn geo_context(&self) -> Result<GeoContext> {
        let location = &self.location;
        let name = location.name.as_deref().unwrap_or(DEFAULT_LOCATION_NAME);

        let geo = GeoContext::new(
            name,
            location.latitude.unwrap_or(DEFAULT_LATITUDE),
            location.longitude.unwrap_or(DEFAULT_LONGITUDE),
            self.timezone()?,
        )
        .context("Invalid location in configuration")?
        .with_elevation(location.elevation.unwrap_or(DEFAULT_ELEVATION))
        .context("Invalid elevation in configuration")?
        .with_candle_lighting_offset(
            self.candle_lighting_offset
                .unwrap_or(DEFAULT_CANDLE_LIGHTING_OFFSET),
        )
        .context("Invalid candle lighting offset in configuration")?
        .with_use_elevation(self.use_elevation.unwrap_or(false));

        Ok(geo)
    }

    pub fn calendar_options(&self) -> CalendarOptions {
        CalendarOptions {
            in_israel: self.in_israel.unwrap_or(false),
            use_modern_holidays: self.use_modern_holidays.unwrap_or(false),
        }
    }

    /// Merge command-line overrides into the `[query]` table and resolve it.
    ///
    /// Lists given on the command line replace the configured lists; boolean
    /// flags can only switch an option on.
    pub fn resolve_query(&self, overrides: &QueryOverrides) -> Result<Query> {
        let query = &self.query;

        let start = match overrides.start.as_deref().or(query.start.as_deref()) {
            Some(text) => parse_date(text, "start")?,
            None => Utc::now().with_timezone(&self.timezone()?).date_naive(),
        };
        let end = match overrides.end.as_deref().or(query.end.as_deref()) {
            Some(text) => parse_date(text, "end")?,
            None => start
                .checked_add_days(Days::new(DEFAULT_RANGE_DAYS - 1))
                .context("Default end date is out of range")?,
        };
        if end < start {
            anyhow::bail!("end date ({end}) must not be before start date ({start})");
        }

        let categories = pick(&overrides.categories, &query.categories);
        let categories = Category::parse_all(categories).context("Invalid category")?;

        let zmanim = pick(&overrides.zmanim, &query.zmanim);
        let zmanim = if zmanim.is_empty() {
            Zman::DEFAULT.to_vec()
        } else {
            Zman::parse_all(zmanim).context("Invalid zman")?
        };

        let format = if overrides.json {
            OutputFormat::Json
        } else {
            query.format.unwrap_or_default()
        };

        Ok(Query {
            start,
            end,
            categories,
            zmanim,
            select: SelectOptions {
                invert: overrides.invert || query.invert.unwrap_or(false),
                dedup: overrides.dedup || query.dedup.unwrap_or(false),
            },
            format,
        })
    }

    /// Log the active configuration.
    pub fn log_config(&self) {
        let location = &self.location;
        log_block_start!("Loaded configuration");
        log_indented!(
            "Location: {}",
            location.name.as_deref().unwrap_or(DEFAULT_LOCATION_NAME)
        );
        log_indented!(
            "Coordinates: {:.6}, {:.6}",
            location.latitude.unwrap_or(DEFAULT_LATITUDE),
            location.longitude.unwrap_or(DEFAULT_LONGITUDE)
        );
        log_indented!(
            "Timezone: {}",
            location.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
        );
        log_indented!(
            "Elevation: {}m",
            location.elevation.unwrap_or(DEFAULT_ELEVATION)
        );
        log_indented!(
            "Candle lighting: {} minutes before sunset",
            self.candle_lighting_offset
                .unwrap_or(DEFAULT_CANDLE_LIGHTING_OFFSET)
        );
        if self.in_israel.unwrap_or(false) {
            log_indented!("Calendar: Israel");
        }
        if self.use_modern_holidays.unwrap_or(false) {
            log_indented!("Modern holidays: enabled");
        }
    }
}

fn parse_date(text: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .with_context(|| format!("Invalid {field} date '{text}'. Use YYYY-MM-DD format"))
}

/// Command-line list if given, otherwise the configured one.
fn pick<'a>(cli: &'a [String], configured: &'a Option<Vec<String>>) -> &'a [String] {
    if !cli.is_empty() {
        cli
    } else {
        configured.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
