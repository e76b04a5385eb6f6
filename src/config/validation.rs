//! Configuration validation functionality.
//!
//! Rejects values that cannot produce a meaningful run: coordinates off the
//! globe, unknown timezones, malformed dates and tags nothing can resolve.

use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;

use super::Config;
use crate::calendar::Category;
use crate::common::constants::*;
use crate::zmanim::Zman;

/// Comprehensive configuration validation.
pub fn validate_config(config: &Config) -> Result<()> {
    let location = &config.location;

    if let Some(lat) = location.latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = location.longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    if let Some(elevation) = location.elevation
        && !(elevation >= 0.0 && elevation.is_finite())
    {
        anyhow::bail!(
            "elevation must be zero or more meters above sea level (got {})",
            elevation
        );
    }

    if let Some(name) = location.timezone.as_deref()
        && name.parse::<Tz>().is_err()
    {
        anyhow::bail!(
            "timezone '{}' is not a known IANA timezone (e.g. \"{}\")",
            name,
            DEFAULT_TIMEZONE
        );
    }

    if let Some(offset) = config.candle_lighting_offset
        && offset > MAXIMUM_CANDLE_LIGHTING_OFFSET
    {
        anyhow::bail!(
            "candle_lighting_offset ({} minutes) must be between 0 and {} minutes",
            offset,
            MAXIMUM_CANDLE_LIGHTING_OFFSET
        );
    }

    let query = &config.query;
    let start = query
        .start
        .as_deref()
        .map(|text| validate_date(text, "start"))
        .transpose()?;
    let end = query
        .end
        .as_deref()
        .map(|text| validate_date(text, "end"))
        .transpose()?;
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        anyhow::bail!("end date ({}) must not be before start date ({})", end, start);
    }

    for tag in query.categories.iter().flatten() {
        if tag.parse::<Category>().is_err() {
            anyhow::bail!(
                "Unknown category '{}'. Run with --list-categories to see every category",
                tag
            );
        }
    }

    for tag in query.zmanim.iter().flatten() {
        if tag.parse::<Zman>().is_err() {
            anyhow::bail!(
                "Unknown zman '{}'. Run with --list-zmanim to see every zman",
                tag
            );
        }
    }

    Ok(())
}

fn validate_date(text: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| {
        anyhow::anyhow!(
            "{} date '{}' is not a valid date. Use YYYY-MM-DD format",
            field,
            text
        )
    })
}
