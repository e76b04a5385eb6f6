//! Geographic context shared by every zman computation.
//!
//! A [`GeoContext`] is built once, validated up front, and then borrowed
//! read-only by each per-day [`ZmanimCalendar`](crate::zmanim::ZmanimCalendar).

use std::fmt;

use chrono::TimeDelta;
use chrono_tz::Tz;
use sunrise::Coordinates;

use crate::common::constants::{DEFAULT_CANDLE_LIGHTING_OFFSET, MAXIMUM_CANDLE_LIGHTING_OFFSET};
use crate::error::{Result, ZmanimError};


/// Location, timezone and computation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoContext {
    name: String,
    latitude: f64,
    longitude: f64,
    timezone: Tz,
    /// Metres above sea level
    elevation: f64,
    candle_lighting_offset: u32,
    use_elevation: bool,
}

impl GeoContext {
    /// Create a context at sea level with the default candle-lighting offset.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, timezone: Tz) -> Result<Self> {
        if Coordinates::new(latitude, longitude).is_none() {
            return Err(ZmanimError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            timezone,
            elevation: 0.0,
            candle_lighting_offset: DEFAULT_CANDLE_LIGHTING_OFFSET,
            use_elevation: false,
        })
    }

    /// Like [`GeoContext::new`] but with an IANA timezone name.
    pub fn with_timezone_name(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<Self> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| ZmanimError::InvalidTimezone(timezone.to_string()))?;
        Self::new(name, latitude, longitude, tz)
    }

    pub fn with_elevation(mut self, elevation: f64) -> Result<Self> {
        if !elevation.is_finite() || elevation < 0.0 {
            return Err(ZmanimError::InvalidElevation(elevation));
        }
        self.elevation = elevation;
        Ok(self)
    }

    /// Minutes before sunset that candles are lit, at most `MAXIMUM_CANDLE_LIGHTING_OFFSET`.
    pub fn with_candle_lighting_offset(mut self, minutes: u32) -> Result<Self> {
        if minutes > MAXIMUM_CANDLE_LIGHTING_OFFSET {
            return Err(ZmanimError::InvalidCandleLightingOffset(minutes));
        }
        self.candle_lighting_offset = minutes;
        Ok(self)
    }

    /// Use elevation-adjusted sunrise and sunset for the halachic day.
    pub fn with_use_elevation(mut self, use_elevation: bool) -> Self {
        self.use_elevation = use_elevation;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn candle_lighting_offset(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.candle_lighting_offset))
    }

    pub fn use_elevation(&self) -> bool {
        self.use_elevation
    }

    /// Coordinates in the form the solar calculator expects.
    pub(crate) fn coordinates(&self) -> Result<Coordinates> {
        Coordinates::new(self.latitude, self.longitude).ok_or(ZmanimError::InvalidCoordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

impl fmt::Display for GeoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.4}°, {:.4}°, {:.0} m, {})",
            self.name, self.latitude, self.longitude, self.elevation, self.timezone
        )
    }
}
