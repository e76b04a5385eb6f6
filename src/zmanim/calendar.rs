//! Per-day zman computations.
//!
//! A [`ZmanimCalendar`] pairs one [`CalendarDay`] with the shared
//! [`GeoContext`]. Solar events come from the `sunrise` crate; everything
//! else is arithmetic on those events.
//!
//! Every method returns `Ok(None)` when the zman does not apply on this day,
//! including days on which the sun never reaches the required position.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;
use sunrise::{Coordinates, SolarDay, SolarEvent};

use super::zman::Zman;
use crate::calendar::CalendarDay;
use crate::common::constants::{
    ALOS_DEPRESSION_DEGREES, FIXED_TWILIGHT_MINUTES, TZAIS_DEPRESSION_DEGREES,
};
use crate::error::{Result, ZmanimError};
use crate::geo::GeoContext;

/// Zman computation handle for one day.
#[derive(Debug, Clone)]
pub struct ZmanimCalendar<'a> {
    day: &'a CalendarDay,
    geo: &'a GeoContext,
}

impl<'a> ZmanimCalendar<'a> {
    pub fn new(day: &'a CalendarDay, geo: &'a GeoContext) -> Result<Self> {
        geo.coordinates()?;
        Ok(Self { day, geo })
    }

    pub fn day(&self) -> &'a CalendarDay {
        self.day
    }

    pub fn date(&self) -> NaiveDate {
        self.day.gregorian_date()
    }

    /// Compute a zman by name.
    pub fn compute(&self, zman: Zman) -> Result<Option<super::ZmanValue>> {
        (zman.handler())(self)
    }

    // # Solar events

    fn solar_event(&self, event: SolarEvent, altitude: f64) -> Option<DateTime<Tz>> {
        let coordinates = Coordinates::new(self.geo.latitude(), self.geo.longitude())?;
        let utc: DateTime<Utc> = SolarDay::new(coordinates, self.date())
            .with_altitude(altitude)
            .event_time(event);
        let local = utc.with_timezone(&self.geo.timezone());

        // Polar days and nights produce events that drift off the requested date.
        if local.date_naive().signed_duration_since(self.date()).num_days().abs() > 1 {
            return None;
        }
        Some(local)
    }

    /// Moment the sun reaches `degrees` below the horizon.
    ///
    /// `sunrise` measures event angles as depression, so a positive value is below the horizon.
    fn depression(&self, degrees: f64, morning: bool) -> Option<DateTime<Tz>> {
        self.solar_event(
            SolarEvent::Elevation {
                elevation: degrees.to_radians(),
                morning,
            },
            0.0,
        )
    }

    fn checked_offset(
        &self,
        zman: Zman,
        time: DateTime<Tz>,
        offset: TimeDelta,
    ) -> Result<DateTime<Tz>> {
        time.checked_add_signed(offset)
            .ok_or_else(|| self.failure(zman, format!("offset {offset} out of range")))
    }

    fn failure(&self, zman: Zman, reason: String) -> ZmanimError {
        ZmanimError::Computation {
            date: self.date(),
            zman: zman.tag(),
            reason,
        }
    }

    /// Sunrise and sunset as a pair, only when the sun actually rises and sets.
    fn day_bounds(
        &self,
        sunrise: Option<DateTime<Tz>>,
        sunset: Option<DateTime<Tz>>,
    ) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        match (sunrise, sunset) {
            (Some(rise), Some(set)) if set > rise => Some((rise, set)),
            _ => None,
        }
    }

    pub fn sea_level_sunrise(&self) -> Result<Option<DateTime<Tz>>> {
        Ok(self.solar_event(SolarEvent::Sunrise, 0.0))
    }

    pub fn sea_level_sunset(&self) -> Result<Option<DateTime<Tz>>> {
        Ok(self.solar_event(SolarEvent::Sunset, 0.0))
    }

    pub fn elevation_adjusted_sunrise(&self) -> Result<Option<DateTime<Tz>>> {
        Ok(self.solar_event(SolarEvent::Sunrise, self.geo.elevation()))
    }

    pub fn elevation_adjusted_sunset(&self) -> Result<Option<DateTime<Tz>>> {
        Ok(self.solar_event(SolarEvent::Sunset, self.geo.elevation()))
    }

    /// Sunrise used for the halachic day.
    pub fn hanetz(&self) -> Result<Option<DateTime<Tz>>> {
        if self.geo.use_elevation() {
            self.elevation_adjusted_sunrise()
        } else {
            self.sea_level_sunrise()
        }
    }

    /// Sunset used for the halachic day.
    pub fn shkia(&self) -> Result<Option<DateTime<Tz>>> {
        if self.geo.use_elevation() {
            self.elevation_adjusted_sunset()
        } else {
            self.sea_level_sunset()
        }
    }

    pub fn alos(&self) -> Result<Option<DateTime<Tz>>> {
        Ok(self.depression(ALOS_DEPRESSION_DEGREES, true))
    }

    pub fn alos_72(&self) -> Result<Option<DateTime<Tz>>> {
        self.hanetz()?
            .map(|rise| {
                self.checked_offset(Zman::Alos72, rise, -TimeDelta::minutes(FIXED_TWILIGHT_MINUTES))
            })
            .transpose()
    }

    pub fn tzais(&self) -> Result<Option<DateTime<Tz>>> {
        Ok(self.depression(TZAIS_DEPRESSION_DEGREES, false))
    }

    pub fn tzais_72(&self) -> Result<Option<DateTime<Tz>>> {
        self.shkia()?
            .map(|set| {
                self.checked_offset(Zman::Tzais72, set, TimeDelta::minutes(FIXED_TWILIGHT_MINUTES))
            })
            .transpose()
    }

    /// Midpoint of sea-level sunrise and sunset.
    pub fn chatzos(&self) -> Result<Option<DateTime<Tz>>> {
        let Some((rise, set)) =
            self.day_bounds(self.sea_level_sunrise()?, self.sea_level_sunset()?)
        else {
            return Ok(None);
        };
        self.checked_offset(Zman::Chatzos, rise, (set - rise) / 2)
            .map(Some)
    }

    /// Sea-level sunset minus the offset, on days with candle lighting only.
    pub fn candle_lighting(&self) -> Result<Option<DateTime<Tz>>> {
        if !self.day.has_candle_lighting() {
            return Ok(None);
        }
        self.sea_level_sunset()?
            .map(|set| {
                self.checked_offset(Zman::CandleLighting, set, -self.geo.candle_lighting_offset())
            })
            .transpose()
    }

    // # Proportional hours

    /// One twelfth of the day from sunrise to sunset.
    pub fn shaah_zmanis_gra(&self) -> Result<Option<TimeDelta>> {
        Ok(self
            .day_bounds(self.hanetz()?, self.shkia()?)
            .map(|(rise, set)| (set - rise) / 12))
    }

    /// One twelfth of the day from 72 minutes before sunrise to 72 minutes after sunset.
    pub fn shaah_zmanis_mga(&self) -> Result<Option<TimeDelta>> {
        Ok(self
            .day_bounds(self.alos_72()?, self.tzais_72()?)
            .map(|(start, end)| (end - start) / 12))
    }

    /// `start` plus `hours` proportional hours.
    fn after_hours(
        &self,
        zman: Zman,
        start: Option<DateTime<Tz>>,
        hour: Option<TimeDelta>,
        hours: f64,
    ) -> Result<Option<DateTime<Tz>>> {
        let (Some(start), Some(hour)) = (start, hour) else {
            return Ok(None);
        };
        let millis = hour.num_milliseconds() as f64 * hours;
        if !millis.is_finite() {
            return Err(self.failure(zman, format!("non-finite offset for {hours} hours")));
        }
        self.checked_offset(zman, start, TimeDelta::milliseconds(millis.round() as i64))
            .map(Some)
    }

    fn after_gra_hours(&self, zman: Zman, hours: f64) -> Result<Option<DateTime<Tz>>> {
        self.after_hours(zman, self.hanetz()?, self.shaah_zmanis_gra()?, hours)
    }

    fn after_mga_hours(&self, zman: Zman, hours: f64) -> Result<Option<DateTime<Tz>>> {
        self.after_hours(zman, self.alos_72()?, self.shaah_zmanis_mga()?, hours)
    }

    pub fn sof_zman_shma_gra(&self) -> Result<Option<DateTime<Tz>>> {
        self.after_gra_hours(Zman::SofZmanShmaGra, 3.0)
    }

    pub fn sof_zman_shma_mga(&self) -> Result<Option<DateTime<Tz>>> {
        self.after_mga_hours(Zman::SofZmanShmaMga, 3.0)
    }

    pub fn sof_zman_tfila_gra(&self) -> Result<Option<DateTime<Tz>>> {
        self.after_gra_hours(Zman::SofZmanTfilaGra, 4.0)
    }

    pub fn sof_zman_tfila_mga(&self) -> Result<Option<DateTime<Tz>>> {
        self.after_mga_hours(Zman::SofZmanTfilaMga, 4.0)
    }

    pub fn mincha_gedola(&self) -> Result<Option<DateTime<Tz>>> {
        self.after_gra_hours(Zman::MinchaGedola, 6.5)
    }

    pub fn mincha_ketana(&self) -> Result<Option<DateTime<Tz>>> {
        self.after_gra_hours(Zman::MinchaKetana, 9.5)
    }

    pub fn plag_hamincha(&self) -> Result<Option<DateTime<Tz>>> {
        self.after_gra_hours(Zman::PlagHamincha, 10.75)
    }
}
