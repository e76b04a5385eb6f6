//! Zman names and computed values.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta};
use chrono_tz::Tz;

use super::calendar::ZmanimCalendar;
use crate::error::{Result, ZmanimError};

/// A named zman the collector can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Zman {
    ElevationAdjustedSunrise,
    ElevationAdjustedSunset,
    Hanetz,
    Shkia,
    Tzais,
    Tzais72,
    Alos,
    Alos72,
    Chatzos,
    CandleLighting,
    SofZmanShmaGra,
    SofZmanShmaMga,
    SofZmanTfilaGra,
    SofZmanTfilaMga,
    MinchaGedola,
    MinchaKetana,
    PlagHamincha,
    ShaahZmanisGra,
    ShaahZmanisMga,
    SeaLevelSunrise,
    SeaLevelSunset,
}

/// Signature shared by every zman handler.
pub(crate) type ZmanHandler = fn(&ZmanimCalendar<'_>) -> Result<Option<ZmanValue>>;

impl Zman {
    /// The zmanim computed when a caller asks for none in particular.
    pub const DEFAULT: [Zman; 19] = [
        Zman::ElevationAdjustedSunrise,
        Zman::ElevationAdjustedSunset,
        Zman::Hanetz,
        Zman::Shkia,
        Zman::Tzais,
        Zman::Tzais72,
        Zman::Alos,
        Zman::Alos72,
        Zman::Chatzos,
        Zman::CandleLighting,
        Zman::SofZmanShmaGra,
        Zman::SofZmanShmaMga,
        Zman::SofZmanTfilaGra,
        Zman::SofZmanTfilaMga,
        Zman::MinchaGedola,
        Zman::MinchaKetana,
        Zman::PlagHamincha,
        Zman::ShaahZmanisGra,
        Zman::ShaahZmanisMga,
    ];

    pub const ALL: [Zman; 21] = [
        Zman::ElevationAdjustedSunrise,
        Zman::ElevationAdjustedSunset,
        Zman::Hanetz,
        Zman::Shkia,
        Zman::Tzais,
        Zman::Tzais72,
        Zman::Alos,
        Zman::Alos72,
        Zman::Chatzos,
        Zman::CandleLighting,
        Zman::SofZmanShmaGra,
        Zman::SofZmanShmaMga,
        Zman::SofZmanTfilaGra,
        Zman::SofZmanTfilaMga,
        Zman::MinchaGedola,
        Zman::MinchaKetana,
        Zman::PlagHamincha,
        Zman::ShaahZmanisGra,
        Zman::ShaahZmanisMga,
        Zman::SeaLevelSunrise,
        Zman::SeaLevelSunset,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Zman::ElevationAdjustedSunrise => "elevation_adjusted_sunrise",
            Zman::ElevationAdjustedSunset => "elevation_adjusted_sunset",
            Zman::Hanetz => "hanetz",
            Zman::Shkia => "shkia",
            Zman::Tzais => "tzais",
            Zman::Tzais72 => "tzais_72",
            Zman::Alos => "alos",
            Zman::Alos72 => "alos_72",
            Zman::Chatzos => "chatzos",
            Zman::CandleLighting => "candle_lighting",
            Zman::SofZmanShmaGra => "sof_zman_shma_gra",
            Zman::SofZmanShmaMga => "sof_zman_shma_mga",
            Zman::SofZmanTfilaGra => "sof_zman_tfila_gra",
            Zman::SofZmanTfilaMga => "sof_zman_tfila_mga",
            Zman::MinchaGedola => "mincha_gedola",
            Zman::MinchaKetana => "mincha_ketana",
            Zman::PlagHamincha => "plag_hamincha",
            Zman::ShaahZmanisGra => "shaah_zmanis_gra",
            Zman::ShaahZmanisMga => "shaah_zmanis_mga",
            Zman::SeaLevelSunrise => "sea_level_sunrise",
            Zman::SeaLevelSunset => "sea_level_sunset",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Zman::ElevationAdjustedSunrise => "Sunrise at the configured elevation",
            Zman::ElevationAdjustedSunset => "Sunset at the configured elevation",
            Zman::Hanetz => "Sunrise",
            Zman::Shkia => "Sunset",
            Zman::Tzais => "Nightfall (8.5° below the horizon)",
            Zman::Tzais72 => "Nightfall, 72 minutes after sunset",
            Zman::Alos => "Dawn (16.1° below the horizon)",
            Zman::Alos72 => "Dawn, 72 minutes before sunrise",
            Zman::Chatzos => "Midday",
            Zman::CandleLighting => "Candle lighting",
            Zman::SofZmanShmaGra => "Latest Shema (GRA)",
            Zman::SofZmanShmaMga => "Latest Shema (Magen Avraham)",
            Zman::SofZmanTfilaGra => "Latest morning prayer (GRA)",
            Zman::SofZmanTfilaMga => "Latest morning prayer (Magen Avraham)",
            Zman::MinchaGedola => "Earliest afternoon prayer",
            Zman::MinchaKetana => "Later afternoon prayer",
            Zman::PlagHamincha => "Plag hamincha",
            Zman::ShaahZmanisGra => "Proportional hour (GRA)",
            Zman::ShaahZmanisMga => "Proportional hour (Magen Avraham)",
            Zman::SeaLevelSunrise => "Sunrise at sea level",
            Zman::SeaLevelSunset => "Sunset at sea level",
        }
    }

    /// The computation behind this zman.
    pub(crate) fn handler(&self) -> ZmanHandler {
        match self {
            Zman::ElevationAdjustedSunrise => |c| c.elevation_adjusted_sunrise().map(ZmanValue::time),
            Zman::ElevationAdjustedSunset => |c| c.elevation_adjusted_sunset().map(ZmanValue::time),
            Zman::Hanetz => |c| c.hanetz().map(ZmanValue::time),
            Zman::Shkia => |c| c.shkia().map(ZmanValue::time),
            Zman::Tzais => |c| c.tzais().map(ZmanValue::time),
            Zman::Tzais72 => |c| c.tzais_72().map(ZmanValue::time),
            Zman::Alos => |c| c.alos().map(ZmanValue::time),
            Zman::Alos72 => |c| c.alos_72().map(ZmanValue::time),
            Zman::Chatzos => |c| c.chatzos().map(ZmanValue::time),
            Zman::CandleLighting => |c| c.candle_lighting().map(ZmanValue::time),
            Zman::SofZmanShmaGra => |c| c.sof_zman_shma_gra().map(ZmanValue::time),
            Zman::SofZmanShmaMga => |c| c.sof_zman_shma_mga().map(ZmanValue::time),
            Zman::SofZmanTfilaGra => |c| c.sof_zman_tfila_gra().map(ZmanValue::time),
            Zman::SofZmanTfilaMga => |c| c.sof_zman_tfila_mga().map(ZmanValue::time),
            Zman::MinchaGedola => |c| c.mincha_gedola().map(ZmanValue::time),
            Zman::MinchaKetana => |c| c.mincha_ketana().map(ZmanValue::time),
            Zman::PlagHamincha => |c| c.plag_hamincha().map(ZmanValue::time),
            Zman::ShaahZmanisGra => |c| c.shaah_zmanis_gra().map(ZmanValue::length),
            Zman::ShaahZmanisMga => |c| c.shaah_zmanis_mga().map(ZmanValue::length),
            Zman::SeaLevelSunrise => |c| c.sea_level_sunrise().map(ZmanValue::time),
            Zman::SeaLevelSunset => |c| c.sea_level_sunset().map(ZmanValue::time),
        }
    }

    /// Resolve a list of tags, failing on the first unknown one.
    pub fn parse_all<S: AsRef<str>>(tags: &[S]) -> Result<Vec<Zman>> {
        tags.iter().map(|tag| tag.as_ref().parse()).collect()
    }
}

impl FromStr for Zman {
    type Err = ZmanimError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = s.trim();
        Zman::ALL
            .iter()
            .find(|zman| zman.tag() == tag)
            .copied()
            .ok_or_else(|| ZmanimError::UnknownZmanName(s.to_string()))
    }
}

impl fmt::Display for Zman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The value of one zman on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZmanValue {
    /// A moment in the location's timezone.
    Time(DateTime<Tz>),
    /// A length of time, used for proportional hours.
    Length(TimeDelta),
}

impl ZmanValue {
    fn time(value: Option<DateTime<Tz>>) -> Option<Self> {
        value.map(ZmanValue::Time)
    }

    fn length(value: Option<TimeDelta>) -> Option<Self> {
        value.map(ZmanValue::Length)
    }

    pub fn as_time(&self) -> Option<DateTime<Tz>> {
        match self {
            ZmanValue::Time(time) => Some(*time),
            ZmanValue::Length(_) => None,
        }
    }

    pub fn as_length(&self) -> Option<TimeDelta> {
        match self {
            ZmanValue::Length(length) => Some(*length),
            ZmanValue::Time(_) => None,
        }
    }
}

impl fmt::Display for ZmanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZmanValue::Time(time) => write!(f, "{}", time.format("%H:%M:%S %Z")),
            ZmanValue::Length(length) => {
                let seconds = length.num_seconds();
                write!(f, "{}m {:02}s", seconds / 60, seconds % 60)
            }
        }
    }
}
