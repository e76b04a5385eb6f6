//! Gregorian to Hebrew date conversion.
//!
//! The conversion itself is delegated to `icu_calendar`. This module only
//! reshapes the result into month names the significant-day rules use.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use icu_calendar::Date;
use icu_calendar::hebrew::Hebrew;

use crate::error::{Result, ZmanimError};

/// Hebrew months, named the way the significant-day rules refer to them.
///
/// `Adar` is used in common years; leap years have `AdarI` and `AdarII`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HebrewMonth {
    Tishrei,
    Cheshvan,
    Kislev,
    Teves,
    Shevat,
    Adar,
    AdarI,
    AdarII,
    Nissan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

impl HebrewMonth {
    /// Map an ordinal month (1 = Tishrei) to a named month.
    fn from_ordinal(ordinal: u32, leap_year: bool) -> Option<Self> {
        use HebrewMonth::*;

        let month = match (ordinal, leap_year) {
            (1, _) => Tishrei,
            (2, _) => Cheshvan,
            (3, _) => Kislev,
            (4, _) => Teves,
            (5, _) => Shevat,
            (6, false) => Adar,
            (6, true) => AdarI,
            (7, true) => AdarII,
            (7, false) | (8, true) => Nissan,
            (8, false) | (9, true) => Iyar,
            (9, false) | (10, true) => Sivan,
            (10, false) | (11, true) => Tammuz,
            (11, false) | (12, true) => Av,
            (12, false) | (13, true) => Elul,
            _ => return None,
        };
        Some(month)
    }

    pub fn name(&self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Teves => "Teves",
            HebrewMonth::Shevat => "Shevat",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::AdarI => "Adar I",
            HebrewMonth::AdarII => "Adar II",
            HebrewMonth::Nissan => "Nissan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
        }
    }

    /// The month Purim falls in: Adar in common years, Adar II in leap years.
    pub fn is_purim_month(&self) -> bool {
        matches!(self, HebrewMonth::Adar | HebrewMonth::AdarII)
    }
}

/// A date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    pub year: i32,
    pub month: HebrewMonth,
    pub day: u8,
    /// Length of the Hebrew year in days (353-355 or 383-385).
    pub year_length: u16,
}

impl HebrewDate {
    /// Convert a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self> {
        let invalid = |reason: String| ZmanimError::InvalidDate { date, reason };

        let month = u8::try_from(date.month()).map_err(|e| invalid(e.to_string()))?;
        let day = u8::try_from(date.day()).map_err(|e| invalid(e.to_string()))?;
        let iso = Date::try_new_iso_date(date.year(), month, day)
            .map_err(|e| invalid(format!("{e:?}")))?;
        let hebrew = iso.to_calendar(Hebrew::new());

        let leap_year = hebrew.months_in_year() == 13;
        let ordinal = hebrew.month().ordinal;
        let month = HebrewMonth::from_ordinal(ordinal, leap_year)
            .ok_or_else(|| invalid(format!("unexpected Hebrew month ordinal {ordinal}")))?;
        let day = u8::try_from(hebrew.day_of_month().0).map_err(|e| invalid(e.to_string()))?;
        let year_length =
            u16::try_from(hebrew.days_in_year()).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            year: hebrew.year().number,
            month,
            day,
            year_length,
        })
    }

    pub fn is_leap_year(&self) -> bool {
        self.year_length > 380
    }

    /// Kislev has 29 days in deficient years (353 or 383 days long).
    pub fn is_kislev_short(&self) -> bool {
        self.year_length % 10 == 3
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month.name(), self.year)
    }
}
