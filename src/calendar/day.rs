//! One calendar day with its Hebrew date and significant-day snapshot.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use super::hebrew::HebrewDate;
use super::significant::{
    Category, DayPredicate, PredicateSet, SignificantDay, classify, evaluate_predicates,
};
use crate::error::Result;

/// Options that change how a Gregorian date is classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Use the Israeli festival calendar (no second festival days).
    pub in_israel: bool,
    /// Include Yom HaShoah, Yom HaZikaron, Yom HaAtzmaut and Yom Yerushalayim.
    pub use_modern_holidays: bool,
}

/// A Gregorian date with its Hebrew-calendar classification.
///
/// Everything is computed once in [`CalendarDay::new`]; the accessors only
/// read the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    gregorian: NaiveDate,
    hebrew: HebrewDate,
    significant: Option<SignificantDay>,
    predicates: PredicateSet,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, options: CalendarOptions) -> Result<Self> {
        let hebrew = HebrewDate::from_gregorian(date)?;
        let weekday = date.weekday();
        let significant = classify(
            &hebrew,
            weekday,
            options.in_israel,
            options.use_modern_holidays,
        );
        let predicates = evaluate_predicates(&hebrew, weekday, options.in_israel, significant);

        Ok(Self {
            gregorian: date,
            hebrew,
            significant,
            predicates,
        })
    }

    pub fn gregorian_date(&self) -> NaiveDate {
        self.gregorian
    }

    pub fn hebrew_date(&self) -> &HebrewDate {
        &self.hebrew
    }

    pub fn weekday(&self) -> Weekday {
        self.gregorian.weekday()
    }

    /// The primary classification of this day, if it has one.
    pub fn significant_day(&self) -> Option<SignificantDay> {
        self.significant
    }

    pub fn predicates(&self) -> PredicateSet {
        self.predicates
    }

    pub fn satisfies(&self, predicate: DayPredicate) -> bool {
        self.predicates.contains(predicate)
    }

    /// Whether this day belongs under `category`.
    pub fn matches(&self, category: Category) -> bool {
        match category {
            Category::Significant(day) => self.significant == Some(day),
            Category::Predicate(predicate) => self.satisfies(predicate),
        }
    }

    pub fn is_assur_bemelacha(&self) -> bool {
        self.satisfies(DayPredicate::AssurBemelacha)
    }

    pub fn is_tomorrow_assur_bemelacha(&self) -> bool {
        self.satisfies(DayPredicate::TomorrowAssurBemelacha)
    }

    /// Candles are lit this evening (Erev Shabbos or Erev Yom Tov).
    pub fn has_candle_lighting(&self) -> bool {
        self.satisfies(DayPredicate::CandleLighting)
    }

    /// Candles are lit this evening, but only after nightfall.
    pub fn has_delayed_candle_lighting(&self) -> bool {
        self.satisfies(DayPredicate::DelayedCandleLighting)
    }

    pub fn is_yom_tov(&self) -> bool {
        self.satisfies(DayPredicate::YomTov)
    }

    pub fn is_yom_tov_assur_bemelacha(&self) -> bool {
        self.satisfies(DayPredicate::YomTovAssurBemelacha)
    }

    pub fn is_erev_yom_tov(&self) -> bool {
        self.satisfies(DayPredicate::ErevYomTov)
    }

    pub fn is_yom_tov_sheni(&self) -> bool {
        self.satisfies(DayPredicate::YomTovSheni)
    }

    pub fn is_erev_yom_tov_sheni(&self) -> bool {
        self.satisfies(DayPredicate::ErevYomTovSheni)
    }

    pub fn is_chol_hamoed(&self) -> bool {
        self.satisfies(DayPredicate::CholHamoed)
    }

    pub fn is_taanis(&self) -> bool {
        self.satisfies(DayPredicate::Taanis)
    }

    pub fn is_rosh_chodesh(&self) -> bool {
        self.satisfies(DayPredicate::RoshChodesh)
    }

    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.satisfies(DayPredicate::ErevRoshChodesh)
    }

    pub fn is_chanukah(&self) -> bool {
        self.satisfies(DayPredicate::Chanukah)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.gregorian.format("%a %d %b %Y"),
            self.hebrew
        )
    }
}
