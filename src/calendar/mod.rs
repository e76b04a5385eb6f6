//! Hebrew-calendar view of Gregorian days.
//!
//! ## Module Structure
//!
//! - [`hebrew`]: Gregorian to Hebrew conversion backed by `icu_calendar`
//! - [`significant`]: significant-day tags, predicates and the rules behind them
//! - [`day`]: [`CalendarDay`], the per-day snapshot everything else borrows

pub mod day;
pub mod hebrew;
pub mod significant;

pub use day::{CalendarDay, CalendarOptions};
pub use hebrew::{HebrewDate, HebrewMonth};
pub use significant::{Category, DayPredicate, PredicateSet, SignificantDay};
