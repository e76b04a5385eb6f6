//! Batch collection of zmanim over many days.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::calendar::ZmanimCalendar;
use super::zman::{Zman, ZmanValue};
use crate::calendar::CalendarDay;
use crate::error::Result;
use crate::geo::GeoContext;

/// Zmanim for one day, keyed by zman.
///
/// A key with a `None` value means the zman was requested but does not apply
/// on this day. Callers should treat a missing key the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct DayZmanim<'a> {
    day: &'a CalendarDay,
    values: Vec<(Zman, Option<ZmanValue>)>,
}

impl<'a> DayZmanim<'a> {
    fn new(day: &'a CalendarDay) -> Self {
        Self {
            day,
            values: Vec::new(),
        }
    }

    pub fn day(&self) -> &'a CalendarDay {
        self.day
    }

    /// Insert or overwrite the value for `zman`.
    pub fn upsert(&mut self, zman: Zman, value: Option<ZmanValue>) {
        match self.values.iter_mut().find(|(existing, _)| *existing == zman) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((zman, value)),
        }
    }

    /// The value for `zman`; `None` both when absent and when not applicable.
    pub fn get(&self, zman: Zman) -> Option<ZmanValue> {
        self.values
            .iter()
            .find(|(existing, _)| *existing == zman)
            .and_then(|(_, value)| *value)
    }

    pub fn contains(&self, zman: Zman) -> bool {
        self.values.iter().any(|(existing, _)| *existing == zman)
    }

    /// Requested zmanim in request order.
    pub fn iter(&self) -> impl Iterator<Item = (Zman, Option<ZmanValue>)> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Zmanim per day, in the order days were first seen.
///
/// Days are keyed by Gregorian date; a day that appears twice in the input
/// shares one entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZmanimResult<'a> {
    entries: Vec<DayZmanim<'a>>,
    index: HashMap<NaiveDate, usize>,
}

impl<'a> ZmanimResult<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for `day`, created empty if this is the first time it is seen.
    pub fn upsert_day(&mut self, day: &'a CalendarDay) -> &mut DayZmanim<'a> {
        let date = day.gregorian_date();
        let position = match self.index.get(&date).copied() {
            Some(position) => position,
            None => {
                self.entries.push(DayZmanim::new(day));
                self.index.insert(date, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[position]
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayZmanim<'a>> {
        self.index.get(&date).map(|position| &self.entries[*position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayZmanim<'a>> {
        self.entries.iter()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.entries
            .iter()
            .map(|entry| entry.day().gregorian_date())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'r, 'a> IntoIterator for &'r ZmanimResult<'a> {
    type Item = &'r DayZmanim<'a>;
    type IntoIter = std::slice::Iter<'r, DayZmanim<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Computes requested zmanim for a sequence of days at one location.
///
/// One [`ZmanimCalendar`] per day is created up front in
/// [`ZmanimBatchCollector::new`]. Each [`collect`](Self::collect) call
/// returns a fresh [`ZmanimResult`]; nothing carries over between calls.
#[derive(Debug, Clone)]
pub struct ZmanimBatchCollector<'a> {
    calendars: Vec<ZmanimCalendar<'a>>,
}

impl<'a> ZmanimBatchCollector<'a> {
    pub fn new<I>(days: I, geo: &'a GeoContext) -> Result<Self>
    where
        I: IntoIterator<Item = &'a CalendarDay>,
    {
        let calendars = days
            .into_iter()
            .map(|day| ZmanimCalendar::new(day, geo))
            .collect::<Result<Vec<_>>>()?;

        log_debug!(
            "Prepared {} zmanim calendars for {}",
            calendars.len(),
            geo.name()
        );

        Ok(Self { calendars })
    }

    pub fn calendars(&self) -> &[ZmanimCalendar<'a>] {
        &self.calendars
    }

    /// Compute `zmanim` for every day.
    ///
    /// A zman that does not apply on a day is stored as `None`. Any other
    /// failure aborts the whole collection and names the day and zman.
    pub fn collect(&self, zmanim: &[Zman]) -> Result<ZmanimResult<'a>> {
        let mut result = ZmanimResult::new();

        for calendar in &self.calendars {
            let entry = result.upsert_day(calendar.day());
            for zman in zmanim {
                let value = calendar.compute(*zman)?;
                entry.upsert(*zman, value);
            }
        }

        log_debug!(
            "Collected {} zmanim for {} days",
            zmanim.len(),
            result.len()
        );

        Ok(result)
    }

    /// Compute the default zmanim list.
    pub fn collect_default(&self) -> Result<ZmanimResult<'a>> {
        self.collect(&Zman::DEFAULT)
    }

    /// Compute zmanim given by name, rejecting unknown names before any work.
    pub fn collect_named<S: AsRef<str>>(&self, names: &[S]) -> Result<ZmanimResult<'a>> {
        let zmanim = Zman::parse_all(names)?;
        self.collect(&zmanim)
    }
}
