//! Building a contiguous range of calendar days.

use chrono::{Days, NaiveDate};

use super::index::{SelectOptions, SignificantDayIndex, filter_by_significance, select_dates};
use crate::calendar::{CalendarDay, CalendarOptions, Category};
use crate::error::{Result, ZmanimError};

/// Builder for [`DateRange`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use zmanim_batch::range::DateRangeBuilder;
///
/// let start = NaiveDate::from_ymd_opt(2019, 12, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 1, 30).unwrap();
/// let range = DateRangeBuilder::new().build(start, end).unwrap();
/// assert_eq!(range.len(), 61);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeBuilder {
    options: CalendarOptions,
}

impl DateRangeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the Israeli festival calendar.
    pub fn in_israel(mut self, in_israel: bool) -> Self {
        self.options.in_israel = in_israel;
        self
    }

    /// Classify Yom HaShoah, Yom HaZikaron, Yom HaAtzmaut and Yom Yerushalayim.
    pub fn with_modern_holidays(mut self, enabled: bool) -> Self {
        self.options.use_modern_holidays = enabled;
        self
    }

    /// Build every day from `start` to `end`, both inclusive.
    ///
    /// Fails with [`ZmanimError::InvalidRange`] when `end` precedes `start`.
    pub fn build(&self, start: NaiveDate, end: NaiveDate) -> Result<DateRange> {
        if end < start {
            return Err(ZmanimError::InvalidRange { start, end });
        }

        let span = end.signed_duration_since(start).num_days();
        let mut days = Vec::with_capacity(usize::try_from(span + 1).unwrap_or_default());
        let mut date = start;
        loop {
            days.push(CalendarDay::new(date, self.options)?);
            if date == end {
                break;
            }
            date = date
                .checked_add_days(Days::new(1))
                .ok_or(ZmanimError::InvalidRange { start, end })?;
        }

        log_debug!("Built {} calendar days from {} to {}", days.len(), start, end);

        Ok(DateRange { start, end, days })
    }
}

/// An inclusive, gap-free run of calendar days.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    days: Vec<CalendarDay>,
}

impl DateRange {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Index this range's days by the requested categories.
    pub fn significant_days(&self, categories: &[Category]) -> SignificantDayIndex<'_> {
        filter_by_significance(&self.days, categories)
    }

    /// Days matching `categories` (or not matching, with `options.invert`).
    pub fn select(&self, categories: &[Category], options: SelectOptions) -> Vec<&CalendarDay> {
        select_dates(&self.days, categories, options)
    }

    /// Like [`DateRange::select`] but with category tags.
    pub fn select_named<S: AsRef<str>>(
        &self,
        tags: &[S],
        options: SelectOptions,
    ) -> Result<Vec<&CalendarDay>> {
        let categories = Category::parse_all(tags)?;
        Ok(self.select(&categories, options))
    }
}
