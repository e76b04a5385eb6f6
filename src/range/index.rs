//! Grouping and filtering days by category.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::calendar::{CalendarDay, Category};
use crate::error::Result;

/// Days grouped by the category they matched.
///
/// Categories keep the order they were requested in. A category that matched
/// no day has no entry at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignificantDayIndex<'a> {
    groups: Vec<(Category, Vec<&'a CalendarDay>)>,
}

impl<'a> SignificantDayIndex<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `day` under `category`, creating the group on first use.
    pub fn push(&mut self, category: Category, day: &'a CalendarDay) {
        match self.groups.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, days)) => days.push(day),
            None => self.groups.push((category, vec![day])),
        }
    }

    pub fn get(&self, category: Category) -> Option<&[&'a CalendarDay]> {
        self.groups
            .iter()
            .find(|(existing, _)| *existing == category)
            .map(|(_, days)| days.as_slice())
    }

    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.iter().map(|(category, _)| *category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[&'a CalendarDay])> + '_ {
        self.groups
            .iter()
            .map(|(category, days)| (*category, days.as_slice()))
    }

    /// Number of categories with at least one day.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every indexed day in category order, then day order.
    ///
    /// A day matching several categories appears once per category.
    pub fn flatten(&self) -> Vec<&'a CalendarDay> {
        self.groups
            .iter()
            .flat_map(|(_, days)| days.iter().copied())
            .collect()
    }
}

/// Group `days` by each of `categories` they match.
///
/// Days keep input order within each group.
pub fn filter_by_significance<'a, I>(days: I, categories: &[Category]) -> SignificantDayIndex<'a>
where
    I: IntoIterator<Item = &'a CalendarDay>,
{
    let mut index = SignificantDayIndex::new();
    let days: Vec<&CalendarDay> = days.into_iter().collect();

    for category in categories {
        if index.contains(*category) {
            continue;
        }
        for day in days.iter().copied().filter(|day| day.matches(*category)) {
            index.push(*category, day);
        }
    }

    log_debug!(
        "Indexed {} of {} categories over {} days",
        index.len(),
        categories.len(),
        days.len()
    );

    index
}

/// Like [`filter_by_significance`] but with category tags.
pub fn filter_by_significance_named<'a, I, S>(
    days: I,
    tags: &[S],
) -> Result<SignificantDayIndex<'a>>
where
    I: IntoIterator<Item = &'a CalendarDay>,
    S: AsRef<str>,
{
    let categories = Category::parse_all(tags)?;
    Ok(filter_by_significance(days, &categories))
}

/// How [`select_dates`] turns an index into a day list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectOptions {
    /// Return the days that matched no category instead.
    pub invert: bool,
    /// Keep only the first occurrence of a day matched by several categories.
    pub dedup: bool,
}

impl SelectOptions {
    pub fn inverted() -> Self {
        Self {
            invert: true,
            ..Self::default()
        }
    }

    pub fn deduplicated() -> Self {
        Self {
            dedup: true,
            ..Self::default()
        }
    }
}

/// Days matching `categories`, or with `options.invert` the days matching none.
///
/// Without inversion the result is ordered by category, then by day, and a day
/// matching two categories is listed twice unless `options.dedup` is set.
/// With inversion the result is in input order.
pub fn select_dates<'a, I>(
    days: I,
    categories: &[Category],
    options: SelectOptions,
) -> Vec<&'a CalendarDay>
where
    I: IntoIterator<Item = &'a CalendarDay>,
{
    let days: Vec<&CalendarDay> = days.into_iter().collect();
    let index = filter_by_significance(days.iter().copied(), categories);
    let matched = index.flatten();

    if options.invert {
        let matched: HashSet<NaiveDate> = matched.iter().map(|day| day.gregorian_date()).collect();
        return days
            .into_iter()
            .filter(|day| !matched.contains(&day.gregorian_date()))
            .collect();
    }

    if !options.dedup {
        return matched;
    }

    let mut seen = HashSet::with_capacity(matched.len());
    matched
        .into_iter()
        .filter(|day| seen.insert(day.gregorian_date()))
        .collect()
}

/// Like [`select_dates`] but with category tags.
pub fn select_dates_named<'a, I, S>(
    days: I,
    tags: &[S],
    options: SelectOptions,
) -> Result<Vec<&'a CalendarDay>>
where
    I: IntoIterator<Item = &'a CalendarDay>,
    S: AsRef<str>,
{
    let categories = Category::parse_all(tags)?;
    Ok(select_dates(days, &categories, options))
}
