use chrono::{Datelike, NaiveDate, TimeDelta};
use proptest::prelude::*;
use zmanim_batch::calendar::{Category, DayPredicate, SignificantDay};
use zmanim_batch::range::{DateRangeBuilder, SelectOptions, filter_by_significance};

/// Dates between 1990 and 2060
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (726_468i32..=752_037).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
}

fn span_strategy() -> impl Strategy<Value = i64> {
    0i64..400
}

/// A few categories, possibly overlapping and possibly repeated
fn categories_strategy() -> impl Strategy<Value = Vec<Category>> {
    let all = Category::all();
    proptest::collection::vec(proptest::sample::select(all), 0..5)
}

#[cfg(test)]
mod range_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// A range holds every day from start to end, once, in order
        #[test]
        fn test_range_length_and_order(start in date_strategy(), span in span_strategy()) {
            let end = start + TimeDelta::days(span);
            let range = DateRangeBuilder::new().build(start, end).unwrap();

            prop_assert_eq!(range.len() as i64, span + 1);
            prop_assert_eq!(range.days()[0].gregorian_date(), start);
            prop_assert_eq!(range.days()[range.len() - 1].gregorian_date(), end);
            for pair in range.days().windows(2) {
                prop_assert_eq!(pair[1].gregorian_date() - pair[0].gregorian_date(), TimeDelta::days(1));
            }
        }

        /// An inverted range is always rejected
        #[test]
        fn test_inverted_range_rejected(start in date_strategy(), span in 1i64..400) {
            let end = start - TimeDelta::days(span);
            prop_assert!(DateRangeBuilder::new().build(start, end).is_err());
        }

        /// Israel and diaspora calendars differ only on second festival days
        #[test]
        fn test_israel_drops_second_days(start in date_strategy()) {
            let end = start + TimeDelta::days(60);
            let diaspora = DateRangeBuilder::new().build(start, end).unwrap();
            let israel = DateRangeBuilder::new().in_israel(true).build(start, end).unwrap();

            for (d, i) in diaspora.days().iter().zip(israel.days()) {
                prop_assert_eq!(d.hebrew_date(), i.hebrew_date());
                if !d.is_yom_tov_sheni() && !d.is_erev_yom_tov_sheni() && !d.is_chol_hamoed() {
                    prop_assert_eq!(d.weekday(), i.weekday());
                    prop_assert_eq!(d.is_rosh_chodesh(), i.is_rosh_chodesh());
                    prop_assert_eq!(d.is_chanukah(), i.is_chanukah());
                }
            }
        }
    }
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// Deduplicated matches and inverted matches split the range exactly
        #[test]
        fn test_invert_partitions_range(
            start in date_strategy(),
            span in span_strategy(),
            categories in categories_strategy()
        ) {
            let range = DateRangeBuilder::new().build(start, start + TimeDelta::days(span)).unwrap();

            let matched = range.select(&categories, SelectOptions::deduplicated());
            let rest = range.select(&categories, SelectOptions::inverted());

            prop_assert_eq!(matched.len() + rest.len(), range.len());
            for day in &rest {
                prop_assert!(categories.iter().all(|c| !day.matches(*c)));
            }
            for day in &matched {
                prop_assert!(categories.iter().any(|c| day.matches(*c)));
            }
        }

        /// Every indexed day matches its category, and nothing matching is missed
        #[test]
        fn test_index_is_exact(
            start in date_strategy(),
            span in span_strategy(),
            categories in categories_strategy()
        ) {
            let range = DateRangeBuilder::new().build(start, start + TimeDelta::days(span)).unwrap();
            let index = range.significant_days(&categories);

            for category in &categories {
                let expected: Vec<NaiveDate> = range
                    .days()
                    .iter()
                    .filter(|day| day.matches(*category))
                    .map(|day| day.gregorian_date())
                    .collect();
                match index.get(*category) {
                    Some(days) => {
                        let actual: Vec<NaiveDate> = days.iter().map(|d| d.gregorian_date()).collect();
                        prop_assert_eq!(actual, expected);
                    }
                    None => prop_assert!(expected.is_empty()),
                }
            }
        }

        /// Filtering the already-filtered days changes nothing
        #[test]
        fn test_filter_idempotent(
            start in date_strategy(),
            span in span_strategy(),
            categories in categories_strategy()
        ) {
            let range = DateRangeBuilder::new().build(start, start + TimeDelta::days(span)).unwrap();

            let first = filter_by_significance(range.days(), &categories);
            let again = filter_by_significance(range.days(), &categories);
            prop_assert_eq!(&first, &again);

            for (category, days) in first.iter() {
                let refiltered = filter_by_significance(days.iter().copied(), &[category]);
                prop_assert_eq!(refiltered.get(category), Some(days));
            }
        }
    }
}

#[cfg(test)]
mod calendar_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Each Hebrew year has exactly one Yom Kippur and eight days of Chanukah
        #[test]
        fn test_yearly_festivals(year in 1990i32..2060) {
            let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
            let range = DateRangeBuilder::new().build(start, end).unwrap();

            let yom_kippur = range.select(&[SignificantDay::YomKippur.into()], SelectOptions::default());
            prop_assert_eq!(yom_kippur.len(), 1);
            prop_assert!(yom_kippur[0].gregorian_date().month() >= 9);

            // Chanukah can straddle the new year, so count it from Kislev to Teves of one season
            let season_start = NaiveDate::from_ymd_opt(year, 11, 1).unwrap();
            let season_end = NaiveDate::from_ymd_opt(year + 1, 1, 31).unwrap();
            let season = DateRangeBuilder::new().build(season_start, season_end).unwrap();
            let chanukah = season.select(&[SignificantDay::Chanukah.into()], SelectOptions::default());
            prop_assert_eq!(chanukah.len(), 8);
        }

        /// Every Friday has candle lighting and no Shabbos does unless a festival follows
        #[test]
        fn test_weekly_candle_lighting(start in date_strategy()) {
            let range = DateRangeBuilder::new().build(start, start + TimeDelta::days(13)).unwrap();
            for day in range.days() {
                if day.weekday() == chrono::Weekday::Fri {
                    prop_assert!(day.has_candle_lighting());
                }
                if day.weekday() == chrono::Weekday::Sat && day.has_candle_lighting() {
                    prop_assert!(day.satisfies(DayPredicate::ErevYomTov) || day.satisfies(DayPredicate::ErevYomTovSheni));
                    prop_assert!(day.has_delayed_candle_lighting());
                }
            }
        }
    }
}
