#[cfg(test)]
mod builder_tests {
    use crate::error::ZmanimError;
    use crate::range::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inclusive_contiguous_range() {
        let range = DateRangeBuilder::new()
            .build(date(2019, 12, 1), date(2020, 1, 30))
            .unwrap();

        assert_eq!(range.len(), 61);
        assert_eq!(range.start(), date(2019, 12, 1));
        assert_eq!(range.end(), date(2020, 1, 30));
        assert_eq!(range.days()[0].gregorian_date(), date(2019, 12, 1));
        assert_eq!(range.days()[60].gregorian_date(), date(2020, 1, 30));

        for pair in range.days().windows(2) {
            let gap = pair[1].gregorian_date() - pair[0].gregorian_date();
            assert_eq!(gap.num_days(), 1);
        }
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRangeBuilder::new()
            .build(date(2019, 12, 27), date(2019, 12, 27))
            .unwrap();
        assert_eq!(range.len(), 1);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = DateRangeBuilder::new().build(date(2020, 1, 30), date(2019, 12, 1));
        assert_eq!(
            result,
            Err(ZmanimError::InvalidRange {
                start: date(2020, 1, 30),
                end: date(2019, 12, 1),
            })
        );
    }

    #[test]
    fn test_options_reach_days() {
        // 23 Tishrei 5780 is Simchas Torah outside Israel only
        let day = date(2019, 10, 22);

        let diaspora = DateRangeBuilder::new().build(day, day).unwrap();
        assert!(diaspora.days()[0].is_yom_tov_sheni());

        let israel = DateRangeBuilder::new().in_israel(true).build(day, day).unwrap();
        assert!(!israel.days()[0].is_yom_tov());
    }
}

#[cfg(test)]
mod index_tests {
    use crate::calendar::*;
    use crate::error::ZmanimError;
    use crate::range::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn winter() -> DateRange {
        DateRangeBuilder::new()
            .build(date(2019, 12, 1), date(2020, 1, 30))
            .unwrap()
    }

    fn dates(days: &[&CalendarDay]) -> Vec<NaiveDate> {
        days.iter().map(|day| day.gregorian_date()).collect()
    }

    #[test]
    fn test_chanukah_index() {
        let range = winter();
        let index = range.significant_days(&[SignificantDay::Chanukah.into()]);

        assert_eq!(index.len(), 1);
        let chanukah = index.get(SignificantDay::Chanukah.into()).unwrap();
        let expected: Vec<NaiveDate> = (23..=30)
            .map(|d| date(2019, 12, d))
            .collect();
        assert_eq!(dates(chanukah), expected);
    }

    #[test]
    fn test_unmatched_category_absent() {
        let range = winter();
        let index = range.significant_days(&[
            SignificantDay::Pesach.into(),
            SignificantDay::TenthOfTeves.into(),
        ]);

        assert!(!index.contains(SignificantDay::Pesach.into()));
        assert_eq!(index.len(), 1);
        assert_eq!(
            dates(index.get(SignificantDay::TenthOfTeves.into()).unwrap()),
            vec![date(2020, 1, 7)]
        );
    }

    #[test]
    fn test_categories_keep_request_order() {
        let range = winter();
        let requested: Vec<Category> = vec![
            DayPredicate::RoshChodesh.into(),
            DayPredicate::CandleLighting.into(),
            SignificantDay::Chanukah.into(),
        ];
        let index = range.significant_days(&requested);
        assert_eq!(index.categories().collect::<Vec<_>>(), requested);
    }

    #[test]
    fn test_candle_lighting_fridays() {
        let range = winter();
        let index = range.significant_days(&[DayPredicate::CandleLighting.into()]);
        let fridays = index.get(DayPredicate::CandleLighting.into()).unwrap();

        assert_eq!(fridays.len(), 8);
        assert!(fridays
            .iter()
            .all(|day| day.weekday() == chrono::Weekday::Fri));
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        let range = winter();
        let index = range.significant_days(&[
            SignificantDay::Chanukah.into(),
            SignificantDay::Chanukah.into(),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(SignificantDay::Chanukah.into()).unwrap().len(), 8);
    }

    #[test]
    fn test_empty_inputs() {
        let range = winter();
        assert!(range.significant_days(&[]).is_empty());

        let index = filter_by_significance(std::iter::empty::<&CalendarDay>(), &[SignificantDay::Chanukah.into()]);
        assert!(index.is_empty());
    }

    #[test]
    fn test_named_lookup() {
        let range = winter();
        let index = filter_by_significance_named(range.days(), &["chanukah"]).unwrap();
        assert!(index.contains(SignificantDay::Chanukah.into()));

        let error = filter_by_significance_named(range.days(), &["chanukah", "not_a_day"]);
        assert_eq!(error, Err(ZmanimError::UnknownCategory("not_a_day".into())));
    }
}

#[cfg(test)]
mod select_tests {
    use crate::calendar::*;
    use crate::error::ZmanimError;
    use crate::range::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn winter() -> DateRange {
        DateRangeBuilder::new()
            .build(date(2019, 12, 1), date(2020, 1, 30))
            .unwrap()
    }

    #[test]
    fn test_select_matches() {
        let range = winter();
        let selected = range.select(&[SignificantDay::Chanukah.into()], SelectOptions::default());

        assert_eq!(selected.len(), 8);
        assert_eq!(selected[0].gregorian_date(), date(2019, 12, 23));
        assert_eq!(selected[7].gregorian_date(), date(2019, 12, 30));
    }

    #[test]
    fn test_invert_partitions_range() {
        let range = winter();
        let categories: Vec<Category> = vec![SignificantDay::Chanukah.into()];

        let matched = range.select(&categories, SelectOptions::default());
        let rest = range.select(&categories, SelectOptions::inverted());

        assert_eq!(matched.len() + rest.len(), range.len());
        assert!(rest.iter().all(|day| !day.is_chanukah()));
        // input order is kept
        assert_eq!(rest[0].gregorian_date(), date(2019, 12, 1));
        assert_eq!(rest.last().unwrap().gregorian_date(), date(2020, 1, 30));
    }

    #[test]
    fn test_invert_with_no_categories_returns_everything() {
        let range = winter();
        assert_eq!(range.select(&[], SelectOptions::inverted()).len(), range.len());
        assert!(range.select(&[], SelectOptions::default()).is_empty());
    }

    #[test]
    fn test_overlapping_categories() {
        let range = winter();
        // Friday 27 Dec 2019 is both Chanukah and a candle-lighting day
        let categories: Vec<Category> = vec![
            SignificantDay::Chanukah.into(),
            DayPredicate::CandleLighting.into(),
        ];

        let all = range.select(&categories, SelectOptions::default());
        assert_eq!(all.len(), 16);
        let friday = all
            .iter()
            .filter(|day| day.gregorian_date() == date(2019, 12, 27))
            .count();
        assert_eq!(friday, 2);

        let unique = range.select(&categories, SelectOptions::deduplicated());
        assert_eq!(unique.len(), 15);

        let inverted = range.select(&categories, SelectOptions::inverted());
        assert_eq!(inverted.len(), range.len() - 15);
    }

    #[test]
    fn test_select_named() {
        let range = winter();
        let selected = range
            .select_named(&["tenth_of_teves"], SelectOptions::default())
            .unwrap();
        assert_eq!(selected.len(), 1);

        let error = select_dates_named(range.days(), &["bogus"], SelectOptions::default());
        assert_eq!(error, Err(ZmanimError::UnknownCategory("bogus".into())));
    }

    #[test]
    fn test_repeated_selection_is_stable() {
        let range = winter();
        let categories: Vec<Category> = vec![DayPredicate::RoshChodesh.into()];
        let first = range.select(&categories, SelectOptions::default());
        let second = range.select(&categories, SelectOptions::default());
        assert_eq!(first, second);
    }
}
