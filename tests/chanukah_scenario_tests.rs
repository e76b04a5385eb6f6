//! End-to-end batch over the winter of 5780 in Lakewood, NJ.

use chrono::{NaiveDate, Timelike, Weekday};
use chrono_tz::America;
use zmanim_batch::ZmanimError;
use zmanim_batch::calendar::{Category, DayPredicate, SignificantDay};
use zmanim_batch::geo::GeoContext;
use zmanim_batch::range::{DateRange, DateRangeBuilder, SelectOptions, filter_by_significance};
use zmanim_batch::zmanim::{Zman, ZmanimBatchCollector};

fn lakewood() -> GeoContext {
    GeoContext::new("Lakewood, NJ", 40.0721087, -74.2400243, America::New_York)
        .unwrap()
        .with_elevation(15.0)
        .unwrap()
}

fn winter() -> DateRange {
    DateRangeBuilder::new()
        .build(
            NaiveDate::from_ymd_opt(2019, 12, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 30).unwrap(),
        )
        .unwrap()
}

fn date(month: u32, day: u32) -> NaiveDate {
    let year = if month == 1 { 2020 } else { 2019 };
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_chanukah_days_selected() {
    let range = winter();
    let index = filter_by_significance(range.days(), &[SignificantDay::Chanukah.into()]);

    assert_eq!(index.len(), 1);
    let dates: Vec<NaiveDate> = index
        .get(SignificantDay::Chanukah.into())
        .unwrap()
        .iter()
        .map(|day| day.gregorian_date())
        .collect();
    let expected: Vec<NaiveDate> = (23..=30).map(|d| date(12, d)).collect();
    assert_eq!(dates, expected);
}

#[test]
fn test_chanukah_zmanim_collected() {
    let geo = lakewood();
    let range = winter();
    let chanukah = range.select(&[SignificantDay::Chanukah.into()], SelectOptions::default());

    let requested = [Zman::CandleLighting, Zman::MinchaKetana, Zman::MinchaGedola];
    let collector = ZmanimBatchCollector::new(chanukah, &geo).unwrap();
    let result = collector.collect(&requested).unwrap();

    assert_eq!(result.len(), 8);
    for entry in &result {
        let keys: Vec<Zman> = entry.iter().map(|(zman, _)| zman).collect();
        assert_eq!(keys, requested);

        let gedola = entry.get(Zman::MinchaGedola).and_then(|v| v.as_time()).unwrap();
        let ketana = entry.get(Zman::MinchaKetana).and_then(|v| v.as_time()).unwrap();
        assert!(gedola <= ketana);
        assert_eq!(gedola.hour(), 12);

        let candles = entry.get(Zman::CandleLighting).and_then(|v| v.as_time());
        if entry.day().weekday() == Weekday::Fri {
            let candles = candles.unwrap();
            assert_eq!(entry.day().gregorian_date(), date(12, 27));
            assert_eq!(candles.hour(), 16);
        } else {
            assert!(candles.is_none());
        }
    }
}

#[test]
fn test_unknown_zman_rejected() {
    let geo = lakewood();
    let range = winter();
    let collector = ZmanimBatchCollector::new(range.days(), &geo).unwrap();

    let err = collector
        .collect_named(&["mincha_gedola", "sunrise_ish"])
        .unwrap_err();
    assert!(matches!(err, ZmanimError::UnknownZmanName(ref name) if name == "sunrise_ish"));
}

#[test]
fn test_unknown_category_rejected() {
    let range = winter();
    let err = range
        .select_named(&["chanukah", "purim_katan_katan"], SelectOptions::default())
        .unwrap_err();
    assert!(matches!(err, ZmanimError::UnknownCategory(_)));
}

#[test]
fn test_fridays_outside_chanukah() {
    let range = winter();
    let categories: [Category; 2] = [
        DayPredicate::CandleLighting.into(),
        SignificantDay::Chanukah.into(),
    ];

    let lit = range.select(&categories, SelectOptions::deduplicated());
    let rest = range.select(&categories, SelectOptions::inverted());

    assert_eq!(lit.len(), 15);
    assert_eq!(lit.len() + rest.len(), range.len());
    assert!(rest.iter().all(|day| day.weekday() != Weekday::Fri));
}

#[test]
fn test_fast_of_teves() {
    let geo = lakewood();
    let range = winter();
    let fast = range.select(&[SignificantDay::TenthOfTeves.into()], SelectOptions::default());
    assert_eq!(fast.len(), 1);
    assert_eq!(fast[0].gregorian_date(), date(1, 7));
    assert!(fast[0].is_taanis());

    let collector = ZmanimBatchCollector::new(fast, &geo).unwrap();
    let result = collector.collect(&[Zman::Alos, Zman::Tzais]).unwrap();
    let entry = result.get(date(1, 7)).unwrap();
    let alos = entry.get(Zman::Alos).and_then(|v| v.as_time()).unwrap();
    let tzais = entry.get(Zman::Tzais).and_then(|v| v.as_time()).unwrap();
    assert!(alos < tzais);
    assert_eq!(alos.hour(), 5);
}
