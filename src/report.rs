//! Printing collected zmanim.
//!
//! The text report goes through the logger, one block per day. The JSON report
//! is a single document on stdout with RFC 3339 instants and proportional hours
//! in seconds.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::calendar::{Category, DayPredicate};
use crate::geo::GeoContext;
use crate::zmanim::{DayZmanim, Zman, ZmanValue, ZmanimResult};

const NOT_APPLICABLE: &str = "-";

/// Print `result` as box-drawn text.
pub fn print_text(geo: &GeoContext, result: &ZmanimResult<'_>) {
    log_block_start!("Zmanim for {}", geo);

    if result.is_empty() {
        log_indented!("No days matched");
        return;
    }

    for entry in result {
        let day = entry.day();
        log_block_start!("{}", day);
        if let Some(significant) = day.significant_day() {
            log_indented!("{}", significant);
        }

        let width = entry
            .iter()
            .map(|(zman, _)| zman.tag().len())
            .max()
            .unwrap_or(0);
        for (zman, value) in entry.iter() {
            let shown = value.map_or_else(|| NOT_APPLICABLE.to_string(), |v| v.to_string());
            log_indented!("{:<width$}  {}", zman.tag(), shown);
        }
    }
}

/// JSON form of a whole run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'r> {
    pub location: JsonLocation<'r>,
    pub days: Vec<JsonDay<'r>>,
}

#[derive(Debug, Serialize)]
pub struct JsonLocation<'r> {
    pub name: &'r str,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub timezone: &'static str,
}

#[derive(Debug, Serialize)]
pub struct JsonDay<'r> {
    pub date: String,
    pub hebrew_date: String,
    pub significant_day: Option<&'static str>,
    pub predicates: Vec<&'static str>,
    pub zmanim: JsonZmanim<'r>,
}

/// Zmanim for one day as a JSON object in request order.
#[derive(Debug)]
pub struct JsonZmanim<'r>(&'r DayZmanim<'r>);

impl Serialize for JsonZmanim<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (zman, value) in self.0.iter() {
            match value {
                Some(ZmanValue::Time(time)) => map.serialize_entry(zman.tag(), &time.to_rfc3339())?,
                Some(ZmanValue::Length(length)) => {
                    map.serialize_entry(zman.tag(), &length.num_seconds())?
                }
                None => map.serialize_entry(zman.tag(), &Option::<()>::None)?,
            }
        }
        map.end()
    }
}

impl<'r> JsonReport<'r> {
    pub fn new(geo: &'r GeoContext, result: &'r ZmanimResult<'r>) -> Self {
        let days = result
            .iter()
            .map(|entry| {
                let day = entry.day();
                JsonDay {
                    date: day.gregorian_date().to_string(),
                    hebrew_date: day.hebrew_date().to_string(),
                    significant_day: day.significant_day().map(|s| s.tag()),
                    predicates: day.predicates().iter().map(|p| p.tag()).collect(),
                    zmanim: JsonZmanim(entry),
                }
            })
            .collect();

        Self {
            location: JsonLocation {
                name: geo.name(),
                latitude: geo.latitude(),
                longitude: geo.longitude(),
                elevation: geo.elevation(),
                timezone: geo.timezone().name(),
            },
            days,
        }
    }
}

/// Render `result` as pretty-printed JSON.
pub fn render_json(geo: &GeoContext, result: &ZmanimResult<'_>) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(geo, result))
        .context("Failed to serialize zmanim report")
}

/// Print `result` as JSON on stdout.
pub fn print_json(geo: &GeoContext, result: &ZmanimResult<'_>) -> Result<()> {
    let json = render_json(geo, result)?;
    println!("{json}");
    Ok(())
}

/// Print every zman tag with its description.
pub fn print_zmanim_list() {
    log_block_start!("Zmanim (default list marked with *):");
    let width = Zman::ALL.iter().map(|z| z.tag().len()).max().unwrap_or(0);
    for zman in Zman::ALL {
        let marker = if Zman::DEFAULT.contains(&zman) { "*" } else { " " };
        log_indented!("{marker} {:<width$}  {}", zman.tag(), zman.description());
    }
}

/// Print every category tag, predicates first.
pub fn print_category_list() {
    let categories = Category::all();

    log_block_start!("Day predicates:");
    for category in &categories {
        if let Category::Predicate(predicate) = category {
            log_indented!("{}", predicate);
        }
    }
    for predicate in shadowed_predicates(&categories) {
        log_indented!("{} (as a significant day)", predicate);
    }

    log_block_start!("Significant days:");
    for category in &categories {
        if let Category::Significant(day) = category {
            log_indented!("{}", day);
        }
    }
}

/// Predicates hidden behind a significant day of the same name.
fn shadowed_predicates(categories: &[Category]) -> impl Iterator<Item = DayPredicate> + '_ {
    DayPredicate::ALL
        .into_iter()
        .filter(|predicate| !categories.contains(&Category::Predicate(*predicate)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarDay, CalendarOptions};
    use crate::zmanim::ZmanimBatchCollector;
    use chrono::NaiveDate;
    use chrono_tz::America;

    fn lakewood() -> GeoContext {
        GeoContext::new("Lakewood, NJ", 40.0721087, -74.2400243, America::New_York)
            .unwrap()
            .with_elevation(15.0)
            .unwrap()
    }

    fn days() -> Vec<CalendarDay> {
        [26, 27]
            .into_iter()
            .map(|d| {
                CalendarDay::new(
                    NaiveDate::from_ymd_opt(2019, 12, d).unwrap(),
                    CalendarOptions::default(),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_json_report_shape() {
        let geo = lakewood();
        let days = days();
        let collector = ZmanimBatchCollector::new(&days, &geo).unwrap();
        let result = collector
            .collect(&[Zman::CandleLighting, Zman::MinchaGedola, Zman::ShaahZmanisGra])
            .unwrap();

        let json = render_json(&geo, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["location"]["timezone"], "America/New_York");
        let days = value["days"].as_array().unwrap();
        assert_eq!(days.len(), 2);

        assert_eq!(days[0]["date"], "2019-12-26");
        assert_eq!(days[0]["significant_day"], "chanukah");
        assert!(days[0]["zmanim"]["candle_lighting"].is_null());
        assert!(days[1]["zmanim"]["candle_lighting"].is_string());

        let gedola = days[1]["zmanim"]["mincha_gedola"].as_str().unwrap();
        assert!(gedola.starts_with("2019-12-27T12:"));
        assert!(gedola.ends_with("-05:00"));

        let hour = days[1]["zmanim"]["shaah_zmanis_gra"].as_i64().unwrap();
        assert!((2400..3600).contains(&hour));
    }

    #[test]
    fn test_json_keeps_request_order() {
        let geo = lakewood();
        let days = days();
        let collector = ZmanimBatchCollector::new(&days[..1], &geo).unwrap();
        let result = collector.collect(&[Zman::Shkia, Zman::Hanetz]).unwrap();

        let json = render_json(&geo, &result).unwrap();
        let shkia = json.find("\"shkia\"").unwrap();
        let hanetz = json.find("\"hanetz\"").unwrap();
        assert!(shkia < hanetz);
    }

    #[test]
    fn test_shadowed_predicates() {
        let categories = Category::all();
        let shadowed: Vec<DayPredicate> = shadowed_predicates(&categories).collect();
        assert_eq!(shadowed, vec![DayPredicate::Chanukah]);
    }
}
