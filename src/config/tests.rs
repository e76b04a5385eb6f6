use super::validation::validate_config;
use super::*;
use crate::calendar::SignificantDay;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parse(content: &str) -> Config {
    toml::from_str(content).unwrap()
}

const CHANUKAH_CONFIG: &str = r#"
candle_lighting_offset = 18

[location]
name = "Lakewood, NJ"
latitude = 40.0721087
longitude = -74.2400243
timezone = "America/New_York"
elevation = 15

[query]
start = "2019-12-01"
end = "2020-01-30"
categories = ["chanukah"]
zmanim = ["candle_lighting", "mincha_ketana", "mincha_gedola"]
"#;

#[test]
#[serial]
fn test_config_load_default_creation() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir
        .path()
        .join("zmanim-batch")
        .join("zmanim-batch.toml");

    // Save and restore XDG_CONFIG_HOME
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    // First load should create default config
    let result = Config::load();

    // Restore original
    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    if let Err(e) = &result {
        eprintln!("Config::load() failed: {:?}", e);
    }
    let config = result.unwrap();
    assert!(config_path.exists());
    assert_eq!(config.location.latitude, Some(40.072109));
    assert_eq!(config.query.format, Some(OutputFormat::Text));
}

#[test]
fn test_default_content_parses_and_validates() {
    let config = parse(&builder::default_config_content());
    validate_config(&config).unwrap();

    assert_eq!(config.location.name.as_deref(), Some(DEFAULT_LOCATION_NAME));
    assert_eq!(config.location.timezone.as_deref(), Some(DEFAULT_TIMEZONE));
    assert_eq!(
        config.candle_lighting_offset,
        Some(DEFAULT_CANDLE_LIGHTING_OFFSET)
    );
    assert_eq!(config.query.categories, Some(vec![]));
    assert_eq!(config.query.start, None);
}

#[test]
fn test_load_from_path() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("custom.toml");
    fs::write(&path, CHANUKAH_CONFIG).unwrap();

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.location.elevation, Some(15.0));
    assert_eq!(
        config.query.zmanim.as_deref().map(|z| z.len()),
        Some(3)
    );
}

#[test]
fn test_load_from_missing_path() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("missing.toml");
    let error = Config::load_from_path(&path).unwrap_err();
    assert!(error.to_string().contains("not found"));
}

#[test]
fn test_load_rejects_malformed_toml() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "latitude = \"north\"\n[location\n").unwrap();
    assert!(Config::load_from_path(&path).is_err());
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = parse("");
    validate_config(&config).unwrap();

    let geo = config.geo_context().unwrap();
    assert_eq!(geo.name(), DEFAULT_LOCATION_NAME);
    assert_eq!(geo.latitude(), DEFAULT_LATITUDE);
    assert_eq!(geo.timezone(), chrono_tz::America::New_York);
    assert_eq!(geo.elevation(), DEFAULT_ELEVATION);
    assert!(!geo.use_elevation());
    assert_eq!(config.calendar_options(), CalendarOptions::default());
}

#[test]
fn test_validation_coordinates() {
    let config = parse("[location]\nlatitude = 91.0\n");
    let error = validate_config(&config).unwrap_err();
    assert!(error.to_string().contains("latitude"));

    let config = parse("[location]\nlongitude = -180.5\n");
    let error = validate_config(&config).unwrap_err();
    assert!(error.to_string().contains("longitude"));

    let config = parse("[location]\nlatitude = -90.0\nlongitude = 180.0\n");
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validation_elevation() {
    let config = parse("[location]\nelevation = -3.0\n");
    assert!(validate_config(&config).is_err());

    let config = parse("[location]\nelevation = 0.0\n");
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validation_timezone() {
    let config = parse("[location]\ntimezone = \"Mars/Olympus_Mons\"\n");
    let error = validate_config(&config).unwrap_err();
    assert!(error.to_string().contains("Mars/Olympus_Mons"));

    let config = parse("[location]\ntimezone = \"Asia/Jerusalem\"\n");
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_validation_candle_lighting_offset() {
    assert!(validate_config(&parse("candle_lighting_offset = 40\n")).is_ok());
    assert!(validate_config(&parse("candle_lighting_offset = 120\n")).is_ok());
    assert!(validate_config(&parse("candle_lighting_offset = 121\n")).is_err());
}

#[test]
fn test_validation_dates() {
    assert!(validate_config(&parse("[query]\nstart = \"2019-12-01\"\n")).is_ok());
    assert!(validate_config(&parse("[query]\nstart = \"12/01/2019\"\n")).is_err());
    assert!(validate_config(&parse("[query]\nend = \"2019-02-30\"\n")).is_err());

    let error =
        validate_config(&parse("[query]\nstart = \"2020-01-30\"\nend = \"2019-12-01\"\n"))
            .unwrap_err();
    assert!(error.to_string().contains("must not be before"));
}

#[test]
fn test_validation_tags() {
    let error = validate_config(&parse("[query]\ncategories = [\"chanukkah\"]\n")).unwrap_err();
    assert!(error.to_string().contains("chanukkah"));

    let error = validate_config(&parse("[query]\nzmanim = [\"sunrise\"]\n")).unwrap_err();
    assert!(error.to_string().contains("sunrise"));

    let config = parse("[query]\ncategories = [\"rosh_chodesh\", \"purim\"]\nzmanim = [\"hanetz\"]\n");
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_format_values() {
    assert_eq!(
        parse("[query]\nformat = \"json\"\n").query.format,
        Some(OutputFormat::Json)
    );
    assert!(toml::from_str::<Config>("[query]\nformat = \"xml\"\n").is_err());
}

#[test]
fn test_resolve_query_from_config() {
    let config = parse(CHANUKAH_CONFIG);
    let query = config.resolve_query(&QueryOverrides::default()).unwrap();

    assert_eq!(query.start, date(2019, 12, 1));
    assert_eq!(query.end, date(2020, 1, 30));
    assert_eq!(query.categories, vec![Category::Significant(SignificantDay::Chanukah)]);
    assert_eq!(
        query.zmanim,
        vec![Zman::CandleLighting, Zman::MinchaKetana, Zman::MinchaGedola]
    );
    assert_eq!(query.select, SelectOptions::default());
    assert_eq!(query.format, OutputFormat::Text);
}

#[test]
fn test_resolve_query_overrides() {
    let config = parse(CHANUKAH_CONFIG);
    let overrides = QueryOverrides {
        start: Some("2019-12-20".into()),
        categories: vec!["candle_lighting".into()],
        invert: true,
        json: true,
        ..QueryOverrides::default()
    };
    let query = config.resolve_query(&overrides).unwrap();

    assert_eq!(query.start, date(2019, 12, 20));
    assert_eq!(query.end, date(2020, 1, 30));
    assert_eq!(query.categories.len(), 1);
    assert_eq!(query.categories[0].tag(), "candle_lighting");
    // configured zmanim still apply
    assert_eq!(query.zmanim.len(), 3);
    assert!(query.select.invert);
    assert_eq!(query.format, OutputFormat::Json);
}

#[test]
fn test_resolve_query_defaults() {
    let query = parse("").resolve_query(&QueryOverrides::default()).unwrap();

    assert!(query.categories.is_empty());
    assert_eq!(query.zmanim, Zman::DEFAULT.to_vec());
    let span = (query.end - query.start).num_days();
    assert_eq!(span, DEFAULT_RANGE_DAYS as i64 - 1);
}

#[test]
fn test_resolve_query_rejects_bad_overrides() {
    let config = parse(CHANUKAH_CONFIG);

    let overrides = QueryOverrides {
        end: Some("2019-11-01".into()),
        ..QueryOverrides::default()
    };
    assert!(config.resolve_query(&overrides).is_err());

    let overrides = QueryOverrides {
        zmanim: vec!["not_a_zman".into()],
        ..QueryOverrides::default()
    };
    let error = config.resolve_query(&overrides).unwrap_err();
    assert!(format!("{error:#}").contains("not_a_zman"));
}

#[test]
fn test_geo_context_from_config() {
    let config = parse(
        "candle_lighting_offset = 40\nuse_elevation = true\n\n[location]\nname = \"Jerusalem\"\nlatitude = 31.778\nlongitude = 35.2354\ntimezone = \"Asia/Jerusalem\"\nelevation = 754\n",
    );
    let geo = config.geo_context().unwrap();

    assert_eq!(geo.name(), "Jerusalem");
    assert_eq!(geo.timezone(), chrono_tz::Asia::Jerusalem);
    assert_eq!(geo.candle_lighting_offset(), chrono::TimeDelta::minutes(40));
    assert!(geo.use_elevation());
}
