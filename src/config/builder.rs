//! Default configuration file creation.
//!
//! The default file is assembled with `ConfigBuilder` so that every setting
//! carries an aligned comment describing its accepted values.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::common::constants::*;

/// Create a default config file at `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", path.display()))
}

/// The commented default configuration.
pub(crate) fn default_config_content() -> String {
    let calendar = ConfigBuilder::new()
        .add_section("Calendar")
        .add_setting(
            "candle_lighting_offset",
            &DEFAULT_CANDLE_LIGHTING_OFFSET.to_string(),
            &format!("Minutes before sunset candles are lit (0-{MAXIMUM_CANDLE_LIGHTING_OFFSET})"),
        )
        .add_setting("in_israel", "false", "Use the Israeli festival calendar")
        .add_setting(
            "use_elevation",
            "false",
            "Use elevation-adjusted sunrise/sunset for hanetz and shkia",
        )
        .add_setting(
            "use_modern_holidays",
            "false",
            "Classify Yom HaShoah, Yom HaZikaron, Yom HaAtzmaut and Yom Yerushalayim",
        )
        .build();

    let location = ConfigBuilder::new()
        .add_table("location")
        .add_setting("name", &format!("\"{DEFAULT_LOCATION_NAME}\""), "Shown in reports")
        .add_setting(
            "latitude",
            &format!("{DEFAULT_LATITUDE:.6}"),
            "Geographic latitude (-90 to 90)",
        )
        .add_setting(
            "longitude",
            &format!("{DEFAULT_LONGITUDE:.6}"),
            "Geographic longitude (-180 to 180)",
        )
        .add_setting(
            "timezone",
            &format!("\"{DEFAULT_TIMEZONE}\""),
            "IANA timezone name",
        )
        .add_setting(
            "elevation",
            &format!("{DEFAULT_ELEVATION:.1}"),
            "Meters above sea level (0 or more)",
        )
        .build();

    let query = ConfigBuilder::new()
        .add_table("query")
        .add_comment("start = \"2019-12-01\"    # First day (YYYY-MM-DD), defaults to today")
        .add_comment(&format!(
            "end = \"2020-01-30\"      # Last day (YYYY-MM-DD), defaults to {DEFAULT_RANGE_DAYS} days from start"
        ))
        .add_setting(
            "categories",
            "[]",
            "Day categories to keep, empty keeps every day (see --list-categories)",
        )
        .add_setting(
            "zmanim",
            "[]",
            "Zmanim to compute, empty computes the default list (see --list-zmanim)",
        )
        .add_setting("invert", "false", "Keep days matching none of the categories")
        .add_setting(
            "dedup",
            "false",
            "List a day once even if several categories match",
        )
        .add_setting("format", "\"text\"", "Select: \"text\" or \"json\"")
        .build();

    format!("{calendar}\n\n{location}\n\n{query}\n")
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

#[derive(Clone)]
struct ConfigEntry {
    content: String,
    entry_type: EntryType,
}

#[derive(Clone)]
enum EntryType {
    Section,
    Comment,
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A comment-only heading for top-level keys.
    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("#[{title}]"),
            entry_type: EntryType::Section,
        });
        self
    }

    /// A TOML table header.
    fn add_table(mut self, name: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("[{name}]"),
            entry_type: EntryType::Section,
        });
        self
    }

    /// A commented-out example line.
    fn add_comment(mut self, text: &str) -> Self {
        self.entries.push(ConfigEntry {
            content: format!("# {text}"),
            entry_type: EntryType::Comment,
        });
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        let line = format!("{key} = {value}");
        self.entries.push(ConfigEntry {
            content: line.clone(),
            entry_type: EntryType::Setting {
                line,
                comment: format!("# {comment}"),
            },
        });
        self
    }

    fn build(self) -> String {
        // Calculate the maximum width of all setting lines for alignment
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match &entry.entry_type {
                EntryType::Setting { line, .. } => Some(line.len()),
                EntryType::Section | EntryType::Comment => None,
            })
            .max()
            .unwrap_or(0)
            + 1; // +1 for one space between setting and comment

        let mut result = Vec::new();

        for entry in self.entries {
            match entry.entry_type {
                EntryType::Section | EntryType::Comment => result.push(entry.content),
                EntryType::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.join("\n")
    }
}
