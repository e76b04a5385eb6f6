//! One batch run from configuration to report.
//!
//! [`BatchRunner`] wires the pieces together in order: load and validate the
//! configuration, merge command-line overrides, build the date range, select
//! days, collect zmanim and print the report.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::args::QueryOverrides;
use crate::calendar::CalendarDay;
use crate::config::{Config, OutputFormat};
use crate::logger::Log;
use crate::range::DateRangeBuilder;
use crate::report;
use crate::zmanim::ZmanimBatchCollector;

/// Builder for configuring and running a batch.
///
/// # Examples
///
/// ```no_run
/// use zmanim_batch::args::QueryOverrides;
/// use zmanim_batch::BatchRunner;
///
/// let overrides = QueryOverrides {
///     start: Some("2019-12-01".into()),
///     end: Some("2020-01-30".into()),
///     categories: vec!["chanukah".into()],
///     ..QueryOverrides::default()
/// };
/// BatchRunner::new(false).with_overrides(overrides).run()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct BatchRunner {
    debug_enabled: bool,
    config_path: Option<PathBuf>,
    log_file: Option<String>,
    overrides: QueryOverrides,
}

impl BatchRunner {
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            ..Self::default()
        }
    }

    /// Read this file instead of the default configuration.
    pub fn with_config_path(mut self, path: Option<String>) -> Self {
        self.config_path = path.map(PathBuf::from);
        self
    }

    /// Write log output to a file instead of the terminal.
    pub fn with_log_file(mut self, path: Option<String>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_overrides(mut self, overrides: QueryOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn run(self) -> Result<()> {
        Log::set_debug(self.debug_enabled);
        if self.overrides.json {
            Log::set_stderr(true);
        }

        let _log_guard = self
            .log_file
            .clone()
            .map(Log::start_file_logging)
            .transpose()
            .context("Failed to start file logging")?;

        let config = match &self.config_path {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };
        let query = config.resolve_query(&self.overrides)?;
        if query.format == OutputFormat::Json {
            Log::set_stderr(true);
        }

        log_version!();
        if self.debug_enabled {
            config.log_config();
        }

        let geo = config.geo_context()?;
        let range = DateRangeBuilder::new()
            .in_israel(config.calendar_options().in_israel)
            .with_modern_holidays(config.calendar_options().use_modern_holidays)
            .build(query.start, query.end)
            .context("Failed to build date range")?;

        log_block_start!(
            "Range {} to {} ({} days)",
            range.start(),
            range.end(),
            range.len()
        );

        let days: Vec<&CalendarDay> = if query.categories.is_empty() {
            range.days().iter().collect()
        } else {
            let tags: Vec<&str> = query.categories.iter().map(|c| c.tag()).collect();
            log_decorated!(
                "{} {}",
                if query.select.invert { "Excluding" } else { "Keeping" },
                tags.join(", ")
            );
            range.select(&query.categories, query.select)
        };
        log_decorated!("{} days selected", days.len());

        let collector = ZmanimBatchCollector::new(days.iter().copied(), &geo)?;
        let result = collector
            .collect(&query.zmanim)
            .context("Failed to collect zmanim")?;

        match query.format {
            OutputFormat::Text => report::print_text(&geo, &result),
            OutputFormat::Json => report::print_json(&geo, &result)?,
        }

        log_end!();
        Ok(())
    }
}
