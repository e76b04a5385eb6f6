//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. Values given here override the
//! `[query]` table of the configuration file; they are validated together with
//! the rest of the configuration, not here.

/// Query settings given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOverrides {
    pub start: Option<String>,
    pub end: Option<String>,
    pub categories: Vec<String>,
    pub zmanim: Vec<String>,
    pub invert: bool,
    pub dedup: bool,
    pub json: bool,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Build the range, select dates, collect zmanim and report
    Run {
        debug_enabled: bool,
        config_path: Option<String>,
        log_file: Option<String>,
        overrides: QueryOverrides,
    },
    /// Print every zman tag and exit
    ListZmanim,
    /// Print every category tag and exit
    ListCategories,
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown or malformed arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// Version wins over help, help wins over the list actions, and any
    /// unknown or incomplete argument turns the whole invocation into
    /// [`CliAction::ShowHelpDueToError`].
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut list_zmanim = false;
        let mut list_categories = false;
        let mut unknown_arg_found = false;
        let mut config_path: Option<String> = None;
        let mut log_file: Option<String> = None;
        let mut overrides = QueryOverrides::default();

        // Convert to vector for easier indexed access
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = args_vec[i].as_str();

            // Flags taking a value accept both `--flag value` and `--flag=value`
            let (flag, inline_value) = match arg_str.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
                _ => (arg_str, None),
            };

            let takes_value = matches!(
                flag,
                "--start" | "--end" | "--category" | "-f" | "--zman" | "-z" | "--config" | "-c"
                    | "--log"
            );

            let value = if takes_value {
                match inline_value.or_else(|| args_vec.get(i + 1).cloned()) {
                    Some(value) if !value.is_empty() => {
                        if !arg_str.contains('=') {
                            i += 1;
                        }
                        Some(value)
                    }
                    _ => {
                        log_warning!("Missing value for {flag}");
                        unknown_arg_found = true;
                        i += 1;
                        continue;
                    }
                }
            } else {
                None
            };

            match (flag, value) {
                ("--help" | "-h", _) => display_help = true,
                ("--version" | "-V" | "-v", _) => display_version = true,
                ("--debug" | "-d", _) => debug_enabled = true,
                ("--invert", _) => overrides.invert = true,
                ("--dedup", _) => overrides.dedup = true,
                ("--json", _) => overrides.json = true,
                ("--list-zmanim", _) => list_zmanim = true,
                ("--list-categories", _) => list_categories = true,
                ("--start", Some(value)) => overrides.start = Some(value),
                ("--end", Some(value)) => overrides.end = Some(value),
                ("--category" | "-f", Some(value)) => overrides.categories.extend(split_list(&value)),
                ("--zman" | "-z", Some(value)) => overrides.zmanim.extend(split_list(&value)),
                ("--config" | "-c", Some(value)) => config_path = Some(value),
                ("--log", Some(value)) => log_file = Some(value),
                _ => {
                    log_warning!("Unknown option: {arg_str}");
                    unknown_arg_found = true;
                }
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help || unknown_arg_found {
            if unknown_arg_found {
                CliAction::ShowHelpDueToError
            } else {
                CliAction::ShowHelp
            }
        } else if list_zmanim {
            CliAction::ListZmanim
        } else if list_categories {
            CliAction::ListCategories
        } else {
            CliAction::Run {
                debug_enabled,
                config_path,
                log_file,
                overrides,
            }
        };

        ParsedArgs { action }
    }

    /// Parse from the process arguments.
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Comma-separated tags, trimmed, with empty entries dropped.
fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
}

/// Display version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Display custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("zmanim-batch [OPTIONS]");
    log_block_start!("Query:");
    log_indented!("    --start <YYYY-MM-DD>   First day of the range");
    log_indented!("    --end <YYYY-MM-DD>     Last day of the range (inclusive)");
    log_indented!("-f, --category <tag>       Keep days in this category (repeatable, comma list)");
    log_indented!("-z, --zman <tag>           Compute this zman (repeatable, comma list)");
    log_indented!("    --invert               Keep days matching none of the categories");
    log_indented!("    --dedup                List a day once even if several categories match");
    log_block_start!("Output:");
    log_indented!("    --json                 Print the report as JSON on stdout");
    log_indented!("    --log <file>           Write log output to a file");
    log_indented!("-d, --debug                Enable detailed debug output");
    log_block_start!("Other:");
    log_indented!("-c, --config <file>        Use a custom configuration file");
    log_indented!("    --list-zmanim          List every zman tag");
    log_indented!("    --list-categories      List every category tag");
    log_indented!("-h, --help                 Print help information");
    log_indented!("-V, --version              Print version information");
    log_end!();
}
