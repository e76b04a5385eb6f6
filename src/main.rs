//! Main application entry point.
//!
//! Parses the command line and dispatches:
//!
//! - `--help` / `--version`: print and exit
//! - `--list-zmanim` / `--list-categories`: print the known tags and exit
//! - otherwise: run one batch with [`BatchRunner`]
//!
//! Fatal errors are reported through the logger with their full context chain
//! and end the process with a failure exit code.

use zmanim_batch::args::{self, CliAction, ParsedArgs};
use zmanim_batch::common::constants::EXIT_FAILURE;
use zmanim_batch::{BatchRunner, log_end, log_error_exit, log_version, report};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    match parsed_args.action {
        CliAction::ShowVersion => args::display_version_info(),
        CliAction::ShowHelp => args::display_help(),
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::ListZmanim => {
            log_version!();
            report::print_zmanim_list();
            log_end!();
        }
        CliAction::ListCategories => {
            log_version!();
            report::print_category_list();
            log_end!();
        }
        CliAction::Run {
            debug_enabled,
            config_path,
            log_file,
            overrides,
        } => {
            let result = BatchRunner::new(debug_enabled)
                .with_config_path(config_path)
                .with_log_file(log_file)
                .with_overrides(overrides)
                .run();

            if let Err(e) = result {
                log_error_exit!("{e:#}");
                log_end!();
                std::process::exit(EXIT_FAILURE);
            }
        }
    }
}
