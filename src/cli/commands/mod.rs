//! Command implementations for the data quality auditor CLI
//!
//! - `check`: run the quality checks and write the log
//! - `export`: parse the log into a CSV file

pub mod check;
pub mod export;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the subcommand handler
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args);

    match &args.command {
        Commands::Check(check_args) => check::run_check(check_args).map(|_| ()),
        Commands::Export(export_args) => export::run_export(export_args).map(|_| ()),
    }
}
