//! Command-line argument definitions for the data quality auditor
//!
//! Two subcommands mirror the two stages of the workflow: `check` writes
//! the quality log, `export` turns that log into a CSV file.

use crate::config::{ConsistencyRule, DqConfig};
use crate::constants::{DEFAULT_CSV_PATH, DEFAULT_LOG_PATH, DEFAULT_RULE_COLUMN};
use crate::error::{DqError, Result};
use crate::models::Severity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the data quality auditor
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dq-audit",
    version,
    about = "Run data quality checks on a table and export the issue log to CSV",
    long_about = "Checks a tabular dataset for missing values, duplicate rows and values \
                  outside an allowed set, writing one line per finding to a quality log. \
                  The export command parses that log back into a CSV file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the quality checks and append findings to the log
    Check(CheckArgs),
    /// Parse the quality log and write its entries to CSV
    Export(ExportArgs),
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// CSV file to audit
    ///
    /// If not specified, the built-in example dataset is audited.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// File name recorded in each log entry
    ///
    /// Defaults to the input file's name, or example_data.csv for the
    /// built-in dataset.
    #[arg(long = "file-name", value_name = "NAME")]
    pub file_name: Option<String>,

    /// Quality log to write
    #[arg(
        short = 'l',
        long = "log",
        value_name = "FILE",
        default_value = DEFAULT_LOG_PATH
    )]
    pub log_path: PathBuf,

    /// Truncate the log instead of appending to it
    #[arg(long = "truncate")]
    pub truncate: bool,

    /// Column checked against the allowed values
    #[arg(long = "column", value_name = "NAME", default_value = DEFAULT_RULE_COLUMN)]
    pub column: String,

    /// Allowed values for the checked column (comma-separated)
    #[arg(long = "allowed", value_name = "LIST", default_value = "M,F")]
    pub allowed: ValueList,

    /// Lowest severity written to the log
    #[arg(long = "min-level", value_name = "LEVEL", default_value = "DEBUG")]
    pub min_level: Severity,
}

impl CheckArgs {
    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> DqConfig {
        let mut config = DqConfig::default();

        if let Some(input) = &self.input {
            config = config.with_csv_dataset(input);
        }
        if let Some(file_name) = &self.file_name {
            config = config.with_file_name(file_name);
        }
        if self.truncate {
            config = config.with_truncated_log();
        }

        config
            .with_log_path(&self.log_path)
            .with_min_severity(self.min_level)
            .with_rule(ConsistencyRule {
                column: self.column.clone(),
                allowed_values: self.allowed.values.clone(),
            })
    }
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Quality log to parse
    #[arg(
        short = 'l',
        long = "log",
        value_name = "FILE",
        default_value = DEFAULT_LOG_PATH
    )]
    pub log_path: PathBuf,

    /// CSV file to create
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = DEFAULT_CSV_PATH
    )]
    pub csv_path: PathBuf,
}

impl ExportArgs {
    /// Export configuration built from the command line
    pub fn to_config(&self) -> DqConfig {
        DqConfig::default()
            .with_log_path(&self.log_path)
            .with_csv_path(&self.csv_path)
    }
}

impl Args {
    /// Log level for console diagnostics
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Wrapper for parsing comma-separated value lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueList {
    pub values: Vec<String>,
}

impl FromStr for ValueList {
    type Err = DqError;

    fn from_str(s: &str) -> Result<Self> {
        let values: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if values.is_empty() {
            return Err(DqError::configuration("value list must not be empty"));
        }

        Ok(ValueList { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetSource;

    #[test]
    fn test_value_list_parsing() {
        let list: ValueList = "M, F,,X ".parse().unwrap();
        assert_eq!(list.values, vec!["M", "F", "X"]);
        assert!(" , ".parse::<ValueList>().is_err());
    }

    #[test]
    fn test_check_defaults() {
        let args = Args::try_parse_from(["dq-audit", "check"]).unwrap();
        let Commands::Check(check) = args.command else {
            panic!("Expected check command");
        };

        let config = check.to_config();
        assert_eq!(config.dataset, DatasetSource::Builtin);
        assert_eq!(config.file_name, "example_data.csv");
        assert_eq!(config.log_path, PathBuf::from("data_quality.log"));
        assert!(config.append_log);
        assert_eq!(config.rule, ConsistencyRule::default());
        assert_eq!(config.min_severity, Severity::Debug);
    }

    #[test]
    fn test_check_overrides() {
        let args = Args::try_parse_from([
            "dq-audit",
            "-v",
            "check",
            "--input",
            "people.csv",
            "--log",
            "out/dq.log",
            "--truncate",
            "--column",
            "status",
            "--allowed",
            "open,closed",
            "--min-level",
            "warning",
        ])
        .unwrap();
        assert_eq!(args.get_log_level(), "debug");

        let Commands::Check(check) = args.command else {
            panic!("Expected check command");
        };
        let config = check.to_config();
        assert_eq!(config.dataset, DatasetSource::Csv(PathBuf::from("people.csv")));
        assert_eq!(config.file_name, "people.csv");
        assert!(!config.append_log);
        assert_eq!(config.rule, ConsistencyRule::new("status", &["open", "closed"]));
        assert_eq!(config.min_severity, Severity::Warning);
    }

    #[test]
    fn test_export_defaults() {
        let args = Args::try_parse_from(["dq-audit", "--quiet", "export"]).unwrap();
        assert_eq!(args.get_log_level(), "error");

        let Commands::Export(export) = args.command else {
            panic!("Expected export command");
        };
        assert_eq!(export.log_path, PathBuf::from("data_quality.log"));
        assert_eq!(export.csv_path, PathBuf::from("data_quality_issues.csv"));
    }

    #[test]
    fn test_export_to_config() {
        let args =
            Args::try_parse_from(["dq-audit", "export", "--log", "in.log", "-o", "out.csv"]).unwrap();
        let Commands::Export(export) = args.command else {
            panic!("Expected export command");
        };

        let config = export.to_config();
        assert_eq!(config.log_path, PathBuf::from("in.log"));
        assert_eq!(config.csv_path, PathBuf::from("out.csv"));
        assert!(config.validate_export().is_ok());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["dq-audit", "-q", "-v", "export"]).is_err());
    }
}
