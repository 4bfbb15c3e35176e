//! Core data structures for data quality auditing.
//!
//! Defines severity levels, parsed log rows, per-check outcomes and the
//! summary returned by a report run.

use crate::constants::PARSED_FIELDS;
use crate::error::DqError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity tag attached to every quality log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Upper-case tag as written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            other => Err(DqError::configuration(format!(
                "Unknown severity '{}', expected one of DEBUG, INFO, WARNING, ERROR",
                other
            ))),
        }
    }
}

/// One log line recovered by the log parser
///
/// Every field is kept as the raw captured text; `indices` is not split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLogRow {
    pub timestamp: String,
    pub level: String,
    pub file: String,
    pub path: String,
    pub column: String,
    pub issue: String,
    pub indices: String,
}

impl ParsedLogRow {
    /// Field values in CSV header order
    pub fn values(&self) -> [&str; PARSED_FIELDS.len()] {
        [
            self.timestamp.as_str(),
            self.level.as_str(),
            self.file.as_str(),
            self.path.as_str(),
            self.column.as_str(),
            self.issue.as_str(),
            self.indices.as_str(),
        ]
    }
}

/// Offending value of a categorical rule, grouped across rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inconsistency {
    pub value: String,
    pub count: usize,
    pub indices: Vec<usize>,
}

/// Result of a single check within a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Nothing to report
    Clean,
    /// Number of failing cells, rows or values found
    Issues(usize),
    /// The check could not be evaluated
    Failed(String),
}

impl CheckOutcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, CheckOutcome::Clean)
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Clean => write!(f, "no issues"),
            CheckOutcome::Issues(n) => write!(f, "{} issue(s)", n),
            CheckOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Summary of one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_records: usize,
    pub missing_values: CheckOutcome,
    pub duplicates: CheckOutcome,
    pub inconsistencies: CheckOutcome,
    /// Entry lines written by this run; entries below the minimum
    /// severity still take a reference number but are not counted
    pub entries_logged: u64,
    /// Reference number of the last entry, 0 if none
    pub last_reference: u64,
}

impl ReportSummary {
    /// True when every check ran and found nothing
    pub fn is_clean(&self) -> bool {
        self.missing_values.is_clean() && self.duplicates.is_clean() && self.inconsistencies.is_clean()
    }

    /// Number of checks that could not be evaluated
    pub fn failed_checks(&self) -> usize {
        [&self.missing_values, &self.duplicates, &self.inconsistencies]
            .iter()
            .filter(|outcome| matches!(outcome, CheckOutcome::Failed(_)))
            .count()
    }
}
