//! Data Quality Audit Library
//!
//! Rule-based quality checks for tabular data held in a polars `DataFrame`,
//! with a line-oriented issue log and a parser that turns the log into CSV.
//!
//! This library provides tools for:
//! - Counting missing values, duplicate rows and out-of-set categorical values
//! - Writing one reference-numbered log line per finding
//! - Parsing quality logs back into structured rows
//! - Exporting parsed rows to CSV

pub mod checks;
pub mod config;
pub mod constants;
pub mod csv_export;
pub mod dataset;
pub mod error;
pub mod log_format;
pub mod log_parser;
pub mod models;
pub mod quality_log;
pub mod report;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{ConsistencyRule, DatasetSource, DqConfig};
pub use error::{DqError, Result};
pub use models::{CheckOutcome, ParsedLogRow, ReportSummary, Severity};
pub use quality_log::QualityLog;
