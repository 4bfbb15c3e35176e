//! CSV export of parsed log rows.

use crate::config::DqConfig;
use crate::constants::PARSED_FIELDS;
use crate::error::Result;
use crate::log_parser::read_log_file;
use crate::models::ParsedLogRow;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

/// Build a string-typed frame with one column per parsed field
pub fn rows_to_dataframe(rows: &[ParsedLogRow]) -> Result<DataFrame> {
    let columns = PARSED_FIELDS
        .iter()
        .enumerate()
        .map(|(field_idx, name)| {
            let values: Vec<&str> = rows.iter().map(|row| row.values()[field_idx]).collect();
            Column::new((*name).into(), values)
        })
        .collect::<Vec<_>>();

    Ok(DataFrame::new(columns)?)
}

/// Write `rows` to `path` with a header row; returns the rows written
///
/// An empty input produces an empty file with no header.
pub fn write_csv(rows: &[ParsedLogRow], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;

    if rows.is_empty() {
        warn!(
            "No log entries matched; wrote empty file {}",
            path.display()
        );
        return Ok(0);
    }

    let mut df = rows_to_dataframe(rows)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;

    info!("CSV file created at {} ({} rows)", path.display(), rows.len());
    Ok(rows.len())
}

/// Parse the log at `log_path` and write its entries to `csv_path`
pub fn export_log(log_path: &Path, csv_path: &Path) -> Result<usize> {
    let rows = read_log_file(log_path)?;
    write_csv(&rows, csv_path)
}

/// Export the configured log to the configured CSV destination
pub fn run_export(config: &DqConfig) -> Result<usize> {
    config.validate_export()?;
    export_log(&config.log_path, &config.csv_path)
}
