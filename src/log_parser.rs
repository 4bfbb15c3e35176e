//! Quality log parsing.
//!
//! Recovers structured rows from a quality log. Lines that do not match the
//! entry pattern in full (narrative lines, foreign or truncated lines) are
//! skipped without a diagnostic.

use crate::error::{DqError, Result};
use crate::log_format::LOG_LINE_REGEX;
use crate::models::ParsedLogRow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Parse one log line; `None` if it is not an entry line
pub fn parse_line(line: &str) -> Option<ParsedLogRow> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let caps = LOG_LINE_REGEX.captures(line)?;

    Some(ParsedLogRow {
        timestamp: caps["timestamp"].to_string(),
        level: caps["level"].to_string(),
        file: caps["file"].to_string(),
        path: caps["path"].to_string(),
        column: caps["column"].to_string(),
        issue: caps["issue"].to_string(),
        indices: caps["indices"].to_string(),
    })
}

/// Parse every entry line of the log at `path`, in file order
pub fn read_log_file(path: &Path) -> Result<Vec<ParsedLogRow>> {
    if !path.exists() {
        return Err(DqError::LogFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    let mut total_lines = 0;

    for line in reader.lines() {
        let line = line?;
        total_lines += 1;
        if let Some(row) = parse_line(&line) {
            rows.push(row);
        }
    }

    debug!(
        "Matched {} of {} lines in {}",
        rows.len(),
        total_lines,
        path.display()
    );
    info!("Parsed {} log entries from {}", rows.len(), path.display());
    Ok(rows)
}
