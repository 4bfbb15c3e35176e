//! Quality log session.
//!
//! A [`QualityLog`] owns the run-scoped reference counter and the log
//! destination. Every call to [`QualityLog::log`] advances the counter by
//! one and writes a single line straight through to the destination.

use crate::error::Result;
use crate::log_format::{format_line, format_message};
use crate::models::Severity;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Data quality log session writing to `W`
#[derive(Debug)]
pub struct QualityLog<W: Write> {
    writer: W,
    reference: u64,
    entries_written: u64,
    min_severity: Severity,
}

impl QualityLog<File> {
    /// Open a log file, appending or truncating
    pub fn open(path: &Path, append: bool) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;

        debug!(
            "Opened quality log {} ({})",
            path.display(),
            if append { "append" } else { "truncate" }
        );
        Ok(Self::new(file))
    }
}

impl<W: Write> QualityLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reference: 0,
            entries_written: 0,
            min_severity: Severity::Debug,
        }
    }

    /// Drop lines below `severity`; the counter still advances for them
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Record one check outcome and return its reference number
    pub fn log(
        &mut self,
        severity: Severity,
        file_name: &str,
        file_path: &str,
        column: &str,
        issue: &str,
        indices: &[usize],
    ) -> Result<u64> {
        self.reference += 1;
        let reference = self.reference;

        emit_event(severity, column, issue, reference);

        if severity >= self.min_severity {
            let message = format_message(reference, file_name, file_path, column, issue, indices);
            self.write_line(severity, &message)?;
            self.entries_written += 1;
        }

        Ok(reference)
    }

    /// Write a narrative line; does not use a reference number
    pub fn note(&mut self, severity: Severity, message: &str) -> Result<()> {
        if severity >= self.min_severity {
            self.write_line(severity, message)?;
        }
        Ok(())
    }

    /// Reference number of the most recent entry, 0 before the first
    pub fn reference(&self) -> u64 {
        self.reference
    }

    /// Entry lines actually written (excludes filtered entries and notes)
    pub fn entries_written(&self) -> u64 {
        self.entries_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, severity: Severity, message: &str) -> Result<()> {
        let line = format_line(&Local::now().naive_local(), severity, message);
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn emit_event(severity: Severity, column: &str, issue: &str, reference: u64) {
    match severity {
        Severity::Debug => debug!("[{}] {}: {}", reference, column, issue),
        Severity::Info => info!("[{}] {}: {}", reference, column, issue),
        Severity::Warning => warn!("[{}] {}: {}", reference, column, issue),
        Severity::Error => error!("[{}] {}: {}", reference, column, issue),
    }
}
