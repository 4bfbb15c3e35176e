//! Data quality report.
//!
//! Runs the missing value, duplicate row and categorical checks in that
//! order and writes their outcomes to a [`QualityLog`]. Each check is
//! isolated: if it fails, an ERROR entry names it and the remaining checks
//! still run. Only failures writing the log itself abort the report.

use crate::checks::{
    check_duplicates, check_missing_values, duplicate_row_indices, group_inconsistencies,
    missing_value_row_indices,
};
use crate::config::{ConsistencyRule, DqConfig};
use crate::constants::ALL_COLUMNS;
use crate::dataset;
use crate::error::Result;
use crate::models::{CheckOutcome, Inconsistency, ReportSummary, Severity};
use crate::quality_log::QualityLog;
use polars::prelude::DataFrame;
use std::io::Write;
use tracing::{debug, info};

/// File identity repeated on every entry of a report
#[derive(Debug, Clone, Copy)]
struct Subject<'a> {
    file_name: &'a str,
    file_path: &'a str,
}

/// Run all checks on `df` and log their outcomes
pub fn report<W: Write>(
    df: &DataFrame,
    file_name: &str,
    file_path: &str,
    rule: &ConsistencyRule,
    log: &mut QualityLog<W>,
) -> Result<ReportSummary> {
    let subject = Subject {
        file_name,
        file_path,
    };
    let total_records = df.height();
    let first_written = log.entries_written();

    info!(
        "Running data quality checks on {} ({} records)",
        file_name, total_records
    );
    log.note(Severity::Info, "Starting data quality checks.")?;

    log.note(Severity::Debug, "Checking for missing values.")?;
    let missing_values = report_missing_values(df, subject, log)?;

    log.note(Severity::Debug, "Checking for duplicate rows.")?;
    let duplicates = report_duplicates(df, subject, log)?;

    log.note(
        Severity::Debug,
        &format!("Checking for inconsistencies in column '{}'.", rule.column),
    )?;
    let inconsistencies = report_inconsistencies(df, subject, rule, log)?;

    log.note(Severity::Info, "Data quality checks completed.")?;

    let summary = ReportSummary {
        total_records,
        missing_values,
        duplicates,
        inconsistencies,
        entries_logged: log.entries_written() - first_written,
        last_reference: log.reference(),
    };
    debug!("Report summary: {:?}", summary);
    Ok(summary)
}

/// Load the configured dataset, open the log and run a report
pub fn run_report(config: &DqConfig) -> Result<ReportSummary> {
    config.validate()?;

    let df = dataset::load(&config.dataset)?;
    let file_path = config.file_path()?;
    let mut log = QualityLog::open(&config.log_path, config.append_log)?
        .with_min_severity(config.min_severity);

    let summary = report(
        &df,
        &config.file_name,
        &file_path.to_string_lossy(),
        &config.rule,
        &mut log,
    )?;

    info!(
        "Data quality issues logged in '{}'",
        config.log_path.display()
    );
    Ok(summary)
}

fn report_missing_values<W: Write>(
    df: &DataFrame,
    subject: Subject<'_>,
    log: &mut QualityLog<W>,
) -> Result<CheckOutcome> {
    let total = df.height();

    let evaluated = check_missing_values(df)
        .and_then(|counts| Ok((counts, missing_value_row_indices(df)?)));

    let (counts, indices) = match evaluated {
        Ok(found) => found,
        Err(e) => {
            let issue = format!("Error checking missing values: {}", e);
            log_entry(log, subject, Severity::Error, ALL_COLUMNS, &issue, &[])?;
            return Ok(CheckOutcome::Failed(e.to_string()));
        }
    };

    let mut failed_cells = 0;
    for (column, count) in counts.iter().filter(|(_, count)| *count > 0) {
        let rows = indices
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or(&[]);
        let issue = format!(
            "Missing Values: {} (Passed: {}, Failed: {})",
            count,
            total - count,
            count
        );
        log_entry(log, subject, Severity::Info, column, &issue, rows)?;
        failed_cells += count;
    }

    if failed_cells == 0 {
        let issue = format!("No missing values found. (Passed: {}, Failed: 0)", total);
        log_entry(log, subject, Severity::Info, ALL_COLUMNS, &issue, &[])?;
        return Ok(CheckOutcome::Clean);
    }

    Ok(CheckOutcome::Issues(failed_cells))
}

fn report_duplicates<W: Write>(
    df: &DataFrame,
    subject: Subject<'_>,
    log: &mut QualityLog<W>,
) -> Result<CheckOutcome> {
    let total = df.height();

    let evaluated = check_duplicates(df)
        .and_then(|count| Ok((count, duplicate_row_indices(df)?)));

    match evaluated {
        Ok((0, _)) => {
            let issue = format!("No duplicate rows found. (Passed: {}, Failed: 0)", total);
            log_entry(log, subject, Severity::Info, ALL_COLUMNS, &issue, &[])?;
            Ok(CheckOutcome::Clean)
        }
        Ok((count, indices)) => {
            let issue = format!(
                "Duplicate Rows: {} (Passed: {}, Failed: {})",
                count,
                total - count,
                count
            );
            log_entry(log, subject, Severity::Info, ALL_COLUMNS, &issue, &indices)?;
            Ok(CheckOutcome::Issues(count))
        }
        Err(e) => {
            let issue = format!("Error checking duplicates: {}", e);
            log_entry(log, subject, Severity::Error, ALL_COLUMNS, &issue, &[])?;
            Ok(CheckOutcome::Failed(e.to_string()))
        }
    }
}

fn report_inconsistencies<W: Write>(
    df: &DataFrame,
    subject: Subject<'_>,
    rule: &ConsistencyRule,
    log: &mut QualityLog<W>,
) -> Result<CheckOutcome> {
    let total = df.height();
    let column = rule.column.as_str();

    let groups: Vec<Inconsistency> = match group_inconsistencies(df, column, &rule.allowed_values)
    {
        Ok(groups) => groups,
        Err(e) => {
            let issue = format!("Error checking {} inconsistencies: {}", column, e);
            log_entry(log, subject, Severity::Error, column, &issue, &[])?;
            return Ok(CheckOutcome::Failed(e.to_string()));
        }
    };

    if groups.is_empty() {
        let issue = format!(
            "No {} inconsistencies found. (Passed: {}, Failed: 0)",
            column, total
        );
        log_entry(log, subject, Severity::Info, column, &issue, &[])?;
        return Ok(CheckOutcome::Clean);
    }

    let mut failed_rows = 0;
    for group in &groups {
        let issue = format!(
            "Inconsistent Value: {} (Passed: {}, Failed: {})",
            group.value,
            total - group.count,
            group.count
        );
        log_entry(log, subject, Severity::Warning, column, &issue, &group.indices)?;
        failed_rows += group.count;
    }

    Ok(CheckOutcome::Issues(failed_rows))
}

fn log_entry<W: Write>(
    log: &mut QualityLog<W>,
    subject: Subject<'_>,
    severity: Severity,
    column: &str,
    issue: &str,
    indices: &[usize],
) -> Result<u64> {
    log.log(
        severity,
        subject.file_name,
        subject.file_path,
        column,
        issue,
        indices,
    )
}
