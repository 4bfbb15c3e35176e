//! Check command implementation

use crate::cli::args::CheckArgs;
use crate::models::{CheckOutcome, ReportSummary};
use crate::report::run_report;
use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

/// Run the quality checks described by `args` and print a summary
pub fn run_check(args: &CheckArgs) -> Result<ReportSummary> {
    debug!("Check arguments: {:?}", args);

    let config = args.to_config();
    let summary = run_report(&config).with_context(|| {
        format!(
            "Data quality check failed (log: {})",
            config.log_path.display()
        )
    })?;

    println!(
        "{} {} records checked",
        "Data quality report:".bold(),
        summary.total_records
    );
    print_outcome("Missing values", &summary.missing_values);
    print_outcome("Duplicate rows", &summary.duplicates);
    print_outcome(
        &format!("Column '{}'", config.rule.column),
        &summary.inconsistencies,
    );
    println!(
        "Data quality issues logged in '{}' ({} entries written, last ref {}).",
        config.log_path.display(),
        summary.entries_logged,
        summary.last_reference
    );

    Ok(summary)
}

fn print_outcome(label: &str, outcome: &CheckOutcome) {
    let status = match outcome {
        CheckOutcome::Clean => outcome.to_string().green(),
        CheckOutcome::Issues(_) => outcome.to_string().yellow(),
        CheckOutcome::Failed(_) => outcome.to_string().red(),
    };
    println!("  {:<20} {}", label, status);
}
