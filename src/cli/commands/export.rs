//! Export command implementation

use crate::cli::args::ExportArgs;
use crate::csv_export;
use anyhow::{Context, Result};
use tracing::debug;

/// Parse the quality log and write the CSV file
pub fn run_export(args: &ExportArgs) -> Result<usize> {
    debug!("Export arguments: {:?}", args);

    let config = args.to_config();
    let written = csv_export::run_export(&config).with_context(|| {
        format!(
            "Failed to export {} to {}",
            config.log_path.display(),
            config.csv_path.display()
        )
    })?;
    println!(
        "CSV file created at {} ({} rows)",
        config.csv_path.display(),
        written
    );

    Ok(written)
}
