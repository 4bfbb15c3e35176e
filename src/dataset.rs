//! Dataset loading.
//!
//! Produces the polars `DataFrame` audited by a report, either from the
//! built-in example records or from a CSV file with a header row.

use crate::config::DatasetSource;
use crate::error::Result;
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// The built-in example dataset
///
/// Five people; the third record has no age and an invalid email.
pub fn example_dataset() -> Result<DataFrame> {
    let df = df!(
        "name" => ["Alice", "Bob", "Charlie", "David", "Eve"],
        "age" => [Some(25i64), Some(30), None, Some(22), Some(28)],
        "gender" => ["F", "M", "M", "M", "F"],
        "email" => [
            "alice@example.com",
            "bob@example.com",
            "charlie@example",
            "david@example.com",
            "eve@example.com",
        ],
    )?;
    Ok(df)
}

/// Read a CSV file into a `DataFrame`; empty cells become nulls
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    debug!("Reading dataset from {}", path.display());

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Load the dataset described by `source`
pub fn load(source: &DatasetSource) -> Result<DataFrame> {
    match source {
        DatasetSource::Builtin => example_dataset(),
        DatasetSource::Csv(path) => load_csv(path),
    }
}
