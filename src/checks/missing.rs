//! Missing value detection.

use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// Count null cells in every column, in column order
pub fn check_missing_values(df: &DataFrame) -> Result<Vec<(String, usize)>> {
    debug!("Checking for missing values.");

    Ok(df
        .get_columns()
        .iter()
        .map(|column| (column.name().to_string(), column.null_count()))
        .collect())
}

/// Row indices of null cells, for columns with at least one null
pub fn missing_value_row_indices(df: &DataFrame) -> Result<Vec<(String, Vec<usize>)>> {
    let mut result = Vec::new();

    for column in df.get_columns() {
        if column.null_count() == 0 {
            continue;
        }

        let mask = column.as_materialized_series().is_null();
        let indices: Vec<usize> = mask
            .into_iter()
            .enumerate()
            .filter_map(|(idx, is_null)| is_null.unwrap_or(false).then_some(idx))
            .collect();

        result.push((column.name().to_string(), indices));
    }

    Ok(result)
}
