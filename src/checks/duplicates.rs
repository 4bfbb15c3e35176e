//! Duplicate row detection.
//!
//! Two rows are duplicates when every column holds an equal value, nulls
//! included. The first occurrence of a row is never reported; only the
//! later repeats are. Equality is polars' own, as used by
//! [`DataFrame::unique_stable`].

use crate::error::Result;
use polars::prelude::*;
use std::collections::HashSet;
use tracing::debug;

const ROW_INDEX_COLUMN: &str = "__row_index";

/// Number of rows equal to some earlier row
pub fn check_duplicates(df: &DataFrame) -> Result<usize> {
    debug!("Checking for duplicate rows.");
    Ok(df.height() - first_occurrences(df)?.len())
}

/// Indices of rows equal to some earlier row, strictly increasing
pub fn duplicate_row_indices(df: &DataFrame) -> Result<Vec<usize>> {
    let kept = first_occurrences(df)?;
    Ok((0..df.height()).filter(|idx| !kept.contains(idx)).collect())
}

/// Row positions kept by a stable unique over all columns
fn first_occurrences(df: &DataFrame) -> Result<HashSet<usize>> {
    if df.width() == 0 {
        return Ok((0..df.height()).collect());
    }

    let subset: Vec<String> = df
        .get_column_names_str()
        .into_iter()
        .map(str::to_string)
        .collect();
    let index_name = row_index_name(&subset);

    let unique = df
        .with_row_index(index_name.as_str().into(), None)?
        .unique_stable(Some(&subset), UniqueKeepStrategy::First, None)?;
    let kept = unique
        .column(&index_name)?
        .as_materialized_series()
        .idx()?
        .into_no_null_iter()
        .map(|idx| idx as usize)
        .collect();

    Ok(kept)
}

/// Row index column name that does not clash with the frame's columns
fn row_index_name(columns: &[String]) -> String {
    let mut name = ROW_INDEX_COLUMN.to_string();
    while columns.contains(&name) {
        name.push('_');
    }
    name
}
