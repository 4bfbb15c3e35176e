//! Categorical consistency checks.
//!
//! A value is inconsistent when its text form is not in the allowed set.
//! Nulls are never allowed and are reported as `null`, but they are kept
//! apart from a literal `"null"` string when grouping.

use super::render_value;
use crate::constants::NULL_VALUE;
use crate::error::{DqError, Result};
use crate::models::Inconsistency;
use polars::prelude::*;
use tracing::debug;

/// Offending values of `column`, one per offending row, in row order
pub fn check_inconsistencies(
    df: &DataFrame,
    column: &str,
    allowed_values: &[String],
) -> Result<Vec<String>> {
    debug!("Checking for inconsistencies in column '{}'.", column);

    Ok(offending_cells(df, column, allowed_values)?
        .into_iter()
        .map(|(_, value)| value.unwrap_or_else(|| NULL_VALUE.to_string()))
        .collect())
}

/// Row indices whose `column` value is outside `allowed_values`
pub fn inconsistency_row_indices(
    df: &DataFrame,
    column: &str,
    allowed_values: &[String],
) -> Result<Vec<usize>> {
    Ok(offending_cells(df, column, allowed_values)?
        .into_iter()
        .map(|(idx, _)| idx)
        .collect())
}

/// Offending values grouped by distinct value, in order of first appearance
pub fn group_inconsistencies(
    df: &DataFrame,
    column: &str,
    allowed_values: &[String],
) -> Result<Vec<Inconsistency>> {
    let mut groups: Vec<(Option<String>, Inconsistency)> = Vec::new();

    for (idx, value) in offending_cells(df, column, allowed_values)? {
        match groups.iter_mut().find(|(key, _)| *key == value) {
            Some((_, group)) => {
                group.count += 1;
                group.indices.push(idx);
            }
            None => {
                let text = value.clone().unwrap_or_else(|| NULL_VALUE.to_string());
                groups.push((
                    value,
                    Inconsistency {
                        value: text,
                        count: 1,
                        indices: vec![idx],
                    },
                ));
            }
        }
    }

    Ok(groups.into_iter().map(|(_, group)| group).collect())
}

/// Offending rows with their value; `None` for a null cell
fn offending_cells(
    df: &DataFrame,
    column: &str,
    allowed_values: &[String],
) -> Result<Vec<(usize, Option<String>)>> {
    let series = df
        .column(column)
        .map_err(|_| DqError::column_not_found(column))?
        .as_materialized_series();

    let mut offending = Vec::new();
    for idx in 0..series.len() {
        let value = series.get(idx)?;
        if value.is_null() {
            offending.push((idx, None));
            continue;
        }
        let text = render_value(&value);
        if !allowed_values.contains(&text) {
            offending.push((idx, Some(text)));
        }
    }

    Ok(offending)
}
