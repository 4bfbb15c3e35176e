//! Data quality checks over a polars `DataFrame`
//!
//! Each check comes as a pair: a counting function and a function returning
//! the affected row indices. Row indices are 0-based positions in the frame.
//!
//! - [`missing`] - null counts per column
//! - [`duplicates`] - rows repeating an earlier row
//! - [`consistency`] - values outside an allowed set for one column
//!
//! # Example Usage
//!
//! ```rust
//! use dq_audit::checks::{check_duplicates, check_missing_values};
//! use polars::prelude::*;
//!
//! # fn example() -> dq_audit::error::Result<()> {
//! let df = df!("age" => [Some(25i64), None, None])?;
//! assert_eq!(check_missing_values(&df)?, vec![("age".to_string(), 2)]);
//! assert_eq!(check_duplicates(&df)?, 1);
//! # Ok(())
//! # }
//! ```

pub mod consistency;
pub mod duplicates;
pub mod missing;

#[cfg(test)]
pub mod tests;

pub use consistency::{check_inconsistencies, group_inconsistencies, inconsistency_row_indices};
pub use duplicates::{check_duplicates, duplicate_row_indices};
pub use missing::{check_missing_values, missing_value_row_indices};

use crate::constants::NULL_VALUE;
use polars::prelude::AnyValue;

/// Text form of a cell as it appears in log messages
pub(crate) fn render_value(value: &AnyValue<'_>) -> String {
    match value.get_str() {
        Some(s) => s.to_string(),
        None if value.is_null() => NULL_VALUE.to_string(),
        None => value.to_string(),
    }
}
