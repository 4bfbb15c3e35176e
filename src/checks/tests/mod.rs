//! Tests for the data quality checks
//!
//! Shared fixtures live here; each check has its own test module.

pub mod duplicate_tests;

use polars::prelude::*;

/// Three ages, the last two missing
pub fn create_age_frame() -> DataFrame {
    df!("age" => [Some(25i64), None, None]).unwrap()
}

/// One valid gender followed by two repeats of an invalid one
pub fn create_gender_frame() -> DataFrame {
    df!("gender" => ["M", "X", "X"]).unwrap()
}

/// Mixed frame with nulls, repeated rows and invalid categories
///
/// Row 3 repeats row 0, row 5 repeats row 2 (nulls compare equal).
pub fn create_people_frame() -> DataFrame {
    df!(
        "name" => [Some("Alice"), Some("Bob"), None, Some("Alice"), Some("Dan"), None],
        "age" => [Some(25i64), Some(30), None, Some(25), Some(41), None],
        "gender" => [Some("F"), Some("male"), Some("U"), Some("F"), None, Some("U")],
    )
    .unwrap()
}

/// Frame with the usual columns and no rows
pub fn create_empty_people_frame() -> DataFrame {
    df!(
        "name" => Vec::<&str>::new(),
        "age" => Vec::<Option<i64>>::new(),
        "gender" => Vec::<&str>::new(),
    )
    .unwrap()
}

/// Allowed values of the default gender rule
pub fn gender_values() -> Vec<String> {
    vec!["M".to_string(), "F".to_string()]
}
