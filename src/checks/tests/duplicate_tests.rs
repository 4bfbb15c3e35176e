//! Tests for duplicate row detection

use super::*;
use crate::checks::{check_duplicates, duplicate_row_indices};
use std::collections::HashSet;

#[test]
fn test_duplicates_only_count_repeats() {
    let df = create_people_frame();

    assert_eq!(check_duplicates(&df).unwrap(), 2);
    assert_eq!(duplicate_row_indices(&df).unwrap(), vec![3, 5]);
}

#[test]
fn test_duplicates_none_found() {
    let df = df!(
        "name" => ["Alice", "Bob", "Alice"],
        "age" => [25i64, 30, 26],
    )
    .unwrap();

    assert_eq!(check_duplicates(&df).unwrap(), 0);
    assert!(duplicate_row_indices(&df).unwrap().is_empty());
}

#[test]
fn test_duplicates_triple_repeat() {
    let df = df!("code" => ["a", "a", "b", "a"]).unwrap();

    assert_eq!(duplicate_row_indices(&df).unwrap(), vec![1, 3]);
}

#[test]
fn test_null_is_not_equal_to_null_string() {
    let df = df!("value" => [None, Some("null")]).unwrap();

    assert_eq!(check_duplicates(&df).unwrap(), 0);
}

#[test]
fn test_signed_zeros_are_duplicates() {
    let df = df!("score" => [0.0f64, -0.0, 1.5]).unwrap();

    assert_eq!(check_duplicates(&df).unwrap(), 1);
    assert_eq!(duplicate_row_indices(&df).unwrap(), vec![1]);
}

#[test]
fn test_null_rows_repeat() {
    let df = df!(
        "name" => [Some("Alice"), None, None],
        "age" => [Some(25i64), None, None],
    )
    .unwrap();

    assert_eq!(duplicate_row_indices(&df).unwrap(), vec![2]);
}

#[test]
fn test_row_index_name_does_not_clash() {
    let df = df!(
        "__row_index" => [1i64, 1, 2],
        "code" => ["a", "a", "a"],
    )
    .unwrap();

    assert_eq!(duplicate_row_indices(&df).unwrap(), vec![1]);
}

#[test]
fn test_duplicate_count_matches_distinct_rows() {
    let df = create_people_frame();
    let indices = duplicate_row_indices(&df).unwrap();

    let distinct: HashSet<String> = (0..df.height()).map(|idx| row_text(&df, idx)).collect();
    assert_eq!(indices.len(), df.height() - distinct.len());

    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    for idx in &indices {
        let row = row_text(&df, *idx);
        let earlier = (0..*idx).any(|prev| row_text(&df, prev) == row);
        assert!(earlier, "row {} should repeat an earlier row", idx);
    }
}

#[test]
fn test_duplicates_empty_frame() {
    let df = create_empty_people_frame();

    assert_eq!(check_duplicates(&df).unwrap(), 0);
    assert!(duplicate_row_indices(&df).unwrap().is_empty());
}

fn row_text(df: &DataFrame, idx: usize) -> String {
    df.get_columns()
        .iter()
        .map(|column| format!("{:?}", column.as_materialized_series().get(idx).unwrap()))
        .collect::<Vec<_>>()
        .join("|")
}
