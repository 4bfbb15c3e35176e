//! Textual layout of quality log lines.
//!
//! The writer in [`crate::quality_log`] and the reader in
//! [`crate::log_parser`] both build on this module; a line produced by
//! [`format_line`] always matches [`LOG_LINE_REGEX`].
//!
//! ```text
//! 2024-05-01 09:30:12,042 - WARNING - Ref: 3, File: a.csv, Path: /data/a.csv, Column: gender, Issue: Inconsistent Value: X (Passed: 3, Failed: 2), Indices: 1, 2
//! ```

use crate::constants::{INDEX_SEPARATOR, LOG_PREFIX_SEPARATOR, LOG_TIMESTAMP_FORMAT, labels};
use crate::models::Severity;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern recognising an entry line; the `Ref` field is optional
pub static LOG_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?P<timestamp>\d{{4}}-\d{{2}}-\d{{2}} \d{{2}}:\d{{2}}:\d{{2}},\d{{3}}) - (?P<level>\w+) - (?:{r}: \d+, )?{f}: (?P<file>.*?), {p}: (?P<path>.*?), {c}: (?P<column>.*?), {i}: (?P<issue>.*?), {x}: (?P<indices>.*)$",
        r = labels::REF,
        f = labels::FILE,
        p = labels::PATH,
        c = labels::COLUMN,
        i = labels::ISSUE,
        x = labels::INDICES,
    ))
    .expect("Invalid regex: quality log line")
});

/// Make `text` safe to embed as one field of an entry line
///
/// Line breaks are written as `\n` and `\r`. An embedded `, <Label>: `
/// gets a backslash after the comma so it cannot be read as the start of
/// the next field.
pub fn escape_field(text: &str) -> String {
    let mut escaped = text.replace('\r', "\\r").replace('\n', "\\n");
    for label in labels::ALL {
        escaped = escaped.replace(&format!(", {}: ", label), &format!(",\\ {}: ", label));
    }
    escaped
}

/// Body of an entry line, without timestamp and level
///
/// Text fields go through [`escape_field`]; the result is always a single
/// line matching [`LOG_LINE_REGEX`] field for field.
pub fn format_message(
    reference: u64,
    file_name: &str,
    file_path: &str,
    column: &str,
    issue: &str,
    indices: &[usize],
) -> String {
    format!(
        "{}: {}, {}: {}, {}: {}, {}: {}, {}: {}, {}: {}",
        labels::REF,
        reference,
        labels::FILE,
        escape_field(file_name),
        labels::PATH,
        escape_field(file_path),
        labels::COLUMN,
        escape_field(column),
        labels::ISSUE,
        escape_field(issue),
        labels::INDICES,
        join_indices(indices)
    )
}

/// Full log line: `<timestamp> - <LEVEL> - <message>`
pub fn format_line(timestamp: &NaiveDateTime, severity: Severity, message: &str) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        timestamp.format(LOG_TIMESTAMP_FORMAT),
        severity,
        message,
        sep = LOG_PREFIX_SEPARATOR
    )
}

/// Row indices joined with `", "`; empty for no indices
pub fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|idx| idx.to_string())
        .collect::<Vec<_>>()
        .join(INDEX_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_milli_opt(9, 30, 12, 42)
            .unwrap()
    }

    #[test]
    fn test_format_message_field_order() {
        let message = format_message(
            7,
            "example_data.csv",
            "/tmp/example_data.csv",
            "age",
            "Missing Values: 1 (Passed: 4, Failed: 1)",
            &[2],
        );

        assert_eq!(
            message,
            "Ref: 7, File: example_data.csv, Path: /tmp/example_data.csv, Column: age, \
             Issue: Missing Values: 1 (Passed: 4, Failed: 1), Indices: 2"
        );
    }

    #[test]
    fn test_format_line_prefix() {
        let line = format_line(&fixed_timestamp(), Severity::Warning, "hello");
        assert_eq!(line, "2024-05-01 09:30:12,042 - WARNING - hello");
    }

    #[test]
    fn test_join_indices() {
        assert_eq!(join_indices(&[]), "");
        assert_eq!(join_indices(&[4]), "4");
        assert_eq!(join_indices(&[1, 2, 10]), "1, 2, 10");
    }

    #[test]
    fn test_formatted_line_matches_pattern() {
        let message = format_message(
            1,
            "a.csv",
            "/data/a.csv",
            "All Columns",
            "No duplicate rows found. (Passed: 5, Failed: 0)",
            &[],
        );
        let line = format_line(&fixed_timestamp(), Severity::Info, &message);

        let caps = LOG_LINE_REGEX.captures(&line).unwrap();
        assert_eq!(&caps["timestamp"], "2024-05-01 09:30:12,042");
        assert_eq!(&caps["level"], "INFO");
        assert_eq!(&caps["column"], "All Columns");
        assert_eq!(
            &caps["issue"],
            "No duplicate rows found. (Passed: 5, Failed: 0)"
        );
        assert_eq!(&caps["indices"], "");
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain, text: ok"), "plain, text: ok");
        assert_eq!(escape_field("X\nY\r"), "X\\nY\\r");
        assert_eq!(
            escape_field("Z, Indices: 9, Issue: q"),
            "Z,\\ Indices: 9,\\ Issue: q"
        );
    }

    #[test]
    fn test_embedded_separators_stay_in_their_field() {
        let message = format_message(
            2,
            "odd, Path: name.csv",
            "/data/odd.csv",
            "gender",
            "Inconsistent Value: Z, Indices: 9\nW (Passed: 1, Failed: 1)",
            &[1],
        );
        let line = format_line(&fixed_timestamp(), Severity::Warning, &message);

        assert_eq!(line.lines().count(), 1);
        let caps = LOG_LINE_REGEX.captures(&line).unwrap();
        assert_eq!(&caps["file"], "odd,\\ Path: name.csv");
        assert_eq!(&caps["path"], "/data/odd.csv");
        assert_eq!(
            &caps["issue"],
            "Inconsistent Value: Z,\\ Indices: 9\\nW (Passed: 1, Failed: 1)"
        );
        assert_eq!(&caps["indices"], "1");
    }

    #[test]
    fn test_narrative_line_does_not_match() {
        let line = format_line(&fixed_timestamp(), Severity::Info, "Starting data quality checks.");
        assert!(!LOG_LINE_REGEX.is_match(&line));
    }
}
