//! Application constants for the data quality auditor
//!
//! Default paths, rule values and the textual pieces shared by the
//! quality log writer and the log parser.

// =============================================================================
// File Defaults
// =============================================================================

/// Default data quality log written by the `check` command
pub const DEFAULT_LOG_PATH: &str = "data_quality.log";

/// Default CSV produced by the `export` command
pub const DEFAULT_CSV_PATH: &str = "data_quality_issues.csv";

/// File name reported for the built-in example dataset
pub const DEFAULT_FILE_NAME: &str = "example_data.csv";

// =============================================================================
// Rule Defaults
// =============================================================================

/// Column checked by the default categorical rule
pub const DEFAULT_RULE_COLUMN: &str = "gender";

/// Values accepted by the default categorical rule
pub const DEFAULT_ALLOWED_VALUES: &[&str] = &["M", "F"];

/// Column label used for checks that span the whole row
pub const ALL_COLUMNS: &str = "All Columns";

/// Rendering of a null cell when it is reported as a value
pub const NULL_VALUE: &str = "null";

// =============================================================================
// Log Line Format
// =============================================================================

/// Timestamp prefix format, e.g. `2024-05-01 09:30:12,042`
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Separator between timestamp, level and message
pub const LOG_PREFIX_SEPARATOR: &str = " - ";

/// Separator used when joining row indices
pub const INDEX_SEPARATOR: &str = ", ";

/// Field labels of a log entry body, in emission order
pub mod labels {
    pub const REF: &str = "Ref";
    pub const FILE: &str = "File";
    pub const PATH: &str = "Path";
    pub const COLUMN: &str = "Column";
    pub const ISSUE: &str = "Issue";
    pub const INDICES: &str = "Indices";

    pub const ALL: [&str; 6] = [REF, FILE, PATH, COLUMN, ISSUE, INDICES];
}

/// CSV header produced from parsed log rows
pub const PARSED_FIELDS: [&str; 7] = [
    "timestamp",
    "level",
    "file",
    "path",
    "column",
    "issue",
    "indices",
];
