//! Configuration management and validation.
//!
//! Holds the dataset source, file locations and the categorical rule used
//! by a report run. Defaults reproduce the standalone behaviour: the
//! built-in example dataset, `data_quality.log` and the gender rule.

use crate::constants::{
    DEFAULT_ALLOWED_VALUES, DEFAULT_CSV_PATH, DEFAULT_FILE_NAME, DEFAULT_LOG_PATH,
    DEFAULT_RULE_COLUMN,
};
use crate::error::{DqError, Result};
use crate::models::Severity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the dataset under audit comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetSource {
    /// The in-memory example dataset
    Builtin,
    /// A CSV file with a header row
    Csv(PathBuf),
}

/// Categorical rule: values of `column` must be one of `allowed_values`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyRule {
    pub column: String,
    pub allowed_values: Vec<String>,
}

impl Default for ConsistencyRule {
    fn default() -> Self {
        Self {
            column: DEFAULT_RULE_COLUMN.to_string(),
            allowed_values: DEFAULT_ALLOWED_VALUES
                .iter()
                .map(|v| v.to_string())
                .collect(),
        }
    }
}

impl ConsistencyRule {
    pub fn new(column: impl Into<String>, allowed_values: &[&str]) -> Self {
        Self {
            column: column.into(),
            allowed_values: allowed_values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Global configuration for an audit run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DqConfig {
    /// Dataset to audit
    pub dataset: DatasetSource,

    /// File name reported in every log entry
    pub file_name: String,

    /// Quality log destination
    pub log_path: PathBuf,

    /// CSV destination for the export step
    pub csv_path: PathBuf,

    /// Append to an existing log instead of truncating it
    pub append_log: bool,

    /// Lines below this severity are not written
    pub min_severity: Severity,

    /// Categorical rule evaluated by the report
    pub rule: ConsistencyRule,
}

impl Default for DqConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetSource::Builtin,
            file_name: DEFAULT_FILE_NAME.to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            append_log: true,
            min_severity: Severity::Debug,
            rule: ConsistencyRule::default(),
        }
    }
}

impl DqConfig {
    /// Audit a CSV file; the reported file name becomes the file's name
    pub fn with_csv_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(name) = path.file_name() {
            self.file_name = name.to_string_lossy().into_owned();
        }
        self.dataset = DatasetSource::Csv(path);
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }

    pub fn with_csv_path(mut self, csv_path: impl Into<PathBuf>) -> Self {
        self.csv_path = csv_path.into();
        self
    }

    /// Truncate the log at the start of the run
    pub fn with_truncated_log(mut self) -> Self {
        self.append_log = false;
        self
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn with_rule(mut self, rule: ConsistencyRule) -> Self {
        self.rule = rule;
        self
    }

    /// Absolute path reported alongside the file name
    ///
    /// For CSV sources this is the source file itself, otherwise the file
    /// name resolved against the working directory.
    pub fn file_path(&self) -> Result<PathBuf> {
        let relative = match &self.dataset {
            DatasetSource::Csv(path) => path.clone(),
            DatasetSource::Builtin => PathBuf::from(&self.file_name),
        };
        absolute_path(&relative)
    }

    /// Validate the configuration before a report run
    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(DqError::configuration("file name must not be empty"));
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(DqError::configuration("log path must not be empty"));
        }
        if self.rule.column.trim().is_empty() {
            return Err(DqError::configuration("rule column must not be empty"));
        }
        if self.rule.allowed_values.is_empty() {
            return Err(DqError::configuration(format!(
                "rule for column '{}' has no allowed values",
                self.rule.column
            )));
        }
        if let DatasetSource::Csv(path) = &self.dataset {
            if !path.exists() {
                return Err(DqError::configuration(format!(
                    "dataset file does not exist: {}",
                    path.display()
                )));
            }
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Validate the paths used by the export step
    pub fn validate_export(&self) -> Result<()> {
        if self.log_path.as_os_str().is_empty() {
            return Err(DqError::configuration("log path must not be empty"));
        }
        if self.csv_path.as_os_str().is_empty() {
            return Err(DqError::configuration("CSV path must not be empty"));
        }
        Ok(())
    }
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
