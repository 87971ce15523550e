//! Error types for the cleaning pipeline

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: file has no header row", path.display())]
    MissingHeader { path: PathBuf },

    #[error("{}: line {line} has {found} fields, header has {expected}", path.display())]
    RaggedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid keep policy '{0}': expected 'first' or 'last'")]
    InvalidKeepPolicy(String),

    #[error("Unknown preview format: {0}")]
    InvalidPreviewFormat(String),

    #[error("Column '{column}' still has a missing value at row {row}; impute before coercing")]
    MissingNumericValue { column: String, row: usize },

    #[error("Column '{column}' has a non-finite value at row {row}")]
    NonFiniteValue { column: String, row: usize },

    #[error("Column '{column}' value at row {row} does not fit in a 64-bit integer")]
    OutOfRange { column: String, row: usize },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CleanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        CleanError::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
