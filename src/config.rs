//! Configuration handling for insclean

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CleanError;

/// Default output file written by the pipeline
pub const DEFAULT_OUTPUT_PATH: &str = "combined_data.csv";

/// Which occurrence of a duplicate row group survives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeepPolicy {
    #[default]
    First,
    Last,
}

impl FromStr for KeepPolicy {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(KeepPolicy::First),
            "last" => Ok(KeepPolicy::Last),
            _ => Err(CleanError::InvalidKeepPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepPolicy::First => write!(f, "first"),
            KeepPolicy::Last => write!(f, "last"),
        }
    }
}

/// Rendering used when previewing the cleaned table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewFormat {
    #[default]
    Terminal,
    Json,
}

impl FromStr for PreviewFormat {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(PreviewFormat::Terminal),
            "json" => Ok(PreviewFormat::Json),
            _ => Err(CleanError::InvalidPreviewFormat(s.to_string())),
        }
    }
}

/// Configuration for a pipeline run
#[derive(Debug, Clone)]
pub struct Config {
    /// Delimited file to clean
    pub input_path: PathBuf,
    /// Where the cleaned table is written
    pub output_path: PathBuf,
    /// Which duplicate occurrence to keep
    pub keep: KeepPolicy,
    /// Field delimiter for both input and output
    pub delimiter: u8,
    /// Number of cleaned rows to preview (0 disables the preview)
    pub preview_rows: usize,
    /// Preview rendering
    pub preview_format: PreviewFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            keep: KeepPolicy::default(),
            delimiter: b',',
            preview_rows: 0,
            preview_format: PreviewFormat::default(),
        }
    }
}

impl Config {
    /// Create a new Config reading from `input_path`
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Default::default()
        }
    }

    /// Set the output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the duplicate keep policy
    pub fn with_keep(mut self, keep: KeepPolicy) -> Self {
        self.keep = keep;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Preview the first `rows` cleaned rows in the given format
    pub fn with_preview(mut self, rows: usize, format: PreviewFormat) -> Self {
        self.preview_rows = rows;
        self.preview_format = format;
        self
    }
}
