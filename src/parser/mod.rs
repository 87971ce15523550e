//! Loader: reads delimited files into a `Table`

mod csv;

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::model::{CellValue, Table};

pub use self::csv::CsvLoader;

/// Tokens read as a missing marker; a field must match one exactly
pub const NULL_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "#N/A", "<NA>",
];

/// Check whether raw field text denotes a missing value
pub fn is_null_token(s: &str) -> bool {
    NULL_TOKENS.contains(&s)
}

/// Parse text as a number: integer when it is one, float otherwise
pub fn parse_numeric(s: &str) -> Option<CellValue> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(CellValue::Int(i));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| !f.is_nan())
        .map(CellValue::Float)
}

/// Load a delimited file using the delimiter from `config`
pub fn load_data(path: &Path, config: &Config) -> Result<Table> {
    CsvLoader::new().with_delimiter(config.delimiter).load(path)
}
