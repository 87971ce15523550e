//! Delimited text loader

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{CleanError, Result};
use crate::model::{CellType, CellValue, Column, Table};

use super::is_null_token;

/// Loader for comma (or otherwise) delimited files with a header row
pub struct CsvLoader {
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a file into a typed table
    pub fn load(&self, path: &Path) -> Result<Table> {
        let file = File::open(path).map_err(|e| CleanError::io(path, e))?;
        self.load_from_reader(BufReader::new(file), path)
    }

    /// Read delimited text from any reader; `path` is only used in error messages
    pub fn load_from_reader<R: Read>(&self, reader: R, path: &Path) -> Result<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| CleanError::csv(path, e))?
            .clone();
        if headers.is_empty() {
            return Err(CleanError::MissingHeader {
                path: path.to_path_buf(),
            });
        }

        let width = headers.len();
        let mut raw_rows: Vec<(Vec<Option<String>>, usize)> = Vec::new();

        for (line_num, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| CleanError::csv(path, e))?;
            let source_line = line_num + 2; // +2 for 1-indexing and header

            if record.len() > width {
                return Err(CleanError::RaggedRow {
                    path: path.to_path_buf(),
                    line: source_line,
                    expected: width,
                    found: record.len(),
                });
            }

            let mut fields: Vec<Option<String>> = record
                .iter()
                .map(|s| (!is_null_token(s)).then(|| s.to_string()))
                .collect();
            // Short rows are padded with missing values
            fields.resize(width, None);
            raw_rows.push((fields, source_line));
        }

        let column_types: Vec<CellType> = (0..width)
            .map(|col_idx| infer_column_type(raw_rows.iter().map(|(f, _)| f[col_idx].as_deref())))
            .collect();

        let columns = headers
            .iter()
            .zip(&column_types)
            .enumerate()
            .map(|(i, (name, ty))| Column::with_type(name, i, *ty))
            .collect();

        let mut table = Table::new(columns);
        for (fields, source_line) in raw_rows {
            let cells = fields
                .into_iter()
                .zip(&column_types)
                .map(|(field, ty)| parse_cell_value(field, *ty))
                .collect();
            table.add_row(cells, source_line);
        }

        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed delimited file"
        );

        Ok(table)
    }
}

/// Infer a column's type from its non-missing raw values:
/// all integers, else all numbers, else text.
fn infer_column_type<'a>(values: impl Iterator<Item = Option<&'a str>>) -> CellType {
    let mut inferred = CellType::Null;

    for value in values.flatten() {
        let trimmed = value.trim();
        let cell_type = if trimmed.parse::<i64>().is_ok() {
            CellType::Int
        } else if trimmed.parse::<f64>().is_ok() {
            CellType::Float
        } else {
            return CellType::String;
        };
        inferred = inferred.widen(cell_type);
    }

    inferred
}

/// Convert one raw field into a value of the column's type
fn parse_cell_value(field: Option<String>, column_type: CellType) -> CellValue {
    let Some(field) = field else {
        return CellValue::Null;
    };

    match column_type {
        CellType::Int => field
            .trim()
            .parse::<i64>()
            .map(CellValue::Int)
            .unwrap_or(CellValue::Null),
        CellType::Float => field
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| !f.is_nan())
            .map(CellValue::Float)
            .unwrap_or(CellValue::Null),
        _ => CellValue::String(Cow::Owned(field)),
    }
}
