//! JSON preview format

use std::io::Write;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{CleanError, Result};
use crate::model::{CellValue, Table};

use super::PreviewRenderer;

/// JSON preview: the column list plus the first rows as objects, pretty-printed
#[derive(Debug, Default)]
pub struct JsonPreview;

impl JsonPreview {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonColumn<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    cell_type: String,
}

#[derive(Serialize)]
struct JsonPreviewOutput<'a> {
    row_count: usize,
    columns: Vec<JsonColumn<'a>>,
    rows: Vec<Map<String, Value>>,
}

fn cell_value_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Null => Value::Null,
        CellValue::Int(i) => serde_json::json!(*i),
        CellValue::Float(f) => serde_json::json!(*f),
        CellValue::String(s) => Value::String(s.to_string()),
    }
}

impl PreviewRenderer for JsonPreview {
    fn render(&self, table: &Table, limit: usize, writer: &mut dyn Write) -> Result<()> {
        let rows: Vec<Map<String, Value>> = table
            .rows
            .iter()
            .take(limit)
            .map(|row| {
                table
                    .columns
                    .iter()
                    .zip(&row.cells)
                    .map(|(col, cell)| (col.name.clone(), cell_value_to_json(cell)))
                    .collect::<Map<String, Value>>()
            })
            .collect();

        let output = JsonPreviewOutput {
            row_count: table.row_count(),
            columns: table
                .columns
                .iter()
                .map(|c| JsonColumn {
                    name: &c.name,
                    cell_type: c.cell_type.to_string(),
                })
                .collect(),
            rows,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer).map_err(|e| CleanError::io("<preview>", e))?;

        Ok(())
    }
}
