//! Persisting and previewing cleaned tables

mod csv;
mod json;
mod terminal;

use std::io::Write;
use std::path::Path;

use crate::config::{Config, PreviewFormat};
use crate::error::Result;
use crate::model::Table;

pub use self::csv::CsvWriter;
pub use json::JsonPreview;
pub use terminal::TerminalPreview;

/// Trait for rendering the head of a table for a human or another program
pub trait PreviewRenderer {
    /// Render up to `limit` rows of `table` to a writer
    fn render(&self, table: &Table, limit: usize, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating preview renderers
pub struct PreviewFactory;

impl PreviewFactory {
    pub fn create(format: PreviewFormat) -> Box<dyn PreviewRenderer> {
        match format {
            PreviewFormat::Terminal => Box::new(TerminalPreview::new()),
            PreviewFormat::Json => Box::new(JsonPreview::new()),
        }
    }
}

/// Write `table` to `path` as a delimited file with a header row and no index column
pub fn save_cleaned_data(table: &Table, path: &Path, config: &Config) -> Result<()> {
    CsvWriter::new()
        .with_delimiter(config.delimiter)
        .write(table, path)
}

/// Render a preview of `table` to stdout
pub fn preview_to_stdout(table: &Table, limit: usize, format: PreviewFormat) -> Result<()> {
    let renderer = PreviewFactory::create(format);
    let mut stdout = std::io::stdout().lock();
    renderer.render(table, limit, &mut stdout)
}
