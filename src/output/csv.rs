//! Delimited text writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{CleanError, Result};
use crate::model::Table;

/// Writer for comma (or otherwise) delimited files
pub struct CsvWriter {
    delimiter: u8,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write `table` to `path`, replacing any existing file
    pub fn write(&self, table: &Table, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| CleanError::io(path, e))?;
        self.write_to(table, BufWriter::new(file), path)?;
        debug!(path = %path.display(), rows = table.row_count(), "wrote delimited file");
        Ok(())
    }

    /// Write `table` to any writer; `path` is only used in error messages
    pub fn write_to<W: Write>(&self, table: &Table, writer: W, path: &Path) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        csv_writer
            .write_record(table.columns.iter().map(|c| c.name.as_str()))
            .map_err(|e| CleanError::csv(path, e))?;

        for row in &table.rows {
            csv_writer
                .write_record(row.cells.iter().map(|c| c.to_field().into_owned()))
                .map_err(|e| CleanError::csv(path, e))?;
        }

        csv_writer.flush().map_err(|e| CleanError::io(path, e))
    }
}
