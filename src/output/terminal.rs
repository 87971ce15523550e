//! Boxed text grid preview

use std::io::Write;

use crate::error::{CleanError, Result};
use crate::model::Table;

use super::PreviewRenderer;

/// Terminal preview drawn as a box-drawing grid
pub struct TerminalPreview;

impl TerminalPreview {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewRenderer for TerminalPreview {
    fn render(&self, table: &Table, limit: usize, writer: &mut dyn Write) -> Result<()> {
        let shown = limit.min(table.row_count());

        let mut data: Vec<Vec<String>> = Vec::with_capacity(shown + 1);
        let mut header = vec!["#".to_string()];
        header.extend(table.columns.iter().map(|c| c.name.clone()));
        data.push(header);

        for (position, row) in table.rows.iter().take(shown).enumerate() {
            let mut row_data = vec![position.to_string()];
            row_data.extend(row.cells.iter().map(|c| c.display().into_owned()));
            data.push(row_data);
        }

        let write_err = |e| CleanError::io("<preview>", e);
        writeln!(
            writer,
            "{} rows × {} columns (showing {})",
            table.row_count(),
            table.column_count(),
            shown
        )
        .map_err(write_err)?;
        write!(writer, "{}", build_table(&data)).map_err(write_err)?;
        Ok(())
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        line.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            line.push(mid);
        }
    }
    line.push(right);
    line.push('\n');
    line
}

fn cells_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("│");
    for (i, cell) in cells.iter().enumerate() {
        let width = widths.get(i).copied().unwrap_or(0);
        line.push_str(&format!(" {:width$} │", cell, width = width));
    }
    line.push('\n');
    line
}

/// Build a column-aligned grid; the first entry of `data` is the header
fn build_table(data: &[Vec<String>]) -> String {
    let Some(header) = data.first() else {
        return String::new();
    };

    let mut widths = vec![0; header.len()];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut output = border(&widths, '┌', '┬', '┐');
    output.push_str(&cells_line(header, &widths));
    output.push_str(&border(&widths, '├', '┼', '┤'));
    for row in data.iter().skip(1) {
        output.push_str(&cells_line(row, &widths));
    }
    output.push_str(&border(&widths, '└', '┴', '┘'));
    output
}
