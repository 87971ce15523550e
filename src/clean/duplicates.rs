//! Duplicate row removal

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::config::KeepPolicy;
use crate::error::Result;
use crate::model::{CellValue, Row, Table};

/// Return a copy of `table` without exact duplicate rows.
///
/// Rows are duplicates when every cell is equal, including its type. The first or last row
/// of each duplicate group survives per `keep`; survivors keep their relative order and are
/// renumbered from 0.
pub fn drop_duplicates(table: &Table, keep: KeepPolicy) -> Table {
    let kept = match keep {
        KeepPolicy::First => first_occurrences(table.rows.iter()),
        KeepPolicy::Last => {
            let mut rows = first_occurrences(table.rows.iter().rev());
            rows.reverse();
            rows
        }
    };

    debug!(
        keep = %keep,
        removed = table.row_count() - kept.len(),
        "dropped duplicate rows"
    );

    Table {
        columns: table.columns.clone(),
        rows: kept,
    }
}

/// Rows whose cells have not been seen earlier in `rows`
fn first_occurrences<'a>(rows: impl Iterator<Item = &'a Row>) -> Vec<Row> {
    let mut seen: FxHashSet<&'a [CellValue]> = FxHashSet::default();
    let mut kept = Vec::new();
    for row in rows {
        if seen.insert(row.cells.as_slice()) {
            kept.push(row.clone());
        }
    }
    kept
}

/// Like [`drop_duplicates`], taking the keep policy as `"first"` or `"last"`.
///
/// Any other string is rejected before rows are examined.
pub fn drop_duplicates_str(table: &Table, keep: &str) -> Result<Table> {
    let keep: KeepPolicy = keep.parse()?;
    Ok(drop_duplicates(table, keep))
}
