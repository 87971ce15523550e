//! Header normalization

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::model::Table;

/// Lowercase a header, replace spaces with underscores, and expand the `st` abbreviation.
///
/// Only a header equal to `st` is renamed; `status` or `first` stay as they are.
pub fn normalize_column_name(name: &str) -> String {
    let normalized = name.to_lowercase().replace(' ', "_");
    if normalized == "st" {
        "state".to_string()
    } else {
        normalized
    }
}

/// Return a copy of `table` with normalized column names
pub fn clean_column_names(table: &Table) -> Table {
    let mut cleaned = table.clone();
    for column in &mut cleaned.columns {
        let renamed = normalize_column_name(&column.name);
        if renamed != column.name {
            debug!(from = %column.name, to = %renamed, "renamed column");
            column.name = renamed;
        }
    }

    let mut seen = FxHashSet::default();
    for column in &cleaned.columns {
        if !seen.insert(column.name.as_str()) {
            warn!(column = %column.name, "duplicate column name after normalization");
        }
    }
    cleaned
}
