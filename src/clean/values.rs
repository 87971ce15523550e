//! Categorical value normalization

use std::borrow::Cow;

use tracing::debug;

use crate::model::{CellValue, Table};

use super::CUSTOMER_LIFETIME_VALUE;

/// A rewrite applied to every text value of one column
#[derive(Debug, Clone, Copy)]
pub enum ValueRule {
    /// Exact-match replacements, `(from, to)`
    Replace(&'static [(&'static str, &'static str)]),
    /// Remove every occurrence of a character
    Strip(char),
}

impl ValueRule {
    /// Apply the rule to a single value. Missing and numeric values pass through.
    pub fn apply(&self, value: &CellValue) -> CellValue {
        let Some(text) = value.as_str() else {
            return value.clone();
        };

        match self {
            ValueRule::Replace(pairs) => pairs
                .iter()
                .find(|(from, _)| *from == text)
                .map(|(_, to)| CellValue::String(Cow::Borrowed(*to)))
                .unwrap_or_else(|| value.clone()),
            ValueRule::Strip(ch) if text.contains(*ch) => {
                CellValue::String(Cow::Owned(text.replace(*ch, "")))
            }
            ValueRule::Strip(_) => value.clone(),
        }
    }
}

/// Known-inconsistent values per column
pub const VALUE_RULES: &[(&str, ValueRule)] = &[
    (
        "gender",
        ValueRule::Replace(&[("Male", "M"), ("female", "F"), ("Femal", "F")]),
    ),
    (
        "state",
        ValueRule::Replace(&[
            ("AZ", "Arizona"),
            ("Cali", "California"),
            ("WA", "Washington"),
        ]),
    ),
    ("education", ValueRule::Replace(&[("Bachelors", "Bachelor")])),
    (CUSTOMER_LIFETIME_VALUE, ValueRule::Strip('%')),
    (
        "vehicle_class",
        ValueRule::Replace(&[
            ("Sports Car", "Luxury"),
            ("Luxury SUV", "Luxury"),
            ("Luxury Car", "Luxury"),
        ]),
    ),
];

/// Return a copy of `table` with known-bad categorical values rewritten.
///
/// Columns missing from the table are skipped.
pub fn clean_invalid_values(table: &Table) -> Table {
    let mut cleaned = table.clone();
    for (name, rule) in VALUE_RULES {
        let Some(col_idx) = cleaned.column_index(name) else {
            continue;
        };
        let changed = cleaned.map_column(col_idx, |value| rule.apply(value));
        debug!(column = name, changed, "normalized values");
    }
    cleaned
}
