//! Missing value imputation

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::model::{CellValue, Table};

/// Median of a set of numbers; the mean of the two middle values for an even count
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Most frequent non-missing value.
///
/// When several values share the highest count the smallest one in sort order wins, so
/// the result does not depend on row order.
pub fn mode<'a>(values: impl IntoIterator<Item = &'a CellValue>) -> Option<CellValue> {
    let mut counts: IndexMap<&CellValue, usize> = IndexMap::new();
    for value in values.into_iter().filter(|v| !v.is_null()) {
        *counts.entry(value).or_insert(0) += 1;
    }

    let top = counts.values().copied().max()?;
    counts
        .into_iter()
        .filter(|(_, count)| *count == top)
        .map(|(value, _)| value)
        .min_by(|a, b| a.sort_cmp(b))
        .cloned()
}

/// Return a copy of `table` with missing values filled: numeric columns with their median,
/// categorical columns with their mode. Columns without missing values are left as-is.
pub fn handle_nulls(table: &Table) -> Table {
    let mut filled = table.clone();

    for col_idx in 0..filled.column_count() {
        let missing = filled.null_count(col_idx);
        if missing == 0 {
            continue;
        }
        let column_type = filled.columns[col_idx].cell_type;
        let name = filled.columns[col_idx].name.clone();

        if column_type.is_numeric() {
            let present: Vec<f64> = filled
                .column_values(col_idx)
                .filter_map(CellValue::as_f64)
                .collect();
            let Some(fill) = median(&present) else {
                warn!(column = %name, "numeric column has no values to take a median from");
                continue;
            };
            filled.cast_to_float(col_idx);
            filled.map_column(col_idx, |c| match c {
                CellValue::Null => CellValue::Float(fill),
                other => other.clone(),
            });
            debug!(column = %name, missing, median = fill, "filled with median");
        } else if column_type.is_categorical() {
            let Some(fill) = mode(filled.column_values(col_idx)) else {
                continue;
            };
            filled.map_column(col_idx, |c| match c {
                CellValue::Null => fill.clone(),
                other => other.clone(),
            });
            debug!(column = %name, missing, mode = %fill, "filled with mode");
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellType;

    #[test]
    fn test_median() {
        assert_eq!(median(&[10.0, 20.0, 40.0]), Some(20.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_mode_tie_break_is_smallest_value() {
        let values: Vec<CellValue> = vec!["M".into(), "F".into(), "M".into(), "F".into()];
        assert_eq!(mode(&values), Some(CellValue::from("F")));

        let values: Vec<CellValue> =
            vec!["b".into(), CellValue::Null, "a".into(), "b".into(), CellValue::Null];
        assert_eq!(mode(&values), Some(CellValue::from("b")));

        assert_eq!(mode(&[CellValue::Null]), None);
    }

    #[test]
    fn test_numeric_column_filled_with_median() {
        let table = Table::from_rows(
            vec!["income"],
            vec![
                vec![CellValue::Int(10)],
                vec![CellValue::Int(20)],
                vec![CellValue::Null],
                vec![CellValue::Int(40)],
            ],
        );
        let filled = handle_nulls(&table);

        assert_eq!(filled.cell(2, "income"), Some(&CellValue::Float(20.0)));
        assert_eq!(filled.cell(0, "income"), Some(&CellValue::Float(10.0)));
        assert_eq!(filled.columns[0].cell_type, CellType::Float);
        assert_eq!(filled.null_count(0), 0);
        assert_eq!(filled.row_count(), 4);
    }

    #[test]
    fn test_categorical_column_filled_with_mode() {
        let table = Table::from_rows(
            vec!["gender"],
            vec![
                vec!["M".into()],
                vec![CellValue::Null],
                vec!["F".into()],
                vec!["F".into()],
            ],
        );
        let filled = handle_nulls(&table);
        assert_eq!(filled.cell(1, "gender"), Some(&CellValue::from("F")));
    }

    #[test]
    fn test_complete_columns_untouched() {
        let table = Table::from_rows(
            vec!["n", "s"],
            vec![
                vec![CellValue::Int(1), "x".into()],
                vec![CellValue::Int(2), "y".into()],
            ],
        );
        let filled = handle_nulls(&table);
        assert_eq!(filled, table);
        assert_eq!(filled.columns[0].cell_type, CellType::Int);
    }

    #[test]
    fn test_all_missing_numeric_column_is_left_missing() {
        let table = Table::from_rows(
            vec!["empty"],
            vec![vec![CellValue::Null], vec![CellValue::Null]],
        );
        let filled = handle_nulls(&table);
        assert_eq!(filled.null_count(0), 2);
    }
}
