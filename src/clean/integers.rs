//! Integer coercion for numeric columns

use tracing::debug;

use crate::error::{CleanError, Result};
use crate::model::{CellType, CellValue, Table};

// -2^63 is exact; 2^63 is one past i64::MAX
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Return a copy of `table` whose numeric columns hold only integers.
///
/// Floats are rounded half-to-even (`2.5` becomes `2`, `3.5` becomes `4`). Missing values must
/// have been imputed first; one left in a numeric column is an error, as is a value outside
/// the `i64` range.
pub fn convert_numeric_to_int(table: &Table) -> Result<Table> {
    let mut converted = table.clone();

    for col_idx in 0..converted.column_count() {
        let column = &converted.columns[col_idx];
        if !column.cell_type.is_numeric() {
            continue;
        }
        let name = column.name.clone();

        let mut rounded = 0;
        for (row_idx, row) in converted.rows.iter_mut().enumerate() {
            let Some(cell) = row.cells.get_mut(col_idx) else {
                continue;
            };
            match cell {
                CellValue::Int(_) => {}
                CellValue::Float(f) if f.is_finite() => {
                    let value = f.round_ties_even();
                    if !(I64_LOWER..I64_UPPER).contains(&value) {
                        return Err(CleanError::OutOfRange {
                            column: name,
                            row: row_idx,
                        });
                    }
                    *cell = CellValue::Int(value as i64);
                    rounded += 1;
                }
                CellValue::Float(_) => {
                    return Err(CleanError::NonFiniteValue {
                        column: name,
                        row: row_idx,
                    })
                }
                _ => {
                    return Err(CleanError::MissingNumericValue {
                        column: name,
                        row: row_idx,
                    })
                }
            }
        }

        converted.columns[col_idx].cell_type = CellType::Int;
        debug!(column = %name, rounded, "coerced to integer");
    }

    Ok(converted)
}
