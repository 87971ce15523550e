//! Column type corrections

use tracing::debug;

use crate::model::{CellType, CellValue, Table};
use crate::parser::parse_numeric;

use super::{CUSTOMER_LIFETIME_VALUE, NUMBER_OF_OPEN_COMPLAINTS};

/// Parse a lifetime value as a float. Unparseable text becomes missing.
fn to_float(value: &CellValue) -> CellValue {
    match value {
        CellValue::Null => CellValue::Null,
        CellValue::Int(i) => CellValue::Float(*i as f64),
        CellValue::Float(f) => CellValue::Float(*f),
        CellValue::String(s) => parse_numeric(s)
            .and_then(|v| v.as_f64())
            .map(CellValue::Float)
            .unwrap_or(CellValue::Null),
    }
}

/// Extract the middle field of an `A/B/C` complaint code, e.g. `1/5/00` gives `5`.
///
/// Values without a `/` or with a non-numeric middle field become missing.
pub fn extract_complaint_count(value: &CellValue) -> CellValue {
    if value.is_null() {
        return CellValue::Null;
    }
    value
        .display()
        .split('/')
        .nth(1)
        .and_then(parse_numeric)
        .unwrap_or(CellValue::Null)
}

/// Return a copy of `table` with the lifetime value parsed as a float and the complaint
/// code reduced to its count.
pub fn format_data_types(table: &Table) -> Table {
    let mut formatted = table.clone();

    if let Some(col_idx) = formatted.column_index(CUSTOMER_LIFETIME_VALUE) {
        let before = formatted.null_count(col_idx);
        formatted.map_column(col_idx, to_float);
        formatted.columns[col_idx].cell_type = CellType::Float;
        debug!(
            column = CUSTOMER_LIFETIME_VALUE,
            unparseable = formatted.null_count(col_idx) - before,
            "converted to float"
        );
    }

    if let Some(col_idx) = formatted.column_index(NUMBER_OF_OPEN_COMPLAINTS) {
        let before = formatted.null_count(col_idx);
        formatted.map_column(col_idx, extract_complaint_count);
        formatted.refresh_column_type(col_idx);
        // A mix of integer and fractional counts, or no parseable count at all, is float
        if formatted.columns[col_idx].cell_type != CellType::Int {
            formatted.cast_to_float(col_idx);
        }
        debug!(
            column = NUMBER_OF_OPEN_COMPLAINTS,
            unparseable = formatted.null_count(col_idx) - before,
            "extracted complaint counts"
        );
    }

    formatted
}
