//! Cleaning steps applied between loading and saving
//!
//! Every step borrows its input table and returns a new one.

mod columns;
mod duplicates;
mod integers;
mod nulls;
mod types;
mod values;

pub use columns::{clean_column_names, normalize_column_name};
pub use duplicates::{drop_duplicates, drop_duplicates_str};
pub use integers::convert_numeric_to_int;
pub use nulls::{handle_nulls, median, mode};
pub use types::{extract_complaint_count, format_data_types};
pub use values::{clean_invalid_values, ValueRule};

/// Column holding the percentage-encoded lifetime value
pub const CUSTOMER_LIFETIME_VALUE: &str = "customer_lifetime_value";
/// Column holding `A/B/C` complaint codes
pub const NUMBER_OF_OPEN_COMPLAINTS: &str = "number_of_open_complaints";
