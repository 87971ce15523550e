//! Driver that runs every cleaning step in order

use tracing::{info, info_span};

use crate::clean::{
    clean_column_names, clean_invalid_values, convert_numeric_to_int, drop_duplicates,
    format_data_types, handle_nulls,
};
use crate::config::{Config, KeepPolicy};
use crate::error::Result;
use crate::model::Table;
use crate::output::save_cleaned_data;
use crate::parser::load_data;

/// Run `f` inside a named span and log the table shape it produced
fn step<F>(name: &'static str, f: F) -> Result<Table>
where
    F: FnOnce() -> Result<Table>,
{
    let _span = info_span!("step", name).entered();
    let table = f()?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "{} done",
        name
    );
    Ok(table)
}

/// Apply the in-memory cleaning steps (everything between loading and saving)
pub fn clean_table(table: &Table, keep: KeepPolicy) -> Result<Table> {
    let table = step("clean_column_names", || Ok(clean_column_names(table)))?;
    let table = step("clean_invalid_values", || Ok(clean_invalid_values(&table)))?;
    let table = step("format_data_types", || Ok(format_data_types(&table)))?;
    let table = step("handle_nulls", || Ok(handle_nulls(&table)))?;
    let table = step("convert_numeric_to_int", || convert_numeric_to_int(&table))?;
    step("handle_duplicates", || Ok(drop_duplicates(&table, keep)))
}

/// Load `config.input_path`, clean it, write it to `config.output_path` and return it.
///
/// The first failing step aborts the run; the output file is only touched once every
/// cleaning step has succeeded.
pub fn run(config: &Config) -> Result<Table> {
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        keep = %config.keep,
        "starting pipeline"
    );

    let raw = step("load_data", || load_data(&config.input_path, config))?;
    let cleaned = clean_table(&raw, config.keep)?;

    {
        let _span = info_span!("step", name = "save_cleaned_data").entered();
        save_cleaned_data(&cleaned, &config.output_path, config)?;
        info!(path = %config.output_path.display(), "save_cleaned_data done");
    }

    Ok(cleaned)
}
