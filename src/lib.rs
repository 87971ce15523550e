//! insclean - Batch cleaning pipeline for the insurance customer dataset
//!
//! Loads a delimited file, normalizes headers and categorical values, fixes column types,
//! imputes missing values, coerces numeric columns to integers, drops duplicate rows and
//! writes the result back out.

pub mod clean;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;

pub use config::{Config, KeepPolicy};
pub use error::{CleanError, Result};
pub use model::Table;
pub use pipeline::run;
