//! insclean - Clean the insurance customer dataset

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use insclean::config::{Config, KeepPolicy, PreviewFormat, DEFAULT_OUTPUT_PATH};
use insclean::output::preview_to_stdout;
use insclean::{logging, pipeline};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliPreviewFormat {
    Terminal,
    Json,
}

impl From<CliPreviewFormat> for PreviewFormat {
    fn from(f: CliPreviewFormat) -> Self {
        match f {
            CliPreviewFormat::Terminal => PreviewFormat::Terminal,
            CliPreviewFormat::Json => PreviewFormat::Json,
        }
    }
}

/// Clean an insurance customer CSV: normalize headers and values, fix types, impute missing
/// values, round numbers to integers and drop duplicate rows
#[derive(Parser, Debug)]
#[command(name = "insclean")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Delimited file to clean
    input: PathBuf,

    /// Where to write the cleaned file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Which duplicate row to keep: first or last
    #[arg(short, long, default_value = "first", value_parser = parse_keep)]
    keep: KeepPolicy,

    /// Field delimiter for input and output
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Print the first N cleaned rows to stdout
    #[arg(long, value_name = "N", default_value_t = 0)]
    preview: usize,

    /// Preview format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliPreviewFormat,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn parse_keep(s: &str) -> Result<KeepPolicy, String> {
    s.parse::<KeepPolicy>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.quiet);

    let delimiter = u8::try_from(cli.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("Delimiter must be a single ASCII character: {:?}", cli.delimiter))?;

    let config = Config::new(&cli.input)
        .with_output_path(&cli.output)
        .with_keep(cli.keep)
        .with_delimiter(delimiter)
        .with_preview(cli.preview, cli.format.into());

    let cleaned = pipeline::run(&config)
        .with_context(|| format!("Failed to clean {}", cli.input.display()))?;

    if config.preview_rows > 0 {
        preview_to_stdout(&cleaned, config.preview_rows, config.preview_format)?;
    }

    Ok(())
}
