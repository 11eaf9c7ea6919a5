mod constructor;
mod errors;
mod output;
mod parser;
mod runner;

use clap::{Parser, ValueEnum};
use datasynth_core::{OutputFormat, Shape};
use tracing::Level;

/// Layout of the generated tables
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShapeArg {
    /// One row per (date, channel, metric)
    Long,
    /// Date index, (channel, metric) column hierarchy
    Wide,
    /// Side by side campaign sub tables
    Campaign,
}

impl From<ShapeArg> for Shape {
    fn from(value: ShapeArg) -> Self {
        match value {
            ShapeArg::Long => Shape::Long,
            ShapeArg::Wide => Shape::Wide,
            ShapeArg::Campaign => Shape::Campaign,
        }
    }
}

/// File format of the written datasets
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Xlsx,
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Xlsx => OutputFormat::Xlsx,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// Output format for the run report
#[derive(Debug, Clone, ValueEnum)]
enum ReportFormat {
    /// Print results to standard output (human-readable)
    Stdout,
    /// Output results in JSON format
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "datasynth",
    version,
    about = "datasynth CLI - Synthetic, noisy spreadsheet datasets",
    long_about = "datasynth generates synthetic marketing spreadsheets in long, wide or \
                  multi-campaign layout and injects controlled noise (missing cells, \
                  wrong-typed values) to exercise data cleaning tools.\n\n\
                  Example usage:\n  \
                  datasynth --shape campaign --count 10 --seed 42"
)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Table layout to generate
    #[arg(short, long, value_enum)]
    shape: Option<ShapeArg>,

    /// Number of datasets to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Folder receiving the datasets, created if absent
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<String>,

    /// File format of the datasets
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Master seed; identical seeds produce identical datasets
    #[arg(long)]
    seed: Option<u64>,

    /// Generate datasets on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Output format for the run report
    #[arg(short, long, value_enum, default_value = "stdout")]
    report: ReportFormat,

    /// Enable debug logs and detailed error chains
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    let debug = args.debug;

    tracing_subscriber::fmt()
        .with_max_level(if debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match runner::run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            if debug {
                eprintln!("Error: {:?}", err);
            } else {
                eprintln!("Error: {:#}", err);
                eprintln!("\nHint: Run with --debug flag for detailed error chains");
            }
            std::process::exit(1);
        }
    }
}
