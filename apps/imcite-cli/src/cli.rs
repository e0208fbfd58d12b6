//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use imcite_core::render::OutputFormat;
use imcite_core::sources::DateFormat;
use imcite_core::CitationStandard;

/// Generate a formatted bibliography from source records
#[derive(Parser, Debug, Clone)]
#[command(name = "imcite", version)]
#[command(about = "Format source records as a GOST or APA reference list", long_about = None)]
pub struct Cli {
    /// Citation standard (gost or apa) [default: gost]
    #[arg(short, long, value_name = "STANDARD")]
    pub citation: Option<CitationStandard>,

    /// JSON file or directory of per-category CSV files [default: input.json]
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output document [default: output.md]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (text, markdown or html); inferred from the output extension
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// chrono format for dates read from CSV [default: %d.%m.%Y]
    #[arg(long, value_name = "FORMAT")]
    pub date_format: Option<DateFormat>,

    /// Config file to use instead of the default locations
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the document instead of writing the output file
    #[arg(long)]
    pub stdout: bool,
}
