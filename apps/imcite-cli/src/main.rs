//! imcite - bibliography generator
//!
//! Reads source records, formats them under one citation standard and
//! writes the sorted reference list as a document.

mod cli;
mod config;

use std::process::ExitCode;

use clap::Parser;
use imcite_core::render::{DocumentStyle, RenderError};
use imcite_core::sources::{open_source, SourceError};
use imcite_core::{format_bibliography, ConfigurationError, FormatError, StyleRegistry};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{ConfigError, Settings};

/// Errors that end a run without producing output
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] ConfigurationError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("imcite=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "bibliography generation failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let settings = config::load(cli)?;
    if let Some(path) = &settings.source {
        info!(path = %path.display(), "loaded config");
    }
    info!(
        citation = %settings.citation,
        standard = settings.citation.description(),
        input = %settings.input.display(),
        output = %settings.output.display(),
        format = settings.format.as_str(),
        "generating bibliography"
    );

    let document = generate(&settings)?;

    if cli.stdout {
        print!("{document}");
    } else {
        std::fs::write(&settings.output, document).map_err(|source| AppError::Write {
            path: settings.output.clone(),
            source,
        })?;
        info!(path = %settings.output.display(), "bibliography written");
    }
    Ok(())
}

/// Build the whole document in memory so nothing is written on failure
fn generate(settings: &Settings) -> Result<String, AppError> {
    let registry = StyleRegistry::for_standard(settings.citation)?;
    let records = open_source(&settings.input, settings.date_format.clone()).read()?;
    info!(count = records.len(), "read source records");

    let rows = format_bibliography(&records, &registry)?;
    let style = DocumentStyle::for_standard(settings.citation);
    Ok(settings.format.renderer().render_to_string(&rows, &style)?)
}
