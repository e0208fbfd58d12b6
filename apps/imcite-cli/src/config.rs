//! Settings loaded from `imcite.toml` and merged with command-line flags
//!
//! ```toml
//! citation = "apa"
//! input = "sources/"
//! output = "references.html"
//! format = "html"
//! date_format = "%d.%m.%Y"
//! ```
//!
//! Lookup order: `--config <path>`, `./imcite.toml`, then
//! `<config dir>/imcite/config.toml`. Flags win over file values.

use std::path::{Path, PathBuf};

use imcite_core::render::OutputFormat;
use imcite_core::sources::DateFormat;
use imcite_core::CitationStandard;
use serde::Deserialize;

use crate::cli::Cli;

pub const CONFIG_FILE_NAME: &str = "imcite.toml";
pub const DEFAULT_INPUT: &str = "input.json";
pub const DEFAULT_OUTPUT: &str = "output.md";

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// TOML representation of the config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    citation: Option<String>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<String>,
    date_format: Option<String>,
}

/// Effective settings of one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub citation: CitationStandard,
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub date_format: DateFormat,
    /// Config file the values came from, if any
    pub source: Option<PathBuf>,
}

/// Resolve settings for `cli`, reading the config file if one is found
pub fn load(cli: &Cli) -> Result<Settings, ConfigError> {
    let located = match &cli.config {
        Some(path) => Some(path.clone()),
        None => default_locations().into_iter().find(|p| p.is_file()),
    };
    let file = match &located {
        Some(path) => read_config(path)?,
        None => TomlConfig::default(),
    };
    merge(cli, file, located)
}

/// Candidate config paths when `--config` is not given
pub fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("imcite").join("config.toml"));
    }
    paths
}

fn read_config(path: &Path) -> Result<TomlConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn merge(cli: &Cli, file: TomlConfig, source: Option<PathBuf>) -> Result<Settings, ConfigError> {
    let citation = match (cli.citation, file.citation.as_deref()) {
        (Some(citation), _) => citation,
        (None, Some(value)) => parse_citation(value)?,
        (None, None) => CitationStandard::default(),
    };

    let output = cli
        .output
        .clone()
        .or(file.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let format = match (cli.format, file.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(value)) => parse_format(value)?,
        (None, None) => OutputFormat::from_path(&output).unwrap_or_default(),
    };

    let date_format = match (&cli.date_format, file.date_format.as_deref()) {
        (Some(date_format), _) => date_format.clone(),
        (None, Some(value)) => parse_date_format(value)?,
        (None, None) => DateFormat::default(),
    };

    Ok(Settings {
        citation,
        input: cli
            .input
            .clone()
            .or(file.input)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
        output,
        format,
        date_format,
        source,
    })
}

fn parse_citation(s: &str) -> Result<CitationStandard, ConfigError> {
    s.parse().map_err(|e: imcite_core::ConfigurationError| ConfigError::InvalidValue {
        key: "citation",
        message: e.to_string(),
    })
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    s.parse().map_err(|e: imcite_core::render::UnknownFormat| ConfigError::InvalidValue {
        key: "format",
        message: e.to_string(),
    })
}

fn parse_date_format(s: &str) -> Result<DateFormat, ConfigError> {
    s.parse().map_err(|e: imcite_core::sources::InvalidDateFormat| ConfigError::InvalidValue {
        key: "date_format",
        message: e.to_string(),
    })
}
