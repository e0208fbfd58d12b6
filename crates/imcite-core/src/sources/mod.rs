//! Record sources: readers that turn external input into validated records
//!
//! - [`JsonSource`]: a JSON array of category-tagged records
//! - [`CsvDirectorySource`]: one CSV file per category with positional columns

mod csv_dir;
mod json;

pub use csv_dir::{CsvDirectorySource, DateFormat, InvalidDateFormat};
pub use json::JsonSource;

use imcite_domain::{Category, SourceRecord, ValidationError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reading records failed; the whole run is aborted
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}, row {row}: {source}")]
    InvalidRecord {
        path: PathBuf,
        row: usize,
        #[source]
        source: ValidationError,
    },

    #[error("{path}, row {row}: cannot read {category} column '{column}' as a date: {value:?}")]
    InvalidDate {
        path: PathBuf,
        row: usize,
        category: Category,
        column: &'static str,
        value: String,
    },
}

/// Supplies every record of one run
pub trait RecordSource {
    fn read(&self) -> Result<Vec<SourceRecord>, SourceError>;
}

/// Pick a source for `path`: a directory is read as CSV files, anything
/// else as a JSON document
pub fn open_source(path: &Path, date_format: DateFormat) -> Box<dyn RecordSource> {
    if path.is_dir() {
        Box::new(CsvDirectorySource::new(path).with_date_format(date_format))
    } else {
        Box::new(JsonSource::new(path))
    }
}
