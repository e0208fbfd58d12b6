use super::{RecordSource, SourceError};
use chrono::NaiveDate;
use csv::StringRecord;
use imcite_domain::{
    ArticlesCollection, Book, Category, Dissertation, InternetResource, NewInternetResource,
    NewNormativeAct, NormativeAct, SourceRecord,
};
use serde::de::DeserializeOwned;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Input layouts accepted for date cells
const INPUT_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// The date format string is not usable for rendering calendar dates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date format: {0:?}")]
pub struct InvalidDateFormat(pub String);

/// chrono format string used to render date cells as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn render(&self, date: NaiveDate) -> String {
        date.format(&self.0).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self("%d.%m.%Y".to_string())
    }
}

impl FromStr for DateFormat {
    type Err = InvalidDateFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Formatting fails for unknown specifiers and for time fields a
        // bare date cannot supply.
        let probe = NaiveDate::from_ymd_opt(2000, 1, 1)
            .ok_or_else(|| InvalidDateFormat(s.to_string()))?;
        let mut out = String::new();
        if s.is_empty() || write!(out, "{}", probe.format(s)).is_err() {
            return Err(InvalidDateFormat(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

/// Reads `<category>.csv` files from a directory
///
/// Each file starts with a header row; columns are positional, in the
/// field order of the category's `New*` struct. Missing files are skipped.
/// Date columns accept `YYYY-MM-DD` or `DD.MM.YYYY` and are re-rendered
/// with the configured [`DateFormat`].
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    dir: PathBuf,
    date_format: DateFormat,
}

impl CsvDirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            date_format: DateFormat::default(),
        }
    }

    /// Builder: set the output format for date columns
    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    /// File holding the rows of `category`
    pub fn file_for(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}.csv", category.as_str()))
    }

    fn read_file(&self, category: Category, path: &Path) -> Result<Vec<SourceRecord>, SourceError> {
        let csv_error = |source| SourceError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(csv_error)?;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(csv_error)?;
            if row.iter().all(str::is_empty) {
                continue;
            }
            let ctx = RowContext {
                path,
                // 1-based, after the header
                row: index + 2,
                category,
            };
            records.push(self.read_row(&row, &ctx)?);
        }
        Ok(records)
    }

    fn read_row(
        &self,
        row: &StringRecord,
        ctx: &RowContext<'_>,
    ) -> Result<SourceRecord, SourceError> {
        let record = match ctx.category {
            Category::Book => Book::new(ctx.deserialize(row)?).map(SourceRecord::from),
            Category::InternetResource => {
                let mut fields: NewInternetResource = ctx.deserialize(row)?;
                fields.access_date = self.date(ctx, "access_date", fields.access_date)?;
                InternetResource::new(fields).map(SourceRecord::from)
            }
            Category::ArticlesCollection => {
                ArticlesCollection::new(ctx.deserialize(row)?).map(SourceRecord::from)
            }
            Category::Dissertation => {
                Dissertation::new(ctx.deserialize(row)?).map(SourceRecord::from)
            }
            Category::NormativeAct => {
                let mut fields: NewNormativeAct = ctx.deserialize(row)?;
                fields.acceptance_date = self.date(ctx, "acceptance_date", fields.acceptance_date)?;
                fields.edition_date = fields
                    .edition_date
                    .map(|value| self.date(ctx, "edition_date", value))
                    .transpose()?;
                NormativeAct::new(fields).map(SourceRecord::from)
            }
        };
        record.map_err(|source| SourceError::InvalidRecord {
            path: ctx.path.to_path_buf(),
            row: ctx.row,
            source,
        })
    }

    /// Re-render a date cell; blank cells pass through for validation
    fn date(
        &self,
        ctx: &RowContext<'_>,
        column: &'static str,
        value: String,
    ) -> Result<String, SourceError> {
        if value.trim().is_empty() {
            return Ok(value);
        }
        INPUT_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(value.trim(), fmt).ok())
            .map(|date| self.date_format.render(date))
            .ok_or_else(|| SourceError::InvalidDate {
                path: ctx.path.to_path_buf(),
                row: ctx.row,
                category: ctx.category,
                column,
                value,
            })
    }
}

impl RecordSource for CsvDirectorySource {
    fn read(&self) -> Result<Vec<SourceRecord>, SourceError> {
        let mut records = Vec::new();
        for category in Category::ALL {
            let path = self.file_for(category);
            if !path.is_file() {
                debug!(%category, path = %path.display(), "no CSV file, skipping");
                continue;
            }
            let rows = self.read_file(category, &path)?;
            debug!(%category, count = rows.len(), "read CSV sources");
            records.extend(rows);
        }
        Ok(records)
    }
}

struct RowContext<'a> {
    path: &'a Path,
    row: usize,
    category: Category,
}

impl RowContext<'_> {
    fn deserialize<T: DeserializeOwned>(&self, row: &StringRecord) -> Result<T, SourceError> {
        row.deserialize(None).map_err(|source| SourceError::Csv {
            path: self.path.to_path_buf(),
            source,
        })
    }
}
