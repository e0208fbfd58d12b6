use super::{RecordSource, SourceError};
use imcite_domain::SourceRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a JSON array of records tagged by `category`
///
/// ```json
/// [
///   {"category": "book", "authors": "Иванов И.М.", "title": "Наука как искусство",
///    "edition": "3-е", "city": "СПб.", "publishing_house": "Просвещение",
///    "year": 2020, "pages": 999}
/// ]
/// ```
///
/// Dates are taken verbatim.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse records from an in-memory JSON document
    pub fn parse(&self, json: &str) -> Result<Vec<SourceRecord>, SourceError> {
        serde_json::from_str(json).map_err(|source| SourceError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl RecordSource for JsonSource {
    fn read(&self) -> Result<Vec<SourceRecord>, SourceError> {
        debug!(path = %self.path.display(), "reading JSON sources");
        let json = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.parse(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imcite_domain::Category;

    #[test]
    fn test_parse_mixed_records() {
        let source = JsonSource::new("inline.json");
        let records = source
            .parse(
                r#"[
                {"category": "internet_resource", "article": "A", "website": "W",
                 "link": "https://example.org", "access_date": "01.01.2021"},
                {"category": "dissertation", "author": "И.", "title": "T", "author_degree": "канд.",
                 "science_branch": "экон.", "branch_code": "01.01.01", "city": "СПб.",
                 "year": 2020, "page_count": 200}
            ]"#,
            )
            .unwrap();
        let categories: Vec<Category> = records.iter().map(|r| r.category()).collect();
        assert_eq!(
            categories,
            vec![Category::InternetResource, Category::Dissertation]
        );
    }

    #[test]
    fn test_parse_rejects_invalid_record() {
        let source = JsonSource::new("inline.json");
        let err = source
            .parse(r#"[{"category": "book", "authors": "A", "title": "T", "city": "М.",
                       "publishing_house": "P", "year": 2020, "pages": -1}]"#)
            .unwrap_err();
        match err {
            SourceError::Json { path, source } => {
                assert_eq!(path, PathBuf::from("inline.json"));
                assert!(source.to_string().contains("'pages'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_reports_absent_fields_as_missing() {
        let source = JsonSource::new("inline.json");
        for (json, field) in [
            (r#"[{"category": "dissertation", "author": "И.", "author_degree": "канд.",
                  "science_branch": "экон.", "branch_code": "01.01.01", "city": "СПб.",
                  "year": 2020, "page_count": 200}]"#, "title"),
            (r#"[{"category": "dissertation", "author": "И.", "title": "T",
                  "author_degree": "канд.", "science_branch": "экон.",
                  "branch_code": "01.01.01", "city": "СПб.", "year": 2020}]"#, "page_count"),
        ] {
            let err = source.parse(json).unwrap_err();
            let message = err.to_string();
            assert!(
                message.contains(&format!("field '{field}': value is required")),
                "{message}"
            );
        }
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(JsonSource::new(&path).read().unwrap().is_empty());
    }
}
