//! Book (monograph) record

use crate::validation::{optional, positive, required};
use crate::{Category, ValidationError};
use serde::{Deserialize, Serialize};

/// Raw book fields, as supplied by a reader
///
/// Field order matches the positional column layout of book rows.
/// Absent fields default to blank and are rejected by [`Book::new`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewBook {
    pub authors: String,
    pub title: String,
    pub edition: Option<String>,
    pub city: String,
    pub publishing_house: String,
    pub year: Option<i64>,
    pub pages: Option<i64>,
}

/// A validated book
///
/// ```ignore
/// Book::new(NewBook {
///     authors: "Иванов И.М., Петров С.Н.".into(),
///     title: "Наука как искусство".into(),
///     edition: Some("3-е".into()),
///     city: "СПб.".into(),
///     publishing_house: "Просвещение".into(),
///     year: Some(2020),
///     pages: Some(999),
/// })?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewBook")]
pub struct Book {
    authors: String,
    title: String,
    edition: Option<String>,
    city: String,
    publishing_house: String,
    year: u32,
    pages: u32,
}

impl Book {
    /// Validate raw fields into a book
    pub fn new(fields: NewBook) -> Result<Self, ValidationError> {
        const C: Category = Category::Book;
        Ok(Self {
            authors: required(C, "authors", fields.authors)?,
            title: required(C, "title", fields.title)?,
            edition: optional(fields.edition),
            city: required(C, "city", fields.city)?,
            publishing_house: required(C, "publishing_house", fields.publishing_house)?,
            year: positive(C, "year", fields.year)?,
            pages: positive(C, "pages", fields.pages)?,
        })
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Edition text such as "3-е", if the book states one
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn publishing_house(&self) -> &str {
        &self.publishing_house
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

impl TryFrom<NewBook> for Book {
    type Error = ValidationError;

    fn try_from(fields: NewBook) -> Result<Self, Self::Error> {
        Book::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Constraint;
    use rstest::rstest;

    fn fields() -> NewBook {
        NewBook {
            authors: "Иванов И.М.".to_string(),
            title: "Наука как искусство".to_string(),
            edition: Some("3-е".to_string()),
            city: "СПб.".to_string(),
            publishing_house: "Просвещение".to_string(),
            year: Some(2020),
            pages: Some(999),
        }
    }

    #[test]
    fn test_new_valid_book() {
        let book = Book::new(fields()).unwrap();
        assert_eq!(book.authors(), "Иванов И.М.");
        assert_eq!(book.edition(), Some("3-е"));
        assert_eq!(book.year(), 2020);
        assert_eq!(book.pages(), 999);
    }

    #[test]
    fn test_new_without_edition() {
        let book = Book::new(NewBook {
            edition: None,
            year: Some(2020),
            pages: Some(300),
            ..fields()
        })
        .unwrap();
        assert_eq!(book.edition(), None);
    }

    #[rstest]
    #[case(Some(0), Some(300), "year", Constraint::NotPositive { value: 0 })]
    #[case(Some(2020), Some(-1), "pages", Constraint::NotPositive { value: -1 })]
    #[case(Some(-5), Some(300), "year", Constraint::NotPositive { value: -5 })]
    #[case(None, Some(300), "year", Constraint::Missing)]
    #[case(Some(2020), None, "pages", Constraint::Missing)]
    fn test_new_rejects_invalid_numbers(
        #[case] year: Option<i64>,
        #[case] pages: Option<i64>,
        #[case] field: &str,
        #[case] constraint: Constraint,
    ) {
        let err = Book::new(NewBook {
            year,
            pages,
            ..fields()
        })
        .unwrap_err();
        assert_eq!(err.category, Category::Book);
        assert_eq!(err.field, field);
        assert_eq!(err.constraint, constraint);
    }

    #[test]
    fn test_new_rejects_missing_publisher() {
        let err = Book::new(NewBook {
            publishing_house: String::new(),
            ..fields()
        })
        .unwrap_err();
        assert_eq!(err.field, "publishing_house");
        assert_eq!(err.constraint, Constraint::Missing);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"authors":"A.","title":"T","city":"М.","publishing_house":"P","year":0,"pages":10}"#;
        let err = serde_json::from_str::<Book>(json).unwrap_err();
        assert!(err.to_string().contains("'year'"));

        let json = r#"{"authors":"A.","title":"T","city":"М.","publishing_house":"P","year":1999,"pages":10}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.edition(), None);
    }

    #[rstest]
    #[case(r#"{"authors":"A.","city":"М.","publishing_house":"P","year":1999,"pages":10}"#, "title")]
    #[case(r#"{"authors":"A.","title":"T","city":"М.","publishing_house":"P","pages":10}"#, "year")]
    fn test_absent_fields_reach_validation(#[case] json: &str, #[case] field: &str) {
        let fields: NewBook = serde_json::from_str(json).unwrap();
        let err = Book::new(fields).unwrap_err();
        assert_eq!(err.field, field);
        assert_eq!(err.constraint, Constraint::Missing);

        let err = serde_json::from_str::<Book>(json).unwrap_err();
        assert!(err.to_string().contains("value is required"));
    }
}
