//! Field validation for source records

use crate::Category;
use std::fmt;
use thiserror::Error;

/// Constraint a record field failed to satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Required field is absent or blank
    Missing,
    /// Numeric field must be greater than zero
    NotPositive { value: i64 },
    /// Numeric field does not fit the stored range
    OutOfRange { value: i64 },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Missing => f.write_str("value is required"),
            Constraint::NotPositive { value } => {
                write!(f, "must be greater than 0, got {}", value)
            }
            Constraint::OutOfRange { value } => write!(f, "value {} is out of range", value),
        }
    }
}

/// A record could not be constructed from its raw fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {category} field '{field}': {constraint}")]
pub struct ValidationError {
    pub category: Category,
    pub field: &'static str,
    pub constraint: Constraint,
}

impl ValidationError {
    pub fn new(category: Category, field: &'static str, constraint: Constraint) -> Self {
        Self {
            category,
            field,
            constraint,
        }
    }
}

/// Accept a required text field, rejecting blank values
pub(crate) fn required(
    category: Category,
    field: &'static str,
    value: String,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(category, field, Constraint::Missing));
    }
    Ok(value)
}

/// Normalize an optional text field: blank counts as absent
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept a strictly positive number; an absent one is missing
pub(crate) fn positive(
    category: Category,
    field: &'static str,
    value: Option<i64>,
) -> Result<u32, ValidationError> {
    let value = value.ok_or_else(|| ValidationError::new(category, field, Constraint::Missing))?;
    if value <= 0 {
        return Err(ValidationError::new(
            category,
            field,
            Constraint::NotPositive { value },
        ));
    }
    u32::try_from(value)
        .map_err(|_| ValidationError::new(category, field, Constraint::OutOfRange { value }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let err = required(Category::Book, "title", "   ".to_string()).unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.constraint, Constraint::Missing);
    }

    #[test]
    fn test_required_keeps_value_untouched() {
        let value = required(Category::Book, "title", " Наука ".to_string()).unwrap();
        assert_eq!(value, " Наука ");
    }

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(optional(Some(String::new())), None);
        assert_eq!(optional(Some(" \t".to_string())), None);
        assert_eq!(optional(Some("3-е".to_string())), Some("3-е".to_string()));
        assert_eq!(optional(None), None);
    }

    #[test]
    fn test_positive_bounds() {
        assert_eq!(positive(Category::Book, "year", Some(2020)), Ok(2020));
        assert_eq!(
            positive(Category::Book, "year", None).unwrap_err().constraint,
            Constraint::Missing
        );
        assert_eq!(
            positive(Category::Book, "year", Some(0)).unwrap_err().constraint,
            Constraint::NotPositive { value: 0 }
        );
        assert_eq!(
            positive(Category::Book, "pages", Some(i64::from(u32::MAX) + 1))
                .unwrap_err()
                .constraint,
            Constraint::OutOfRange {
                value: i64::from(u32::MAX) + 1
            }
        );
    }

    #[test]
    fn test_error_message_names_field() {
        let err = ValidationError::new(
            Category::Dissertation,
            "page_count",
            Constraint::NotPositive { value: -3 },
        );
        assert_eq!(
            err.to_string(),
            "invalid dissertation field 'page_count': must be greater than 0, got -3"
        );
    }
}
