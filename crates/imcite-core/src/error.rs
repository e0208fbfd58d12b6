//! Error types for the formatting engine

use crate::CitationStandard;
use imcite_domain::{Category, ValidationError};
use thiserror::Error;

/// Result type alias for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// Any failure that aborts a formatting run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// A record could not be constructed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Standard or rule table is incomplete or inconsistent
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A template referenced a field its rule did not bind
    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),
}

/// Setup defects in the standard/rule tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Standard name not recognized
    #[error("Unknown citation standard: {0}")]
    UnknownStandard(String),

    /// No rule registered for a category
    #[error("No {standard} style rule registered for category '{category}'")]
    MissingRule {
        standard: CitationStandard,
        category: Category,
    },

    /// Two rules registered for the same category
    #[error("Duplicate {standard} style rule for category '{category}'")]
    DuplicateRule {
        standard: CitationStandard,
        category: Category,
    },

    /// A rule of one standard offered to another standard's registry
    #[error("{rule_standard} rule for '{category}' cannot be registered for {standard}")]
    ForeignRule {
        standard: CitationStandard,
        rule_standard: CitationStandard,
        category: Category,
    },

    /// A rule was handed a record of a different category
    #[error("{standard} rule for '{expected}' cannot format a '{actual}' record")]
    RuleMismatch {
        standard: CitationStandard,
        expected: Category,
        actual: Category,
    },
}

/// Template substitution failures (internal invariant violations)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    /// Template placeholder with no bound value
    #[error("Placeholder '${name}' has no value in template {template:?}")]
    UnresolvedPlaceholder { name: String, template: String },

    /// `$` not followed by an identifier or another `$`
    #[error("Invalid placeholder at byte {position} in template {template:?}")]
    InvalidPlaceholder { position: usize, template: String },
}
