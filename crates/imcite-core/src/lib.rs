//! Citation formatting engine
//!
//! Turns validated source records into a sorted bibliography for one
//! citation standard:
//!
//! - [`styles`]: one literal template per (category, standard) pair
//! - [`StyleRegistry`]: the complete rule table for a standard
//! - [`FormattingEngine`]: formats every record and sorts the result
//! - [`sources`]: readers producing records (JSON, CSV directory)
//! - [`render`]: writers for the final list (text, Markdown, HTML)
//!
//! ```ignore
//! use imcite_core::{format_bibliography, CitationStandard, StyleRegistry};
//!
//! let registry = StyleRegistry::for_standard(CitationStandard::Gost)?;
//! let lines = format_bibliography(&records, &registry)?;
//! ```

pub mod engine;
pub mod error;
pub mod registry;
pub mod render;
pub mod sources;
pub mod standard;
pub mod styles;
pub mod template;

pub use engine::{format_bibliography, FormattedEntry, FormattingEngine};
pub use error::{ConfigurationError, FormatError, Result, SubstitutionError};
pub use registry::StyleRegistry;
pub use standard::CitationStandard;
pub use styles::StyleRule;
pub use template::{substitute, Bindings};

pub use imcite_domain as domain;
