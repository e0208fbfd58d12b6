//! Source record types for the imcite citation formatter
//!
//! Every bibliographic source belongs to exactly one closed category:
//! - Book: monograph with optional edition
//! - InternetResource: article published on a website
//! - ArticlesCollection: article inside a printed collection
//! - Dissertation: scientific dissertation
//! - NormativeAct: law, decree or other normative act
//!
//! Records are validated on construction and immutable afterwards.
//! Deserialization goes through the same constructors, so a record that
//! exists is always a valid one.

pub mod articles_collection;
pub mod book;
pub mod category;
pub mod dissertation;
pub mod internet_resource;
pub mod normative_act;
pub mod record;
pub mod validation;

pub use articles_collection::*;
pub use book::*;
pub use category::*;
pub use dissertation::*;
pub use internet_resource::*;
pub use normative_act::*;
pub use record::*;
pub use validation::*;
