//! Closed set of source categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a bibliographic source
///
/// The set is closed: every citation standard must provide a style rule
/// for each of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Book,
    InternetResource,
    ArticlesCollection,
    Dissertation,
    NormativeAct,
}

impl Category {
    /// All categories, in the order sources are read
    pub const ALL: [Category; 5] = [
        Category::Book,
        Category::InternetResource,
        Category::ArticlesCollection,
        Category::Dissertation,
        Category::NormativeAct,
    ];

    /// Canonical snake_case identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::InternetResource => "internet_resource",
            Self::ArticlesCollection => "articles_collection",
            Self::Dissertation => "dissertation",
            Self::NormativeAct => "normative_act",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
