//! Tagged union over all source categories

use crate::{ArticlesCollection, Book, Category, Dissertation, InternetResource, NormativeAct};
use serde::{Deserialize, Serialize};

/// One validated bibliographic source
///
/// Serialized with a `category` tag next to the record's own fields:
///
/// ```json
/// {"category": "book", "authors": "Иванов И.М.", "title": "...", ...}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum SourceRecord {
    Book(Book),
    InternetResource(InternetResource),
    ArticlesCollection(ArticlesCollection),
    Dissertation(Dissertation),
    NormativeAct(NormativeAct),
}

impl SourceRecord {
    pub fn category(&self) -> Category {
        match self {
            Self::Book(_) => Category::Book,
            Self::InternetResource(_) => Category::InternetResource,
            Self::ArticlesCollection(_) => Category::ArticlesCollection,
            Self::Dissertation(_) => Category::Dissertation,
            Self::NormativeAct(_) => Category::NormativeAct,
        }
    }

    /// Short human label for logs: the title of the work
    pub fn label(&self) -> &str {
        match self {
            Self::Book(b) => b.title(),
            Self::InternetResource(r) => r.article(),
            Self::ArticlesCollection(a) => a.article_title(),
            Self::Dissertation(d) => d.title(),
            Self::NormativeAct(n) => n.title(),
        }
    }

    pub fn as_book(&self) -> Option<&Book> {
        match self {
            Self::Book(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_internet_resource(&self) -> Option<&InternetResource> {
        match self {
            Self::InternetResource(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_articles_collection(&self) -> Option<&ArticlesCollection> {
        match self {
            Self::ArticlesCollection(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_dissertation(&self) -> Option<&Dissertation> {
        match self {
            Self::Dissertation(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_normative_act(&self) -> Option<&NormativeAct> {
        match self {
            Self::NormativeAct(n) => Some(n),
            _ => None,
        }
    }
}

impl From<Book> for SourceRecord {
    fn from(value: Book) -> Self {
        Self::Book(value)
    }
}

impl From<InternetResource> for SourceRecord {
    fn from(value: InternetResource) -> Self {
        Self::InternetResource(value)
    }
}

impl From<ArticlesCollection> for SourceRecord {
    fn from(value: ArticlesCollection) -> Self {
        Self::ArticlesCollection(value)
    }
}

impl From<Dissertation> for SourceRecord {
    fn from(value: Dissertation) -> Self {
        Self::Dissertation(value)
    }
}

impl From<NormativeAct> for SourceRecord {
    fn from(value: NormativeAct) -> Self {
        Self::NormativeAct(value)
    }
}
