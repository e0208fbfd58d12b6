//! Article from a printed collection

use crate::validation::{positive, required};
use crate::{Category, ValidationError};
use serde::{Deserialize, Serialize};

/// Raw fields of an article in a collection
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewArticlesCollection {
    pub authors: String,
    pub article_title: String,
    pub collection_title: String,
    pub city: String,
    pub publishing_house: String,
    pub year: Option<i64>,
    pub pages: String,
}

/// A validated article published inside a collection of works
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewArticlesCollection")]
pub struct ArticlesCollection {
    authors: String,
    article_title: String,
    collection_title: String,
    city: String,
    publishing_house: String,
    year: u32,
    pages: String,
}

impl ArticlesCollection {
    pub fn new(fields: NewArticlesCollection) -> Result<Self, ValidationError> {
        const C: Category = Category::ArticlesCollection;
        Ok(Self {
            authors: required(C, "authors", fields.authors)?,
            article_title: required(C, "article_title", fields.article_title)?,
            collection_title: required(C, "collection_title", fields.collection_title)?,
            city: required(C, "city", fields.city)?,
            publishing_house: required(C, "publishing_house", fields.publishing_house)?,
            year: positive(C, "year", fields.year)?,
            pages: required(C, "pages", fields.pages)?,
        })
    }

    pub fn authors(&self) -> &str {
        &self.authors
    }

    pub fn article_title(&self) -> &str {
        &self.article_title
    }

    pub fn collection_title(&self) -> &str {
        &self.collection_title
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

    /// Page range as written, e.g. "25-30"
    pub fn pages(&self) -> &str {
        &self.pages
    }
}

impl TryFrom<NewArticlesCollection> for ArticlesCollection {
    type Error = ValidationError;

    fn try_from(fields: NewArticlesCollection) -> Result<Self, Self::Error> {
        ArticlesCollection::new(fields)
    }
}
