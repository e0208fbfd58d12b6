//! Internet resource record

use crate::validation::required;
use crate::{Category, ValidationError};
use serde::{Deserialize, Serialize};

/// Raw internet resource fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewInternetResource {
    pub article: String,
    pub website: String,
    pub link: String,
    pub access_date: String,
}

/// A validated article published on a website
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewInternetResource")]
pub struct InternetResource {
    article: String,
    website: String,
    link: String,
    access_date: String,
}

impl InternetResource {
    pub fn new(fields: NewInternetResource) -> Result<Self, ValidationError> {
        const C: Category = Category::InternetResource;
        Ok(Self {
            article: required(C, "article", fields.article)?,
            website: required(C, "website", fields.website)?,
            link: required(C, "link", fields.link)?,
            access_date: required(C, "access_date", fields.access_date)?,
        })
    }

    /// Title of the article
    pub fn article(&self) -> &str {
        &self.article
    }

    /// Name of the website
    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Date the resource was accessed, already formatted as text
    pub fn access_date(&self) -> &str {
        &self.access_date
    }
}

impl TryFrom<NewInternetResource> for InternetResource {
    type Error = ValidationError;

    fn try_from(fields: NewInternetResource) -> Result<Self, Self::Error> {
        InternetResource::new(fields)
    }
}
