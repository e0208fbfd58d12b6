//! Normative act record (laws, decrees, orders)

use crate::validation::{optional, positive, required};
use crate::{Category, ValidationError};
use serde::{Deserialize, Serialize};

/// Raw normative act fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewNormativeAct {
    #[serde(rename = "type")]
    pub act_type: String,
    pub title: String,
    pub acceptance_date: String,
    pub number: String,
    pub publication_source: String,
    pub publication_year: Option<i64>,
    pub source_number: Option<i64>,
    pub article_number: Option<i64>,
    pub edition_date: Option<String>,
}

/// A validated normative act
///
/// `edition_date` is set when the act is cited as amended on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewNormativeAct")]
pub struct NormativeAct {
    #[serde(rename = "type")]
    act_type: String,
    title: String,
    acceptance_date: String,
    number: String,
    publication_source: String,
    publication_year: u32,
    source_number: u32,
    article_number: u32,
    edition_date: Option<String>,
}

impl NormativeAct {
    pub fn new(fields: NewNormativeAct) -> Result<Self, ValidationError> {
        const C: Category = Category::NormativeAct;
        Ok(Self {
            act_type: required(C, "type", fields.act_type)?,
            title: required(C, "title", fields.title)?,
            acceptance_date: required(C, "acceptance_date", fields.acceptance_date)?,
            number: required(C, "number", fields.number)?,
            publication_source: required(C, "publication_source", fields.publication_source)?,
            publication_year: positive(C, "publication_year", fields.publication_year)?,
            source_number: positive(C, "source_number", fields.source_number)?,
            article_number: positive(C, "article_number", fields.article_number)?,
            edition_date: optional(fields.edition_date),
        })
    }

    /// Kind of act, e.g. "Указ Президента Российской Федерации"
    pub fn act_type(&self) -> &str {
        &self.act_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn acceptance_date(&self) -> &str {
        &self.acceptance_date
    }

    /// Registration number of the act
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Where the act was officially published
    pub fn publication_source(&self) -> &str {
        &self.publication_source
    }

    pub fn publication_year(&self) -> u32 {
        self.publication_year
    }

    /// Issue number of the publication source
    pub fn source_number(&self) -> u32 {
        self.source_number
    }

    pub fn article_number(&self) -> u32 {
        self.article_number
    }

    pub fn edition_date(&self) -> Option<&str> {
        self.edition_date.as_deref()
    }
}

impl TryFrom<NewNormativeAct> for NormativeAct {
    type Error = ValidationError;

    fn try_from(fields: NewNormativeAct) -> Result<Self, Self::Error> {
        NormativeAct::new(fields)
    }
}
