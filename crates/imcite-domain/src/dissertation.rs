//! Dissertation record

use crate::validation::{positive, required};
use crate::{Category, ValidationError};
use serde::{Deserialize, Serialize};

/// Raw dissertation fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewDissertation {
    pub author: String,
    pub title: String,
    pub author_degree: String,
    pub science_branch: String,
    pub branch_code: String,
    pub city: String,
    pub year: Option<i64>,
    pub page_count: Option<i64>,
}

/// A validated scientific dissertation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewDissertation")]
pub struct Dissertation {
    author: String,
    title: String,
    author_degree: String,
    science_branch: String,
    branch_code: String,
    city: String,
    year: u32,
    page_count: u32,
}

impl Dissertation {
    pub fn new(fields: NewDissertation) -> Result<Self, ValidationError> {
        const C: Category = Category::Dissertation;
        Ok(Self {
            author: required(C, "author", fields.author)?,
            title: required(C, "title", fields.title)?,
            author_degree: required(C, "author_degree", fields.author_degree)?,
            science_branch: required(C, "science_branch", fields.science_branch)?,
            branch_code: required(C, "branch_code", fields.branch_code)?,
            city: required(C, "city", fields.city)?,
            year: positive(C, "year", fields.year)?,
            page_count: positive(C, "page_count", fields.page_count)?,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Degree sought, abbreviated ("канд.", "д-ра")
    pub fn author_degree(&self) -> &str {
        &self.author_degree
    }

    /// Branch of science, abbreviated ("экон.")
    pub fn science_branch(&self) -> &str {
        &self.science_branch
    }

    /// Speciality code, e.g. "01.01.01"
    pub fn branch_code(&self) -> &str {
        &self.branch_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }
}

impl TryFrom<NewDissertation> for Dissertation {
    type Error = ValidationError;

    fn try_from(fields: NewDissertation) -> Result<Self, Self::Error> {
        Dissertation::new(fields)
    }
}
