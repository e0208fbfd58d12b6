//! Style rules: one literal template per (category, standard) pair
//!
//! A rule pairs a template with a binding function. The binding function
//! pulls the record's fields (and any derived fields) into [`Bindings`];
//! substitution itself is pure text replacement.

pub mod apa;
pub mod gost;

use crate::template::{substitute, Bindings};
use crate::{CitationStandard, ConfigurationError, Result};
use imcite_domain::{Category, SourceRecord};

/// Extracts template bindings from a record of the rule's category.
///
/// Returns `None` when handed a record of another category.
pub type BindFn = fn(&SourceRecord) -> Option<Bindings>;

/// Formatting rule for one category under one standard
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    standard: CitationStandard,
    category: Category,
    template: &'static str,
    bind: BindFn,
}

impl StyleRule {
    pub const fn new(
        standard: CitationStandard,
        category: Category,
        template: &'static str,
        bind: BindFn,
    ) -> Self {
        Self {
            standard,
            category,
            template,
            bind,
        }
    }

    pub fn standard(&self) -> CitationStandard {
        self.standard
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The literal template string
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Resolve all placeholder values for `record`
    pub fn bindings(
        &self,
        record: &SourceRecord,
    ) -> std::result::Result<Bindings, ConfigurationError> {
        let mismatch = || ConfigurationError::RuleMismatch {
            standard: self.standard,
            expected: self.category,
            actual: record.category(),
        };
        if record.category() != self.category {
            return Err(mismatch());
        }
        (self.bind)(record).ok_or_else(mismatch)
    }

    /// Format `record` into one citation line
    pub fn format(&self, record: &SourceRecord) -> Result<String> {
        let bindings = self.bindings(record)?;
        Ok(substitute(self.template, &bindings)?)
    }
}

/// The complete rule table of `standard`
pub fn rules_for(standard: CitationStandard) -> Vec<StyleRule> {
    match standard {
        CitationStandard::Gost => gost::rules(),
        CitationStandard::Apa => apa::rules(),
    }
}

/// "ред. от <date>" when the act is cited in an amended edition
pub(crate) fn edition_date_phrase(edition_date: Option<&str>) -> String {
    edition_date
        .map(|date| format!("ред. от {}", date))
        .unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use imcite_domain::*;

    pub fn book(edition: Option<&str>) -> SourceRecord {
        Book::new(NewBook {
            authors: "Иванов И.М.".to_string(),
            title: "Наука как искусство".to_string(),
            edition: edition.map(str::to_string),
            city: "СПб.".to_string(),
            publishing_house: "Просвещение".to_string(),
            year: Some(2020),
            pages: Some(999),
        })
        .unwrap()
        .into()
    }

    pub fn internet_resource() -> SourceRecord {
        InternetResource::new(NewInternetResource {
            article: "Наука как искусство".to_string(),
            website: "Ведомости".to_string(),
            link: "https://www.vedomosti.ru/".to_string(),
            access_date: "01.01.2021".to_string(),
        })
        .unwrap()
        .into()
    }

    pub fn articles_collection() -> SourceRecord {
        ArticlesCollection::new(NewArticlesCollection {
            authors: "Иванов И.М., Петров С.Н.".to_string(),
            article_title: "Наука как искусство".to_string(),
            collection_title: "Сборник научных трудов".to_string(),
            city: "СПб.".to_string(),
            publishing_house: "АСТ".to_string(),
            year: Some(2020),
            pages: "25-30".to_string(),
        })
        .unwrap()
        .into()
    }

    pub fn dissertation() -> SourceRecord {
        Dissertation::new(NewDissertation {
            author: "Иванов И.М.".to_string(),
            title: "Наука как искусство".to_string(),
            author_degree: "д-р. / канд.".to_string(),
            science_branch: "экон.".to_string(),
            branch_code: "01.01.01".to_string(),
            city: "СПб.".to_string(),
            year: Some(2020),
            page_count: Some(199),
        })
        .unwrap()
        .into()
    }

    pub fn normative_act(edition_date: Option<&str>) -> SourceRecord {
        NormativeAct::new(NewNormativeAct {
            act_type: "Конституция Российской Федерации".to_string(),
            title: "Наука как искусство".to_string(),
            acceptance_date: "01.01.2000".to_string(),
            number: "1234-56".to_string(),
            publication_source: "Парламентская газета".to_string(),
            publication_year: Some(2020),
            source_number: Some(5),
            article_number: Some(15),
            edition_date: edition_date.map(str::to_string),
        })
        .unwrap()
        .into()
    }
}
