//! Category → style rule lookup for one citation standard

use std::collections::HashMap;

use crate::styles::{self, StyleRule};
use crate::{CitationStandard, ConfigurationError};
use imcite_domain::Category;
use tracing::debug;

/// Complete, read-only rule table for one standard
///
/// Construction guarantees exactly one rule per category, all belonging
/// to the registry's standard. Built once per run and shared by reference.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    standard: CitationStandard,
    rules: HashMap<Category, StyleRule>,
}

impl StyleRegistry {
    /// Build the registry from the standard's built-in rule table
    pub fn for_standard(standard: CitationStandard) -> Result<Self, ConfigurationError> {
        Self::new(standard, styles::rules_for(standard))
    }

    /// Build a registry from an explicit rule list
    ///
    /// Fails if a rule belongs to another standard, if a category is
    /// registered twice, or if any category is left without a rule.
    pub fn new(
        standard: CitationStandard,
        rules: impl IntoIterator<Item = StyleRule>,
    ) -> Result<Self, ConfigurationError> {
        let mut table = HashMap::new();
        for rule in rules {
            if rule.standard() != standard {
                return Err(ConfigurationError::ForeignRule {
                    standard,
                    rule_standard: rule.standard(),
                    category: rule.category(),
                });
            }
            if table.insert(rule.category(), rule).is_some() {
                return Err(ConfigurationError::DuplicateRule {
                    standard,
                    category: rule.category(),
                });
            }
        }

        if let Some(category) = Category::ALL.into_iter().find(|c| !table.contains_key(c)) {
            return Err(ConfigurationError::MissingRule { standard, category });
        }

        debug!(%standard, rules = table.len(), "style registry ready");
        Ok(Self {
            standard,
            rules: table,
        })
    }

    pub fn standard(&self) -> CitationStandard {
        self.standard
    }

    /// Rule bound to `category`
    pub fn rule_for(&self, category: Category) -> Result<&StyleRule, ConfigurationError> {
        self.rules
            .get(&category)
            .ok_or(ConfigurationError::MissingRule {
                standard: self.standard,
                category,
            })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registry that skips the completeness check, for exercising lookup failures
    #[cfg(test)]
    pub(crate) fn incomplete(
        standard: CitationStandard,
        rules: impl IntoIterator<Item = StyleRule>,
    ) -> Self {
        Self {
            standard,
            rules: rules.into_iter().map(|r| (r.category(), r)).collect(),
        }
    }
}
