//! Formatting engine: one pass over all records, then a stable sort

use crate::{Result, StyleRegistry};
use imcite_domain::{Category, SourceRecord};
use tracing::info;

/// One formatted citation line and the category that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedEntry {
    pub category: Category,
    pub text: String,
}

/// Applies a standard's registry to heterogeneous records
#[derive(Debug, Clone, Copy)]
pub struct FormattingEngine<'a> {
    registry: &'a StyleRegistry,
}

impl<'a> FormattingEngine<'a> {
    pub fn new(registry: &'a StyleRegistry) -> Self {
        Self { registry }
    }

    /// Format a single record with the rule bound to its category
    pub fn format_entry(&self, record: &SourceRecord) -> Result<FormattedEntry> {
        let category = record.category();
        let rule = self.registry.rule_for(category)?;
        info!(
            standard = %self.registry.standard(),
            %category,
            label = record.label(),
            "formatting source"
        );
        let text = rule.format(record)?;
        Ok(FormattedEntry { category, text })
    }

    /// Format every record and sort by the formatted text
    ///
    /// Ordering is plain code-point order of the text; equal lines keep
    /// their input order. The first failing record aborts the run.
    pub fn format_entries(&self, records: &[SourceRecord]) -> Result<Vec<FormattedEntry>> {
        let mut entries = records
            .iter()
            .map(|record| self.format_entry(record))
            .collect::<Result<Vec<_>>>()?;
        entries.sort_by(|a, b| a.text.cmp(&b.text));
        info!(count = entries.len(), "bibliography formatted");
        Ok(entries)
    }

    /// Format and sort, returning only the citation lines
    pub fn format(&self, records: &[SourceRecord]) -> Result<Vec<String>> {
        Ok(self
            .format_entries(records)?
            .into_iter()
            .map(|entry| entry.text)
            .collect())
    }
}

/// Format `records` with `registry` into a sorted list of citation lines
pub fn format_bibliography(
    records: &[SourceRecord],
    registry: &StyleRegistry,
) -> Result<Vec<String>> {
    FormattingEngine::new(registry).format(records)
}
