//! Supported citation standards

use crate::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named citation convention selecting which style rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStandard {
    /// ГОСТ Р 7.0.5-2008
    #[default]
    Gost,
    /// American Psychological Association, 7th edition
    Apa,
}

impl CitationStandard {
    pub const ALL: [CitationStandard; 2] = [CitationStandard::Gost, CitationStandard::Apa];

    /// Upper-case short name ("GOST", "APA")
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gost => "GOST",
            Self::Apa => "APA",
        }
    }

    /// Full title of the standard
    pub fn description(&self) -> &'static str {
        match self {
            Self::Gost => "ГОСТ Р 7.0.5-2008",
            Self::Apa => "American Psychological Association",
        }
    }
}

impl fmt::Display for CitationStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CitationStandard {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|standard| standard.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigurationError::UnknownStandard(s.to_string()))
    }
}
