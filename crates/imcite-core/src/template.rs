//! `$name` placeholder substitution
//!
//! Placeholders follow the `$identifier` form, identifier being
//! `[_A-Za-z][_A-Za-z0-9]*`. `$$` yields a literal `$`. Every other `$`
//! is an invalid placeholder.

use crate::SubstitutionError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLACEHOLDER: Regex =
        Regex::new(r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|(?P<invalid>))")
            .unwrap();
}

/// Named values for one substitution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: Vec<(&'static str, String)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: bind `name` to the display form of `value`
    ///
    /// Rebinding a name replaces the earlier value.
    pub fn bind(mut self, name: &'static str, value: impl ToString) -> Self {
        let value = value.to_string();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Replace every placeholder in `template` with its binding
///
/// Unused bindings are ignored. A placeholder with no binding, or a
/// malformed one, fails the whole substitution.
pub fn substitute(template: &str, bindings: &Bindings) -> Result<String, SubstitutionError> {
    let mut out = String::with_capacity(template.len() * 2);
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);

        if caps.name("escaped").is_some() {
            out.push('$');
        } else if let Some(name) = caps.name("named") {
            let value = bindings.get(name.as_str()).ok_or_else(|| {
                SubstitutionError::UnresolvedPlaceholder {
                    name: name.as_str().to_string(),
                    template: template.to_string(),
                }
            })?;
            out.push_str(value);
        } else {
            return Err(SubstitutionError::InvalidPlaceholder {
                position: whole.start(),
                template: template.to_string(),
            });
        }

        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

/// Names of all placeholders in `template`, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.name("named"))
        .map(|m| m.as_str())
        .collect()
}
