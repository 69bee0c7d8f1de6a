use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Deserialize;

use crate::UnlockError;

/// Read-only lookup of a course's raw prerequisite text.
///
/// The only way the evaluator reaches the rule database, so tests can swap in
/// a handful of synthetic rules.
pub trait RuleSource {
    /// Raw rule text for `identifier`, or `None` if the course is unknown.
    fn lookup(&self, identifier: &str) -> Option<&str>;
}

impl RuleSource for HashMap<String, String> {
    fn lookup(&self, identifier: &str) -> Option<&str> {
        self.get(identifier).map(String::as_str)
    }
}

impl RuleSource for BTreeMap<String, String> {
    fn lookup(&self, identifier: &str) -> Option<&str> {
        self.get(identifier).map(String::as_str)
    }
}

impl<T: RuleSource + ?Sized> RuleSource for &T {
    fn lookup(&self, identifier: &str) -> Option<&str> {
        (**self).lookup(identifier)
    }
}

impl<T: RuleSource + ?Sized> RuleSource for Arc<T> {
    fn lookup(&self, identifier: &str) -> Option<&str> {
        (**self).lookup(identifier)
    }
}

/// Immutable map from course identifier to prerequisite text.
///
/// Built once, typically from a JSON object such as
/// `{"COMP1521": "Prerequisite: COMP1511"}`, and never modified afterwards.
/// Identifiers iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RuleBook {
    rules: BTreeMap<String, String>,
}

impl RuleBook {
    /// Parse a JSON object mapping identifiers to rule text.
    ///
    /// # Errors
    ///
    /// Returns [`UnlockError::Json`] if the input is not such an object.
    pub fn from_json(input: &str) -> Result<Self, UnlockError> {
        let book: Self = serde_json::from_str(input)?;
        log::debug!("loaded {} prerequisite rules", book.len());
        Ok(book)
    }

    /// Read a JSON rule file.
    ///
    /// # Errors
    ///
    /// Returns [`UnlockError`] on I/O or JSON failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, UnlockError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Course identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl RuleSource for RuleBook {
    fn lookup(&self, identifier: &str) -> Option<&str> {
        self.rules.get(identifier).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RuleBook {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(id, rule)| (id.into(), rule.into()))
                .collect(),
        }
    }
}
