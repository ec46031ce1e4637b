//! Term table - case-folded storage of custom terms.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{fold_term, CustomTerm};

/// Custom terms keyed by their case-folded text.
///
/// At most one entry exists per folded key. Re-adding a term replaces the
/// previous entry entirely. Iteration is in key order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermTable {
    terms: BTreeMap<String, CustomTerm>,
}

impl TermTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite a term. Returns the entry it replaced, if any.
    pub fn insert(&mut self, term: CustomTerm) -> Option<CustomTerm> {
        self.terms.insert(term.key(), term)
    }

    /// Look up a term case-insensitively.
    pub fn get(&self, term: &str) -> Option<&CustomTerm> {
        self.terms.get(&fold_term(term))
    }

    /// Check if a term is registered.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(&fold_term(term))
    }

    /// Remove a term. Returns the removed entry, if any.
    pub fn remove(&mut self, term: &str) -> Option<CustomTerm> {
        self.terms.remove(&fold_term(term))
    }

    /// Remove every term.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Iterate over all terms in key order.
    pub fn iter(&self) -> impl Iterator<Item = &CustomTerm> {
        self.terms.values()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
