//! Custom term definitions.

use serde::{Deserialize, Serialize};

/// A term that did not exist before a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTerm {
    /// The term as it was registered, original casing preserved.
    pub term: String,

    /// Year the term came into use. Negative years are BC.
    pub introduced_year: i32,

    /// Period-appropriate substitute, if one exists.
    pub replacement: Option<String>,
}

impl CustomTerm {
    /// Create a new custom term with no replacement.
    pub fn new(term: impl Into<String>, introduced_year: i32) -> Self {
        Self {
            term: term.into(),
            introduced_year,
            replacement: None,
        }
    }

    /// Set the period-appropriate replacement.
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    /// The case-folded lookup key.
    pub fn key(&self) -> String {
        fold_term(&self.term)
    }

    /// Check if the term is out of place in the given year.
    pub fn is_anachronism_in(&self, year: i32) -> bool {
        year < self.introduced_year
    }

    /// Human-readable explanation of why the term is out of place.
    pub fn reason(&self, matched: &str) -> String {
        introduction_reason(matched, self.introduced_year)
    }
}

/// Explain that `matched` did not exist before `introduced_year`.
pub fn introduction_reason(matched: &str, introduced_year: i32) -> String {
    format!(
        "\"{}\" was not introduced until {}",
        matched,
        format_year(introduced_year)
    )
}

/// Fold a term to its canonical lookup key.
pub fn fold_term(term: &str) -> String {
    term.to_lowercase()
}

/// Render a year, using a BC suffix for negative years.
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} BC", year.unsigned_abs())
    } else {
        year.to_string()
    }
}
