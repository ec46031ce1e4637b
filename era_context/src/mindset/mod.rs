//! Mindset definitions - what a person living in a given year knows.

mod loader;

pub use loader::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for mindset contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MindsetId(pub Uuid);

impl MindsetId {
    /// Create a new random mindset ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for MindsetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MindsetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How people of the era see their own technology. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoricalPerspective {
    /// What counts as cutting-edge in this era.
    #[serde(default)]
    pub considered_modern: String,

    /// What people of this era would consider impossible.
    #[serde(default)]
    pub considered_impossible: String,
}

impl HistoricalPerspective {
    pub fn new(considered_modern: impl Into<String>, considered_impossible: impl Into<String>) -> Self {
        Self {
            considered_modern: considered_modern.into(),
            considered_impossible: considered_impossible.into(),
        }
    }
}

/// The point-in-time "mindset" of a narrative era.
///
/// `known_technology` and `unknown_technology` are not required to be
/// disjoint. Consumers treat membership in `unknown_technology` as an
/// unconditional anachronism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindsetContext {
    #[serde(default)]
    pub id: MindsetId,

    /// The "current" narrative year. Negative years are BC.
    pub year: i32,

    /// Display label for the era (e.g. "The Microprocessor Dawn").
    #[serde(default)]
    pub era: Option<String>,

    /// Technology available and expected in this era.
    #[serde(default)]
    pub known_technology: Vec<String>,

    /// Technology that must never appear unfiltered in this era.
    #[serde(default)]
    pub unknown_technology: Vec<String>,

    #[serde(default)]
    pub historical_perspective: HistoricalPerspective,
}

impl MindsetContext {
    /// Create a new mindset for the given year.
    pub fn new(year: i32) -> Self {
        Self {
            id: MindsetId::new(),
            year,
            era: None,
            known_technology: Vec::new(),
            unknown_technology: Vec::new(),
            historical_perspective: HistoricalPerspective::default(),
        }
    }

    /// Set the era label.
    pub fn with_era(mut self, era: impl Into<String>) -> Self {
        self.era = Some(era.into());
        self
    }

    /// Add a technology known in this era.
    pub fn with_known(mut self, term: impl Into<String>) -> Self {
        self.known_technology.push(term.into());
        self
    }

    /// Add multiple technologies known in this era.
    pub fn with_known_technology<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_technology.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Add a technology unknown in this era.
    pub fn with_unknown(mut self, term: impl Into<String>) -> Self {
        self.unknown_technology.push(term.into());
        self
    }

    /// Add multiple technologies unknown in this era.
    pub fn with_unknown_technology<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unknown_technology.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Set the historical perspective.
    pub fn with_perspective(mut self, perspective: HistoricalPerspective) -> Self {
        self.historical_perspective = perspective;
        self
    }

    /// Check (case-insensitively) whether a technology is known in this era.
    pub fn knows(&self, term: &str) -> bool {
        contains_folded(&self.known_technology, term)
    }

    /// Check (case-insensitively) whether a technology is unknown in this era.
    pub fn is_unknown(&self, term: &str) -> bool {
        contains_folded(&self.unknown_technology, term)
    }

    /// Capture the data a text filter needs, detached from this context.
    pub fn snapshot(&self) -> MindsetSnapshot {
        MindsetSnapshot {
            year: self.year,
            unknown_technology: self.unknown_technology.clone(),
        }
    }
}

fn contains_folded(terms: &[String], term: &str) -> bool {
    let folded = term.to_lowercase();
    terms.iter().any(|t| t.to_lowercase() == folded)
}

/// An immutable copy of the year and unknown-technology vocabulary.
///
/// Taken once at the start of an operation so that a context swap cannot
/// change the year halfway through a scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MindsetSnapshot {
    pub year: i32,
    pub unknown_technology: Vec<String>,
}

impl MindsetSnapshot {
    /// A snapshot carrying only a year.
    pub fn year_only(year: i32) -> Self {
        Self {
            year,
            unknown_technology: Vec::new(),
        }
    }

    /// Check (case-insensitively) whether a term is unknown technology.
    pub fn is_unknown(&self, term: &str) -> bool {
        contains_folded(&self.unknown_technology, term)
    }
}

impl From<&MindsetContext> for MindsetSnapshot {
    fn from(context: &MindsetContext) -> Self {
        context.snapshot()
    }
}
