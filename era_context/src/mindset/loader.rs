//! Loading mindsets from story content (JSON) and local configuration (TOML).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::MindsetContext;

/// Errors from loading mindset content.
#[derive(Debug, Error)]
pub enum MindsetLoadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Duplicate era year: {0}")]
    DuplicateYear(i32),
}

impl MindsetContext {
    /// Parse a single mindset from a JSON document.
    ///
    /// A fresh ID is generated when the document does not carry one.
    pub fn from_json_str(json: &str) -> Result<Self, MindsetLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a single mindset from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, MindsetLoadError> {
        Ok(toml::from_str(source)?)
    }
}

/// An ordered set of eras a narrative can move through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EraCatalog {
    #[serde(default)]
    eras: Vec<MindsetContext>,
}

impl EraCatalog {
    /// Build a catalog, sorting eras by year. Two eras may not share a year.
    pub fn new(mut eras: Vec<MindsetContext>) -> Result<Self, MindsetLoadError> {
        eras.sort_by_key(|m| m.year);
        if let Some(pair) = eras.windows(2).find(|w| w[0].year == w[1].year) {
            return Err(MindsetLoadError::DuplicateYear(pair[0].year));
        }
        Ok(Self { eras })
    }

    /// Parse a catalog from a JSON document of the form `{"eras": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, MindsetLoadError> {
        let raw: EraCatalog = serde_json::from_str(json)?;
        Self::new(raw.eras)
    }

    /// Parse a catalog from a TOML document with `[[eras]]` tables.
    pub fn from_toml_str(source: &str) -> Result<Self, MindsetLoadError> {
        let raw: EraCatalog = toml::from_str(source)?;
        Self::new(raw.eras)
    }

    /// The era in effect at `year`: the latest era starting at or before it.
    pub fn era_for_year(&self, year: i32) -> Option<&MindsetContext> {
        self.eras.iter().rev().find(|m| m.year <= year)
    }

    /// Iterate over eras in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &MindsetContext> {
        self.eras.iter()
    }

    pub fn len(&self) -> usize {
        self.eras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }
}
