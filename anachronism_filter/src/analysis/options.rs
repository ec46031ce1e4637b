//! Analysis options.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// What to do with each anachronism found in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Find matches, leave the text unchanged.
    #[default]
    Analyze,
    /// Wrap each match as `[ANACHRONISM: term]`.
    Flag,
    /// Substitute the registered period term, if any.
    Replace,
    /// Substitute the placeholder `[...]`.
    Remove,
    /// Wrap each match in double asterisks.
    Highlight,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Analyze => "analyze",
            FilterMode::Flag => "flag",
            FilterMode::Replace => "replace",
            FilterMode::Remove => "remove",
            FilterMode::Highlight => "highlight",
        }
    }

    /// Text to put in place of a match.
    ///
    /// `matched` is the source text with its original casing. Returns `None`
    /// when the span should be left as it is.
    pub fn substitute(&self, matched: &str, replacement: Option<&str>) -> Option<String> {
        match self {
            FilterMode::Analyze => None,
            FilterMode::Flag => Some(format!("[ANACHRONISM: {}]", matched)),
            FilterMode::Replace => replacement.map(str::to_string),
            FilterMode::Remove => Some(REMOVED_PLACEHOLDER.to_string()),
            FilterMode::Highlight => Some(format!("**{}**", matched)),
        }
    }
}

/// Placeholder left behind in `remove` mode.
pub const REMOVED_PLACEHOLDER: &str = "[...]";

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for an unrecognized filter mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for FilterMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analyze" => Ok(FilterMode::Analyze),
            "flag" => Ok(FilterMode::Flag),
            "replace" => Ok(FilterMode::Replace),
            "remove" => Ok(FilterMode::Remove),
            "highlight" => Ok(FilterMode::Highlight),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Options for a single `analyze` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub mode: FilterMode,

    /// Evaluation year. Falls back to the mindset year when absent.
    pub year: Option<i32>,

    /// Ignore letter case on both the vocabulary and the text.
    pub case_insensitive: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            mode: FilterMode::Analyze,
            year: None,
            case_insensitive: true,
        }
    }
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with the given mode and all other defaults.
    pub fn mode(mode: FilterMode) -> Self {
        Self::default().with_mode(mode)
    }

    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Match exact case only.
    pub fn case_sensitive(mut self) -> Self {
        self.case_insensitive = false;
        self
    }
}
