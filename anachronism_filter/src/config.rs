//! Filter configuration loaded from TOML.
//!
//! ```toml
//! seed_era_terms = true
//!
//! [defaults]
//! mode = "highlight"
//! case_insensitive = true
//!
//! [[terms]]
//! term = "teleporter"
//! introduced = 2300
//! replacement = "carriage"
//! ```
//!
//! Configuration is read-only. Nothing here writes it back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use era_context::MindsetSource;

use crate::analysis::{AnachronismFilter, FilterOptions};

/// Errors from loading filter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Term #{index} is blank")]
    BlankTerm { index: usize },
}

/// One extra term declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    pub term: String,
    pub introduced: i32,
    #[serde(default)]
    pub replacement: Option<String>,
}

/// Filter defaults and extra vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Options used by `analyze_with_defaults`.
    pub defaults: FilterOptions,

    /// Register the built-in era terms before the configured ones.
    pub seed_era_terms: bool,

    pub terms: Vec<TermEntry>,
}

impl FilterConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: FilterConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every configured term has text.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.terms.iter().position(|t| t.term.trim().is_empty()) {
            Some(index) => Err(ConfigError::BlankTerm { index }),
            None => Ok(()),
        }
    }
}

impl AnachronismFilter {
    /// Build a filter from configuration.
    ///
    /// Configured terms are registered after the seed terms, so they override
    /// seed entries with the same text.
    pub fn from_config(config: &FilterConfig, source: impl MindsetSource + 'static) -> Self {
        let mut filter = AnachronismFilter::new(source).with_default_options(config.defaults.clone());

        if config.seed_era_terms {
            filter.seed_era_terms();
        }
        for entry in &config.terms {
            filter.add_custom_term(&entry.term, entry.introduced, entry.replacement.as_deref());
        }

        tracing::debug!(
            terms = filter.custom_term_count(),
            mode = %config.defaults.mode,
            "Filter configured"
        );
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FilterMode;
    use crate::terms::ERA_TERMS;
    use era_context::FixedYear;

    #[test]
    fn test_empty_config() {
        let config = FilterConfig::from_toml_str("").unwrap();
        assert_eq!(config, FilterConfig::default());
        assert!(!config.seed_era_terms);
        assert!(config.defaults.case_insensitive);
    }

    #[test]
    fn test_full_config() {
        let source = r#"
            seed_era_terms = true

            [defaults]
            mode = "highlight"
            year = 1971
            case_insensitive = false

            [[terms]]
            term = "teleporter"
            introduced = 2300
            replacement = "carriage"

            [[terms]]
            term = "internet"
            introduced = 1983
        "#;

        let config = FilterConfig::from_toml_str(source).unwrap();
        assert_eq!(config.defaults.mode, FilterMode::Highlight);
        assert_eq!(config.defaults.year, Some(1971));
        assert!(!config.defaults.case_insensitive);
        assert_eq!(config.terms.len(), 2);
        assert_eq!(config.terms[0].replacement.as_deref(), Some("carriage"));
        assert!(config.terms[1].replacement.is_none());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = FilterConfig::from_toml_str("[defaults]\nmode = \"shout\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_blank_term_is_rejected() {
        let source = r#"
            [[terms]]
            term = "GPS"
            introduced = 1995

            [[terms]]
            term = "  "
            introduced = 2000
        "#;

        let result = FilterConfig::from_toml_str(source);
        assert!(matches!(result, Err(ConfigError::BlankTerm { index: 1 })));
    }

    #[test]
    fn test_filter_from_config() {
        let source = r#"
            seed_era_terms = true

            [defaults]
            mode = "replace"

            [[terms]]
            term = "internet"
            introduced = 1983
            replacement = "the network"

            [[terms]]
            term = "teleporter"
            introduced = 2300
        "#;

        let config = FilterConfig::from_toml_str(source).unwrap();
        let filter = AnachronismFilter::from_config(&config, FixedYear(1975));

        assert_eq!(filter.custom_term_count(), ERA_TERMS.len() + 1);
        assert_eq!(filter.period_term("internet"), "the network");
        assert!(filter.is_anachronism("teleporter", None));

        let result = filter.analyze_with_defaults("Step into the teleporter and browse the internet.");
        assert_eq!(result.anachronisms.len(), 2);
        assert_eq!(
            result.filtered,
            "Step into the teleporter and browse the the network."
        );
    }
}
