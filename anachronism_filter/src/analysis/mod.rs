//! Analysis - finds anachronistic terms in text and rewrites them.
//!
//! An `analyze` call works as follows:
//! 1. **Snapshot**: Read the mindset once and resolve the evaluation year
//! 2. **Vocabulary**: Union of custom terms and the mindset's unknown technology,
//!    keeping only entries that are anachronistic in that year
//! 3. **Scan**: Whole-word matches of every entry, left to right
//! 4. **Resolve**: Earliest start wins, then longest, no overlaps
//! 5. **Rewrite**: Replay the text, substituting each match per the mode

mod matcher;
mod options;
mod report;

pub use matcher::*;
pub use options::*;
pub use report::*;

use std::collections::HashSet;

use era_context::{FixedYear, MindsetSnapshot, MindsetSource, NoMindset};

use crate::terms::{fold_term, format_year, introduction_reason, CustomTerm, TermTable, ERA_TERMS};

/// A vocabulary entry for one analysis call.
#[derive(Debug, Clone)]
struct VocabularyEntry<'a> {
    text: &'a str,
    origin: MatchOrigin,
    replacement: Option<&'a str>,
}

/// Detects and rewrites anachronisms.
///
/// Custom terms take precedence over the mindset's unknown-technology list,
/// which lets a story "discover" a technology at a specific point even if the
/// era lists it as unknown.
pub struct AnachronismFilter {
    terms: TermTable,
    source: Box<dyn MindsetSource>,
    defaults: FilterOptions,
    matchers: MatcherCache,
}

impl AnachronismFilter {
    /// Create a filter that reads the evaluation year from `source`.
    pub fn new(source: impl MindsetSource + 'static) -> Self {
        Self {
            terms: TermTable::new(),
            source: Box::new(source),
            defaults: FilterOptions::default(),
            matchers: MatcherCache::new(),
        }
    }

    /// Create a filter with no mindset. Only explicit years apply.
    pub fn detached() -> Self {
        Self::new(NoMindset)
    }

    /// Set the options used by `analyze_with_defaults`.
    pub fn with_default_options(mut self, options: FilterOptions) -> Self {
        self.defaults = options;
        self
    }

    pub fn default_options(&self) -> &FilterOptions {
        &self.defaults
    }

    /// Register a custom term, replacing any entry with the same folded text.
    pub fn add_custom_term(&mut self, term: &str, introduced_year: i32, replacement: Option<&str>) {
        let mut entry = CustomTerm::new(term, introduced_year);
        entry.replacement = replacement.map(str::to_string);

        tracing::trace!(term, introduced_year, "Custom term registered");
        self.terms.insert(entry);
    }

    /// Remove a single custom term. Returns false if it was not registered.
    pub fn remove_custom_term(&mut self, term: &str) -> bool {
        self.terms.remove(term).is_some()
    }

    /// Remove every custom term. The mindset is untouched.
    pub fn clear_custom_terms(&mut self) {
        self.terms.clear();
        self.matchers.clear();
    }

    /// Register every built-in era term.
    pub fn seed_era_terms(&mut self) {
        for (term, year, replacement) in ERA_TERMS {
            self.add_custom_term(term, *year, *replacement);
        }
    }

    /// Look up a custom term case-insensitively.
    pub fn custom_term(&self, term: &str) -> Option<&CustomTerm> {
        self.terms.get(term)
    }

    pub fn custom_term_count(&self) -> usize {
        self.terms.len()
    }

    /// Check if `term` is anachronistic.
    ///
    /// The year is `year` if given, else the mindset year. A custom term is
    /// compared against that year and is never anachronistic when no year is
    /// known. Otherwise membership in the mindset's unknown technology decides.
    pub fn is_anachronism(&self, term: &str, year: Option<i32>) -> bool {
        let snapshot = self.source.snapshot();
        let year = year.or(snapshot.as_ref().map(|s| s.year));

        if let Some(custom) = self.terms.get(term) {
            return year.is_some_and(|y| custom.is_anachronism_in(y));
        }

        snapshot.is_some_and(|s| s.is_unknown(term))
    }

    /// The registered period-appropriate replacement, or `term` itself.
    pub fn period_term(&self, term: &str) -> String {
        self.terms
            .get(term)
            .and_then(|t| t.replacement.clone())
            .unwrap_or_else(|| term.to_string())
    }

    /// Analyze with the filter's default options.
    pub fn analyze_with_defaults(&self, text: &str) -> AnalysisResult {
        self.analyze(text, &self.defaults)
    }

    /// Find every anachronism in `text` and rewrite it per `options.mode`.
    pub fn analyze(&self, text: &str, options: &FilterOptions) -> AnalysisResult {
        if text.is_empty() {
            return AnalysisResult::clean(text);
        }

        let snapshot = self.source.snapshot();
        let year = options.year.or(snapshot.as_ref().map(|s| s.year));
        let vocabulary = self.vocabulary(year, snapshot.as_ref(), options.case_insensitive);

        let mut candidates = Vec::new();
        for (index, entry) in vocabulary.iter().enumerate() {
            candidates.extend(
                self.matchers
                    .find_spans(entry.text, options.case_insensitive, text)
                    .into_iter()
                    .map(|span| Candidate { span, entry: index }),
            );
        }

        let selected = select_matches(candidates);
        if selected.is_empty() {
            return AnalysisResult::clean(text);
        }

        let mut offsets = CharOffsets::new(text);
        let mut filtered = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut anachronisms = Vec::with_capacity(selected.len());

        for Candidate { span, entry } in selected {
            let entry = &vocabulary[entry];
            let matched = &text[span.clone()];

            filtered.push_str(&text[cursor..span.start]);
            match options.mode.substitute(matched, entry.replacement) {
                Some(substitute) => filtered.push_str(&substitute),
                None => filtered.push_str(matched),
            }
            cursor = span.end;

            anachronisms.push(AnachronismMatch {
                term: matched.to_string(),
                position: offsets.advance_to(span.start),
                reason: reason(matched, entry, year),
                origin: entry.origin,
                replacement: entry.replacement.map(str::to_string),
                span,
            });
        }
        filtered.push_str(&text[cursor..]);

        tracing::debug!(
            year = ?year,
            mode = %options.mode,
            matches = anachronisms.len(),
            "Anachronisms found"
        );

        AnalysisResult {
            has_anachronisms: true,
            anachronisms,
            filtered,
        }
    }

    /// Build the anachronistic vocabulary for one call: custom terms first,
    /// then unknown technology not shadowed by a custom term.
    ///
    /// Shadowing always compares folded text. Duplicate unknown-technology
    /// entries collapse by folded text only when matching ignores case.
    fn vocabulary<'a>(
        &'a self,
        year: Option<i32>,
        snapshot: Option<&'a MindsetSnapshot>,
        case_insensitive: bool,
    ) -> Vec<VocabularyEntry<'a>> {
        let mut vocabulary: Vec<_> = self
            .terms
            .iter()
            .filter(|t| year.is_some_and(|y| t.is_anachronism_in(y)))
            .map(|t| VocabularyEntry {
                text: &t.term,
                origin: MatchOrigin::CustomTerm {
                    introduced_year: t.introduced_year,
                },
                replacement: t.replacement.as_deref(),
            })
            .collect();

        if let Some(snapshot) = snapshot {
            let mut seen = HashSet::new();
            for term in &snapshot.unknown_technology {
                if self.terms.contains(term) {
                    continue;
                }
                let key = if case_insensitive {
                    fold_term(term)
                } else {
                    term.clone()
                };
                if !seen.insert(key) {
                    continue;
                }
                vocabulary.push(VocabularyEntry {
                    text: term,
                    origin: MatchOrigin::UnknownTechnology,
                    replacement: None,
                });
            }
        }

        vocabulary
    }
}

fn reason(matched: &str, entry: &VocabularyEntry<'_>, year: Option<i32>) -> String {
    match entry.origin {
        MatchOrigin::CustomTerm { introduced_year } => introduction_reason(matched, introduced_year),
        MatchOrigin::UnknownTechnology => match year {
            Some(y) => format!("\"{}\" is unknown technology in {}", matched, format_year(y)),
            None => format!("\"{}\" is unknown technology in this era", matched),
        },
    }
}

impl std::fmt::Debug for AnachronismFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnachronismFilter")
            .field("terms", &self.terms)
            .field("defaults", &self.defaults)
            .field("matchers", &self.matchers.len())
            .finish_non_exhaustive()
    }
}

/// Create a filter pinned to `year`, seeded with the built-in era terms.
///
/// Seeded terms go through `add_custom_term`, so they can be overridden or
/// cleared like any other custom term.
pub fn create_era_filter(year: i32) -> AnachronismFilter {
    let mut filter = AnachronismFilter::new(FixedYear(year));
    filter.seed_era_terms();
    filter
}
