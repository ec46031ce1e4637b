//! Whole-word term matching.

use regex::{Regex, RegexBuilder};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::Range;

/// Matches one term's literal text, delimited by word boundaries.
///
/// The term is escaped before it is embedded in the pattern, so characters
/// like `+`, `.` or `(` match themselves. Boundaries are the regex `\b`
/// assertion: a term that starts or ends with a non-word character (such as
/// "C++") only matches where a word character follows it.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    pattern: Regex,
}

impl TermMatcher {
    /// Compile a matcher for `term`. Blank terms never match.
    pub fn compile(term: &str, case_insensitive: bool) -> Option<Self> {
        if term.trim().is_empty() {
            return None;
        }

        let source = format!(r"\b{}\b", regex::escape(term));
        match RegexBuilder::new(&source)
            .case_insensitive(case_insensitive)
            .build()
        {
            Ok(pattern) => Some(Self { pattern }),
            Err(error) => {
                tracing::warn!(term, %error, "Skipping term that does not compile");
                None
            }
        }
    }

    /// Byte spans of every non-overlapping match, left to right.
    pub fn find_spans<'t>(&'t self, text: &'t str) -> impl Iterator<Item = Range<usize>> + 't {
        self.pattern.find_iter(text).map(|m| m.range())
    }
}

/// Compiled matchers keyed by exact term text, one map per case setting.
///
/// Terms that fail to compile are remembered as `None` so they are not
/// retried on every call.
#[derive(Debug, Default)]
pub struct MatcherCache {
    exact: RefCell<HashMap<String, Option<TermMatcher>>>,
    folded: RefCell<HashMap<String, Option<TermMatcher>>>,
}

impl MatcherCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte spans of every match of `term` in `text`, compiling on first use.
    pub fn find_spans(&self, term: &str, case_insensitive: bool, text: &str) -> Vec<Range<usize>> {
        let cell = if case_insensitive { &self.folded } else { &self.exact };
        let mut matchers = cell.borrow_mut();

        if !matchers.contains_key(term) {
            matchers.insert(term.to_string(), TermMatcher::compile(term, case_insensitive));
        }

        matchers
            .get(term)
            .and_then(Option::as_ref)
            .map(|m| m.find_spans(text).collect())
            .unwrap_or_default()
    }

    /// Number of cached entries across both case settings.
    pub fn len(&self) -> usize {
        self.exact.borrow().len() + self.folded.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.exact.borrow_mut().clear();
        self.folded.borrow_mut().clear();
    }
}

/// A match found by one vocabulary entry, before overlap resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub span: Range<usize>,
    /// Index of the vocabulary entry that produced the match.
    pub entry: usize,
}

impl Candidate {
    fn len(&self) -> usize {
        self.span.end - self.span.start
    }
}

/// Resolve candidates from every vocabulary entry into one non-overlapping,
/// left-to-right list.
///
/// The earliest-starting candidate wins; at the same start the longest wins;
/// equal spans go to the lower entry index.
pub fn select_matches(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| a.entry.cmp(&b.entry))
    });

    let mut selected = Vec::new();
    let mut cursor = 0;

    for candidate in candidates {
        if candidate.span.start < cursor || candidate.len() == 0 {
            continue;
        }
        cursor = candidate.span.end;
        selected.push(candidate);
    }

    selected
}

/// Converts increasing byte offsets into character offsets in one pass.
pub struct CharOffsets<'t> {
    text: &'t str,
    byte: usize,
    chars: usize,
}

impl<'t> CharOffsets<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Character offset of `byte`. Offsets must be requested in increasing order.
    pub fn advance_to(&mut self, byte: usize) -> usize {
        if byte > self.byte {
            self.chars += self.text[self.byte..byte].chars().count();
            self.byte = byte;
        }
        self.chars
    }
}
