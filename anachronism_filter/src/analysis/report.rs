//! Analysis results.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Which vocabulary a match came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOrigin {
    /// A custom term evaluated against its introduction year.
    CustomTerm { introduced_year: i32 },
    /// The active mindset's unknown technology. Always an anachronism.
    UnknownTechnology,
}

/// One anachronistic term found in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnachronismMatch {
    /// The matched substring, with its casing in the source text.
    pub term: String,

    /// Zero-based character offset of the match start.
    pub position: usize,

    /// Byte range of the match in the source text.
    pub span: Range<usize>,

    /// Human-readable explanation.
    pub reason: String,

    pub origin: MatchOrigin,

    /// Period-appropriate substitute, when one is registered.
    pub replacement: Option<String>,
}

impl AnachronismMatch {
    /// Year the matched term was introduced, when known.
    pub fn introduced_year(&self) -> Option<i32> {
        match self.origin {
            MatchOrigin::CustomTerm { introduced_year } => Some(introduced_year),
            MatchOrigin::UnknownTechnology => None,
        }
    }
}

/// The outcome of analyzing one block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub has_anachronisms: bool,

    /// Matches in left-to-right order.
    pub anachronisms: Vec<AnachronismMatch>,

    /// The text after the requested rewrite.
    pub filtered: String,
}

impl AnalysisResult {
    /// A result with no matches, passing the text through unchanged.
    pub fn clean(text: &str) -> Self {
        Self {
            has_anachronisms: false,
            anachronisms: Vec::new(),
            filtered: text.to_string(),
        }
    }

    /// Distinct matched terms, case-folded, in order of first appearance.
    pub fn distinct_terms(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for m in &self.anachronisms {
            let folded = m.term.to_lowercase();
            if !seen.contains(&folded) {
                seen.push(folded);
            }
        }
        seen
    }

    /// Format the matches as a short report, one line per match.
    pub fn to_report_string(&self) -> String {
        if !self.has_anachronisms {
            return "No anachronisms found.\n".to_string();
        }

        let mut report = String::new();
        report.push_str(&format!("{} anachronism(s) found:\n", self.anachronisms.len()));
        for m in &self.anachronisms {
            report.push_str(&format!("- [{}] {}", m.position, m.reason));
            if let Some(replacement) = &m.replacement {
                report.push_str(&format!(" (try \"{}\")", replacement));
            }
            report.push('\n');
        }
        report
    }
}
