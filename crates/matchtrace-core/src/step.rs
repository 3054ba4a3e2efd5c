// Step and trace record types shared by all three generators.

use std::sync::Arc;

use serde::Serialize;

use crate::tables::BadCharTable;

/// Classifies the event a [`Step`] records.
///
/// Renderers that only see serialized steps detect the event kind from
/// keywords in the explanation text ("match", "mismatch", "comparing",
/// "shift by N positions"); Rust consumers get the same information as a
/// typed tag. The kind is therefore not serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// First step of a run, before any comparison.
    Init,
    /// A single character comparison whose outcome follows in later steps.
    Comparison,
    /// A character comparison that succeeded (Horspool narrates these
    /// as one combined compare-and-match step).
    Match,
    /// A failed comparison, including KMP failure-function fallbacks.
    Mismatch,
    /// A failed comparison that also moved the window by a bad-character
    /// shift (Horspool).
    Shift,
    /// Terminal step: the whole pattern matched.
    Found,
    /// Terminal step: every candidate was exhausted without a match.
    NotFound,
    /// Terminal step of a degenerate run (empty text, empty pattern, or
    /// pattern longer than text); the only step of its trace.
    Degenerate,
}

impl StepKind {
    /// Whether a step of this kind ends the trace.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepKind::Found | StepKind::NotFound | StepKind::Degenerate)
    }
}

/// Outcome of a completed search, carried by the terminal step only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Whether the pattern occurs in the text.
    pub found: bool,
    /// Start index of the leftmost occurrence, or -1 when not found.
    pub position: isize,
}

impl SearchResult {
    /// Result for a match starting at `position`.
    pub fn found(position: usize) -> Self {
        Self {
            found: true,
            position: position as isize,
        }
    }

    /// Result for an exhausted or degenerate search.
    pub fn not_found() -> Self {
        Self {
            found: false,
            position: -1,
        }
    }
}

/// One recorded moment of an algorithm run.
///
/// A trace is an ordered `Vec<Step>`; exactly one step (the last) carries
/// a [`SearchResult`]. The auxiliary tables are built once per run and
/// shared into every step through an `Arc`, so each step stays
/// self-contained for display without duplicating the table.
///
/// Serialized field names are camelCase and absent optional fields are
/// omitted, matching what step renderers expect.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Typed event tag; redundant with the explanation text for Rust
    /// consumers, not part of the serialized record.
    #[serde(skip)]
    pub kind: StepKind,

    /// Window start (Brute Force, Horspool) or text scan position (KMP).
    pub text_index: usize,

    /// Pattern offset involved in the comparison.
    pub pattern_index: usize,

    /// Text positions confirmed as part of a completed match so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<usize>>,

    /// Bad-character table; present in every Horspool step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_char_table: Option<Arc<BadCharTable>>,

    /// Failure function (LPS array); present in every KMP step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_function: Option<Arc<Vec<usize>>>,

    /// Human-readable narration of the event. Keyword structure
    /// ("Comparing ...", "Mismatch ...", "position N", "shift by N
    /// positions") is a contract with renderers and must be preserved.
    pub explanation: String,

    /// Present only on the terminal step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SearchResult>,
}

impl Step {
    /// Create a step with no matches, tables, or result attached.
    pub fn new(kind: StepKind, text_index: usize, pattern_index: usize, explanation: impl Into<String>) -> Self {
        Self {
            kind,
            text_index,
            pattern_index,
            matches: None,
            bad_char_table: None,
            failure_function: None,
            explanation: explanation.into(),
            result: None,
        }
    }

    /// Attach the matched-positions snapshot.
    pub fn with_matches(mut self, matches: Vec<usize>) -> Self {
        self.matches = Some(matches);
        self
    }

    /// Attach the shared bad-character table.
    pub fn with_bad_char_table(mut self, table: Arc<BadCharTable>) -> Self {
        self.bad_char_table = Some(table);
        self
    }

    /// Attach the shared failure function.
    pub fn with_failure_function(mut self, lps: Arc<Vec<usize>>) -> Self {
        self.failure_function = Some(lps);
        self
    }

    /// Mark this step as the terminal step carrying the search outcome.
    pub fn with_result(mut self, result: SearchResult) -> Self {
        self.result = Some(result);
        self
    }

    /// Whether this step concludes its trace.
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::build_bad_char_table;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn new_step_is_bare() {
        let step = Step::new(StepKind::Init, 0, 0, "Initialized.");
        assert_eq!(step.kind, StepKind::Init);
        assert!(step.matches.is_none());
        assert!(step.bad_char_table.is_none());
        assert!(step.failure_function.is_none());
        assert!(step.result.is_none());
        assert!(!step.is_terminal());
    }

    #[test]
    fn with_result_makes_terminal() {
        let step = Step::new(StepKind::Found, 3, 0, "Found a match at position 3!")
            .with_result(SearchResult::found(3));
        assert!(step.is_terminal());
        assert_eq!(step.result.unwrap().position, 3);
    }

    #[test]
    fn search_result_constructors() {
        let hit = SearchResult::found(6);
        assert!(hit.found);
        assert_eq!(hit.position, 6);

        let miss = SearchResult::not_found();
        assert!(!miss.found);
        assert_eq!(miss.position, -1);
    }

    #[test]
    fn terminal_kinds() {
        assert!(StepKind::Found.is_terminal());
        assert!(StepKind::NotFound.is_terminal());
        assert!(StepKind::Degenerate.is_terminal());
        assert!(!StepKind::Comparison.is_terminal());
        assert!(!StepKind::Init.is_terminal());
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_fields() {
        let step = Step::new(StepKind::Comparison, 2, 1, "Comparing pattern[1] = 'b' with text[3] = 'b'.")
            .with_matches(vec![]);
        let value = serde_json::to_value(&step).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["textIndex"], 2);
        assert_eq!(obj["patternIndex"], 1);
        assert!(obj.contains_key("matches"));
        assert!(obj.contains_key("explanation"));
        assert!(!obj.contains_key("kind"));
        assert!(!obj.contains_key("badCharTable"));
        assert!(!obj.contains_key("failureFunction"));
        assert!(!obj.contains_key("result"));
    }

    #[test]
    fn serializes_shared_table_per_step() {
        let table = Arc::new(build_bad_char_table(&chars("abab"), &chars("ab")));
        let step = Step::new(StepKind::Match, 0, 1, "They match!").with_bad_char_table(Arc::clone(&table));
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["badCharTable"]["a"], 1);
        assert_eq!(value["badCharTable"]["b"], 2);
    }

    #[test]
    fn result_serializes_found_and_position() {
        let step = Step::new(StepKind::NotFound, 0, 0, "Completed search.")
            .with_result(SearchResult::not_found());
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["result"]["found"], false);
        assert_eq!(value["result"]["position"], -1);
    }
}
