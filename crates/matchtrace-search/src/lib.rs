//! Trace-generating substring-search engine.
//!
//! Each of the three generators runs one classic algorithm to completion
//! and returns the whole trace: an ordered sequence of [`Step`] records
//! narrating every comparison, match, mismatch and shift, ending in
//! exactly one terminal step that carries the [`SearchResult`]. All three
//! are "find first occurrence" searches; they halt as soon as the whole
//! pattern matches.
//!
//! The generators are pure functions with no retained state, so
//! independent callers may compute traces concurrently without
//! coordination. Consumers drive playback themselves by indexing into
//! the returned sequence.
//!
//! # Architecture
//!
//! - [`brute_force`] -- Naive left-to-right comparison per window
//! - [`horspool`] -- Right-to-left comparison with bad-character shifts
//! - [`kmp`] -- Knuth-Morris-Pratt with failure-function fallbacks

pub mod brute_force;
pub mod horspool;
pub mod kmp;

pub use matchtrace_core::{
    AlgorithmId, BadCharTable, SearchResult, Step, StepKind, TraceError, build_bad_char_table,
    build_failure_function,
};

/// Generate the full trace for searching `pattern` in `text`.
///
/// Converts once to character units and dispatches on the algorithm
/// identifier; see [`generate_trace_chars`] for the character-slice form.
pub fn generate_trace(text: &str, pattern: &str, algorithm: AlgorithmId) -> Vec<Step> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    generate_trace_chars(&text, &pattern, algorithm)
}

/// Generate the full trace over pre-split character units.
pub fn generate_trace_chars(text: &[char], pattern: &[char], algorithm: AlgorithmId) -> Vec<Step> {
    match algorithm {
        AlgorithmId::BruteForce => brute_force::generate(text, pattern),
        AlgorithmId::Horspool => horspool::generate(text, pattern),
        AlgorithmId::Kmp => kmp::generate(text, pattern),
    }
}

/// Generate a trace for a string algorithm identifier.
///
/// Fails with [`TraceError::UnknownAlgorithm`] for anything other than
/// `"bruteforce"`, `"horspool"` or `"kmp"`; there is no fallback
/// algorithm.
pub fn generate_trace_named(text: &str, pattern: &str, algorithm: &str) -> Result<Vec<Step>, TraceError> {
    Ok(generate_trace(text, pattern, algorithm.parse()?))
}

/// Short-circuit trace for degenerate inputs: empty text, empty pattern,
/// or a pattern longer than the text. These are not errors; the result is
/// a one-step trace reporting not-found, so callers handle them exactly
/// like an exhausted search.
pub(crate) fn degenerate_trace(text: &[char], pattern: &[char]) -> Option<Vec<Step>> {
    if text.is_empty() || pattern.is_empty() || pattern.len() > text.len() {
        Some(vec![
            Step::new(
                StepKind::Degenerate,
                0,
                0,
                "Cannot perform pattern matching: text or pattern is empty, or pattern is longer than text.",
            )
            .with_result(SearchResult::not_found()),
        ])
    } else {
        None
    }
}
