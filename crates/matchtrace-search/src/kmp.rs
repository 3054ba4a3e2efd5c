// KMP step generator: left-to-right scan with failure-function fallbacks.

use std::sync::Arc;

use matchtrace_core::{SearchResult, Step, StepKind, build_failure_function};

/// Generate the Knuth-Morris-Pratt trace for searching `pattern` in
/// `text`.
///
/// Unlike the window-based generators, `text_index` here is a scan
/// position over the text that never moves backwards. On a mismatch with
/// `pattern_index > 0` the pattern cursor falls back through the failure
/// function without consuming a text character; a mismatch at the pattern
/// start consumes one text character instead. The failure function is
/// built once and shared into every step.
pub fn generate(text: &[char], pattern: &[char]) -> Vec<Step> {
    if let Some(trace) = crate::degenerate_trace(text, pattern) {
        return trace;
    }

    let m = pattern.len();
    let n = text.len();
    let pattern_str: String = pattern.iter().collect();
    let lps = Arc::new(build_failure_function(pattern));

    let mut steps = vec![
        Step::new(
            StepKind::Init,
            0,
            0,
            "Initialized the KMP algorithm. Created the failure function (LPS array) which helps us avoid unnecessary character comparisons.",
        )
        .with_failure_function(Arc::clone(&lps)),
    ];
    let mut matches: Vec<usize> = Vec::new();

    let mut text_index = 0;
    let mut pattern_index = 0;
    while text_index < n {
        steps.push(
            Step::new(
                StepKind::Comparison,
                text_index,
                pattern_index,
                format!(
                    "Comparing pattern[{pattern_index}] = '{}' with text[{text_index}] = '{}'.",
                    pattern[pattern_index], text[text_index]
                ),
            )
            .with_failure_function(Arc::clone(&lps))
            .with_matches(matches.clone()),
        );

        if pattern[pattern_index] == text[text_index] {
            text_index += 1;
            pattern_index += 1;

            if pattern_index == m {
                let match_start = text_index - m;
                matches.extend(match_start..match_start + m);
                steps.push(
                    Step::new(
                        StepKind::Found,
                        text_index - 1,
                        pattern_index - 1,
                        format!(
                            "Found a match at position {match_start}! The pattern \"{pattern_str}\" was found in the text."
                        ),
                    )
                    .with_failure_function(Arc::clone(&lps))
                    .with_matches(matches.clone())
                    .with_result(SearchResult::found(match_start)),
                );
                // First occurrence only.
                break;
            }
        } else if pattern_index != 0 {
            let fallback = lps[pattern_index - 1];
            steps.push(
                Step::new(
                    StepKind::Mismatch,
                    text_index,
                    pattern_index,
                    format!(
                        "Mismatch! Using failure function: pattern[{pattern_index}] doesn't match \
                         text[{text_index}]. Moving pattern index from {pattern_index} to {fallback}.",
                    ),
                )
                .with_failure_function(Arc::clone(&lps))
                .with_matches(matches.clone()),
            );
            pattern_index = fallback;
        } else {
            steps.push(
                Step::new(
                    StepKind::Mismatch,
                    text_index,
                    0,
                    "Mismatch at the beginning of pattern. Moving to next character in text.",
                )
                .with_failure_function(Arc::clone(&lps))
                .with_matches(matches.clone()),
            );
            text_index += 1;
        }
    }

    if matches.is_empty() {
        steps.push(
            Step::new(
                StepKind::NotFound,
                (n - 1).min(text_index),
                0,
                format!("Completed search. No matches found for the pattern \"{pattern_str}\" in the text."),
            )
            .with_failure_function(Arc::clone(&lps))
            .with_matches(Vec::new())
            .with_result(SearchResult::not_found()),
        );
    }
    steps
}
