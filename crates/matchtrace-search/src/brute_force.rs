// Brute-force step generator: try every window, compare left to right.

use matchtrace_core::{SearchResult, Step, StepKind};

/// Generate the brute-force trace for searching `pattern` in `text`.
///
/// For each candidate window the pattern is compared left to right, one
/// step per comparison. A mismatch adds a mismatch step and moves to the
/// next window; there is no skipping. The first fully matched window
/// terminates the search.
pub fn generate(text: &[char], pattern: &[char]) -> Vec<Step> {
    if let Some(trace) = crate::degenerate_trace(text, pattern) {
        return trace;
    }

    let m = pattern.len();
    let pattern_str: String = pattern.iter().collect();

    let mut steps = vec![Step::new(
        StepKind::Init,
        0,
        0,
        "Initialized the Brute Force algorithm. We'll check each possible position in the text.",
    )];
    let mut matches: Vec<usize> = Vec::new();

    for text_index in 0..=text.len() - m {
        let mut matched = true;

        for pattern_index in 0..m {
            steps.push(
                Step::new(
                    StepKind::Comparison,
                    text_index,
                    pattern_index,
                    format!(
                        "Comparing pattern[{pattern_index}] = '{}' with text[{}] = '{}'.",
                        pattern[pattern_index],
                        text_index + pattern_index,
                        text[text_index + pattern_index]
                    ),
                )
                .with_matches(matches.clone()),
            );

            if pattern[pattern_index] != text[text_index + pattern_index] {
                matched = false;
                steps.push(
                    Step::new(
                        StepKind::Mismatch,
                        text_index,
                        pattern_index,
                        "Mismatch found! Moving to the next position in text.",
                    )
                    .with_matches(matches.clone()),
                );
                break;
            }
        }

        if matched {
            matches.extend(text_index..text_index + m);
            steps.push(
                Step::new(
                    StepKind::Found,
                    text_index,
                    0,
                    format!(
                        "Found a match at position {text_index}! The pattern \"{pattern_str}\" was found in the text."
                    ),
                )
                .with_matches(matches)
                .with_result(SearchResult::found(text_index)),
            );
            // First occurrence only; later windows are never examined.
            return steps;
        }
    }

    steps.push(
        Step::new(
            StepKind::NotFound,
            text.len() - m,
            0,
            format!("Completed search. No matches found for the pattern \"{pattern_str}\" in the text."),
        )
        .with_matches(Vec::new())
        .with_result(SearchResult::not_found()),
    );
    steps
}
