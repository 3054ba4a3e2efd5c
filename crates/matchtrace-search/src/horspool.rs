// Horspool step generator: right-to-left comparison, bad-character shifts.

use std::sync::Arc;

use matchtrace_core::{SearchResult, Step, StepKind, build_bad_char_table};

/// Generate the Horspool trace for searching `pattern` in `text`.
///
/// The bad-character table is built once, before the first step, and
/// shared into every step of the trace. Comparisons run right to left
/// within each window; on a mismatch the window shifts by the table entry
/// for the text character aligned with the window's last position.
pub fn generate(text: &[char], pattern: &[char]) -> Vec<Step> {
    if let Some(trace) = crate::degenerate_trace(text, pattern) {
        return trace;
    }

    let m = pattern.len();
    let pattern_str: String = pattern.iter().collect();
    let table = Arc::new(build_bad_char_table(text, pattern));

    let mut steps = vec![
        Step::new(
            StepKind::Init,
            0,
            0,
            "Initialized the Horspool algorithm. Created the bad character table which helps us skip unnecessary comparisons.",
        )
        .with_bad_char_table(Arc::clone(&table)),
    ];
    let mut matches: Vec<usize> = Vec::new();

    let mut text_index = 0;
    while text_index <= text.len() - m {
        // `remaining` counts pattern positions still unverified; the
        // comparison happens at offset `remaining - 1`.
        let mut remaining = m;
        while remaining > 0 && pattern[remaining - 1] == text[text_index + remaining - 1] {
            let pattern_index = remaining - 1;
            steps.push(
                Step::new(
                    StepKind::Match,
                    text_index,
                    pattern_index,
                    format!(
                        "Comparing pattern[{pattern_index}] = '{}' with text[{}] = '{}'. They match!",
                        pattern[pattern_index],
                        text_index + pattern_index,
                        text[text_index + pattern_index]
                    ),
                )
                .with_bad_char_table(Arc::clone(&table))
                .with_matches(matches.clone()),
            );
            remaining -= 1;
        }

        if remaining == 0 {
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
                .with_bad_char_table(Arc::clone(&table))
                .with_matches(matches.clone())
                .with_result(SearchResult::found(text_index)),
            );
            // First occurrence only.
            break;
        }

        let pattern_index = remaining - 1;
        let mismatch_char = text[text_index + pattern_index];
        // The shift keys off the character under the window's last
        // position, wherever the mismatch happened; shifting by the
        // mismatch-position character can jump past an occurrence.
        let shift = table.shift_for(text[text_index + m - 1]);
        steps.push(
            Step::new(
                StepKind::Shift,
                text_index,
                pattern_index,
                format!(
                    "Mismatch at pattern[{pattern_index}] = '{}' and text[{}] = '{mismatch_char}'. \
                     Using bad character rule to shift by {shift} positions.",
                    pattern[pattern_index],
                    text_index + pattern_index
                ),
            )
            .with_bad_char_table(Arc::clone(&table))
            .with_matches(matches.clone()),
        );
        text_index += shift;
    }

    if matches.is_empty() {
        steps.push(
            Step::new(
                StepKind::NotFound,
                (text.len() - m).min(text_index),
                0,
                format!("Completed search. No matches found for the pattern \"{pattern_str}\" in the text."),
            )
            .with_bad_char_table(Arc::clone(&table))
            .with_matches(Vec::new())
            .with_result(SearchResult::not_found()),
        );
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(text: &str, pattern: &str) -> Vec<Step> {
        generate(&chars(text), &chars(pattern))
    }

    #[test]
    fn finds_leftmost_occurrence() {
        let steps = run("abxabcabcaby", "abcaby");
        let result = steps.last().unwrap().result.unwrap();
        assert!(result.found);
        assert_eq!(result.position, 6);
    }

    #[test]
    fn compares_right_to_left() {
        let steps = run("aaaaa", "aa");
        // Init, match at pattern[1], match at pattern[0], terminal found.
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1].kind, StepKind::Match);
        assert_eq!(steps[1].pattern_index, 1);
        assert_eq!(steps[2].pattern_index, 0);
        assert_eq!(steps.last().unwrap().result.unwrap().position, 0);
    }

    #[test]
    fn every_step_shares_one_table() {
        let steps = run("abxabcabcaby", "abcaby");
        let first = steps[0].bad_char_table.as_ref().unwrap();
        for step in &steps {
            let table = step.bad_char_table.as_ref().expect("every Horspool step carries the table");
            assert!(Arc::ptr_eq(first, table));
        }
    }

    #[test]
    fn shift_steps_use_the_bad_character_rule() {
        // Pattern "xy" over text "abcd": every window mismatches at the
        // last position and shifts by the table default of 2.
        let steps = run("abcd", "xy");
        let shifts: Vec<&Step> = steps.iter().filter(|s| s.kind == StepKind::Shift).collect();
        assert_eq!(shifts.len(), 2);
        assert!(shifts[0].explanation.contains("shift by 2 positions"));
        assert_eq!(shifts[0].text_index, 0);
        assert_eq!(shifts[1].text_index, 2);
    }

    #[test]
    fn not_found_terminal_clamps_overshot_window() {
        // After the final shift the window start lands past the last
        // valid window; the terminal step reports the clamped index.
        let steps = run("abcd", "xy");
        let terminal = steps.last().unwrap();
        assert_eq!(terminal.result.unwrap(), SearchResult::not_found());
        assert_eq!(terminal.text_index, 2);
    }

    #[test]
    fn shift_realigns_onto_the_match() {
        // Window 0 of "xabab" vs "abab" mismatches at pattern[3] against
        // text[3] = 'a'; table['a'] = 1 realigns the window onto the
        // occurrence at position 1, which then matches right to left.
        let steps = run("xabab", "abab");
        assert_eq!(steps[1].kind, StepKind::Shift);
        assert_eq!(steps[1].pattern_index, 3);
        assert!(steps[1].explanation.contains("shift by 1 positions"));
        let match_offsets: Vec<usize> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Match)
            .map(|s| s.pattern_index)
            .collect();
        assert_eq!(match_offsets, vec![3, 2, 1, 0]);
        assert_eq!(steps.last().unwrap().result.unwrap().position, 1);
    }

    #[test]
    fn shift_comes_from_the_last_window_character() {
        // Window 0 of "banana" vs "nan" matches pattern[2] and
        // pattern[1], then mismatches at pattern[0] against text[0] =
        // 'b'. Shifting by table['b'] = 3 would jump over the occurrence
        // at position 2; the shift must come from the character under
        // the window's last position, table[text[2] = 'n'] = 2.
        let steps = run("banana", "nan");
        let shift = steps.iter().find(|s| s.kind == StepKind::Shift).unwrap();
        assert_eq!(shift.pattern_index, 0);
        assert!(shift.explanation.contains("text[0] = 'b'"));
        assert!(shift.explanation.contains("shift by 2 positions"));

        let terminal = steps.last().unwrap();
        let result = terminal.result.unwrap();
        assert!(result.found);
        assert_eq!(result.position, 2);
        assert_eq!(terminal.matches.as_deref(), Some(&[2, 3, 4][..]));
    }

    #[test]
    fn mismatch_deep_in_the_window_does_not_overshoot() {
        // Window 0 of "ozoxo" vs "oxo" matches pattern[2], then
        // mismatches at pattern[1] against text[1] = 'z'. The
        // mismatch-position entry table['z'] = 3 would shift past the
        // only valid window; the last-window entry table[text[2] = 'o']
        // = 2 lands exactly on the occurrence at position 2.
        let steps = run("ozoxo", "oxo");
        let shift = steps.iter().find(|s| s.kind == StepKind::Shift).unwrap();
        assert_eq!(shift.pattern_index, 1);
        assert!(shift.explanation.contains("shift by 2 positions"));

        let result = steps.last().unwrap().result.unwrap();
        assert!(result.found);
        assert_eq!(result.position, 2);
    }

    #[test]
    fn init_step_has_table_but_no_matches() {
        let steps = run("abc", "bc");
        let init = &steps[0];
        assert_eq!(init.kind, StepKind::Init);
        assert!(init.bad_char_table.is_some());
        assert!(init.matches.is_none());
        assert!(init.failure_function.is_none());
    }

    #[test]
    fn exactly_one_terminal_step() {
        for (text, pattern) in [("hello", "world"), ("abxabcabcaby", "abcaby"), ("", "x")] {
            let steps = run(text, pattern);
            assert_eq!(steps.iter().filter(|s| s.is_terminal()).count(), 1);
            assert!(steps.last().unwrap().is_terminal());
        }
    }

    #[test]
    fn found_terminal_records_all_matched_positions() {
        let steps = run("xxabc", "abc");
        let terminal = steps.last().unwrap();
        assert_eq!(terminal.kind, StepKind::Found);
        assert_eq!(terminal.matches.as_deref(), Some(&[2, 3, 4][..]));
        assert_eq!(terminal.pattern_index, 0);
    }
}
