// match-tables: Print the preprocessing tables for a pattern.
//
// Always prints the KMP failure function (LPS array) of PATTERN. When
// TEXT is also given, prints the Horspool bad-character table built for
// PATTERN over TEXT's alphabet as well.
//
// Usage:
//   match-tables [OPTIONS] PATTERN [TEXT]
//
// Options:
//   --json       Print the tables as a JSON object
//   -h, --help   Print help

use matchtrace_core::{build_bad_char_table, build_failure_function};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if matchtrace_cli::wants_help(&args) {
        println!("match-tables: Print the preprocessing tables for a pattern.");
        println!();
        println!("Usage: match-tables [OPTIONS] PATTERN [TEXT]");
        println!();
        println!("Prints the KMP failure function (LPS array) of PATTERN, and the");
        println!("Horspool bad-character table over TEXT's alphabet when TEXT is given.");
        println!();
        println!("Options:");
        println!("  --json       Print the tables as a JSON object");
        println!("  -h, --help   Print this help");
        return;
    }

    let (json, args) = matchtrace_cli::parse_flag(&args, "--json");

    let (pattern, text) = match args.as_slice() {
        [pattern] => (pattern, None),
        [pattern, text] => (pattern, Some(text)),
        _ => matchtrace_cli::fatal("expected PATTERN and optionally TEXT"),
    };
    if pattern.is_empty() {
        matchtrace_cli::fatal("pattern must not be empty");
    }

    let pattern_chars: Vec<char> = pattern.chars().collect();
    let lps = build_failure_function(&pattern_chars);
    let bad_char = text.map(|t| {
        let text_chars: Vec<char> = t.chars().collect();
        build_bad_char_table(&text_chars, &pattern_chars)
    });

    if json {
        let mut value = serde_json::json!({ "failureFunction": lps });
        if let Some(table) = &bad_char {
            match serde_json::to_value(table) {
                Ok(t) => {
                    value["badCharTable"] = t;
                }
                Err(e) => matchtrace_cli::fatal(&format!("failed to serialize table: {e}")),
            }
        }
        println!("{:#}", value);
        return;
    }

    println!("Failure function (LPS array) for {pattern:?}:");
    println!("  index  char  lps");
    for (i, (c, v)) in pattern_chars.iter().zip(&lps).enumerate() {
        println!("  {i:>5}  {c:>4}  {v:>3}");
    }

    if let Some(table) = &bad_char {
        println!();
        println!("Bad character table (default shift {}):", table.default_shift());
        println!("  char  shift");
        for (c, shift) in table.iter() {
            let display = if c == ' ' { "space".to_string() } else { c.to_string() };
            println!("  {display:>5}  {shift:>5}");
        }
    }
}
