// match-search: Search for patterns from stdin in a fixed text.
//
// Reads patterns from stdin (one per line) and reports for each whether
// it occurs in TEXT. Output format:
//   F <pos>: pattern    (found, leftmost occurrence at <pos>)
//   N: pattern          (not found)
//
// Usage:
//   match-search [OPTIONS] TEXT
//
// Options:
//   -a, --algorithm NAME   horspool (default), kmp, or bruteforce
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use matchtrace_core::AlgorithmId;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if matchtrace_cli::wants_help(&args) {
        println!("match-search: Search for patterns from stdin in a fixed text.");
        println!();
        println!("Usage: match-search [OPTIONS] TEXT");
        println!();
        println!("Reads patterns from stdin (one per line). Prints:");
        println!("  F <pos>: pattern    (found at position <pos>)");
        println!("  N: pattern          (not found)");
        println!();
        println!("Options:");
        println!("  -a, --algorithm NAME   horspool (default), kmp, or bruteforce");
        println!("  -h, --help             Print this help");
        return;
    }

    let (algorithm, args) = matchtrace_cli::parse_algorithm(&args, AlgorithmId::Horspool);

    let [text] = args.as_slice() else {
        matchtrace_cli::fatal("expected exactly one argument: TEXT");
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let pattern = line.trim_end_matches(['\r', '\n']);
        if pattern.is_empty() {
            continue;
        }

        let steps = matchtrace_search::generate_trace(text, pattern, algorithm);
        // The terminal step is always present and always last.
        let result = steps.last().and_then(|s| s.result).unwrap_or_else(|| {
            matchtrace_cli::fatal("trace ended without a terminal result step")
        });

        if result.found {
            let _ = writeln!(out, "F {}: {pattern}", result.position);
        } else {
            let _ = writeln!(out, "N: {pattern}");
        }
    }
}
