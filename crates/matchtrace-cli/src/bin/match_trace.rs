// match-trace: Replay a substring search as a step-by-step narration.
//
// Runs one of the three algorithms to completion and prints the full
// trace, one numbered step per line, followed by the final result.
// With --json, the serialized step sequence is printed instead, in the
// form step renderers consume.
//
// Usage:
//   match-trace [OPTIONS] TEXT PATTERN
//
// Options:
//   -a, --algorithm NAME   horspool (default), kmp, or bruteforce
//   --json                 Print the trace as a JSON array
//   -h, --help             Print help

use matchtrace_core::AlgorithmId;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if matchtrace_cli::wants_help(&args) {
        println!("match-trace: Replay a substring search as a step-by-step narration.");
        println!();
        println!("Usage: match-trace [OPTIONS] TEXT PATTERN");
        println!();
        println!("Options:");
        println!("  -a, --algorithm NAME   horspool (default), kmp, or bruteforce");
        println!("  --json                 Print the trace as a JSON array");
        println!("  -h, --help             Print this help");
        return;
    }

    let (algorithm, args) = matchtrace_cli::parse_algorithm(&args, AlgorithmId::Horspool);
    let (json, args) = matchtrace_cli::parse_flag(&args, "--json");

    let [text, pattern] = args.as_slice() else {
        matchtrace_cli::fatal("expected exactly two arguments: TEXT PATTERN");
    };

    let steps = matchtrace_search::generate_trace(text, pattern, algorithm);

    if json {
        match serde_json::to_string_pretty(&steps) {
            Ok(s) => println!("{s}"),
            Err(e) => matchtrace_cli::fatal(&format!("failed to serialize trace: {e}")),
        }
        return;
    }

    println!("{} search for {pattern:?} in {text:?}", algorithm.display_name());
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("{i:>4}  {}", step.explanation);
    }

    // The terminal step always carries the result.
    let result = steps.last().and_then(|s| s.result).unwrap_or_else(|| {
        matchtrace_cli::fatal("trace ended without a terminal result step")
    });
    println!();
    if result.found {
        println!("Pattern \"{pattern}\" found at position {}!", result.position);
    } else {
        println!("Pattern \"{pattern}\" not found in the text.");
    }
}
