// matchtrace-cli: shared utilities for the CLI tools.

use std::process;
use std::str::FromStr;

use matchtrace_core::AlgorithmId;

/// Parse a `--algorithm=NAME` / `-a NAME` argument from command-line
/// args. Unrecognized algorithm names are fatal; the engine has no
/// fallback algorithm.
///
/// Returns `(algorithm, remaining_args)`; `default` applies when no
/// algorithm flag is present.
pub fn parse_algorithm(args: &[String], default: AlgorithmId) -> (AlgorithmId, Vec<String>) {
    let mut algorithm = default;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--algorithm=") {
            algorithm = AlgorithmId::from_str(val).unwrap_or_else(|e| fatal(&e.to_string()));
        } else if arg == "--algorithm" || arg == "-a" {
            if i + 1 < args.len() {
                algorithm =
                    AlgorithmId::from_str(&args[i + 1]).unwrap_or_else(|e| fatal(&e.to_string()));
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (algorithm, remaining)
}

/// Extract a boolean flag (e.g. `--json`) from the args.
///
/// Returns `(present, remaining_args)`.
pub fn parse_flag(args: &[String], flag: &str) -> (bool, Vec<String>) {
    let present = args.iter().any(|a| a == flag);
    let remaining = args.iter().filter(|a| *a != flag).cloned().collect();
    (present, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
