//! Core data model for the matchtrace string-search trace engine.
//!
//! This crate holds everything the step generators and their consumers
//! share: the step/trace record types, the algorithm identifier, and the
//! two preprocessing builders (bad-character table for Horspool, failure
//! function for KMP). It is pure data and pure functions; the generators
//! themselves live in `matchtrace-search`.
//!
//! # Architecture
//!
//! - [`algorithm`] -- Algorithm identifiers and their string forms
//! - [`step`] -- The `Step` record, event kinds, and search results
//! - [`tables`] -- Bad-character table and failure-function builders

pub mod algorithm;
pub mod step;
pub mod tables;

pub use algorithm::AlgorithmId;
pub use step::{SearchResult, Step, StepKind};
pub use tables::{BadCharTable, build_bad_char_table, build_failure_function};

/// Error type for trace generation.
///
/// Degenerate search inputs (empty text, empty pattern, pattern longer
/// than text) are not errors; they produce a one-step trace with a
/// not-found result. The only failure mode is an algorithm identifier
/// that names no known generator.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("unknown algorithm {0:?} (expected \"bruteforce\", \"horspool\" or \"kmp\")")]
    UnknownAlgorithm(String),
}
