// Algorithm identifiers for the three step generators.

use std::fmt;
use std::str::FromStr;

use crate::TraceError;

/// Identifies one of the three substring-search algorithms.
///
/// Modeled as an exhaustive enum rather than a string so that dispatch
/// over it is total; parsing an identifier supplied at a string boundary
/// (CLI flag, UI selection) is where `UnknownAlgorithm` surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// Naive left-to-right comparison at every candidate window.
    BruteForce,
    /// Boyer-Moore-Horspool with the bad-character shift rule.
    Horspool,
    /// Knuth-Morris-Pratt with the failure function (LPS array).
    Kmp,
}

impl AlgorithmId {
    /// All algorithm identifiers, in display order.
    pub const ALL: [AlgorithmId; 3] = [AlgorithmId::Horspool, AlgorithmId::Kmp, AlgorithmId::BruteForce];

    /// Canonical lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::BruteForce => "bruteforce",
            AlgorithmId::Horspool => "horspool",
            AlgorithmId::Kmp => "kmp",
        }
    }

    /// Human-readable name for headings and result messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            AlgorithmId::BruteForce => "Brute Force",
            AlgorithmId::Horspool => "Horspool",
            AlgorithmId::Kmp => "KMP",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = TraceError;

    /// Parse a canonical identifier, case-insensitively.
    ///
    /// Anything other than `"bruteforce"`, `"horspool"` or `"kmp"` is an
    /// [`TraceError::UnknownAlgorithm`] error; there is no silent default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.eq_ignore_ascii_case("bruteforce") {
            Ok(AlgorithmId::BruteForce)
        } else if id.eq_ignore_ascii_case("horspool") {
            Ok(AlgorithmId::Horspool)
        } else if id.eq_ignore_ascii_case("kmp") {
            Ok(AlgorithmId::Kmp)
        } else {
            Err(TraceError::UnknownAlgorithm(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_identifiers() {
        assert_eq!("bruteforce".parse::<AlgorithmId>().unwrap(), AlgorithmId::BruteForce);
        assert_eq!("horspool".parse::<AlgorithmId>().unwrap(), AlgorithmId::Horspool);
        assert_eq!("kmp".parse::<AlgorithmId>().unwrap(), AlgorithmId::Kmp);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("KMP".parse::<AlgorithmId>().unwrap(), AlgorithmId::Kmp);
        assert_eq!("Horspool".parse::<AlgorithmId>().unwrap(), AlgorithmId::Horspool);
        assert_eq!(" BruteForce ".parse::<AlgorithmId>().unwrap(), AlgorithmId::BruteForce);
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let err = "boyer-moore".parse::<AlgorithmId>().unwrap_err();
        assert!(matches!(err, TraceError::UnknownAlgorithm(ref s) if s == "boyer-moore"));
        assert!("".parse::<AlgorithmId>().is_err());
    }

    #[test]
    fn round_trips_through_as_str() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.as_str().parse::<AlgorithmId>().unwrap(), id);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(AlgorithmId::BruteForce.display_name(), "Brute Force");
        assert_eq!(AlgorithmId::Kmp.to_string(), "kmp");
    }
}
