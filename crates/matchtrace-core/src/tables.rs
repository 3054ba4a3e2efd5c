// Preprocessing tables: Horspool bad-character shifts and the KMP
// failure function (LPS array). Both are pure functions of the pattern
// (plus the text's alphabet for the shift table) and are built exactly
// once per trace.

use hashbrown::HashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

// ---------------------------------------------------------------------------
// Bad-character table (Horspool)
// ---------------------------------------------------------------------------

/// Horspool bad-character shift table.
///
/// Maps each character to how far the window may safely shift when that
/// character causes a mismatch. Lookup of a character with no entry falls
/// back to the default shift (the pattern length); the table is seeded
/// from every character of the text, so the fallback is defensive rather
/// than reachable in normal use.
///
/// Entries iterate (and serialize) in insertion order: text characters in
/// first-occurrence order, then pattern-only characters in pattern order.
/// Renderers display the table in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCharTable {
    order: Vec<char>,
    shifts: HashMap<char, usize>,
    default_shift: usize,
}

impl BadCharTable {
    /// Create an empty table with the given fallback shift.
    pub fn new(default_shift: usize) -> Self {
        Self {
            order: Vec::new(),
            shifts: HashMap::new(),
            default_shift,
        }
    }

    /// Set the shift for `c`, keeping its original position in the
    /// iteration order if it already has an entry.
    pub fn insert(&mut self, c: char, shift: usize) {
        if self.shifts.insert(c, shift).is_none() {
            self.order.push(c);
        }
    }

    /// Shift distance for `c`, falling back to the default shift for
    /// characters without an entry.
    pub fn shift_for(&self, c: char) -> usize {
        self.shifts.get(&c).copied().unwrap_or(self.default_shift)
    }

    /// The fallback shift used for characters without an entry.
    pub fn default_shift(&self) -> usize {
        self.default_shift
    }

    /// Whether `c` has an explicit entry.
    pub fn contains(&self, c: char) -> bool {
        self.shifts.contains_key(&c)
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.order.iter().map(|&c| (c, self.shifts[&c]))
    }
}

impl Serialize for BadCharTable {
    /// Serialize as a map of single-character keys to shifts, preserving
    /// insertion order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        let mut key = String::with_capacity(4);
        for (c, shift) in self.iter() {
            key.clear();
            key.push(c);
            map.serialize_entry(&key, &shift)?;
        }
        map.end()
    }
}

/// Build the Horspool bad-character table for `pattern` over the alphabet
/// of `text`.
///
/// Every character occurring in the text starts at the default shift (the
/// pattern length). Each pattern position except the last then sets its
/// character's shift to `pattern_len - 1 - i`, so the rightmost
/// occurrence of a character before the final position wins. The final
/// pattern character deliberately gets no entry of its own; a mismatch on
/// it uses an earlier occurrence's shift or the default.
///
/// `pattern` must be non-empty; callers short-circuit degenerate inputs
/// before preprocessing.
pub fn build_bad_char_table(text: &[char], pattern: &[char]) -> BadCharTable {
    let m = pattern.len();
    let mut table = BadCharTable::new(m);

    for &c in text {
        table.insert(c, m);
    }
    for (i, &c) in pattern.iter().take(m - 1).enumerate() {
        table.insert(c, m - 1 - i);
    }

    table
}

// ---------------------------------------------------------------------------
// Failure function (KMP)
// ---------------------------------------------------------------------------

/// Build the KMP failure function (LPS array) for `pattern`.
///
/// `lps[i]` is the length of the longest proper prefix of
/// `pattern[0..=i]` that is also a suffix of it; `lps[0]` is always 0.
/// Standard linear-time construction: the candidate length `j` falls back
/// through `lps[j - 1]` on each mismatch.
pub fn build_failure_function(pattern: &[char]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];

    let mut j = 0;
    for i in 1..pattern.len() {
        while j > 0 && pattern[i] != pattern[j] {
            j = lps[j - 1];
        }
        if pattern[i] == pattern[j] {
            j += 1;
        }
        lps[i] = j;
    }

    lps
}
