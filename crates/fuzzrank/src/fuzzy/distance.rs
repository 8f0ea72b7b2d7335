//! Character-aware Levenshtein distance
//!
//! Byte-level edit distance counts a two-byte UTF-8 character as two edits.
//! Before comparing, every distinct multi-byte character is replaced by a
//! synthetic single byte (128, 129, ...), shared between both strings, so the
//! byte distance equals the character distance. ASCII passes through as is.
//!
//! The byte space above ASCII holds [`CharTable::CAPACITY`] codes. A
//! comparison that needs more distinct non-ASCII characters falls back to a
//! distance over `char` sequences instead of letting codes collide.

use std::collections::HashMap;

use strsim::generic_levenshtein;
use tracing::debug;

/// Synthetic byte codes assigned to multi-byte characters, scoped to one comparison
#[derive(Debug, Default)]
pub struct CharTable {
    codes: HashMap<char, u8>,
}

impl CharTable {
    /// Number of synthetic codes available (bytes 128..=255)
    pub const CAPACITY: usize = 128;

    const FIRST_CODE: usize = 128;

    pub fn new() -> Self {
        Self::default()
    }

    /// Code for `ch`, allocating the next free one on first sight.
    /// `None` once the table is full.
    pub fn code_for(&mut self, ch: char) -> Option<u8> {
        if let Some(&code) = self.codes.get(&ch) {
            return Some(code);
        }
        let next = Self::FIRST_CODE + self.codes.len();
        let code = u8::try_from(next).ok()?;
        self.codes.insert(ch, code);
        Some(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Rewrite `s` as one byte per character. `None` if the table overflows.
    pub fn remap(&mut self, s: &str) -> Option<Vec<u8>> {
        if s.is_ascii() {
            return Some(s.as_bytes().to_vec());
        }
        s.chars()
            .map(|ch| {
                if ch.is_ascii() {
                    Some(ch as u8)
                } else {
                    self.code_for(ch)
                }
            })
            .collect()
    }
}

/// Levenshtein distance where each character counts as one edit unit
pub fn levenshtein(first: &str, second: &str) -> usize {
    let mut table = CharTable::new();
    match (table.remap(first), table.remap(second)) {
        (Some(a), Some(b)) => generic_levenshtein(&a, &b),
        _ => {
            debug!(
                distinct = table.len(),
                capacity = CharTable::CAPACITY,
                "synthetic byte table exhausted, comparing chars directly"
            );
            strsim::levenshtein(first, second)
        }
    }
}
