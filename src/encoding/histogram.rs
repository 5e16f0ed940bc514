//! Letter histogram encoding
//!
//! A word is represented by how many times each letter occurs in it.
//!
//! ```text
//! "cab" => { a: 1, b: 1, c: 1 }
//! "ba"  => { a: 1, b: 1 }   // every count <= the counts of "cab", so "ba" fits
//! ```

use super::{EncodeError, Encoder};
use rustc_hash::FxHashMap;

/// Occurrence count of each letter present in a word
///
/// Letters that do not occur are absent from the map and count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHistogram {
    counts: FxHashMap<u8, u32>,
}

impl LetterHistogram {
    /// Count of `letter`, zero when absent
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of letters, counting repeats
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// `(letter, count)` pairs in alphabetical order
    #[must_use]
    pub fn sorted_counts(&self) -> Vec<(char, u32)> {
        let mut counts: Vec<(char, u32)> = self
            .counts
            .iter()
            .map(|(&letter, &count)| (char::from(letter), count))
            .collect();
        counts.sort_unstable();
        counts
    }

    /// Whether every letter of `other` occurs here at least as often
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other
            .counts
            .iter()
            .all(|(&letter, &count)| count <= self.count(letter))
    }
}

/// Encoder that counts letter occurrences
///
/// Never fails on words made of `a..=z`, which is all the matcher hands it.
/// Other characters return `InvalidCharacter` instead of being counted, matching
/// [`PrimeProductEncoder`](super::PrimeProductEncoder) for direct callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistogramEncoder;

impl Encoder for HistogramEncoder {
    type Encoding = LetterHistogram;

    fn encode(&self, word: &str) -> Result<LetterHistogram, EncodeError> {
        let mut counts: FxHashMap<u8, u32> = FxHashMap::default();

        for c in word.chars() {
            if !c.is_ascii_lowercase() {
                return Err(EncodeError::InvalidCharacter(c));
            }
            *counts.entry(c as u8).or_insert(0) += 1;
        }

        Ok(LetterHistogram { counts })
    }

    fn contains(&self, jumble: &LetterHistogram, candidate: &LetterHistogram) -> bool {
        jumble.covers(candidate)
    }
}
