//! Structural candidate filter
//!
//! Cheap checks that run before any encoding, cheapest first.

use crate::core::is_alphabetic;
use std::fmt;

/// Why a candidate line was not reported as a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Candidate equals the jumble after normalization
    SameAsJumble,
    /// Candidate has more letters than the jumble
    TooLong,
    /// Candidate is empty or contains a character outside `a..=z`
    NotAlphabetic,
    /// Encoder refused the candidate
    Unencodable,
    /// Candidate needs letters the jumble does not have
    MissingLetters,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::SameAsJumble => "same as jumble",
            Self::TooLong => "longer than jumble",
            Self::NotAlphabetic => "not alphabetic",
            Self::Unencodable => "could not be encoded",
            Self::MissingLetters => "letters not in jumble",
        };
        f.write_str(reason)
    }
}

/// Apply the structural checks to a normalized candidate
///
/// Checks run in order: equality with the jumble, length, then alphabet.
///
/// # Examples
/// ```
/// use jumble_solver::matcher::{Rejection, structural_rejection};
///
/// assert_eq!(structural_rejection("dog", "dog", 3), Some(Rejection::SameAsJumble));
/// assert_eq!(structural_rejection("dogs", "dog", 3), Some(Rejection::TooLong));
/// assert_eq!(structural_rejection("d-g", "dog", 3), Some(Rejection::NotAlphabetic));
/// assert_eq!(structural_rejection("god", "dog", 3), None);
/// ```
#[must_use]
pub fn structural_rejection(candidate: &str, jumble: &str, jumble_len: usize) -> Option<Rejection> {
    if candidate == jumble {
        return Some(Rejection::SameAsJumble);
    }

    // Byte length: a non-ASCII candidate that trips this would fail the alphabet check anyway
    if candidate.len() > jumble_len {
        return Some(Rejection::TooLong);
    }

    if candidate.is_empty() || !is_alphabetic(candidate) {
        return Some(Rejection::NotAlphabetic);
    }

    None
}
