//! Jumble matching
//!
//! The [`Matcher`] encodes a jumble once and then filters a word list down to the
//! entries that can be spelled from the jumble's letters.

mod engine;
mod filter;

pub use engine::{JumbleContext, Matcher};
pub use filter::{Rejection, structural_rejection};

use crate::core::WordError;
use crate::encoding::{EncodeError, EncoderKind, HistogramEncoder, PrimeProductEncoder};
use std::fmt;

/// Error for a jumble that cannot be solved at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumbleError {
    /// The normalized jumble contains a character outside `a..=z`
    InvalidInput { jumble: String, character: char },
}

impl JumbleError {
    pub(crate) fn from_word_error(jumble: &str, err: &WordError) -> Self {
        match *err {
            WordError::InvalidCharacter(character) => Self::InvalidInput {
                jumble: jumble.to_string(),
                character,
            },
        }
    }

    pub(crate) fn from_encode_error(jumble: &str, err: &EncodeError) -> Self {
        match *err {
            EncodeError::InvalidCharacter(character) => Self::InvalidInput {
                jumble: jumble.to_string(),
                character,
            },
        }
    }
}

impl fmt::Display for JumbleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { jumble, character } => write!(
                f,
                "Input must be only letters: {character:?} in {:?}",
                jumble.trim()
            ),
        }
    }
}

impl std::error::Error for JumbleError {}

/// Find every line of `lines` that can be spelled from `jumble`
///
/// Matching lines are returned unchanged and in input order.
///
/// # Errors
/// Returns `JumbleError::InvalidInput` if the jumble is not made of letters.
///
/// # Examples
/// ```
/// use jumble_solver::encoding::EncoderKind;
/// use jumble_solver::matcher::solve;
///
/// let words = ["a", "aa", "ab", "aab", "b", "bb"];
/// let found = solve(EncoderKind::Histogram, "aab", words).unwrap();
/// assert_eq!(found, vec!["a", "aa", "ab", "b"]);
/// ```
pub fn solve<I>(kind: EncoderKind, jumble: &str, lines: I) -> Result<Vec<String>, JumbleError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Ok(match kind {
        EncoderKind::Histogram => Matcher::new(HistogramEncoder, jumble)?.solve(lines),
        EncoderKind::PrimeProduct => Matcher::new(PrimeProductEncoder, jumble)?.solve(lines),
    })
}
