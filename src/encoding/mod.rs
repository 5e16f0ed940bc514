//! Letter-multiset encodings
//!
//! An [`Encoder`] turns a normalized word into a compact representation and decides
//! whether one encoding is contained in another. Two implementations exist:
//!
//! - [`HistogramEncoder`]: letter → occurrence count
//! - [`PrimeProductEncoder`]: product of one prime per letter (a=2 … z=101)
//!
//! Both agree on every input made of `a..=z`.

mod histogram;
mod prime;

pub use histogram::{HistogramEncoder, LetterHistogram};
pub use prime::{PRIMES, PrimeProduct, PrimeProductEncoder, prime_for_letter};

use std::fmt;

/// Error raised by encoders when given a character outside `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    InvalidCharacter(char),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => {
                write!(f, "Input must be a lowercase letter, got {c:?}")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// A strategy for encoding words and testing multiset containment
pub trait Encoder {
    /// Encoded form of one word
    type Encoding;

    /// Encode a normalized word
    ///
    /// # Errors
    /// Returns `EncodeError::InvalidCharacter` for any character outside `a..=z`.
    fn encode(&self, word: &str) -> Result<Self::Encoding, EncodeError>;

    /// Whether `candidate`'s letters form a sub-multiset of `jumble`'s letters
    fn contains(&self, jumble: &Self::Encoding, candidate: &Self::Encoding) -> bool;
}

/// Runtime selector for an encoding strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncoderKind {
    /// Letter occurrence counts
    Histogram,
    /// Prime factorization hashing (default)
    #[default]
    PrimeProduct,
}

impl EncoderKind {
    /// Create strategy from name string
    ///
    /// Supported names: "histogram", "hist", "prime", "prime-product", "hash".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "histogram" | "hist" => Some(Self::Histogram),
            "prime" | "prime-product" | "hash" => Some(Self::PrimeProduct),
            _ => None,
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Histogram => "histogram",
            Self::PrimeProduct => "prime",
        }
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
