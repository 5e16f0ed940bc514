//! Prime-product encoding
//!
//! Each letter is assigned one of the first 26 primes and a word is hashed to the
//! product of its letters' primes:
//!
//! ```text
//! "cab" => 5 × 2 × 3 = 30
//! "ba"  => 3 × 2     = 6    // 30 % 6 == 0, so "ba" fits in "cab"
//! ```
//!
//! By unique factorization two words share a letter multiset exactly when their
//! products are equal, and A's letters fit in B's exactly when A's product divides
//! B's. Products overflow `u128` at around 20 high letters, so they are `BigUint`.

use super::{EncodeError, Encoder};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;

/// The first 26 primes, indexed by `letter - b'a'`
pub const PRIMES: [u32; 26] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101,
];

/// Look up the prime assigned to a lowercase letter
///
/// # Errors
/// Returns `EncodeError::InvalidCharacter` for anything outside `a..=z`.
///
/// # Examples
/// ```
/// use jumble_solver::encoding::prime_for_letter;
///
/// assert_eq!(prime_for_letter('a'), Ok(2));
/// assert_eq!(prime_for_letter('z'), Ok(101));
/// assert!(prime_for_letter('A').is_err());
/// ```
pub fn prime_for_letter(letter: char) -> Result<u32, EncodeError> {
    if letter.is_ascii_lowercase() {
        Ok(PRIMES[(letter as u8 - b'a') as usize])
    } else {
        Err(EncodeError::InvalidCharacter(letter))
    }
}

/// Product of the primes of every letter in a word
///
/// The empty word hashes to 1, which divides every product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimeProduct(BigUint);

impl PrimeProduct {
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &BigUint {
        &self.0
    }

    /// Whether `other`'s product divides this one
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        // Products are never zero, so the remainder is always defined
        (&self.0 % &other.0).is_zero()
    }
}

impl fmt::Display for PrimeProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encoder that hashes a word to the product of its letters' primes
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeProductEncoder;

impl Encoder for PrimeProductEncoder {
    type Encoding = PrimeProduct;

    fn encode(&self, word: &str) -> Result<PrimeProduct, EncodeError> {
        word.chars()
            .try_fold(BigUint::one(), |product, c| -> Result<BigUint, EncodeError> {
                Ok(product * prime_for_letter(c)?)
            })
            .map(PrimeProduct)
    }

    fn contains(&self, jumble: &PrimeProduct, candidate: &PrimeProduct) -> bool {
        jumble.is_divisible_by(candidate)
    }
}
