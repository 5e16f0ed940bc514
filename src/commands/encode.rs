//! Word encoding command
//!
//! Shows both encodings of a single word side by side.

use crate::core::{Word, WordError};
use crate::encoding::{EncodeError, Encoder, HistogramEncoder, PrimeProductEncoder};
use num_bigint::BigUint;

/// Both encodings of one word
#[derive(Debug, Clone)]
pub struct EncodingReport {
    pub word: String,
    /// `(letter, count)` pairs in alphabetical order
    pub histogram: Vec<(char, u32)>,
    pub prime_product: BigUint,
    /// Bits needed to store the prime product
    pub prime_bits: u64,
}

/// Encode a word with every strategy
///
/// # Errors
///
/// Returns an error if the normalized word contains anything other than letters.
pub fn encode_word(raw: &str) -> Result<EncodingReport, WordError> {
    let word = Word::new(raw)?;

    let histogram = HistogramEncoder.encode(word.text()).map_err(to_word_error)?;
    let product = PrimeProductEncoder.encode(word.text()).map_err(to_word_error)?;

    Ok(EncodingReport {
        word: word.text().to_string(),
        histogram: histogram.sorted_counts(),
        prime_bits: product.value().bits(),
        prime_product: product.value().clone(),
    })
}

const fn to_word_error(err: EncodeError) -> WordError {
    match err {
        EncodeError::InvalidCharacter(c) => WordError::InvalidCharacter(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_word_reports_both_encodings() {
        let report = encode_word(" Dog ").unwrap();
        assert_eq!(report.word, "dog");
        assert_eq!(report.histogram, vec![('d', 1), ('g', 1), ('o', 1)]);
        assert_eq!(report.prime_product, BigUint::from(5593u32));
        assert_eq!(report.prime_bits, 13);
    }

    #[test]
    fn encode_word_rejects_non_letters() {
        assert_eq!(
            encode_word("a-b").err(),
            Some(WordError::InvalidCharacter('-'))
        );
    }

    #[test]
    fn encode_long_word() {
        let report = encode_word(&"z".repeat(30)).unwrap();
        assert_eq!(report.histogram, vec![('z', 30)]);
        assert_eq!(report.prime_product, BigUint::from(101u32).pow(30));
        assert!(report.prime_bits > 128);
    }
}
