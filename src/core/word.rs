//! Word normalization and validated jumble words
//!
//! Every word that reaches an encoder has been lowercased and trimmed. A [`Word`]
//! additionally guarantees that only the letters `a..=z` remain.

use std::fmt;

/// Lowercase and trim a raw word
///
/// Normalization is idempotent: `normalize(&normalize(w)) == normalize(w)`.
///
/// # Examples
/// ```
/// use jumble_solver::core::normalize;
///
/// assert_eq!(normalize("  DoG \n"), "dog");
/// assert_eq!(normalize(&normalize(" DoG ")), normalize(" DoG "));
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check that a normalized word consists only of `a..=z`
///
/// The empty string passes; callers that must reject it check length separately.
#[inline]
#[must_use]
pub fn is_alphabetic(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_lowercase())
}

/// A normalized word made only of the letters `a..=z`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The normalized word contains a character outside `a..=z`
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => {
                write!(f, "Word must contain only letters a-z, found {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Normalize and validate a raw word
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacter` with the first offending character
    /// if the normalized text contains anything other than `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use jumble_solver::core::Word;
    ///
    /// let word = Word::new(" BAT ").unwrap();
    /// assert_eq!(word.text(), "bat");
    ///
    /// assert!(Word::new("a b").is_err());
    /// assert!(Word::new("a's").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, WordError> {
        let text = normalize(raw);

        if let Some(c) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(c));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        // ASCII only, so bytes == letters
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("DOG"), "dog");
        assert_eq!(normalize("  dog\t"), "dog");
        assert_eq!(normalize("god\r\n"), "god");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in [" BaT ", "déjàvu", "a b", "\n\n", "ZzZ"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn normalize_keeps_internal_whitespace() {
        assert_eq!(normalize(" a b "), "a b");
    }

    #[test]
    fn is_alphabetic_accepts_letters_only() {
        assert!(is_alphabetic("abcxyz"));
        assert!(is_alphabetic(""));
        assert!(!is_alphabetic("a1"));
        assert!(!is_alphabetic("a-a"));
        assert!(!is_alphabetic("a b"));
        assert!(!is_alphabetic("Dog"));
        assert!(!is_alphabetic("déjà"));
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new(" CrAnE ").unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_empty_is_valid() {
        let word = Word::new("   ").unwrap();
        assert!(word.is_empty());
        assert_eq!(word.len(), 0);
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("a b"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(Word::new("aaa\nbbb"), Err(WordError::InvalidCharacter('\n')));
        assert_eq!(Word::new("-"), Err(WordError::InvalidCharacter('-')));
        assert_eq!(Word::new("déjàvu"), Err(WordError::InvalidCharacter('é')));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_error_display() {
        let err = WordError::InvalidCharacter('_');
        assert_eq!(err.to_string(), "Word must contain only letters a-z, found '_'");
    }
}
