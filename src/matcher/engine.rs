//! Main jumble matcher interface

use super::filter::{Rejection, structural_rejection};
use super::JumbleError;
use crate::core::Word;
use crate::encoding::Encoder;
use rayon::prelude::*;

/// The jumble's normalized letters, length and encoding
///
/// Computed once and shared read-only by every candidate test.
#[derive(Debug, Clone)]
pub struct JumbleContext<T> {
    word: Word,
    encoding: T,
}

impl<T> JumbleContext<T> {
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        self.word.text()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn encoding(&self) -> &T {
        &self.encoding
    }
}

/// Jumble matcher
///
/// Tests candidate words against one jumble using the given encoder.
pub struct Matcher<E: Encoder> {
    encoder: E,
    context: JumbleContext<E::Encoding>,
}

impl<E: Encoder> Matcher<E> {
    /// Validate and encode the jumble
    ///
    /// # Errors
    /// Returns `JumbleError::InvalidInput` if the normalized jumble contains
    /// anything other than `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use jumble_solver::encoding::HistogramEncoder;
    /// use jumble_solver::matcher::Matcher;
    ///
    /// let matcher = Matcher::new(HistogramEncoder, " DOG ").unwrap();
    /// assert_eq!(matcher.solve(["do", "cat", "god"]), vec!["do", "god"]);
    ///
    /// assert!(Matcher::new(HistogramEncoder, "a b").is_err());
    /// ```
    pub fn new(encoder: E, jumble: &str) -> Result<Self, JumbleError> {
        let word = Word::new(jumble).map_err(|e| JumbleError::from_word_error(jumble, &e))?;
        let encoding = encoder
            .encode(word.text())
            .map_err(|e| JumbleError::from_encode_error(jumble, &e))?;

        log::debug!("jumble context ready: {:?} ({} letters)", word.text(), word.len());

        Ok(Self {
            encoder,
            context: JumbleContext { word, encoding },
        })
    }

    #[inline]
    #[must_use]
    pub const fn context(&self) -> &JumbleContext<E::Encoding> {
        &self.context
    }

    #[inline]
    #[must_use]
    pub const fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Test one raw candidate line
    ///
    /// Returns `None` when the candidate matches, otherwise the first reason it failed.
    #[must_use]
    pub fn rejection(&self, line: &str) -> Option<Rejection> {
        let candidate = crate::core::normalize(line);

        if let Some(reason) =
            structural_rejection(&candidate, self.context.letters(), self.context.len())
        {
            return Some(reason);
        }

        let Ok(encoding) = self.encoder.encode(&candidate) else {
            return Some(Rejection::Unencodable);
        };

        if self.encoder.contains(&self.context.encoding, &encoding) {
            None
        } else {
            Some(Rejection::MissingLetters)
        }
    }

    /// Whether a raw candidate line can be spelled from the jumble
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        match self.rejection(line) {
            None => true,
            Some(reason) => {
                log::trace!("rejected {:?}: {reason}", line.trim());
                false
            }
        }
    }

    /// Lazily keep the matching lines of any line source, in order
    pub fn matches<I>(&self, lines: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        lines.into_iter().filter(|line| self.is_match(line.as_ref()))
    }

    /// Collect the matching lines, unchanged, in input order
    pub fn solve<I>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut scanned = 0usize;
        let found: Vec<String> = lines
            .into_iter()
            .inspect(|_| scanned += 1)
            .filter(|line| self.is_match(line.as_ref()))
            .map(|line| line.as_ref().to_string())
            .collect();

        log::info!(
            "{} of {scanned} candidates fit {:?}",
            found.len(),
            self.context.letters()
        );
        found
    }

    /// Like [`solve`](Self::solve) over a fallible source such as a file reader
    ///
    /// # Errors
    /// Stops at and returns the first error produced by `lines`.
    pub fn try_solve<I, S, Err>(&self, lines: I) -> Result<Vec<String>, Err>
    where
        I: IntoIterator<Item = Result<S, Err>>,
        S: AsRef<str> + Into<String>,
    {
        let mut found = Vec::new();
        for line in lines {
            let line = line?;
            if self.is_match(line.as_ref()) {
                found.push(line.into());
            }
        }
        Ok(found)
    }
}

impl<E> Matcher<E>
where
    E: Encoder + Sync,
    E::Encoding: Sync,
{
    /// Test candidates on the rayon pool
    ///
    /// Output order equals input order.
    pub fn solve_parallel<S>(&self, lines: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let found: Vec<String> = lines
            .par_iter()
            .filter(|line| self.is_match(line.as_ref()))
            .map(|line| line.as_ref().to_string())
            .collect();

        log::info!(
            "{} of {} candidates fit {:?} (parallel)",
            found.len(),
            lines.len(),
            self.context.letters()
        );
        found
    }
}
