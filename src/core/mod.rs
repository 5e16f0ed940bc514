//! Core domain types for jumbles
//!
//! Normalization rules and the validated [`Word`] type, with zero external dependencies.

mod word;

pub use word::{Word, WordError, is_alphabetic, normalize};
