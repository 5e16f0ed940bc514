//! Jumble Solver
//!
//! Finds every word in a word list that can be spelled from the letters of a jumble,
//! using either letter histograms or prime-product hashing.
//!
//! # Quick Start
//!
//! ```rust
//! use jumble_solver::encoding::PrimeProductEncoder;
//! use jumble_solver::matcher::Matcher;
//!
//! let matcher = Matcher::new(PrimeProductEncoder, "dog").unwrap();
//! let found = matcher.solve(["do", "go", "god", "cat", "dogs", "DOG"]);
//! assert_eq!(found, vec!["do", "go", "god"]);
//! ```

// Core domain types
pub mod core;

// Letter-multiset encodings
pub mod encoding;

// Candidate filtering
pub mod matcher;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use encoding::EncoderKind;
pub use matcher::{JumbleError, Matcher, solve};
