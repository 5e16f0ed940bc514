//! Word lists for jumble solving
//!
//! Candidate words come from plain text files read line by line.

pub mod loader;

/// Word list used when none is given on the command line
pub const DEFAULT_WORDLIST: &str = "word_list.txt";
