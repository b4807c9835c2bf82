//! # spellrank
//!
//! A small spell checker that ranks dictionary words by Levenshtein distance.
//!
//! ## Features
//!
//! - Exact Levenshtein distance with a two-row dynamic programming table
//! - Insertion-ordered dictionaries loaded from JSON objects or word lists
//! - Deterministic top-K ranking with stable tie-breaks
//! - Optional parallel dictionary scan on a rayon thread pool
//!
//! ```
//! use spellrank::spelling::{rank, SpellCheck, SpellingDictionary};
//!
//! let dictionary = SpellingDictionary::from_words(["cat", "bat", "rat", "hat"]);
//! match rank("cot", &dictionary, 10) {
//!     SpellCheck::Correct => println!("Spelled correctly"),
//!     SpellCheck::Suggestions(ranked) => {
//!         assert_eq!(ranked.words(), vec!["cat", "bat", "rat", "hat"]);
//!     }
//! }
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
