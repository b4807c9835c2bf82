//! Spelling checks and suggestions for spellrank.
//!
//! This module provides the Levenshtein distance engine, the ordered word
//! dictionary and the ranker that turns the two into "did you mean?" lists.

pub mod dictionary;
pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use dictionary::*;
pub use levenshtein::*;
pub use suggest::*;
