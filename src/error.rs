//! Error types for the spellrank library.
//!
//! All fallible operations return [`SpellRankError`] through the [`Result`]
//! alias. The distance engine and the ranker never fail; errors come from
//! loading dictionaries and validating input at the edges.
//!
//! # Examples
//!
//! ```
//! use spellrank::error::{Result, SpellRankError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellRankError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellrank operations.
#[derive(Error, Debug)]
pub enum SpellRankError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dictionary source is missing, unreadable or malformed
    #[error("Dictionary load error: {0}")]
    DictionaryLoad(String),

    /// Invalid input handed to the library (empty query, bad config)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal failures such as thread pool construction
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for operations that may fail with SpellRankError.
pub type Result<T> = std::result::Result<T, SpellRankError>;

impl SpellRankError {
    /// Create a new dictionary load error.
    pub fn dictionary_load<S: Into<String>>(msg: S) -> Self {
        SpellRankError::DictionaryLoad(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellRankError::InvalidArgument(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        SpellRankError::Internal(msg.into())
    }
}
