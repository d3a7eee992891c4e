//! Error types for gender filtering
//!
//! `CoreError` covers failures that abort a run (configuration and I/O).
//! `TagError` covers failures local to one sentence; callers drop the
//! offending line and continue.

use std::path::PathBuf;
use thiserror::Error;

/// Run-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    /// Target language outside the supported set
    #[error("unsupported target language '{code}' (supported: {supported})")]
    UnsupportedLanguage {
        /// The rejected language code
        code: String,
        /// Comma-separated list of accepted codes
        supported: String,
    },

    /// Gender code outside the supported set
    #[error("unsupported gender '{0}' (supported: fem, msc)")]
    UnsupportedGender(String),

    /// The morphological dictionary could not be found
    #[error("morphological dictionary not found: {}", path.display())]
    DictionaryNotFound {
        /// Path that was tried
        path: PathBuf,
    },

    /// A resolver needs a dictionary but none was configured
    #[error("language '{0}' requires a morphological dictionary")]
    DictionaryRequired(String),

    /// Invalid language profile or settings
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Parallel inputs do not have the same number of lines
    #[error("parallel inputs are misaligned: {what} ended at line {line}")]
    Misaligned {
        /// Which input ran out early
        what: String,
        /// 1-based line number where the mismatch was detected
        line: u64,
    },

    /// I/O failure while reading inputs or writing outputs
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-sentence errors raised while tagging
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Sentence has no tokens
    #[error("empty sentence")]
    Empty,

    /// Sentence longer than the configured limit
    #[error("sentence has {chars} characters (limit {limit})")]
    TooLong {
        /// Character count of the sentence
        chars: usize,
        /// Configured limit
        limit: usize,
    },

    /// Line is not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    Encoding(String),

    /// Pre-computed annotation could not be parsed
    #[error("malformed annotation: {0}")]
    Malformed(String),
}

/// Result type for run-level operations
pub type Result<T> = std::result::Result<T, CoreError>;
