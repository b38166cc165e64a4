//! Polarity error types.
//!
//! Sentiment analysis itself is total: every input string produces a result.
//! Errors only arise at the edges, while loading a lexicon or a configuration
//! file, or when a caller-facing surface rejects input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing or driving sentiment analysis.
#[derive(Debug, Error)]
pub enum PolarityError {
    /// Lexicon file could not be read
    #[error("Failed to read lexicon file {path}: {source}")]
    LexiconIo {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Lexicon text is malformed
    #[error("Malformed lexicon entry on line {line}: {reason}")]
    LexiconParse {
        /// 1-based line number of the offending entry
        line: usize,
        /// Why the entry was rejected
        reason: String,
    },

    /// A lexicon score is not a finite number
    #[error("Invalid score for '{word}': {value}")]
    InvalidScore {
        /// The word whose score was rejected
        word: String,
        /// The rejected value
        value: f64,
    },

    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Layered configuration sources could not be merged or deserialized
    #[error("Configuration source error: {0}")]
    Config(#[from] config::ConfigError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Blank or whitespace-only input at a caller-facing boundary
    #[error("Please enter some text.")]
    EmptyInput,
}

/// Result type for polarity operations.
pub type PolarityResult<T> = Result<T, PolarityError>;

impl From<serde_json::Error> for PolarityError {
    fn from(err: serde_json::Error) -> Self {
        PolarityError::Serialization(err.to_string())
    }
}

impl PolarityError {
    /// Create a lexicon parse error for a given line.
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        PolarityError::LexiconParse {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable by the caller supplying different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PolarityError::LexiconParse { .. }
                | PolarityError::InvalidScore { .. }
                | PolarityError::EmptyInput
        )
    }

    /// Check if this error was caused by user-supplied input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PolarityError::EmptyInput
                | PolarityError::LexiconParse { .. }
                | PolarityError::InvalidScore { .. }
                | PolarityError::Serialization(_)
        )
    }
}
