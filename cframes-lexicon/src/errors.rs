//! Error types for lexicon loading.

use thiserror::Error;

/// Errors that can occur while loading a Connotation Frame lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Error reading the lexicon file.
    #[error("failed to load lexicon: {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file has no header line.
    #[error("lexicon is empty: expected a header line")]
    MissingHeader,

    /// A score column is not a number.
    #[error("invalid score at line {line}, column {column}: '{value}'")]
    InvalidScore {
        line: usize,
        column: usize,
        value: String,
    },
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;
