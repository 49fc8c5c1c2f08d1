//! Error types for corpus and parse loading.

use thiserror::Error;

/// Errors that can occur while loading corpus data.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Error reading a data file.
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },

    /// Malformed JSON in a data file.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two lexical units share an id.
    #[error("duplicate lexical unit id {0}")]
    DuplicateLu(u32),

    /// A frame element whose start lies after its end.
    #[error("lexical unit {lu}: frame element {name} has start {start} after end {end}")]
    InvertedFrameElement {
        lu: u32,
        name: String,
        start: usize,
        end: usize,
    },

    /// Malformed CoNLL-U input.
    #[error("parse error at line {line}: {message}")]
    Conllu { line: usize, message: String },
}

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Errors returned by a [`DependencyParser`](crate::DependencyParser).
#[derive(Debug, Error)]
pub enum ParseError {
    /// The parser has no analysis for this sentence.
    #[error("no parse available for sentence: {0}")]
    Unavailable(String),

    /// The parser produced an inconsistent tree.
    #[error("malformed parse: {0}")]
    Malformed(String),
}
