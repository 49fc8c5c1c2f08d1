//! Error types for the mapping pipeline.

use cframes_framenet::CorpusError;
use cframes_lexicon::LexiconError;
use thiserror::Error;

/// Errors that can occur while running the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// Error reading or parsing the TOML configuration.
    #[error("invalid config {path}: {message}")]
    Config { path: String, message: String },

    /// A dependency label pattern failed to compile.
    #[error("invalid dependency pattern: {0}")]
    Pattern(String),

    /// Error saving or loading a stored object.
    #[error("object store error: {path}: {message}")]
    Store { path: String, message: String },
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
