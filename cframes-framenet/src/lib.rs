//! FrameNet corpus access and dependency parses for cframes.
//!
//! The FrameNet API and the dependency-parsing model are external to the
//! mapping heuristic. This crate puts them behind two traits and provides
//! file-backed implementations:
//!
//! - [`FrameCorpus`] / [`JsonCorpus`] - lexical units, exemplars and gold FEs
//!   from a JSON export of FrameNet
//! - [`DependencyParser`] / [`PrecomputedParses`] - parses produced ahead of
//!   time, read from JSON or CoNLL-U
//!
//! ## Modules
//!
//! - [`corpus`] - Lexical units and corpus lookups
//! - [`parser`] - Parser trait and precomputed parse store
//! - [`conllu`] - CoNLL-U reader
//! - [`errors`] - Error types

pub mod conllu;
pub mod corpus;
pub mod errors;
pub mod parser;

pub use conllu::parse_conllu;
pub use corpus::{Exemplar, FrameCorpus, JsonCorpus, LexicalUnit, LuId};
pub use errors::{CorpusError, CorpusResult, ParseError};
pub use parser::{DependencyParser, PrecomputedParses};
