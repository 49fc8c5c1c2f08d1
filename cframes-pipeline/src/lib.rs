//! Connotation Frame to FrameNet mapping pipeline.
//!
//! Ties the lexicon, the FrameNet corpus and the role heuristics together:
//! verbs are paired with lexical units, one example sentence is chosen per
//! LU, and the Connotation Frame Agent and Theme are relabelled with the
//! frame elements found at the detected subject and object.
//!
//! ## Modules
//!
//! - [`mapping`] - Verb/LU pairing, example selection and role mapping
//! - [`statistics`] - Frames-per-verb histogram
//! - [`config`] - TOML configuration
//! - [`store`] - Object store for intermediate results
//! - [`errors`] - Error types

pub mod config;
pub mod errors;
pub mod mapping;
pub mod statistics;
pub mod store;

pub use config::{AlignerConfig, DetectorConfig, MappingConfig, StoreConfig};
pub use errors::{PipelineError, PipelineResult};
pub use mapping::{
    example_sentences, run_mapping, verb_lu_mapping, ExampleEntry, MappingRecord, RoleMapper,
    VerbLuEntry,
};
pub use statistics::{frame_counts, frames_per_verb, histogram_lines};
pub use store::{ObjectStore, StoreFormat};

/// Object name for the verb to lexical unit pairing.
pub const VERB_LU_OBJECT: &str = "mapping_verb_lu_cfs";
/// Object name for the chosen example sentences.
pub const EXAMPLES_OBJECT: &str = "sentence_mapping";

#[cfg(test)]
mod tests {
    mod mapping;
    mod statistics;
}
