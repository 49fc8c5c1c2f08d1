//! Connotation Frame to FrameNet role mapping.
//!
//! The pipeline runs in three steps:
//!
//! 1. [`verb_lu_mapping`] pairs each lexicon verb with the verbal lexical
//!    units that evoke a frame for it
//! 2. [`example_sentences`] picks one annotated example sentence per LU
//! 3. [`RoleMapper::map`] detects the logical subject and object of the LU
//!    lemma in that sentence and relabels the Connotation Frame's Agent and
//!    Theme with the coinciding frame elements

use crate::{MappingConfig, PipelineResult, EXAMPLES_OBJECT, VERB_LU_OBJECT};
use cframes::{CfRole, RoleAlignment, RoleDetector, RoleMapping, SpanAligner};
use cframes_framenet::{DependencyParser, FrameCorpus, LexicalUnit, LuId};
use cframes_lexicon::{ConnotationFrame, Lexicon};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A lexicon verb with the lexical units it evokes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbLuEntry {
    pub verb: String,
    /// Verbal LU ids, ascending
    pub lu_ids: Vec<LuId>,
    pub frame: ConnotationFrame,
}

/// One example sentence for one lexical unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleEntry {
    pub verb: String,
    pub lu_id: LuId,
    pub sentence: String,
    pub frame: ConnotationFrame,
}

/// Result of mapping one lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub verb: String,
    pub lu_id: LuId,
    /// Name of the FrameNet frame evoked by the LU
    pub frame: String,
    /// Example sentence, if the LU has one
    pub sentence: Option<String>,
    pub agent: RoleMapping,
    pub theme: RoleMapping,
    /// True if the subject was passive and the roles were swapped
    pub passive: bool,
}

impl MappingRecord {
    fn not_possible(verb: &str, lu: &LexicalUnit, sentence: Option<String>) -> Self {
        Self {
            verb: verb.to_string(),
            lu_id: lu.id,
            frame: lu.frame.clone(),
            sentence,
            agent: RoleMapping::NotPossible,
            theme: RoleMapping::NotPossible,
            passive: false,
        }
    }

    fn from_alignment(
        verb: &str,
        lu: &LexicalUnit,
        sentence: String,
        alignment: RoleAlignment,
    ) -> Self {
        Self {
            verb: verb.to_string(),
            lu_id: lu.id,
            frame: lu.frame.clone(),
            sentence: Some(sentence),
            agent: alignment.agent,
            theme: alignment.theme,
            passive: alignment.passive,
        }
    }

    /// True if at least one role could be mapped.
    pub fn is_mapped(&self) -> bool {
        self.agent.is_possible() || self.theme.is_possible()
    }
}

impl std::fmt::Display for MappingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {} | {}",
            self.verb,
            self.lu_id,
            self.frame,
            self.agent.describe(CfRole::Agent),
            self.theme.describe(CfRole::Theme)
        )?;
        if self.passive {
            f.write_str(" (passive)")?;
        }
        Ok(())
    }
}

/// Pair every lexicon verb with its verbal lexical units.
///
/// Verbs without any LU in the corpus are left out.
pub fn verb_lu_mapping<C: FrameCorpus>(lexicon: &Lexicon, corpus: &C) -> Vec<VerbLuEntry> {
    let entries: Vec<VerbLuEntry> = lexicon
        .iter()
        .filter_map(|(verb, frame)| {
            let lu_ids: Vec<LuId> = corpus.lexical_units(verb).iter().map(|lu| lu.id).collect();
            if lu_ids.is_empty() {
                return None;
            }
            Some(VerbLuEntry {
                verb: verb.to_string(),
                lu_ids,
                frame: frame.clone(),
            })
        })
        .collect();

    tracing::info!(
        verbs = lexicon.len(),
        mapped = entries.len(),
        "paired lexicon verbs with lexical units"
    );
    entries
}

/// One example sentence per lexical unit.
///
/// LUs without an annotated exemplar are skipped.
pub fn example_sentences<C: FrameCorpus>(entries: &[VerbLuEntry], corpus: &C) -> Vec<ExampleEntry> {
    let mut examples = Vec::new();
    for entry in entries {
        for &lu_id in &entry.lu_ids {
            let example = corpus.lexical_unit(lu_id).and_then(LexicalUnit::example);
            match example {
                Some(exemplar) => examples.push(ExampleEntry {
                    verb: entry.verb.clone(),
                    lu_id,
                    sentence: exemplar.text.clone(),
                    frame: entry.frame.clone(),
                }),
                None => tracing::warn!(verb = %entry.verb, lu_id, "no annotated example sentence"),
            }
        }
    }
    examples
}

/// Maps Connotation Frame roles onto frame elements.
#[derive(Debug, Clone, Default)]
pub struct RoleMapper {
    detector: RoleDetector,
    aligner: SpanAligner,
}

impl RoleMapper {
    pub fn new(detector: RoleDetector, aligner: SpanAligner) -> Self {
        Self { detector, aligner }
    }

    /// Map every lexical unit of every entry.
    pub fn map<C, P>(&self, entries: &[VerbLuEntry], corpus: &C, parser: &P) -> Vec<MappingRecord>
    where
        C: FrameCorpus,
        P: DependencyParser,
    {
        let records: Vec<MappingRecord> = entries
            .iter()
            .flat_map(move |entry| {
                entry
                    .lu_ids
                    .iter()
                    .filter_map(move |&lu_id| match corpus.lexical_unit(lu_id) {
                        Some(lu) => Some(self.map_lexical_unit(&entry.verb, lu, parser)),
                        None => {
                            tracing::warn!(verb = %entry.verb, lu_id, "lexical unit missing from corpus");
                            None
                        }
                    })
            })
            .collect();

        let mapped = records.iter().filter(|r| r.is_mapped()).count();
        tracing::info!(records = records.len(), mapped, "mapped connotation frame roles");
        records
    }

    /// Map one lexical unit using its example sentence.
    ///
    /// Multiword lemmas such as `give up` are detected through their first
    /// word. Missing examples and unparseable sentences give a record with
    /// both roles `NotPossible`.
    pub fn map_lexical_unit<P: DependencyParser>(
        &self,
        verb: &str,
        lu: &LexicalUnit,
        parser: &P,
    ) -> MappingRecord {
        let exemplar = match lu.example() {
            Some(exemplar) => exemplar,
            None => {
                tracing::warn!(verb, lu_id = lu.id, "no annotated example sentence");
                return MappingRecord::not_possible(verb, lu, None);
            }
        };

        let parsed = match parser.parse(&exemplar.text) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(verb, lu_id = lu.id, error = %e, "sentence could not be parsed");
                return MappingRecord::not_possible(verb, lu, Some(exemplar.text.clone()));
            }
        };

        // FE offsets index the exemplar text
        let detections = self.detector.detect(&parsed, lu.head_word());
        let alignment = self
            .aligner
            .align(&exemplar.text, &detections, &exemplar.frame_elements);
        MappingRecord::from_alignment(verb, lu, exemplar.text.clone(), alignment)
    }
}

/// Run all three steps with `config`, storing the verb/LU pairing, the
/// example sentences and the records (as `name`) in the configured store.
///
/// Returns the records and the path they were stored at.
pub fn run_mapping<C, P>(
    config: &MappingConfig,
    lexicon: &Lexicon,
    corpus: &C,
    parser: &P,
    name: &str,
) -> PipelineResult<(Vec<MappingRecord>, PathBuf)>
where
    C: FrameCorpus,
    P: DependencyParser,
{
    let mapper = config.role_mapper()?;
    let store = config.object_store();

    let entries = verb_lu_mapping(lexicon, corpus);
    store.save(VERB_LU_OBJECT, &entries)?;

    let examples = example_sentences(&entries, corpus);
    store.save(EXAMPLES_OBJECT, &examples)?;

    let records = mapper.map(&entries, corpus, parser);
    let path = store.save(name, &records)?;
    Ok((records, path))
}
