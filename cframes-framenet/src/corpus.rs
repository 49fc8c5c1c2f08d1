//! Lexical units and corpus lookups.

use crate::{CorpusError, CorpusResult};
use cframes::FrameElement;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// FrameNet lexical unit id.
pub type LuId = u32;

/// An annotated example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exemplar {
    pub text: String,
    /// Gold frame elements, in annotation order
    #[serde(default)]
    pub frame_elements: Vec<FrameElement>,
}

/// A FrameNet lexical unit: a lemma/POS pair evoking one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalUnit {
    pub id: LuId,
    /// Name in FrameNet notation, e.g. `love.v`
    pub name: String,
    /// Name of the evoked frame
    pub frame: String,
    #[serde(default)]
    pub exemplars: Vec<Exemplar>,
}

impl LexicalUnit {
    /// The lemma part of the name (`love` for `love.v`).
    pub fn lemma(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((lemma, _)) => lemma,
            None => &self.name,
        }
    }

    /// The first word of the lemma (`give` for `give up.v`), which is the
    /// word a dependency parse attaches arguments to.
    pub fn head_word(&self) -> &str {
        let lemma = self.lemma();
        lemma.split_whitespace().next().unwrap_or(lemma)
    }

    /// The part-of-speech suffix (`v` for `love.v`).
    pub fn pos(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, pos)| pos)
    }

    pub fn is_verb(&self) -> bool {
        self.pos() == Some("v")
    }

    /// The example sentence used for mapping: the first exemplar that
    /// carries at least one frame element.
    pub fn example(&self) -> Option<&Exemplar> {
        self.exemplars.iter().find(|e| !e.frame_elements.is_empty())
    }
}

/// Read access to a FrameNet-like corpus.
pub trait FrameCorpus {
    fn lexical_unit(&self, id: LuId) -> Option<&LexicalUnit>;

    /// Verbal lexical units whose lemma is `lemma`, ordered by id.
    fn lexical_units(&self, lemma: &str) -> Vec<&LexicalUnit>;

    /// Distinct names of the frames evoked by the verb `lemma`.
    fn frames_by_lemma(&self, lemma: &str) -> Vec<&str> {
        let mut frames: Vec<&str> = self
            .lexical_units(lemma)
            .into_iter()
            .map(|lu| lu.frame.as_str())
            .collect();
        frames.sort_unstable();
        frames.dedup();
        frames
    }

    /// Number of frames evoked by the verb `lemma`.
    fn frame_count(&self, lemma: &str) -> usize {
        self.frames_by_lemma(lemma).len()
    }
}

#[derive(Deserialize)]
struct CorpusFile {
    lexical_units: Vec<LexicalUnit>,
}

/// In-memory corpus read from a JSON export.
///
/// ```json
/// { "lexical_units": [
///     { "id": 1, "name": "love.v", "frame": "Experiencer_focused_emotion",
///       "exemplars": [ { "text": "I love you .",
///                        "frame_elements": [ { "start": 0, "end": 1, "name": "Experiencer" } ] } ] }
/// ] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCorpus {
    units: BTreeMap<LuId, LexicalUnit>,
    by_lemma: HashMap<String, Vec<LuId>>,
}

impl JsonCorpus {
    pub fn from_units(units: Vec<LexicalUnit>) -> CorpusResult<Self> {
        let mut corpus = Self::default();
        for lu in units {
            if corpus.units.contains_key(&lu.id) {
                return Err(CorpusError::DuplicateLu(lu.id));
            }
            check_frame_elements(&lu)?;
            if lu.is_verb() {
                corpus
                    .by_lemma
                    .entry(lu.lemma().to_lowercase())
                    .or_default()
                    .push(lu.id);
            }
            corpus.units.insert(lu.id, lu);
        }
        for ids in corpus.by_lemma.values_mut() {
            ids.sort_unstable();
        }
        Ok(corpus)
    }

    pub fn from_json_str(json: &str) -> CorpusResult<Self> {
        Self::from_json(json, "<memory>")
    }

    pub fn load(path: &Path) -> CorpusResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CorpusError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let corpus = Self::from_json(&content, &path.display().to_string())?;
        tracing::info!(path = %path.display(), lexical_units = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    fn from_json(json: &str, path: &str) -> CorpusResult<Self> {
        let file: CorpusFile = serde_json::from_str(json).map_err(|source| CorpusError::Json {
            path: path.to_string(),
            source,
        })?;
        Self::from_units(file.lexical_units)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All lexical units ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &LexicalUnit> {
        self.units.values()
    }
}

fn check_frame_elements(lu: &LexicalUnit) -> CorpusResult<()> {
    let inverted = lu
        .exemplars
        .iter()
        .flat_map(|exemplar| &exemplar.frame_elements)
        .find(|fe| !fe.is_well_formed());
    match inverted {
        Some(fe) => Err(CorpusError::InvertedFrameElement {
            lu: lu.id,
            name: fe.name.clone(),
            start: fe.start,
            end: fe.end,
        }),
        None => Ok(()),
    }
}

impl FrameCorpus for JsonCorpus {
    fn lexical_unit(&self, id: LuId) -> Option<&LexicalUnit> {
        self.units.get(&id)
    }

    fn lexical_units(&self, lemma: &str) -> Vec<&LexicalUnit> {
        self.by_lemma
            .get(&lemma.to_lowercase())
            .into_iter()
            .flatten()
            .filter_map(|id| self.units.get(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lu(id: LuId, name: &str, frame: &str) -> LexicalUnit {
        LexicalUnit {
            id,
            name: name.to_string(),
            frame: frame.to_string(),
            exemplars: Vec::new(),
        }
    }

    #[test]
    fn name_parts() {
        let unit = lu(1, "give up.v", "Abandonment");
        assert_eq!(unit.lemma(), "give up");
        assert_eq!(unit.head_word(), "give");
        assert_eq!(lu(3, "love.v", "A").head_word(), "love");
        assert_eq!(unit.pos(), Some("v"));
        assert!(unit.is_verb());
        assert!(!lu(2, "love.n", "Personal_relationship").is_verb());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = JsonCorpus::from_units(vec![lu(7, "love.v", "A"), lu(7, "hate.v", "B")]).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateLu(7)));
    }

    #[test]
    fn frames_are_distinct_and_sorted() {
        let corpus = JsonCorpus::from_units(vec![
            lu(3, "cook.v", "Cooking_creation"),
            lu(1, "cook.v", "Apply_heat"),
            lu(2, "cook.v", "Apply_heat"),
            lu(4, "cook.n", "People_by_vocation"),
        ])
        .unwrap();

        let ids: Vec<LuId> = corpus.lexical_units("cook").iter().map(|lu| lu.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(corpus.frames_by_lemma("Cook"), vec!["Apply_heat", "Cooking_creation"]);
        assert_eq!(corpus.frame_count("cook"), 2);
        assert_eq!(corpus.frame_count("bake"), 0);
    }
}
