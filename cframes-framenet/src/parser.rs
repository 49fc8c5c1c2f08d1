//! Dependency parser trait and precomputed parse store.

use crate::{parse_conllu, CorpusError, CorpusResult, ParseError};
use cframes::ParsedSentence;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Produces a dependency parse for a sentence.
pub trait DependencyParser {
    fn parse(&self, text: &str) -> Result<ParsedSentence, ParseError>;
}

/// Parses computed ahead of time, looked up by sentence text.
///
/// Lookup ignores leading and trailing whitespace. The returned parse carries
/// the requested text, with token offsets shifted to match it.
#[derive(Debug, Clone, Default)]
pub struct PrecomputedParses {
    sentences: HashMap<String, ParsedSentence>,
}

impl PrecomputedParses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sentences(sentences: impl IntoIterator<Item = ParsedSentence>) -> Self {
        let mut parses = Self::new();
        for sentence in sentences {
            parses.insert(sentence);
        }
        parses
    }

    /// Add a parse, replacing any earlier parse of the same text.
    pub fn insert(&mut self, sentence: ParsedSentence) {
        self.sentences.insert(sentence.text.trim().to_string(), sentence);
    }

    /// Read a JSON array of parsed sentences.
    pub fn from_json_str(json: &str) -> CorpusResult<Self> {
        let sentences: Vec<ParsedSentence> =
            serde_json::from_str(json).map_err(|source| CorpusError::Json {
                path: "<memory>".to_string(),
                source,
            })?;
        Ok(Self::from_sentences(sentences))
    }

    /// Load parses from a `.conllu` file or a JSON file.
    pub fn load(path: &Path) -> CorpusResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| CorpusError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let is_conllu = path
            .extension()
            .map_or(false, |e| e == "conllu" || e == "conll");
        let parses = if is_conllu {
            Self::from_sentences(parse_conllu(&content)?)
        } else {
            let sentences: Vec<ParsedSentence> =
                serde_json::from_str(&content).map_err(|source| CorpusError::Json {
                    path: path.display().to_string(),
                    source,
                })?;
            Self::from_sentences(sentences)
        };
        tracing::info!(path = %path.display(), sentences = parses.len(), "loaded parses");
        Ok(parses)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// All stored parses, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ParsedSentence> {
        self.sentences.values()
    }
}

impl DependencyParser for PrecomputedParses {
    fn parse(&self, text: &str) -> Result<ParsedSentence, ParseError> {
        let sentence = self
            .sentences
            .get(text.trim())
            .ok_or_else(|| ParseError::Unavailable(text.to_string()))?;

        if let Some((idx, token)) = sentence
            .tokens
            .iter()
            .enumerate()
            .find(|(_, token)| token.head >= sentence.tokens.len())
        {
            return Err(ParseError::Malformed(format!(
                "token {} '{}' has head {} outside the sentence",
                idx, token.text, token.head
            )));
        }

        Ok(rebase(sentence, text))
    }
}

/// Copy of `sentence` whose text is `text`, which differs from it at most by
/// surrounding whitespace.
fn rebase(sentence: &ParsedSentence, text: &str) -> ParsedSentence {
    let mut rebased = sentence.clone();
    if rebased.text == text {
        return rebased;
    }

    let from = leading_whitespace(&sentence.text);
    let to = leading_whitespace(text);
    for token in &mut rebased.tokens {
        token.idx = token.idx.saturating_sub(from) + to;
    }
    rebased.text = text.to_string();
    rebased
}

fn leading_whitespace(text: &str) -> usize {
    text.chars().take_while(|c| c.is_whitespace()).count()
}
