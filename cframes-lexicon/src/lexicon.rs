//! Lexicon file parsing.

use crate::{ConnotationFrame, LexiconError, LexiconResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Connotation Frames keyed by verb.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    frames: BTreeMap<String, ConnotationFrame>,
}

impl Lexicon {
    /// Load a lexicon file.
    pub fn load(path: &Path) -> LexiconResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Load {
            path: path.display().to_string(),
            source,
        })?;
        let lexicon = Self::parse(&content)?;
        tracing::info!(path = %path.display(), verbs = lexicon.len(), "loaded connotation frames");
        Ok(lexicon)
    }

    /// Parse lexicon text.
    ///
    /// The first line is a header and is skipped. Blank lines are ignored.
    /// A later line for the same verb replaces the earlier one.
    pub fn parse(content: &str) -> LexiconResult<Self> {
        let mut lines = content.lines().enumerate();
        if lines.next().is_none() {
            return Err(LexiconError::MissingHeader);
        }

        let mut frames = BTreeMap::new();
        for (line_idx, line) in lines {
            let mut columns = line.split_whitespace();
            let verb = match columns.next() {
                Some(verb) => verb,
                None => continue,
            };

            let mut scores = Vec::new();
            for (column_idx, value) in columns.enumerate() {
                let score: f32 = value.parse().map_err(|_| LexiconError::InvalidScore {
                    line: line_idx + 1,
                    column: column_idx + 2,
                    value: value.to_string(),
                })?;
                scores.push(score);
            }
            if scores.len() != 12 {
                tracing::debug!(verb, columns = scores.len(), "incomplete connotation frame");
            }

            frames.insert(verb.to_string(), ConnotationFrame::from_scores(scores));
        }

        Ok(Self { frames })
    }

    pub fn get(&self, verb: &str) -> Option<&ConnotationFrame> {
        self.frames.get(verb)
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.frames.contains_key(verb)
    }

    /// Verbs in alphabetical order.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConnotationFrame)> {
        self.frames.iter().map(|(verb, frame)| (verb.as_str(), frame))
    }

    pub fn insert(&mut self, verb: impl Into<String>, frame: ConnotationFrame) {
        self.frames.insert(verb.into(), frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
