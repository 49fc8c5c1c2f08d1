//! Dependency-parsed sentences.
//!
//! The tokens mirror what an external dependency parser reports: surface
//! text, character offset, dependency label, lemma and the index of the
//! governing head. The root token is its own head.

use crate::Span;
use serde::{Deserialize, Serialize};

/// A single parsed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Character offset of the token in the sentence
    pub idx: usize,
    /// Dependency label, e.g. `nsubj`, `dobj`, `nsubjpass`
    pub dep: String,
    pub lemma: String,
    /// Index of the governing head token; equal to the token's own index for the root
    pub head: usize,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        idx: usize,
        dep: impl Into<String>,
        lemma: impl Into<String>,
        head: usize,
    ) -> Self {
        Self {
            text: text.into(),
            idx,
            dep: dep.into(),
            lemma: lemma.into(),
            head,
        }
    }

    /// The characters this token covers.
    pub fn span(&self) -> Span {
        Span::from_len(self.idx, self.text.chars().count())
    }
}

/// A sentence together with its dependency parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub text: String,
    pub tokens: Vec<Token>,
}

impl ParsedSentence {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    pub fn token(&self, idx: usize) -> Option<&Token> {
        self.tokens.get(idx)
    }

    /// Index of the head of `idx`.
    ///
    /// Returns `None` for the root and for out-of-range heads.
    pub fn head(&self, idx: usize) -> Option<usize> {
        let head = self.tokens.get(idx)?.head;
        if head == idx || head >= self.tokens.len() {
            None
        } else {
            Some(head)
        }
    }

    /// Head of the head of `idx`.
    pub fn grandhead(&self, idx: usize) -> Option<usize> {
        self.head(idx).and_then(|head| self.head(head))
    }

    /// Immediate dependents of `idx`, in sentence order.
    pub fn children(&self, idx: usize) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(child, token)| *child != idx && token.head == idx)
            .map(|(child, _)| child)
            .collect()
    }

    /// `idx` and all of its transitive dependents, in sentence order.
    pub fn subtree(&self, idx: usize) -> Vec<usize> {
        let mut nodes = vec![idx];
        let mut frontier = vec![idx];
        while let Some(node) = frontier.pop() {
            for child in self.children(node) {
                // malformed parses may contain cycles
                if !nodes.contains(&child) {
                    nodes.push(child);
                    frontier.push(child);
                }
            }
        }
        nodes.sort_unstable();
        nodes
    }

    /// Span covering the given tokens, or `None` if empty.
    pub fn span_of(&self, indices: &[usize]) -> Option<Span> {
        indices
            .iter()
            .filter_map(|&i| self.tokens.get(i))
            .map(Token::span)
            .reduce(|acc, span| acc.cover(&span))
    }

    /// Span covering the whole sentence text.
    pub fn full_span(&self) -> Span {
        Span::new(0, self.text.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "The old dog chased cats ."
    fn sentence() -> ParsedSentence {
        ParsedSentence::new(
            "The old dog chased cats .",
            vec![
                Token::new("The", 0, "det", "the", 2),
                Token::new("old", 4, "amod", "old", 2),
                Token::new("dog", 8, "nsubj", "dog", 3),
                Token::new("chased", 12, "ROOT", "chase", 3),
                Token::new("cats", 19, "dobj", "cat", 3),
                Token::new(".", 24, "punct", ".", 3),
            ],
        )
    }

    #[test]
    fn head_and_grandhead() {
        let s = sentence();
        assert_eq!(s.head(0), Some(2));
        assert_eq!(s.grandhead(0), Some(3));
        assert_eq!(s.head(3), None);
        assert_eq!(s.grandhead(2), None);
    }

    #[test]
    fn children_and_subtree() {
        let s = sentence();
        assert_eq!(s.children(2), vec![0, 1]);
        assert_eq!(s.children(3), vec![2, 4, 5]);
        assert_eq!(s.subtree(3), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(s.subtree(4), vec![4]);
    }

    #[test]
    fn span_of_tokens() {
        let s = sentence();
        assert_eq!(s.span_of(&[0, 1, 2]), Some(Span::new(0, 11)));
        assert_eq!(s.span_of(&[]), None);
        assert_eq!(s.full_span(), Span::new(0, 25));
    }

    #[test]
    fn reads_spacy_style_json() {
        let s: ParsedSentence = serde_json::from_str(
            r#"{ "text": "Mary loves John",
                 "tokens": [
                   { "text": "Mary", "idx": 0, "dep": "nsubj", "lemma": "Mary", "head": 1 },
                   { "text": "loves", "idx": 5, "dep": "ROOT", "lemma": "love", "head": 1 },
                   { "text": "John", "idx": 11, "dep": "dobj", "lemma": "John", "head": 1 } ] }"#,
        )
        .unwrap();

        assert_eq!(s.head(0), Some(1));
        assert_eq!(s.head(1), None);
        assert_eq!(s.tokens[2].span(), Span::new(11, 15));
        assert_eq!(s.full_span(), Span::new(0, 15));
    }
}
