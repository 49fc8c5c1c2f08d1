//! Syntactic subject/object detection for a target lemma.
//!
//! Scans a dependency parse for tokens whose label marks them as subject or
//! object of the target predicate, then widens the token into a phrase span
//! according to a [`SpanPolicy`].
//!
//! # Example
//!
//! ```
//! use cframes::{ParsedSentence, RoleDetector, SpanPolicy, Token};
//!
//! let sentence = ParsedSentence::new(
//!     "Mary loves John",
//!     vec![
//!         Token::new("Mary", 0, "nsubj", "Mary", 1),
//!         Token::new("loves", 5, "ROOT", "love", 1),
//!         Token::new("John", 11, "dobj", "John", 1),
//!     ],
//! );
//!
//! let detector = RoleDetector::with_policy(SpanPolicy::Naive);
//! let subject = detector.detect_subject(&sentence, "love").unwrap();
//! assert_eq!(subject.head_text, "Mary");
//! assert!(!subject.passive);
//! ```

use crate::{ParsedSentence, Span};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DEFAULT_PATTERNS: Lazy<RolePatterns> = Lazy::new(|| RolePatterns {
    subject: Regex::new("subj").unwrap(),
    object: Regex::new("obj").unwrap(),
    passive: Regex::new("subj:?pass").unwrap(),
});

/// How far a detected token is widened into a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanPolicy {
    /// Only the token itself
    Naive,
    /// The token plus its immediate children
    #[default]
    Short,
    /// The token plus its entire subtree
    Long,
}

impl std::str::FromStr for SpanPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(format!("unknown span policy '{}'", other)),
        }
    }
}

/// Dependency label patterns used to recognise roles.
#[derive(Debug, Clone)]
pub struct RolePatterns {
    pub subject: Regex,
    pub object: Regex,
    /// Matches passive subjects (`nsubjpass`, `nsubj:pass`)
    pub passive: Regex,
}

impl RolePatterns {
    /// Compile patterns from their source strings.
    pub fn new(subject: &str, object: &str, passive: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            subject: Regex::new(subject)?,
            object: Regex::new(object)?,
            passive: Regex::new(passive)?,
        })
    }
}

impl Default for RolePatterns {
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

/// A detected logical subject or object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDetection {
    /// Index of the detected token
    pub token: usize,
    /// Text of the detected token
    pub head_text: String,
    /// Phrase span under the detector's policy
    pub span: Span,
    /// Text of the governing predicate token
    pub governor_text: String,
    /// True if the token is a passive subject
    pub passive: bool,
}

/// Subject and object detected for one sentence/lemma query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detections {
    pub subject: Option<RoleDetection>,
    pub object: Option<RoleDetection>,
}

impl Detections {
    /// True if the subject was detected and is passive.
    pub fn is_passive(&self) -> bool {
        self.subject.as_ref().map_or(false, |s| s.passive)
    }

    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.object.is_none()
    }
}

/// Detects subjects and objects governed by a target lemma.
#[derive(Debug, Clone, Default)]
pub struct RoleDetector {
    patterns: RolePatterns,
    policy: SpanPolicy,
}

impl RoleDetector {
    pub fn new(patterns: RolePatterns, policy: SpanPolicy) -> Self {
        Self { patterns, policy }
    }

    /// Default patterns with the given span policy.
    pub fn with_policy(policy: SpanPolicy) -> Self {
        Self::new(RolePatterns::default(), policy)
    }

    pub fn policy(&self) -> SpanPolicy {
        self.policy
    }

    /// Find the first subject whose head lemma is `lemma`.
    pub fn detect_subject(&self, sentence: &ParsedSentence, lemma: &str) -> Option<RoleDetection> {
        sentence.tokens.iter().enumerate().find_map(|(idx, token)| {
            if !self.patterns.subject.is_match(&token.dep) {
                return None;
            }
            let head = sentence.head(idx)?;
            if !lemma_matches(&sentence.tokens[head].lemma, lemma) {
                return None;
            }
            let passive = self.patterns.passive.is_match(&token.dep);
            Some(self.build(sentence, idx, head, passive))
        })
    }

    /// Find the first object whose head or grandhead lemma is `lemma`.
    ///
    /// The grandhead case covers prepositional objects such as the `pobj`
    /// of a passive by-phrase.
    pub fn detect_object(&self, sentence: &ParsedSentence, lemma: &str) -> Option<RoleDetection> {
        sentence.tokens.iter().enumerate().find_map(|(idx, token)| {
            if !self.patterns.object.is_match(&token.dep) {
                return None;
            }
            let governor = [sentence.head(idx), sentence.grandhead(idx)]
                .into_iter()
                .flatten()
                .find(|&g| lemma_matches(&sentence.tokens[g].lemma, lemma))?;
            Some(self.build(sentence, idx, governor, false))
        })
    }

    /// Detect subject and object for `lemma`.
    pub fn detect(&self, sentence: &ParsedSentence, lemma: &str) -> Detections {
        let detections = Detections {
            subject: self.detect_subject(sentence, lemma),
            object: self.detect_object(sentence, lemma),
        };
        tracing::debug!(
            lemma,
            subject = ?detections.subject.as_ref().map(|d| &d.head_text),
            object = ?detections.object.as_ref().map(|d| &d.head_text),
            passive = detections.is_passive(),
            "detected roles"
        );
        detections
    }

    /// Phrase span of `idx` under this detector's policy.
    pub fn phrase_span(&self, sentence: &ParsedSentence, idx: usize) -> Span {
        phrase_span(sentence, idx, self.policy)
    }

    fn build(
        &self,
        sentence: &ParsedSentence,
        idx: usize,
        governor: usize,
        passive: bool,
    ) -> RoleDetection {
        RoleDetection {
            token: idx,
            head_text: sentence.tokens[idx].text.clone(),
            span: self.phrase_span(sentence, idx),
            governor_text: sentence.tokens[governor].text.clone(),
            passive,
        }
    }
}

/// Phrase span of token `idx` under `policy`.
pub fn phrase_span(sentence: &ParsedSentence, idx: usize, policy: SpanPolicy) -> Span {
    let token_span = sentence.tokens[idx].span();
    let members = match policy {
        SpanPolicy::Naive => return token_span,
        SpanPolicy::Short => {
            let mut members = sentence.children(idx);
            members.push(idx);
            members.sort_unstable();
            members
        }
        SpanPolicy::Long => sentence.subtree(idx),
    };
    sentence.span_of(&members).unwrap_or(token_span)
}

fn lemma_matches(candidate: &str, target: &str) -> bool {
    candidate.to_lowercase() == target.to_lowercase()
}
