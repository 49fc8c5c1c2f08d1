//! Character spans and gold frame-element annotations.
//!
//! Offsets count `char`s (Unicode scalar values) rather than bytes, which is
//! how FrameNet reports frame-element boundaries. Ends are exclusive.

use serde::{Deserialize, Serialize};

/// A `(start, end)` character range into a sentence, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} after end {}", start, end);
        Self { start, end }
    }

    /// Span covering `len` characters from `start`.
    pub fn from_len(start: usize, len: usize) -> Self {
        Self::new(start, start + len)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `other` lies entirely inside this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest span covering both.
    pub fn cover(&self, other: &Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Returns true if any boundary of `self` equals any boundary of `other`.
    pub fn shares_boundary(&self, other: &Span) -> bool {
        self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end
    }

    /// Slice the covered characters out of `text`.
    ///
    /// Out-of-range offsets are clamped to the end of the text.
    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        let start = char_to_byte(text, self.start);
        let end = char_to_byte(text, self.end);
        &text[start..end.max(start)]
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// A gold frame-element annotation: a span plus the FE name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameElement {
    pub start: usize,
    pub end: usize,
    /// FE name, e.g. `Experiencer`
    pub name: String,
}

impl FrameElement {
    pub fn new(start: usize, end: usize, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }

    /// Returns true unless `start` lies after `end`.
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// The annotated span; `is_well_formed` must hold.
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}
