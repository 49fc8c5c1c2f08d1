use crate::{Detections, ParsedSentence, Span};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// A labelled span to draw underneath the sentence.
struct IncludedSpan {
    /// First and last token index covered
    tokens: (usize, usize),
    label: String,
}

/// Renders a parsed sentence with labelled spans underneath.
///
/// ```text
/// The  dog  chased  the  cat  .
/// ╰──────╯subject
///                   ╰──────╯object
/// ```
pub struct SentenceDisplay<'a> {
    sentence: &'a ParsedSentence,
    include_spans: Vec<IncludedSpan>,
}

impl<'a> std::fmt::Display for SentenceDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();

        let mut opening_line = String::new();
        for (i, token) in self.sentence.tokens.iter().enumerate() {
            if i > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for included in self.include_spans.iter() {
            f.write_char('\n')?;

            let start_char_idx = token_idx_to_start_display_char_idx[included.tokens.0];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = token_idx_to_end_display_char_idx[included.tokens.1];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&included.label)?;
        }

        Ok(())
    }
}

impl<'a> SentenceDisplay<'a> {
    pub fn new(sentence: &'a ParsedSentence) -> Self {
        SentenceDisplay {
            sentence,
            include_spans: Vec::new(),
        }
    }

    /// Draw `span` with `label`. Spans covering no token are ignored.
    pub fn include(&mut self, span: Span, label: impl Into<String>) {
        if let Some(tokens) = self.token_range(span) {
            self.include_spans.push(IncludedSpan {
                tokens,
                label: label.into(),
            });
        }
    }

    /// Takes self
    pub fn with(mut self, span: Span, label: impl Into<String>) -> Self {
        self.include(span, label);
        self
    }

    /// Include the subject and object spans, with passive subjects marked.
    pub fn with_detections(mut self, detections: &Detections) -> Self {
        if let Some(subject) = &detections.subject {
            let label = if subject.passive {
                "subject(passive)"
            } else {
                "subject"
            };
            self.include(subject.span, label);
        }
        if let Some(object) = &detections.object {
            self.include(object.span, "object");
        }
        self
    }

    fn token_range(&self, span: Span) -> Option<(usize, usize)> {
        let tokens = &self.sentence.tokens;
        let first = tokens
            .iter()
            .position(|t| t.span().end > span.start && t.span().start < span.end)?;
        let last = tokens
            .iter()
            .rposition(|t| t.span().start < span.end && t.span().end > span.start)?;
        Some((first, last))
    }
}
