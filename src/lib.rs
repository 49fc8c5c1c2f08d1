//! Connotation Frame role mapping over dependency parses.
//!
//! Connotation Frames describe a verb's implied participants as an *agent*
//! and a *theme*. This crate locates those participants syntactically, as
//! the logical subject and object of the verb in a dependency parse, and
//! aligns them with gold FrameNet frame-element spans.
//!
//! ## Core Types
//!
//! - [`ParsedSentence`] / [`Token`] - Dependency-parsed sentence
//! - [`Span`] / [`FrameElement`] - Character spans and gold annotations
//! - [`RoleDetector`] - Subject/object detection with a [`SpanPolicy`]
//! - [`SpanAligner`] - Agent/Theme relabelling with an [`AlignPolicy`]
//! - [`SentenceDisplay`] - Debug rendering of spans under a sentence
//!
//! ## Example
//!
//! ```
//! use cframes::{FrameElement, ParsedSentence, RoleDetector, SpanAligner, Token};
//!
//! let sentence = ParsedSentence::new(
//!     "Mary loves John",
//!     vec![
//!         Token::new("Mary", 0, "nsubj", "Mary", 1),
//!         Token::new("loves", 5, "ROOT", "love", 1),
//!         Token::new("John", 11, "dobj", "John", 1),
//!     ],
//! );
//! let fes = vec![
//!     FrameElement::new(0, 4, "Experiencer"),
//!     FrameElement::new(11, 15, "Content"),
//! ];
//!
//! let detections = RoleDetector::default().detect(&sentence, "love");
//! let alignment = SpanAligner::default().align(&sentence.text, &detections, &fes);
//! assert_eq!(alignment.agent.frame_elements(), ["Experiencer"]);
//! assert_eq!(alignment.theme.frame_elements(), ["Content"]);
//! ```

mod display;
mod parse;
mod role_detector;
mod span;
mod span_aligner;

pub use display::SentenceDisplay;
pub use parse::{ParsedSentence, Token};
pub use role_detector::{
    phrase_span, Detections, RoleDetection, RoleDetector, RolePatterns, SpanPolicy,
};
pub use span::{FrameElement, Span};
pub use span_aligner::{AlignPolicy, CfRole, RoleAlignment, RoleMapping, SpanAligner};
