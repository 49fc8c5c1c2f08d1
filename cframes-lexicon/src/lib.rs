//! Connotation Frame lexicon for cframes.
//!
//! Loads the Connotation Frame dataset of Rashkin et al. (2016): a header
//! line followed by one verb per line with twelve whitespace-separated
//! scores.
//!
//! ```
//! use cframes_lexicon::{Dimension, Lexicon};
//!
//! let lexicon = Lexicon::parse(
//!     "verb Perspective(writer->theme) Perspective(writer->agent)\n\
//!      love 0.6 0.5\n",
//! )
//! .unwrap();
//!
//! let love = lexicon.get("love").unwrap();
//! assert_eq!(love.score(Dimension::WriterTheme), Some(0.6));
//! assert_eq!(love.score(Dimension::ThemeAgent), None);
//! ```

mod errors;
mod frame;
mod lexicon;

pub use errors::{LexiconError, LexiconResult};
pub use frame::{ConnotationFrame, Dimension};
pub use lexicon::Lexicon;
