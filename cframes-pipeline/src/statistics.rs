//! Frames-per-verb statistics.

use cframes_framenet::FrameCorpus;
use cframes_lexicon::Lexicon;
use std::collections::BTreeMap;

/// Number of distinct frames evoked by each lexicon verb.
///
/// Verbs that evoke no frame are left out.
pub fn frame_counts<C: FrameCorpus>(lexicon: &Lexicon, corpus: &C) -> BTreeMap<String, usize> {
    lexicon
        .verbs()
        .map(|verb| (verb.to_string(), corpus.frame_count(verb)))
        .filter(|&(_, count)| count > 0)
        .collect()
}

/// Histogram of frame counts: frames evoked -> number of verbs.
pub fn frames_per_verb(counts: &BTreeMap<String, usize>) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for &count in counts.values() {
        *histogram.entry(count).or_insert(0) += 1;
    }
    histogram
}

/// One printable line per histogram bucket, ascending by frame count.
pub fn histogram_lines(histogram: &BTreeMap<usize, usize>) -> Vec<String> {
    histogram
        .iter()
        .map(|(frames, verbs)| format!("{} Lexical Units evoke {} frame(s).", verbs, frames))
        .collect()
}
