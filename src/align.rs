//! Edge trimming of candidate spans against the label's first and last words.
//!
//! The greedy extractor happily absorbs neighbouring tokens that share a
//! few trigrams with the label ("the new york city" for "New York City").
//! Trimming cuts the span down to the tokens that best match the label's
//! first and last words.

use crate::candidate::{MentionCandidate, SPAN_THRESHOLD};
use crate::similarity::TrigramSet;

/// Position of the word in `words` that best matches `edge_word`, if its
/// overlap exceeds [`SPAN_THRESHOLD`]. The first of several equal maxima wins.
#[must_use]
pub fn align_edge<S: AsRef<str>>(edge_word: &str, words: &[S]) -> Option<usize> {
    let index = TrigramSet::build(edge_word);
    let mut best: Option<(usize, f64)> = None;
    for (i, word) in words.iter().enumerate() {
        let score = index.score(word.as_ref());
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((i, score));
        }
    }
    best.filter(|&(_, score)| score > SPAN_THRESHOLD)
        .map(|(i, _)| i)
}

/// Trim `candidate` so it starts at the token aligned with the label's
/// first word and ends at the token aligned with its last word.
///
/// Single-word labels leave the candidate unchanged. An edge that does not
/// align keeps that side of the span. If the aligned range would be empty
/// or inverted the full candidate is kept, so a non-empty candidate never
/// comes back empty.
#[must_use]
pub fn trim(mut candidate: MentionCandidate, label: &str) -> MentionCandidate {
    let label = label.to_lowercase();
    let label_words: Vec<&str> = label.split_whitespace().collect();
    let (first, last) = match label_words.as_slice() {
        [first, .., last] => (*first, *last),
        _ => return candidate,
    };

    let len = candidate.len();
    let start = align_edge(first, candidate.words()).unwrap_or(0);
    let end = align_edge(last, candidate.words()).map_or(len, |i| i + 1);

    if start >= end {
        log::debug!(
            "discarding inverted trim {}..{} of {:?} for {:?}",
            start,
            end,
            candidate.words(),
            label
        );
        return candidate;
    }

    if start > 0 || end < len {
        log::trace!("trim {:?} to {}..{}", candidate.words(), start, end);
        candidate.retain_range(start, end);
    }
    candidate
}
