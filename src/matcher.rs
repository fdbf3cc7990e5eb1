//! Mention matchers.
//!
//! | Matcher | Candidates | Trimming | Ranking |
//! |---------|------------|----------|---------|
//! | [`TrigramMatcher`] | greedy trigram spans | yes | normalized edit distance |
//! | [`SlidingWindowMatcher`] | every window of label width | no | normalized edit distance |
//!
//! Both lower-case label and question for scoring and rebuild the winning
//! mention from the original-case question tokens, so a returned mention is
//! always a run of whole question tokens in their original order and case.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::align::trim;
use crate::candidate::{tokenize, MentionCandidate, Token};
use crate::extract::extract_spans;
use crate::selector::{BestCandidate, SelectionPolicy};
use crate::similarity::{edit_distance, normalized_edit_distance, TrigramSet};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::TrigramMatcher {}
    impl Sealed for super::SlidingWindowMatcher {}
}

/// A mention found in a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Original-case question tokens at `indices`, space-joined.
    pub text: String,
    /// Question token positions, consecutive.
    pub indices: Vec<usize>,
    /// Normalized edit distance of the lower-cased mention to the label.
    pub distance: f64,
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Finds the span of a question that refers to an entity label.
///
/// Sealed: implemented by [`TrigramMatcher`] and [`SlidingWindowMatcher`].
pub trait Matcher: sealed::Sealed + Send + Sync {
    /// Best mention of `label` in `question`, or `None`.
    ///
    /// Inputs are expected to be normalized already.
    fn find(&self, label: &str, question: &str) -> Option<Mention>;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;
}

/// Which matcher to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    /// [`TrigramMatcher`]
    #[default]
    Trigram,
    /// [`SlidingWindowMatcher`]
    Baseline,
}

impl MatcherKind {
    /// Matcher for this kind.
    #[must_use]
    pub fn matcher(self) -> &'static dyn Matcher {
        match self {
            MatcherKind::Trigram => &TrigramMatcher,
            MatcherKind::Baseline => &SlidingWindowMatcher,
        }
    }

    /// `Baseline` when `use_baseline`, else `Trigram`.
    #[must_use]
    pub fn from_baseline_flag(use_baseline: bool) -> Self {
        if use_baseline {
            MatcherKind::Baseline
        } else {
            MatcherKind::Trigram
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.matcher().name())
    }
}

/// Pick the candidate closest to `label` and project it onto `original`.
fn rank(
    candidates: Vec<MentionCandidate>,
    label: &str,
    original: &[Token<'_>],
) -> Option<Mention> {
    let mut best = BestCandidate::new(SelectionPolicy::MinThenShortest);
    for candidate in candidates {
        let distance = normalized_edit_distance(candidate.words(), label);
        log::trace!("candidate {:?} distance {:.4}", candidate.words(), distance);
        best.store(candidate, distance);
    }
    let distance = best.metric()?;
    let winner = best.into_inner()?;
    Some(Mention {
        text: winner.project(original),
        indices: winner.indices().to_vec(),
        distance,
    })
}

/// Trigram-guided span extraction, edge trimming, edit-distance ranking.
///
/// ```
/// use el_mention::{Matcher, TrigramMatcher};
///
/// let m = TrigramMatcher.find("Abraham Lincoln", "Who killed Abraham Lincoln").unwrap();
/// assert_eq!(m.text, "Abraham Lincoln");
/// assert_eq!(m.indices, vec![2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TrigramMatcher;

impl TrigramMatcher {
    /// Trimmed candidates, in question order, before ranking.
    #[must_use]
    pub fn candidates(&self, label: &str, question: &str) -> Vec<MentionCandidate> {
        let label = label.to_lowercase();
        let question = question.to_lowercase();
        let index = TrigramSet::build(&label);
        extract_spans(&index, &tokenize(&question))
            .into_iter()
            .map(|span| trim(span, &label))
            .collect()
    }
}

impl Matcher for TrigramMatcher {
    fn find(&self, label: &str, question: &str) -> Option<Mention> {
        let candidates = self.candidates(label, question);
        rank(candidates, &label.to_lowercase(), &tokenize(question))
    }

    fn name(&self) -> &'static str {
        "trigram"
    }
}

/// Fixed-width baseline: every window of as many tokens as the label has.
///
/// ```
/// use el_mention::{Matcher, SlidingWindowMatcher};
///
/// let m = SlidingWindowMatcher.find("New York City", "I love New York City a lot").unwrap();
/// assert_eq!(m.text, "New York City");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindowMatcher;

impl SlidingWindowMatcher {
    /// All windows, in question order. A question with `q` tokens and a
    /// label with `n >= 1` tokens yields `q - n + 1` windows when `q >= n`
    /// and none otherwise. An empty label yields none.
    #[must_use]
    pub fn candidates(&self, label: &str, question: &str) -> Vec<MentionCandidate> {
        let width = label.split_whitespace().count();
        if width == 0 {
            return Vec::new();
        }
        let question = question.to_lowercase();
        tokenize(&question)
            .windows(width)
            .filter_map(|window| {
                MentionCandidate::from_parts(
                    window.iter().map(|t| t.word.to_string()).collect(),
                    window.iter().map(|t| t.index).collect(),
                    0.0,
                )
            })
            .collect()
    }
}

impl Matcher for SlidingWindowMatcher {
    fn find(&self, label: &str, question: &str) -> Option<Mention> {
        let candidates = self.candidates(label, question);
        rank(candidates, &label.to_lowercase(), &tokenize(question))
    }

    fn name(&self) -> &'static str {
        "baseline"
    }
}

/// Pick whichever of two mentions is closer to `label` by raw edit distance.
///
/// Missing or empty mentions lose to present ones; on a tie `second` wins.
/// Not used by [`crate::process`]; kept for experiments combining both
/// matchers.
///
/// ```
/// use el_mention::merge;
///
/// assert_eq!(merge("Paris", Some("Paris"), Some("in Paris")).as_deref(), Some("Paris"));
/// assert_eq!(merge("Paris", None, Some("Paris")).as_deref(), Some("Paris"));
/// assert_eq!(merge("Paris", Some(""), None), None);
/// ```
#[must_use]
pub fn merge(label: &str, first: Option<&str>, second: Option<&str>) -> Option<String> {
    let first = first.filter(|m| !m.is_empty());
    let second = second.filter(|m| !m.is_empty());
    match (first, second) {
        (None, other) | (other, None) => other.map(str::to_string),
        (Some(a), Some(b)) => {
            let label = label.to_lowercase();
            let da = edit_distance(&a.to_lowercase(), &label);
            let db = edit_distance(&b.to_lowercase(), &label);
            let winner = if da < db { a } else { b };
            Some(winner.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigram_basic() {
        let m = TrigramMatcher
            .find("Abraham Lincoln", "Who killed Abraham Lincoln")
            .unwrap();
        assert_eq!(m.text, "Abraham Lincoln");
        assert_eq!(m.distance, 0.0);
    }

    #[test]
    fn test_trigram_preserves_original_case() {
        let m = TrigramMatcher.find("paris", "Is PARIS big").unwrap();
        assert_eq!(m.text, "PARIS");
    }

    #[test]
    fn test_trigram_no_overlap_still_answers() {
        let m = TrigramMatcher.find("Barack Obama", "xx yy zz").unwrap();
        assert_eq!(m.indices.len(), 1);
        assert!(["xx", "yy", "zz"].contains(&m.text.as_str()));
    }

    #[test]
    fn test_trigram_empty_question() {
        assert!(TrigramMatcher.find("Barack Obama", "").is_none());
    }

    #[test]
    fn test_trigram_picks_closest_span() {
        // "lincoln" appears twice; the span with both words is closer
        let m = TrigramMatcher
            .find("Abraham Lincoln", "Is Lincoln the same as Abraham Lincoln")
            .unwrap();
        assert_eq!(m.text, "Abraham Lincoln");
        assert_eq!(m.indices, vec![5, 6]);
    }

    #[test]
    fn test_baseline_window_count() {
        let windows = SlidingWindowMatcher.candidates("New York City", "I love New York City a lot");
        assert_eq!(windows.len(), 7 - 3 + 1);
        assert_eq!(windows[2].indices(), [2, 3, 4]);
    }

    #[test]
    fn test_baseline_short_question() {
        assert!(SlidingWindowMatcher
            .candidates("New York City", "New York")
            .is_empty());
        assert!(SlidingWindowMatcher.find("New York City", "New York").is_none());
    }

    #[test]
    fn test_baseline_empty_label() {
        assert!(SlidingWindowMatcher.find("", "anything at all").is_none());
    }

    #[test]
    fn test_baseline_selects_exact_window() {
        let m = SlidingWindowMatcher
            .find("New York City", "I love New York City a lot")
            .unwrap();
        assert_eq!(m.text, "New York City");
        assert_eq!(m.indices, vec![2, 3, 4]);
    }

    #[test]
    fn test_matcher_kind() {
        assert_eq!(MatcherKind::from_baseline_flag(true), MatcherKind::Baseline);
        assert_eq!(MatcherKind::from_baseline_flag(false), MatcherKind::Trigram);
        assert_eq!(MatcherKind::Trigram.to_string(), "trigram");
        assert_eq!(MatcherKind::Baseline.matcher().name(), "baseline");
    }

    #[test]
    fn test_merge() {
        assert_eq!(
            merge("barack obama", Some("Obama"), Some("Barack Obama")).as_deref(),
            Some("Barack Obama")
        );
        // tie goes to the second
        assert_eq!(merge("ab", Some("ax"), Some("xb")).as_deref(), Some("xb"));
        assert_eq!(merge("ab", None, None), None);
        assert_eq!(merge("ab", Some("ab"), Some("")).as_deref(), Some("ab"));
    }
}
