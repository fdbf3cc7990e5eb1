//! Greedy span extraction over question tokens.
//!
//! Walks the tokens left to right. A token whose trigram overlap with the
//! label exceeds [`SPAN_THRESHOLD`] extends the open span; any other token
//! closes it.
//!
//! ```text
//! label:     "abraham lincoln"
//! question:   who   killed  abraham  lincoln
//! overlap:    0.00  0.00    1.00     1.00
//!                           └──── span ────┘
//! ```
//!
//! When nothing clears the threshold the least bad rejected token is
//! returned on its own, so a non-empty question always yields a candidate.

use crate::candidate::{Append, MentionCandidate, Token, SPAN_THRESHOLD};
use crate::selector::{BestCandidate, SelectionPolicy};
use crate::similarity::TrigramSet;

/// Extract candidate spans for `index` from `tokens`.
///
/// `tokens` should already be case-folded to match `index`. The result is
/// empty only when `tokens` is.
#[must_use]
pub fn extract_spans(index: &TrigramSet, tokens: &[Token<'_>]) -> Vec<MentionCandidate> {
    let mut spans = Vec::new();
    let mut fallback = BestCandidate::new(SelectionPolicy::MaxThenShortest);
    let mut current = MentionCandidate::new();

    for token in tokens {
        let score = index.score(token.word);
        current = match current.append(token, score) {
            Append::Extended(grown) => grown,
            Append::Closed(closed) => {
                fallback.store(MentionCandidate::single(token, score), score);
                if !closed.is_empty() {
                    log::trace!("closed span {:?} at token {}", closed.words(), token.index);
                    spans.push(closed);
                }
                MentionCandidate::new()
            }
        };
    }

    if !current.is_empty() {
        spans.push(current);
    }

    if spans.is_empty() {
        if let Some(best) = fallback.into_inner() {
            log::debug!(
                "no token above {}, falling back to {:?} ({:.3})",
                SPAN_THRESHOLD,
                best.words(),
                best.score()
            );
            spans.push(best);
        }
    }

    spans
}
