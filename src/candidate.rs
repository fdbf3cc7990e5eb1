//! Question tokens and mention candidates.

use crate::selector::{representative_len, Representative};

/// Overlap score a token must strictly exceed to join a span.
pub const SPAN_THRESHOLD: f64 = 0.7;

/// A whitespace-delimited word and its position in the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Word text, exactly as split.
    pub word: &'a str,
    /// Zero-based position in the question's token sequence.
    pub index: usize,
}

/// Split `text` on whitespace, keeping positions.
///
/// No punctuation handling happens here: `"Lincoln?"` stays one token.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| Token { word, index })
        .collect()
}

/// A contiguous run of question tokens believed to name the target label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MentionCandidate {
    words: Vec<String>,
    indices: Vec<usize>,
    score: f64,
}

/// Outcome of [`MentionCandidate::append`].
#[derive(Debug, Clone, PartialEq)]
pub enum Append {
    /// The token cleared the threshold; this is the grown candidate.
    Extended(MentionCandidate),
    /// The token did not clear the threshold. The span ends here; the
    /// candidate is handed back untouched.
    Closed(MentionCandidate),
}

impl MentionCandidate {
    /// Empty candidate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One-token candidate, used for the extractor's fallback.
    #[must_use]
    pub fn single(token: &Token<'_>, score: f64) -> Self {
        Self {
            words: vec![token.word.to_string()],
            indices: vec![token.index],
            score,
        }
    }

    /// Candidate over explicit words and indices.
    ///
    /// Returns `None` when the lengths differ or the indices are not
    /// consecutive.
    #[must_use]
    pub fn from_parts(words: Vec<String>, indices: Vec<usize>, score: f64) -> Option<Self> {
        if words.len() != indices.len() || !indices.windows(2).all(|w| w[1] == w[0] + 1) {
            return None;
        }
        Some(Self {
            words,
            indices,
            score,
        })
    }

    /// Offer `token` with overlap `score`.
    ///
    /// Grows the span only when `score > SPAN_THRESHOLD`; a score of exactly
    /// the threshold closes it.
    #[must_use]
    pub fn append(mut self, token: &Token<'_>, score: f64) -> Append {
        if score > SPAN_THRESHOLD {
            self.words.push(token.word.to_string());
            self.indices.push(token.index);
            self.score = score;
            Append::Extended(self)
        } else {
            Append::Closed(self)
        }
    }

    /// Words of the span, lower-cased if the question was.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Question token positions of the span.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Overlap score of the last accepted token.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no token has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words joined with single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Keep tokens `start..end`. Caller guarantees `start < end <= len`.
    pub(crate) fn retain_range(&mut self, start: usize, end: usize) {
        self.words.truncate(end);
        self.words.drain(..start);
        self.indices.truncate(end);
        self.indices.drain(..start);
    }

    /// Rebuild the span text from another tokenization of the same question
    /// (normally the original-case one).
    ///
    /// Positions outside `tokens` are skipped.
    #[must_use]
    pub fn project(&self, tokens: &[Token<'_>]) -> String {
        self.indices
            .iter()
            .filter_map(|&i| tokens.get(i).map(|t| t.word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Representative for MentionCandidate {
    fn representative_len(&self) -> usize {
        representative_len(&self.words)
    }
}
