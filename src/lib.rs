//! # el-mention
//!
//! Entity-linking mention extraction for question answering benchmarks.
//!
//! Given a question and the knowledge-base entity it is about, find the
//! contiguous run of question words that names the entity, using nothing
//! but surface similarity to the entity's label:
//!
//! ```text
//! dbr:       http://dbpedia.org/resource/Abraham_Lincoln
//! question:  Who killed Abraham Lincoln?
//! mention:              Abraham Lincoln
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use el_mention::{process, Record};
//!
//! let record = Record::new(1, 42, "Who killed Abraham Lincoln?", "Abraham_Lincoln");
//! let out = process(&record, false);
//! assert_eq!(out.mention_text(), "Abraham Lincoln");
//! ```
//!
//! ## Matchers
//!
//! | Matcher | How | Use |
//! |---------|-----|-----|
//! | [`TrigramMatcher`] | greedy trigram spans, edge trimming, edit distance | default |
//! | [`SlidingWindowMatcher`] | every window as wide as the label, edit distance | baseline |
//!
//! ## Pipeline
//!
//! 1. [`normalize`]: strip the resource prefix, disambiguation suffix,
//!    punctuation and accents from label and question
//! 2. [`TrigramSet`]: index the label's character trigrams
//! 3. [`extract::extract_spans`]: grow spans of tokens whose overlap with
//!    the label exceeds 0.7
//! 4. [`align::trim`]: cut each span to the tokens matching the label's
//!    first and last words
//! 5. [`BestCandidate`]: keep the span with the lowest normalized edit distance
//! 6. project the winner back onto the original-case question
//!
//! ## Feature Flags
//!
//! - `parallel` (default): [`process_records`] can fan out over rayon
//! - `cli` (default): the `el-mention` binary

#![warn(missing_docs)]

pub mod align;
pub mod candidate;
pub mod config;
pub mod dataset;
mod error;
pub mod eval;
pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod selector;
pub mod similarity;

#[cfg(feature = "cli")]
pub mod cli;

pub use candidate::{tokenize, Append, MentionCandidate, Token, SPAN_THRESHOLD};
pub use config::RunConfig;
pub use dataset::{
    process, process_records, process_records_with_progress, process_with, Dataset, Record,
};
pub use error::{Error, Result};
pub use eval::{Accuracy, AnnotationSet, DatasetStats};
pub use matcher::{merge, Matcher, MatcherKind, Mention, SlidingWindowMatcher, TrigramMatcher};
pub use normalize::{normalize, Normalizer};
pub use selector::{BestCandidate, SelectionPolicy};
pub use similarity::TrigramSet;
