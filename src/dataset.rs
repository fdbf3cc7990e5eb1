//! Benchmark records, dataset documents, and batch processing.
//!
//! A dataset file is a JSON document:
//!
//! ```json
//! {
//!   "dataset": { "id": "lcquad" },
//!   "questions": [
//!     { "id": 1, "question_id": 7, "question": "Who killed Abraham Lincoln?",
//!       "dbr": "http://dbpedia.org/resource/Abraham_Lincoln" }
//!   ]
//! }
//! ```
//!
//! Processing adds a `mention` field to every record and leaves every other
//! field, known or not, as it was.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::matcher::MatcherKind;
use crate::normalize::normalize;
use crate::Result;

/// One (question, entity) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record id, unique within a dataset.
    pub id: i64,
    /// Id of the source question; several records may share it.
    pub question_id: i64,
    /// Question text.
    pub question: String,
    /// DBpedia resource, URI or local name.
    pub dbr: String,
    /// Extracted mention. Empty when nothing matched; absent before processing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention: Option<String>,
    /// Any other fields, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Record with no mention and no extra fields.
    #[must_use]
    pub fn new(
        id: i64,
        question_id: i64,
        question: impl Into<String>,
        dbr: impl Into<String>,
    ) -> Self {
        Self {
            id,
            question_id,
            question: question.into(),
            dbr: dbr.into(),
            mention: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Mention text, empty if unset.
    #[must_use]
    pub fn mention_text(&self) -> &str {
        self.mention.as_deref().unwrap_or("")
    }
}

/// Extract the mention for one record.
///
/// Normalizes `dbr` and `question`, runs the trigram matcher (or the
/// sliding-window baseline when `use_baseline`), and returns a copy of the
/// record with `mention` set. No match yields an empty mention.
///
/// ```
/// use el_mention::{process, Record};
///
/// let record = Record::new(1, 1, "Who killed Abraham Lincoln?", "Abraham_Lincoln");
/// assert_eq!(process(&record, false).mention_text(), "Abraham Lincoln");
/// ```
#[must_use]
pub fn process(record: &Record, use_baseline: bool) -> Record {
    process_with(record, MatcherKind::from_baseline_flag(use_baseline))
}

/// [`process`] with an explicit matcher.
#[must_use]
pub fn process_with(record: &Record, kind: MatcherKind) -> Record {
    let label = normalize(&record.dbr);
    let question = normalize(&record.question);
    let mention = kind.matcher().find(&label, &question);
    if mention.is_none() {
        log::debug!(
            "[{}] no mention for record {} ({:?} in {:?})",
            kind,
            record.id,
            label,
            question
        );
    }
    let mut output = record.clone();
    output.mention = Some(mention.map(|m| m.text).unwrap_or_default());
    output
}

/// Process every record, preserving order.
///
/// With `parallel` (and the `parallel` feature) records are spread over
/// rayon's pool; results still come back in input order.
#[must_use]
pub fn process_records(records: &[Record], kind: MatcherKind, parallel: bool) -> Vec<Record> {
    process_records_with_progress(records, kind, parallel, || {})
}

/// [`process_records`], calling `on_done` once per finished record.
pub fn process_records_with_progress<F>(
    records: &[Record],
    kind: MatcherKind,
    parallel: bool,
    on_done: F,
) -> Vec<Record>
where
    F: Fn() + Sync,
{
    let run = |record: &Record| {
        let out = process_with(record, kind);
        on_done();
        out
    };

    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        log::info!(
            "Processing {} records with {} matcher on {} threads",
            records.len(),
            kind,
            rayon::current_num_threads()
        );
        return records.par_iter().map(run).collect();
    }

    #[cfg(not(feature = "parallel"))]
    if parallel {
        log::warn!("built without the `parallel` feature, processing sequentially");
    }

    log::info!("Processing {} records with {} matcher", records.len(), kind);
    records.iter().map(run).collect()
}

/// A dataset document: optional metadata plus records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Free-form metadata, usually `{ "id": ... }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<serde_json::Value>,
    /// The records.
    pub questions: Vec<Record>,
}

impl Dataset {
    /// Dataset over `questions` with no metadata.
    #[must_use]
    pub fn new(questions: Vec<Record>) -> Self {
        Self {
            dataset: None,
            questions,
        }
    }

    /// Parse a dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let dataset = Self::from_json(&text).map_err(|e| {
            crate::Error::dataset(format!("failed to parse {}: {}", path.display(), e))
        })?;
        log::debug!(
            "loaded {} records from {}",
            dataset.questions.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Serialize to compact JSON. Non-ASCII text is written as is.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Metadata, or `{ "id": fallback_id }` when the file had none.
    #[must_use]
    pub fn info_or(&self, fallback_id: &str) -> serde_json::Value {
        self.dataset
            .clone()
            .unwrap_or_else(|| serde_json::json!({ "id": fallback_id }))
    }

    /// New dataset with the same metadata and `questions` replaced.
    #[must_use]
    pub fn with_questions(&self, questions: Vec<Record>, fallback_id: &str) -> Self {
        Self {
            dataset: Some(self.info_or(fallback_id)),
            questions,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// First record for the (question id, dbr) pair.
    #[must_use]
    pub fn find_pair(&self, question_id: i64, dbr: &str) -> Option<&Record> {
        self.questions
            .iter()
            .find(|q| q.question_id == question_id && q.dbr == dbr)
    }
}
