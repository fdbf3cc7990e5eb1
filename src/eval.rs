//! Accuracy of extracted mentions.
//!
//! Two ways to judge a processed record:
//!
//! - **Against the label** ([`evaluate_from_dbr`]): the mention counts as a
//!   hit when it normalizes to the same text as the entity label. Cheap, but
//!   penalizes questions that name the entity differently ("JFK" for
//!   "John F. Kennedy").
//! - **Against a gold annotation** ([`evaluate_from_annotation`]): the
//!   mention must normalize to the annotated mention.
//!
//! Annotation files also sort the known misses into named error buckets;
//! [`evaluate_annotations`] reports which bucket every new miss falls in.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Record};
use crate::normalize::normalize;
use crate::{Error, Result};

/// Bucket for misses that no annotated error category lists.
pub const UNCLASSIFIED: &str = "unclassified";

/// Hit count over a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Accuracy {
    /// Correct records.
    pub hits: usize,
    /// Records evaluated.
    pub total: usize,
}

impl Accuracy {
    /// `hits / total`, 0.0 for an empty evaluation.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.hits as f64 / self.total as f64
        }
    }

    fn record(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.hits += 1;
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Acc {:.4} ({}/{})", self.ratio(), self.hits, self.total)
    }
}

/// Case-insensitive normalized comparison.
fn same_surface(a: &str, b: &str) -> bool {
    normalize(&a.to_lowercase()) == normalize(&b.to_lowercase())
}

/// Whether the record's mention normalizes to its own label.
#[must_use]
pub fn evaluate_from_dbr(record: &Record) -> bool {
    same_surface(record.mention_text(), &record.dbr)
}

/// Whether the record's mention normalizes to the annotated mention.
#[must_use]
pub fn evaluate_from_annotation(record: &Record, annotation: &Annotation) -> bool {
    same_surface(record.mention_text(), &annotation.mention)
}

/// A gold mention for one (question, entity) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Record id.
    pub id: i64,
    /// Source question id.
    pub question_id: i64,
    /// Entity label.
    pub dbr: String,
    /// Gold mention.
    pub mention: String,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Annotation {
    /// `[id, question_id]`, the key error buckets list.
    #[must_use]
    pub fn key(&self) -> [i64; 2] {
        [self.id, self.question_id]
    }
}

/// Annotated mentions plus known error buckets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationTotals {
    /// Gold annotations.
    pub annotated: Vec<Annotation>,
    /// Error category name to `[id, question_id]` keys.
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<[i64; 2]>>,
}

/// An annotation file: `{ "total": { "annotated": [...], "errors": {...} } }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationSet {
    /// All annotations.
    pub total: AnnotationTotals,
}

impl AnnotationSet {
    /// Parse from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an annotation file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Error bucket listing `annotation`, if any. First bucket in name order wins.
    #[must_use]
    pub fn error_category(&self, annotation: &Annotation) -> Option<&str> {
        let key = annotation.key();
        self.total
            .errors
            .iter()
            .find(|(_, keys)| keys.contains(&key))
            .map(|(name, _)| name.as_str())
    }
}

/// Outcome of [`evaluate_dataset`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    /// Overall accuracy.
    pub accuracy: Accuracy,
    /// Records judged wrong, in dataset order.
    pub misses: Vec<Record>,
}

/// Judge every record of `dataset` against its own label.
#[must_use]
pub fn evaluate_dataset(dataset: &Dataset) -> Evaluation {
    let mut eval = Evaluation::default();
    for record in &dataset.questions {
        let hit = evaluate_from_dbr(record);
        eval.accuracy.record(hit);
        if !hit {
            eval.misses.push(record.clone());
        }
    }
    log::info!("evaluated {} records against labels: {}", eval.accuracy.total, eval.accuracy);
    eval
}

/// Outcome of [`evaluate_annotations`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotationEvaluation {
    /// Accuracy over annotated pairs.
    pub accuracy: Accuracy,
    /// Error bucket to `[id, question_id]` of the processed records that missed.
    /// Every bucket of the annotation file is present, possibly empty.
    pub errors: BTreeMap<String, Vec<[i64; 2]>>,
    /// Processed records judged wrong, in annotation order.
    pub misses: Vec<Record>,
}

/// Judge processed `dataset` records against gold `annotations`.
///
/// Every annotation must have a record with the same question id and dbr;
/// a missing one is an [`Error::Evaluation`].
pub fn evaluate_annotations(
    dataset: &Dataset,
    annotations: &AnnotationSet,
) -> Result<AnnotationEvaluation> {
    let mut eval = AnnotationEvaluation {
        errors: annotations
            .total
            .errors
            .keys()
            .map(|k| (k.clone(), Vec::new()))
            .collect(),
        ..Default::default()
    };

    for annotation in &annotations.total.annotated {
        let record = dataset
            .find_pair(annotation.question_id, &annotation.dbr)
            .ok_or_else(|| {
                Error::evaluation(format!(
                    "no record for annotation {} (question {}, {})",
                    annotation.id, annotation.question_id, annotation.dbr
                ))
            })?;

        let hit = evaluate_from_annotation(record, annotation);
        eval.accuracy.record(hit);
        if hit {
            continue;
        }

        let bucket = annotations.error_category(annotation).unwrap_or_else(|| {
            log::warn!(
                "annotation {} missed but is not in any error category",
                annotation.id
            );
            UNCLASSIFIED
        });
        eval.errors
            .entry(bucket.to_string())
            .or_default()
            .push([record.id, record.question_id]);
        eval.misses.push(record.clone());
    }

    log::info!(
        "evaluated {} annotations: {}",
        eval.accuracy.total,
        eval.accuracy
    );
    Ok(eval)
}

/// Size summary of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Distinct normalized questions.
    pub unique_questions: usize,
    /// Distinct normalized entity labels.
    pub unique_entities: usize,
    /// Records.
    pub total_samples: usize,
}

impl DatasetStats {
    /// Count `dataset`.
    #[must_use]
    pub fn compute(dataset: &Dataset) -> Self {
        let mut questions = HashSet::new();
        let mut entities = HashSet::new();
        for record in &dataset.questions {
            questions.insert(normalize(&record.question));
            entities.insert(normalize(&record.dbr));
        }
        Self {
            unique_questions: questions.len(),
            unique_entities: entities.len(),
            total_samples: dataset.len(),
        }
    }
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Unique Questions {}", self.unique_questions)?;
        writeln!(f, "Unique Entities {}", self.unique_entities)?;
        write!(f, "Total Samples {}", self.total_samples)
    }
}
