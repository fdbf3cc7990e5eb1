//! Surface-form similarity between question words and entity labels.
//!
//! Two measures are used by the matchers:
//!
//! - **Trigram overlap**: fraction of a word's own character trigrams found
//!   in the label's trigram set. Asymmetric (recall of the word, not
//!   Jaccard), so a short token that appears verbatim inside a long label
//!   still scores 1.0.
//! - **Normalized edit distance**: Levenshtein distance between a candidate
//!   mention and the label, divided by the mention's character count with
//!   separators excluded.

use std::collections::HashSet;

/// Trigram window width.
pub const TRIGRAM_LEN: usize = 3;

/// Character trigrams of a single word.
///
/// Words shorter than [`TRIGRAM_LEN`] characters yield themselves, whole.
/// Repeated trigrams are kept, so `"aaaa"` yields `["aaa", "aaa"]`.
///
/// # Examples
///
/// ```
/// use el_mention::similarity::trigrams;
///
/// assert_eq!(trigrams("obama"), vec!["oba", "bam", "ama"]);
/// assert_eq!(trigrams("of"), vec!["of"]);
/// ```
#[must_use]
pub fn trigrams(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < TRIGRAM_LEN {
        return vec![word.to_string()];
    }
    chars
        .windows(TRIGRAM_LEN)
        .map(|w| w.iter().collect())
        .collect()
}

/// Presence set of the trigrams of every whitespace word of a target string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrigramSet {
    grams: HashSet<String>,
}

impl TrigramSet {
    /// Index `target`. Each word is windowed independently, so no trigram
    /// spans a word boundary.
    #[must_use]
    pub fn build(target: &str) -> Self {
        let grams = target.split_whitespace().flat_map(trigrams).collect();
        Self { grams }
    }

    /// Whether `gram` occurs in the target.
    #[must_use]
    pub fn contains(&self, gram: &str) -> bool {
        self.grams.contains(gram)
    }

    /// Number of distinct trigrams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    /// True when the target had no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    /// Fraction of `word`'s trigrams present in this set, in `[0.0, 1.0]`.
    ///
    /// The caller is responsible for case folding.
    ///
    /// ```
    /// use el_mention::similarity::TrigramSet;
    ///
    /// let index = TrigramSet::build("abraham lincoln");
    /// assert_eq!(index.score("lincoln"), 1.0);
    /// assert_eq!(index.score("who"), 0.0);
    /// ```
    #[must_use]
    pub fn score(&self, word: &str) -> f64 {
        let grams = trigrams(word);
        let hits = grams.iter().filter(|g| self.contains(g)).count();
        hits as f64 / grams.len().max(1) as f64
    }
}

/// Levenshtein distance in characters.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Edit distance between the space-joined `words` and `target`, divided by
/// the number of characters in `words` (spaces excluded, floor of 1).
///
/// ```
/// use el_mention::similarity::normalized_edit_distance;
///
/// assert_eq!(normalized_edit_distance(&["new", "york"], "new york"), 0.0);
/// // one substitution over seven characters
/// let d = normalized_edit_distance(&["new", "yorc"], "new york");
/// assert!((d - 1.0 / 7.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn normalized_edit_distance<S: AsRef<str>>(words: &[S], target: &str) -> f64 {
    let joined = words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    let chars: usize = words.iter().map(|w| w.as_ref().chars().count()).sum();
    edit_distance(&joined, target) as f64 / chars.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigrams_short_words() {
        assert_eq!(trigrams("a"), vec!["a"]);
        assert_eq!(trigrams(""), vec![""]);
        assert_eq!(trigrams("abc"), vec!["abc"]);
    }

    #[test]
    fn test_trigrams_multibyte() {
        // Windows are over chars, not bytes
        assert_eq!(trigrams("café"), vec!["caf", "afé"]);
    }

    #[test]
    fn test_trigram_set_is_per_word() {
        let set = TrigramSet::build("ab cd");
        assert!(set.contains("ab"));
        assert!(set.contains("cd"));
        assert!(!set.contains("b c"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_target() {
        let set = TrigramSet::build("   ");
        assert!(set.is_empty());
        assert_eq!(set.score("anything"), 0.0);
        assert_eq!(set.score(""), 0.0);
    }

    #[test]
    fn test_score_is_asymmetric() {
        // "york" is entirely inside the long label
        let long = TrigramSet::build("new york city metropolitan area");
        assert_eq!(long.score("york"), 1.0);

        // but only part of "yorkshire" is
        let partial = long.score("yorkshire");
        assert!(partial > 0.0 && partial < 0.5);
    }

    #[test]
    fn test_score_counts_repeats() {
        let set = TrigramSet::build("aaa");
        assert_eq!(set.score("aaaa"), 1.0);
        let set = TrigramSet::build("aab");
        // "aaaa" -> [aaa, aaa], neither present
        assert_eq!(set.score("aaaa"), 0.0);
    }

    #[test]
    fn test_normalized_edit_distance_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(normalized_edit_distance(&empty, "abc"), 3.0);
        assert_eq!(normalized_edit_distance(&empty, ""), 0.0);
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
    }
}
