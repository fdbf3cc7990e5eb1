//! Property-based tests for trigram and edit-distance similarity.
//!
//! These tests verify properties of the scoring functions:
//! - Boundedness
//! - Identity
//! - Asymmetry of the overlap score

use el_mention::similarity::{edit_distance, normalized_edit_distance, trigrams, TrigramSet};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Overlap score should always be in [0.0, 1.0]
    #[test]
    fn overlap_bounded(
        target in ".{0,60}",
        word in "\\PC{0,20}",
    ) {
        let score = TrigramSet::build(&target).score(&word);
        prop_assert!((0.0..=1.0).contains(&score),
            "score out of bounds: score({:?}, {:?})={}", target, word, score);
    }

    /// A word always fully overlaps a target that contains it as a word
    #[test]
    fn overlap_of_contained_word_is_one(
        before in "[a-z ]{0,20}",
        word in "[a-z]{1,12}",
        after in "[a-z ]{0,20}",
    ) {
        let target = format!("{} {} {}", before, word, after);
        let score = TrigramSet::build(&target).score(&word);
        prop_assert!((score - 1.0).abs() < 1e-12,
            "{:?} inside {:?} scored {}", word, target, score);
    }

    /// Every word of at least three chars yields len - 2 trigrams of three chars
    #[test]
    fn trigram_count(word in "\\PC{3,30}") {
        let grams = trigrams(&word);
        prop_assert_eq!(grams.len(), word.chars().count() - 2);
        prop_assert!(grams.iter().all(|g| g.chars().count() == 3));
    }

    /// Normalized distance of a mention to itself is 0
    #[test]
    fn distance_identity(words in prop::collection::vec("[a-z]{1,8}", 1..5)) {
        let joined = words.join(" ");
        prop_assert_eq!(normalized_edit_distance(&words, &joined), 0.0);
    }

    /// Normalized distance is never negative and the denominator never zero
    #[test]
    fn distance_finite(
        words in prop::collection::vec("\\PC{0,8}", 0..5),
        target in "\\PC{0,30}",
    ) {
        let d = normalized_edit_distance(&words, &target);
        prop_assert!(d.is_finite() && d >= 0.0);
    }

    /// Edit distance is symmetric
    #[test]
    fn edit_distance_symmetric(a in "\\PC{0,30}", b in "\\PC{0,30}") {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }
}
