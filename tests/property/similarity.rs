//! Property tests for Jaro and Jaro-Winkler similarity.

use proptest::prelude::*;
use seqsim::{jaro_winkler_similarity, str_jaro, str_jaro_winkler, MAX_PREFIX_LENGTH, WINKLER_SCALING_FACTOR};

// ============================================================================
// STRATEGIES
// ============================================================================

fn dense_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcd]{0,10}").unwrap()
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,16}").unwrap()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: scores stay in [0, 1].
    #[test]
    fn prop_range(a in word_strategy(), b in word_strategy()) {
        let jw = str_jaro_winkler(&a, &b);
        let j = str_jaro(&a, &b);
        prop_assert!((0.0..=1.0).contains(&jw), "jaro_winkler out of range: {}", jw);
        prop_assert!((0.0..=1.0).contains(&j), "jaro out of range: {}", j);
    }

    /// Property: score is 1 exactly when the inputs are equal.
    #[test]
    fn prop_one_iff_equal(a in dense_word_strategy(), b in dense_word_strategy()) {
        prop_assert_eq!(str_jaro_winkler(&a, &b) == 1.0, a == b);
    }

    /// Property: argument order does not matter.
    #[test]
    fn prop_symmetry(a in dense_word_strategy(), b in dense_word_strategy()) {
        prop_assert_eq!(str_jaro_winkler(&a, &b), str_jaro_winkler(&b, &a));
        prop_assert_eq!(str_jaro(&a, &b), str_jaro(&b, &a));
    }

    /// Property: the prefix bonus only raises the score, and by a bounded amount.
    #[test]
    fn prop_winkler_bonus_bounded(a in dense_word_strategy(), b in dense_word_strategy()) {
        let j = str_jaro(&a, &b);
        let jw = str_jaro_winkler(&a, &b);
        let max_bonus = WINKLER_SCALING_FACTOR * MAX_PREFIX_LENGTH as f64 * (1.0 - j);
        prop_assert!(jw >= j);
        prop_assert!(jw - j <= max_bonus + 1e-12);
    }

    /// Property: inputs with no element in common score 0.
    #[test]
    fn prop_disjoint_alphabets_score_zero(
        a in prop::string::string_regex("[a-m]{1,10}").unwrap(),
        b in prop::string::string_regex("[n-z]{1,10}").unwrap()
    ) {
        prop_assert_eq!(str_jaro_winkler(&a, &b), 0.0);
        prop_assert_eq!(str_jaro(&a, &b), 0.0);
    }

    /// Property: the empty input scores 0 against anything non-empty.
    #[test]
    fn prop_empty_scores_zero(a in prop::string::string_regex("[a-z]{1,10}").unwrap()) {
        prop_assert_eq!(str_jaro_winkler("", &a), 0.0);
        prop_assert_eq!(str_jaro_winkler(&a, ""), 0.0);
    }

    /// Property: integer sequences behave like character sequences with the same pattern.
    #[test]
    fn prop_element_type_does_not_matter(a in dense_word_strategy(), b in dense_word_strategy()) {
        let to_ints = |s: &str| s.bytes().map(u32::from).collect::<Vec<u32>>();
        prop_assert_eq!(
            jaro_winkler_similarity(&to_ints(&a), &to_ints(&b)),
            str_jaro_winkler(&a, &b)
        );
    }
}
