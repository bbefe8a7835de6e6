//! Property tests for Levenshtein distance.
//!
//! 1. Metric axioms (identity, symmetry, triangle inequality)
//! 2. Length bounds
//! 3. Threshold consistency between the banded and unlimited paths

use proptest::prelude::*;
use seqsim::{edit_distance, edit_distance_within, str_edit_distance, str_edit_distance_within, Distance};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Words over a small alphabet so that matches are common.
fn dense_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,12}").unwrap()
}

/// Words over a wide alphabet, including multi-byte characters.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zé日本ö ]{0,10}").unwrap()
}

/// Sentences as token sequences.
fn token_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(
        prop::sample::select(vec!["the", "a", "quick", "brown", "fox", "jumps", "over"]),
        0..10,
    )
}

// ============================================================================
// METRIC AXIOMS
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: d(a, a) = 0.
    #[test]
    fn prop_identity(a in unicode_word_strategy()) {
        prop_assert_eq!(str_edit_distance(&a, &a), 0);
    }

    /// Property: d(a, b) = 0 only when a = b.
    #[test]
    fn prop_zero_only_for_equal(a in dense_word_strategy(), b in dense_word_strategy()) {
        prop_assert_eq!(str_edit_distance(&a, &b) == 0, a == b);
    }

    /// Property: d(a, b) = d(b, a).
    #[test]
    fn prop_symmetry(a in dense_word_strategy(), b in dense_word_strategy()) {
        prop_assert_eq!(str_edit_distance(&a, &b), str_edit_distance(&b, &a));
    }

    /// Property: d(a, c) <= d(a, b) + d(b, c).
    #[test]
    fn prop_triangle_inequality(
        a in dense_word_strategy(),
        b in dense_word_strategy(),
        c in dense_word_strategy()
    ) {
        let ac = str_edit_distance(&a, &c);
        let ab = str_edit_distance(&a, &b);
        let bc = str_edit_distance(&b, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={} > d(a,b)={} + d(b,c)={}", ac, ab, bc);
    }

    /// Property: |len(a) - len(b)| <= d(a, b) <= max(len(a), len(b)).
    #[test]
    fn prop_length_bounds(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        let la = a.chars().count();
        let lb = b.chars().count();
        let d = str_edit_distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// Property: one inserted character moves the distance by at most one.
    #[test]
    fn prop_single_insertion(a in dense_word_strategy(), b in dense_word_strategy(), pos in 0usize..13) {
        let mut chars: Vec<char> = b.chars().collect();
        let at = pos.min(chars.len());
        chars.insert(at, 'z');
        let b2: String = chars.into_iter().collect();
        let before = str_edit_distance(&a, &b);
        let after = str_edit_distance(&a, &b2);
        prop_assert!(after.abs_diff(before) <= 1);
    }
}

// ============================================================================
// THRESHOLD CONSISTENCY
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: the banded result is the exact distance or Exceeds, never anything else.
    #[test]
    fn prop_banded_matches_unlimited(
        a in dense_word_strategy(),
        b in dense_word_strategy(),
        t in 0usize..15
    ) {
        let exact = str_edit_distance(&a, &b);
        let expected = if exact <= t { Distance::Within(exact) } else { Distance::Exceeds };
        prop_assert_eq!(str_edit_distance_within(&a, &b, t), expected);
    }

    /// Property: the threshold result does not depend on argument order.
    #[test]
    fn prop_banded_symmetry(a in dense_word_strategy(), b in dense_word_strategy(), t in 0usize..8) {
        prop_assert_eq!(
            str_edit_distance_within(&a, &b, t),
            str_edit_distance_within(&b, &a, t)
        );
    }

    /// Property: raising the threshold never turns Within into Exceeds.
    #[test]
    fn prop_threshold_monotone(a in dense_word_strategy(), b in dense_word_strategy(), t in 0usize..12) {
        if let Distance::Within(d) = str_edit_distance_within(&a, &b, t) {
            prop_assert_eq!(str_edit_distance_within(&a, &b, t + 1), Distance::Within(d));
        }
    }

    /// Property: token sequences obey the same threshold rule.
    #[test]
    fn prop_tokens_banded_matches_unlimited(a in token_strategy(), b in token_strategy(), t in 0usize..6) {
        let exact = edit_distance(&a, &b);
        prop_assert_eq!(edit_distance_within(&a, &b, t).into_option(), Some(exact).filter(|&d| d <= t));
    }
}
