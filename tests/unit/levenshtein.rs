//! Levenshtein distance tests.
//!
//! Reference values, threshold boundaries, and the comparator type.

use seqsim::{
    edit_distance, edit_distance_within, input, str_edit_distance, str_edit_distance_within,
    Distance, LevenshteinDistance, SimilarityError,
};

use crate::common::{chars, oracle_levenshtein, words, REFERENCE_PAIRS};

// =============================================================================
// UNLIMITED
// =============================================================================

#[test]
fn test_reference_pairs() {
    for &(left, right, expected, _) in REFERENCE_PAIRS {
        assert_eq!(
            str_edit_distance(left, right),
            expected,
            "distance({:?}, {:?})",
            left,
            right
        );
    }
}

#[test]
fn test_agrees_with_full_grid_oracle() {
    let words_list = [
        "", "a", "ab", "kitten", "sitting", "saturday", "sunday", "rosettacode",
        "raisethysword", "flaw", "lawn", "intention", "execution",
    ];
    for a in &words_list {
        for b in &words_list {
            assert_eq!(
                str_edit_distance(a, b),
                oracle_levenshtein(&chars(a), &chars(b)),
                "distance({:?}, {:?})",
                a,
                b
            );
        }
    }
}

#[test]
fn test_classic_pairs() {
    assert_eq!(str_edit_distance("kitten", "sitting"), 3);
    assert_eq!(str_edit_distance("saturday", "sunday"), 3);
    assert_eq!(str_edit_distance("rosettacode", "raisethysword"), 8);
    assert_eq!(str_edit_distance("flaw", "lawn"), 2);
}

#[test]
fn test_word_units() {
    let a = words("the quick brown fox");
    let b = words("the quick red fox jumps");
    assert_eq!(edit_distance(&a, &b), 2);
}

// =============================================================================
// THRESHOLD
// =============================================================================

#[test]
fn test_threshold_reference_pairs() {
    assert_eq!(str_edit_distance_within("", "", 0), Distance::Within(0));
    assert_eq!(str_edit_distance_within("aaapppp", "", 8), Distance::Within(7));
    assert_eq!(str_edit_distance_within("aaapppp", "", 7), Distance::Within(7));
    assert_eq!(str_edit_distance_within("aaapppp", "", 6), Distance::Exceeds);
    assert_eq!(str_edit_distance_within("elephant", "hippo", 7), Distance::Within(7));
    assert_eq!(str_edit_distance_within("elephant", "hippo", 6), Distance::Exceeds);
    assert_eq!(str_edit_distance_within("hippo", "elephant", 6), Distance::Exceeds);
    assert_eq!(str_edit_distance_within("hippo", "zzzzzzzz", 1), Distance::Exceeds);
    assert_eq!(str_edit_distance_within("fly", "ant", 3), Distance::Within(3));
    assert_eq!(str_edit_distance_within("fly", "ant", 2), Distance::Exceeds);
}

#[test]
fn test_zero_threshold_is_equality() {
    assert_eq!(str_edit_distance_within("same", "same", 0), Distance::Within(0));
    assert_eq!(str_edit_distance_within("same", "sane", 0), Distance::Exceeds);
    assert_eq!(str_edit_distance_within("same", "samey", 0), Distance::Exceeds);
}

#[test]
fn test_every_threshold_around_the_answer() {
    let pairs = [
        ("kitten", "sitting"),
        ("intention", "execution"),
        ("abcdefgh", "hgfedcba"),
        ("a", "bbbbbbbbbb"),
    ];
    for (a, b) in pairs {
        let exact = str_edit_distance(a, b);
        for t in 0..exact + 3 {
            let expected = if exact <= t {
                Distance::Within(exact)
            } else {
                Distance::Exceeds
            };
            assert_eq!(str_edit_distance_within(a, b, t), expected, "{:?} {:?} t={}", a, b, t);
            assert_eq!(str_edit_distance_within(b, a, t), expected, "{:?} {:?} t={}", b, a, t);
        }
    }
}

#[test]
fn test_threshold_larger_than_inputs() {
    assert_eq!(
        edit_distance_within(&input("abc"), &input("xyz"), usize::MAX),
        Distance::Within(3)
    );
    assert_eq!(
        edit_distance_within(&input(""), &input("xyz"), 1_000_000),
        Distance::Within(3)
    );
}

#[test]
fn test_long_inputs_with_small_band() {
    let a: String = "abcdefghij".repeat(50);
    let mut b = a.clone();
    b.replace_range(100..101, "Z");
    b.insert(300, 'Q');
    assert_eq!(str_edit_distance(&a, &b), 2);
    assert_eq!(str_edit_distance_within(&a, &b, 2), Distance::Within(2));
    assert_eq!(str_edit_distance_within(&a, &b, 1), Distance::Exceeds);
}

// =============================================================================
// COMPARATOR
// =============================================================================

#[test]
fn test_comparator_without_threshold() {
    let unlimited = LevenshteinDistance::default_instance();
    assert_eq!(unlimited.threshold(), None);
    assert_eq!(unlimited.apply_str("elephant", "hippo"), Distance::Within(7));
    assert_eq!(LevenshteinDistance::default(), unlimited);
}

#[test]
fn test_comparator_with_threshold() {
    let bounded = LevenshteinDistance::new(Some(6)).unwrap();
    assert_eq!(bounded.threshold(), Some(6));
    assert_eq!(bounded.apply_str("elephant", "hippo"), Distance::Exceeds);
    assert_eq!(bounded.apply_str("elephant", "hippo").as_signed(), -1);
    assert_eq!(bounded.apply(&input("frog"), &input("fog")).as_signed(), 1);
}

#[test]
fn test_comparator_negative_threshold_is_rejected() {
    match LevenshteinDistance::new(Some(-1)) {
        Err(SimilarityError::NegativeThreshold(t)) => assert_eq!(t, -1),
        other => panic!("expected NegativeThreshold, got {:?}", other),
    }
    assert!(LevenshteinDistance::new(Some(0)).is_ok());
    assert!(LevenshteinDistance::new(None).is_ok());
}

#[test]
fn test_comparator_is_shareable_across_threads() {
    let comparator = LevenshteinDistance::with_threshold(3);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let left = format!("thread{}", i);
                comparator.apply_str(&left, "thread")
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Distance::Within(1));
    }
}
