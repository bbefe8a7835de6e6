// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Jaro and Jaro-Winkler similarity.
//!
//! Scores must be finite, inside [0, 1], symmetric, and exactly 1 only for
//! equal inputs. The Winkler bonus must never lower the Jaro score.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqsim::{jaro_similarity, jaro_winkler_similarity};

#[derive(Debug, Arbitrary)]
struct SimilarityInput {
    left: String,
    right: String,
}

fuzz_target!(|input: SimilarityInput| {
    let left: Vec<char> = input.left.chars().take(200).collect();
    let right: Vec<char> = input.right.chars().take(200).collect();

    let j = jaro_similarity(&left, &right);
    let jw = jaro_winkler_similarity(&left, &right);

    assert!(j.is_finite() && (0.0..=1.0).contains(&j), "jaro out of range: {}", j);
    assert!(jw.is_finite() && (0.0..=1.0).contains(&jw), "jaro_winkler out of range: {}", jw);
    assert!(jw >= j, "winkler bonus lowered the score: {} < {}", jw, j);
    assert_eq!(jw == 1.0, left == right, "score of 1 must mean equal inputs");
    assert_eq!(jw, jaro_winkler_similarity(&right, &left), "score not symmetric");
});
