// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Levenshtein distance.
//!
//! The banded path must agree with the unlimited path for every threshold,
//! and both must stay inside the length bounds. A disagreement means the band
//! dropped a cell it needed or the early exit fired too soon.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqsim::{edit_distance, edit_distance_within, Distance};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    left: String,
    right: String,
    /// Threshold, kept small so the band is actually narrow
    threshold: u8,
    /// Also compare as raw bytes
    bytes: bool,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let left: Vec<char> = input.left.chars().take(200).collect();
    let right: Vec<char> = input.right.chars().take(200).collect();
    check(&left, &right, input.threshold as usize);

    if input.bytes {
        let left: Vec<u8> = input.left.bytes().take(200).collect();
        let right: Vec<u8> = input.right.bytes().take(200).collect();
        check(&left, &right, input.threshold as usize);
    }
});

fn check<E: PartialEq>(left: &[E], right: &[E], threshold: usize) {
    let exact = edit_distance(left, right);

    assert!(exact >= left.len().abs_diff(right.len()), "distance below length difference");
    assert!(exact <= left.len().max(right.len()), "distance above longer length");
    assert_eq!(exact, edit_distance(right, left), "distance not symmetric");

    let expected = if exact <= threshold {
        Distance::Within(exact)
    } else {
        Distance::Exceeds
    };
    assert_eq!(
        edit_distance_within(left, right, threshold),
        expected,
        "banded result disagrees with exact distance {} at threshold {}",
        exact,
        threshold
    );
    assert_eq!(edit_distance_within(right, left, threshold), expected);
}
