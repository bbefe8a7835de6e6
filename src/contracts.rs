// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance and similarity engines.
//!
//! Debug-mode assertions that every result satisfies the bounds the
//! algorithms guarantee. They cost nothing in release builds and fail
//! loudly the moment an optimization breaks one of them during tests.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract function          | Property                                       |
//! |----------------------------|------------------------------------------------|
//! | `check_distance_bounds`    | `\|n - m\| ≤ distance ≤ max(n, m)`             |
//! | `check_bounded_distance`   | banded result never exceeds its threshold      |
//! | `check_similarity_range`   | `0.0 ≤ score ≤ 1.0`                            |
//! | `check_match_stats`        | matches ≤ shorter length, half-transpositions ≤ matches, prefix ≤ 4 |

use crate::distance::Distance;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// The Winkler boost can never push a score past 1.0:
/// `j + p·l·(1 - j) ≤ 1` iff `p·l ≤ 1`.
const _: () = {
    use crate::similarity::{MAX_PREFIX_LENGTH, WINKLER_SCALING_FACTOR};

    // INVARIANT: prefix_boost_bounded
    assert!(WINKLER_SCALING_FACTOR * (MAX_PREFIX_LENGTH as f64) <= 1.0);
};

// ============================================================================
// EDIT DISTANCE CONTRACTS
// ============================================================================

/// Check an unlimited edit distance against its trivial bounds.
///
/// The length difference is a lower bound (every extra element costs one
/// insertion). The longer length is an upper bound (substitute the overlap,
/// insert the rest).
///
/// # Panics (debug builds only)
#[inline]
pub fn check_distance_bounds(left_len: usize, right_len: usize, distance: usize) {
    // INVARIANT: length_diff_lower_bound
    debug_assert!(
        left_len.abs_diff(right_len) <= distance,
        "Contract violation: distance {} below length difference |{} - {}|",
        distance,
        left_len,
        right_len
    );
    // INVARIANT: max_length_upper_bound
    debug_assert!(
        distance <= left_len.max(right_len),
        "Contract violation: distance {} above max length max({}, {})",
        distance,
        left_len,
        right_len
    );
}

/// Check a banded result against its threshold.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_bounded_distance(left_len: usize, right_len: usize, threshold: usize, result: Distance) {
    if let Distance::Within(distance) = result {
        // INVARIANT: bounded_within_threshold
        debug_assert!(
            distance <= threshold,
            "Contract violation: bounded distance {} exceeds threshold {}",
            distance,
            threshold
        );
        check_distance_bounds(left_len, right_len, distance);
    }
}

// ============================================================================
// SIMILARITY CONTRACTS
// ============================================================================

/// Check that a similarity score is a proper fraction.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_similarity_range(score: f64) {
    // INVARIANT: similarity_in_unit_interval
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: similarity {} outside [0, 1]",
        score
    );
}

/// Check the intermediate match statistics of a Jaro comparison.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_match_stats(
    shorter_len: usize,
    matches: usize,
    half_transpositions: usize,
    prefix: usize,
) {
    debug_assert!(
        matches <= shorter_len,
        "Contract violation: {} matches for a sequence of length {}",
        matches,
        shorter_len
    );
    debug_assert!(
        half_transpositions <= matches,
        "Contract violation: {} half-transpositions for {} matches",
        half_transpositions,
        matches
    );
    debug_assert!(
        prefix <= crate::similarity::MAX_PREFIX_LENGTH,
        "Contract violation: prefix {} above cap",
        prefix
    );
}
