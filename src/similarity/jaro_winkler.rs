// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaro and Jaro-Winkler similarity over sequence views.
//!
//! Matching is greedy: each element of the shorter sequence takes the
//! leftmost unclaimed equal element inside its window and never gives it
//! back. That is not an optimal assignment, and it is not supposed to be:
//! the transposition count, and therefore every score, depends on exactly
//! this tie-break.

use crate::contracts::{check_match_stats, check_similarity_range};
use crate::input::{input, SequenceView};

/// Winkler's prefix scaling factor `p`.
pub const WINKLER_SCALING_FACTOR: f64 = 0.1;

/// Longest common prefix that earns a bonus.
pub const MAX_PREFIX_LENGTH: usize = 4;

/// Jaro scores below this are returned without the prefix bonus.
pub const WINKLER_BOOST_THRESHOLD: f64 = 0.7;

/// Matches, half-transpositions and common prefix of one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MatchStats {
    pub matches: usize,
    /// Mismatched positions between the two matched-element sequences.
    /// Twice the conventional transposition count.
    pub half_transpositions: usize,
    pub prefix: usize,
}

pub(crate) fn match_stats<L, R>(first: &L, second: &R) -> MatchStats
where
    L: SequenceView + ?Sized,
    R: SequenceView<Elem = L::Elem> + ?Sized,
{
    // Ties go to `second` as the longer side.
    let (matches, half_transpositions) = if first.len() > second.len() {
        greedy_matches(second, first)
    } else {
        greedy_matches(first, second)
    };
    let prefix = common_prefix(first, second);

    check_match_stats(
        first.len().min(second.len()),
        matches,
        half_transpositions,
        prefix,
    );

    MatchStats {
        matches,
        half_transpositions,
        prefix,
    }
}

/// Window-bounded greedy matching of `min` against `max`.
///
/// Returns `(matches, half_transpositions)`.
fn greedy_matches<S, T>(min: &S, max: &T) -> (usize, usize)
where
    S: SequenceView + ?Sized,
    T: SequenceView<Elem = S::Elem> + ?Sized,
{
    let range = (max.len() / 2).saturating_sub(1);
    let mut min_flags = vec![false; min.len()];
    let mut max_flags = vec![false; max.len()];
    let mut matches = 0;

    for mi in 0..min.len() {
        let elem = min.at(mi);
        let lo = mi.saturating_sub(range);
        let hi = (mi + range + 1).min(max.len());

        for xi in lo..hi {
            if !max_flags[xi] && elem == max.at(xi) {
                min_flags[mi] = true;
                max_flags[xi] = true;
                matches += 1;
                break;
            }
        }
    }

    // Matched elements from each side, each in its own original order.
    let min_matched = (0..min.len()).filter(|&i| min_flags[i]).map(|i| min.at(i));
    let max_matched = (0..max.len()).filter(|&i| max_flags[i]).map(|i| max.at(i));

    let half_transpositions = min_matched
        .zip(max_matched)
        .filter(|(a, b)| a != b)
        .count();

    (matches, half_transpositions)
}

/// Leading positions where both sequences agree, capped at [`MAX_PREFIX_LENGTH`].
fn common_prefix<L, R>(first: &L, second: &R) -> usize
where
    L: SequenceView + ?Sized,
    R: SequenceView<Elem = L::Elem> + ?Sized,
{
    let cap = MAX_PREFIX_LENGTH.min(first.len()).min(second.len());
    (0..cap)
        .take_while(|&i| first.at(i) == second.at(i))
        .count()
}

fn jaro_score(left_len: usize, right_len: usize, stats: &MatchStats) -> f64 {
    if stats.matches == 0 {
        return 0.0;
    }
    let m = stats.matches as f64;
    let half = stats.half_transpositions as f64 / 2.0;
    (m / left_len as f64 + m / right_len as f64 + (m - half) / m) / 3.0
}

/// Jaro similarity without the Winkler prefix bonus.
pub fn jaro_similarity<L, R>(left: &L, right: &R) -> f64
where
    L: SequenceView + ?Sized,
    R: SequenceView<Elem = L::Elem> + ?Sized,
{
    if left.same_elements(right) {
        return 1.0;
    }

    let stats = match_stats(left, right);
    let score = jaro_score(left.len(), right.len(), &stats);

    check_similarity_range(score);
    score
}

/// Jaro-Winkler similarity in `[0.0, 1.0]`.
///
/// ```text
/// jaro_winkler_similarity("", "")               = 1.0
/// jaro_winkler_similarity("foo", "foo")         = 1.0
/// jaro_winkler_similarity("foo", "foo ")        = 0.94
/// jaro_winkler_similarity("foo", "foo  ")       = 0.91
/// jaro_winkler_similarity("foo", " foo ")       = 0.87
/// jaro_winkler_similarity("foo", "  foo")       = 0.51
/// jaro_winkler_similarity("", "a")              = 0.0
/// jaro_winkler_similarity("frog", "fog")        = 0.93
/// jaro_winkler_similarity("fly", "ant")         = 0.0
/// jaro_winkler_similarity("elephant", "hippo")  = 0.44
/// jaro_winkler_similarity("hello", "hallo")     = 0.88
/// ```
pub fn jaro_winkler_similarity<L, R>(left: &L, right: &R) -> f64
where
    L: SequenceView + ?Sized,
    R: SequenceView<Elem = L::Elem> + ?Sized,
{
    // Identical inputs short-circuit before the zero-match case below,
    // which would otherwise score two empty sequences as 0.0.
    if left.same_elements(right) {
        return 1.0;
    }

    let stats = match_stats(left, right);
    if stats.matches == 0 {
        return 0.0;
    }

    let j = jaro_score(left.len(), right.len(), &stats);
    let score = if j < WINKLER_BOOST_THRESHOLD {
        j
    } else {
        j + WINKLER_SCALING_FACTOR * stats.prefix as f64 * (1.0 - j)
    };

    check_similarity_range(score);
    score
}

/// Jaro-Winkler similarity between two strings, compared by character.
pub fn str_jaro_winkler(left: &str, right: &str) -> f64 {
    jaro_winkler_similarity(&input(left), &input(right))
}

/// Jaro similarity between two strings, compared by character.
pub fn str_jaro(left: &str, right: &str) -> f64 {
    jaro_similarity(&input(left), &input(right))
}

/// Stateless Jaro-Winkler comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JaroWinklerSimilarity;

impl JaroWinklerSimilarity {
    pub fn apply<L, R>(&self, left: &L, right: &R) -> f64
    where
        L: SequenceView + ?Sized,
        R: SequenceView<Elem = L::Elem> + ?Sized,
    {
        jaro_winkler_similarity(left, right)
    }

    pub fn apply_str(&self, left: &str, right: &str) -> f64 {
        str_jaro_winkler(left, right)
    }
}

/// Stateless Jaro comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JaroSimilarity;

impl JaroSimilarity {
    pub fn apply<L, R>(&self, left: &L, right: &R) -> f64
    where
        L: SequenceView + ?Sized,
        R: SequenceView<Elem = L::Elem> + ?Sized,
    {
        jaro_similarity(left, right)
    }

    pub fn apply_str(&self, left: &str, right: &str) -> f64 {
        str_jaro(left, right)
    }
}
