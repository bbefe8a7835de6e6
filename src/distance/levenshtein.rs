// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two sequences differ in length by more than the threshold, skip the
//! O(nm) DP entirely. Inside the band, the minimum of each finished row is a
//! lower bound on every later row, so once it passes the threshold nothing
//! can bring the answer back under it.

use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::contracts::{check_bounded_distance, check_distance_bounds};
use crate::error::{Result, SimilarityError};
use crate::input::{input, SequenceView};

/// Cell value for positions outside the band. Saturating arithmetic keeps it
/// pinned at the top instead of wrapping.
const UNREACHABLE: usize = usize::MAX;

/// Result of a comparison that may be cut off by a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    /// The exact edit distance, known to be within the threshold.
    Within(usize),
    /// The true distance is greater than the threshold.
    Exceeds,
}

impl Distance {
    pub fn into_option(self) -> Option<usize> {
        match self {
            Distance::Within(d) => Some(d),
            Distance::Exceeds => None,
        }
    }

    pub fn is_within(self) -> bool {
        matches!(self, Distance::Within(_))
    }

    /// The conventional integer encoding: the distance, or `-1` when exceeded.
    pub fn as_signed(self) -> i64 {
        match self {
            Distance::Within(d) => d as i64,
            Distance::Exceeds => -1,
        }
    }
}

impl From<Distance> for Option<usize> {
    fn from(distance: Distance) -> Self {
        distance.into_option()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Within(d) => write!(f, "{}", d),
            Distance::Exceeds => write!(f, "exceeds"),
        }
    }
}

/// Exact Levenshtein distance between two views.
///
/// ```text
/// edit_distance("", "")               = 0
/// edit_distance("", "a")              = 1
/// edit_distance("aaapppp", "")        = 7
/// edit_distance("frog", "fog")        = 1
/// edit_distance("fly", "ant")         = 3
/// edit_distance("elephant", "hippo")  = 7
/// edit_distance("hippo", "zzzzzzzz")  = 8
/// edit_distance("hello", "hallo")     = 1
/// ```
pub fn edit_distance<L, R>(left: &L, right: &R) -> usize
where
    L: SequenceView + ?Sized,
    R: SequenceView<Elem = L::Elem> + ?Sized,
{
    let (n, m) = (left.len(), right.len());

    // The shorter sequence is the row, so the buffer is min(n, m) + 1 long.
    let distance = if n > m {
        unlimited(right, left)
    } else {
        unlimited(left, right)
    };

    check_distance_bounds(n, m, distance);
    distance
}

/// Levenshtein distance if it is at most `threshold`, otherwise [`Distance::Exceeds`].
///
/// ```text
/// edit_distance_within("", "", 0)               = Within(0)
/// edit_distance_within("aaapppp", "", 8)        = Within(7)
/// edit_distance_within("aaapppp", "", 7)        = Within(7)
/// edit_distance_within("aaapppp", "", 6)        = Exceeds
/// edit_distance_within("elephant", "hippo", 7)  = Within(7)
/// edit_distance_within("elephant", "hippo", 6)  = Exceeds
/// ```
pub fn edit_distance_within<L, R>(left: &L, right: &R, threshold: usize) -> Distance
where
    L: SequenceView + ?Sized,
    R: SequenceView<Elem = L::Elem> + ?Sized,
{
    let (n, m) = (left.len(), right.len());

    // The longer sequence drives the outer loop; the band is bounded by the shorter.
    let result = if n > m {
        banded(right, left, threshold)
    } else {
        banded(left, right, threshold)
    };

    check_bounded_distance(n, m, threshold, result);
    result
}

/// Exact distance between two strings, counted in characters.
pub fn str_edit_distance(left: &str, right: &str) -> usize {
    edit_distance(&input(left), &input(right))
}

/// Bounded distance between two strings, counted in characters.
pub fn str_edit_distance_within(left: &str, right: &str, threshold: usize) -> Distance {
    edit_distance_within(&input(left), &input(right), threshold)
}

/// Single-row Wagner-Fischer. `short.len() <= long.len()`.
fn unlimited<S, T>(short: &S, long: &T) -> usize
where
    S: SequenceView + ?Sized,
    T: SequenceView<Elem = S::Elem> + ?Sized,
{
    let n = short.len();
    let m = long.len();

    if n == 0 {
        return m;
    }

    let mut row: Vec<usize> = (0..=n).collect();

    for j in 1..=m {
        let long_j = long.at(j - 1);
        // row[i - 1] of the previous row, about to be overwritten
        let mut upper_left = row[0];
        row[0] = j;

        for i in 1..=n {
            let upper = row[i];
            let cost = usize::from(short.at(i - 1) != long_j);
            row[i] = (row[i - 1] + 1).min(upper + 1).min(upper_left + cost);
            upper_left = upper;
        }
    }

    row[n]
}

/// Banded DP with two alternating rows. `short.len() <= long.len()`.
fn banded<S, T>(short: &S, long: &T, threshold: usize) -> Distance
where
    S: SequenceView + ?Sized,
    T: SequenceView<Elem = S::Elem> + ?Sized,
{
    let n = short.len();
    let m = long.len();

    if n == 0 {
        return if m <= threshold {
            Distance::Within(m)
        } else {
            Distance::Exceeds
        };
    }

    // Early-exit: length difference is a lower bound on edit distance
    if m - n > threshold {
        trace!(n, m, threshold, "length difference exceeds threshold");
        return Distance::Exceeds;
    }

    let mut prev = vec![UNREACHABLE; n + 1];
    let mut curr = vec![UNREACHABLE; n + 1];

    let boundary = n.min(threshold) + 1;
    for (i, cell) in prev.iter_mut().take(boundary).enumerate() {
        *cell = i;
    }

    for j in 1..=m {
        let long_j = long.at(j - 1);
        curr[0] = j;

        let lo = j.saturating_sub(threshold).max(1);
        let hi = j.saturating_add(threshold).min(n);

        // Left edge of the band: nothing reaches it from this row.
        if lo > 1 {
            curr[lo - 1] = UNREACHABLE;
        }

        let mut row_min = UNREACHABLE;
        for i in lo..=hi {
            curr[i] = if short.at(i - 1) == long_j {
                prev[i - 1]
            } else {
                curr[i - 1].min(prev[i]).min(prev[i - 1]).saturating_add(1)
            };
            row_min = row_min.min(curr[i]);
        }

        // Early-exit: if minimum in this row exceeds threshold, no point continuing
        if row_min > threshold {
            trace!(row = j, row_min, threshold, "band minimum exceeds threshold");
            return Distance::Exceeds;
        }

        mem::swap(&mut prev, &mut curr);
    }

    if prev[n] <= threshold {
        Distance::Within(prev[n])
    } else {
        Distance::Exceeds
    }
}

/// A Levenshtein comparator with an optional threshold.
///
/// Immutable and `Copy`: build one and share it across as many comparisons
/// (and threads) as needed. Without a threshold every comparison is exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LevenshteinDistance {
    threshold: Option<usize>,
}

impl LevenshteinDistance {
    /// The unlimited comparator.
    pub const fn default_instance() -> Self {
        Self { threshold: None }
    }

    pub const fn with_threshold(threshold: usize) -> Self {
        Self {
            threshold: Some(threshold),
        }
    }

    /// Build from a signed threshold, rejecting negative values.
    pub fn new(threshold: Option<i64>) -> Result<Self> {
        match threshold {
            None => Ok(Self::default_instance()),
            Some(t) if t < 0 => Err(SimilarityError::NegativeThreshold(t)),
            Some(t) => {
                let t = usize::try_from(t).unwrap_or(usize::MAX);
                debug!(threshold = t, "bounded levenshtein comparator");
                Ok(Self::with_threshold(t))
            }
        }
    }

    pub fn threshold(&self) -> Option<usize> {
        self.threshold
    }

    /// Compare two views. Unlimited comparators always return `Within`.
    pub fn apply<L, R>(&self, left: &L, right: &R) -> Distance
    where
        L: SequenceView + ?Sized,
        R: SequenceView<Elem = L::Elem> + ?Sized,
    {
        match self.threshold {
            Some(threshold) => edit_distance_within(left, right, threshold),
            None => Distance::Within(edit_distance(left, right)),
        }
    }

    pub fn apply_str(&self, left: &str, right: &str) -> Distance {
        self.apply(&input(left), &input(right))
    }
}
