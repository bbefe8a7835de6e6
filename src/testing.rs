//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides reference implementations that are slow but obviously
//! correct, for differential testing of the optimized engines.

#![doc(hidden)]

/// Levenshtein distance over the full `(n+1) × (m+1)` grid.
///
/// No rolling rows, no swapping, no band. Every cell is computed straight
/// from the recurrence.
pub fn oracle_levenshtein<E: PartialEq>(left: &[E], right: &[E]) -> usize {
    let n = left.len();
    let m = right.len();
    let mut grid = vec![vec![0usize; m + 1]; n + 1];

    for (i, row) in grid.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        grid[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            grid[i][j] = if left[i - 1] == right[j - 1] {
                grid[i - 1][j - 1]
            } else {
                1 + grid[i - 1][j].min(grid[i][j - 1]).min(grid[i - 1][j - 1])
            };
        }
    }

    grid[n][m]
}

/// Bounded distance derived from the oracle: `Some(d)` iff `d <= threshold`.
pub fn oracle_levenshtein_within<E: PartialEq>(
    left: &[E],
    right: &[E],
    threshold: usize,
) -> Option<usize> {
    let d = oracle_levenshtein(left, right);
    (d <= threshold).then_some(d)
}

/// Character vector for feeding strings to the slice oracles.
pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

pub use crate::batch::words;
