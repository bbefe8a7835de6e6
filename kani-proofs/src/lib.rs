// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the seqsim Levenshtein band.
//!
//! This standalone crate extracts the two Levenshtein kernels over byte
//! slices and proves, for every input up to a small bound, that the banded
//! kernel reports exactly what the unlimited kernel computes.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither kernel indexes out of bounds or overflows
//! 2. **Agreement**: banded(a, b, t) == Within(d) iff unlimited(a, b) = d <= t
//! 3. **Saturation**: a threshold of `usize::MAX` never overflows the sentinel

/// Cells outside the band.
pub const UNREACHABLE: usize = usize::MAX;

/// Largest input length the proofs explore.
pub const MAX_PROOF_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    Within(usize),
    Exceeds,
}

// ============================================================================
// LEVENSHTEIN KERNELS (extracted from src/distance/levenshtein.rs)
// ============================================================================

/// Single-row Wagner-Fischer. `short.len() <= long.len()`.
pub fn unlimited(short: &[u8], long: &[u8]) -> usize {
    let n = short.len();
    if n == 0 {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=n).collect();
    for (j, &long_j) in long.iter().enumerate() {
        let mut upper_left = row[0];
        row[0] = j + 1;
        for i in 1..=n {
            let upper = row[i];
            let cost = usize::from(short[i - 1] != long_j);
            row[i] = (row[i - 1] + 1).min(upper + 1).min(upper_left + cost);
            upper_left = upper;
        }
    }
    row[n]
}

/// Banded DP with two alternating rows. `short.len() <= long.len()`.
pub fn banded(short: &[u8], long: &[u8], threshold: usize) -> Distance {
    let n = short.len();
    let m = long.len();

    if n == 0 {
        return if m <= threshold {
            Distance::Within(m)
        } else {
            Distance::Exceeds
        };
    }
    if m - n > threshold {
        return Distance::Exceeds;
    }

    let mut prev = vec![UNREACHABLE; n + 1];
    let mut curr = vec![UNREACHABLE; n + 1];
    for (i, cell) in prev.iter_mut().take(n.min(threshold) + 1).enumerate() {
        *cell = i;
    }

    for j in 1..=m {
        let long_j = long[j - 1];
        curr[0] = j;

        let lo = j.saturating_sub(threshold).max(1);
        let hi = j.saturating_add(threshold).min(n);
        if lo > 1 {
            curr[lo - 1] = UNREACHABLE;
        }

        let mut row_min = UNREACHABLE;
        for i in lo..=hi {
            curr[i] = if short[i - 1] == long_j {
                prev[i - 1]
            } else {
                curr[i - 1].min(prev[i]).min(prev[i - 1]).saturating_add(1)
            };
            row_min = row_min.min(curr[i]);
        }
        if row_min > threshold {
            return Distance::Exceeds;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    if prev[n] <= threshold {
        Distance::Within(prev[n])
    } else {
        Distance::Exceeds
    }
}

/// Order the arguments the way the library does before calling a kernel.
pub fn ordered<'a>(a: &'a [u8], b: &'a [u8]) -> (&'a [u8], &'a [u8]) {
    if a.len() > b.len() {
        (b, a)
    } else {
        (a, b)
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic byte string of length <= MAX_PROOF_LEN over a two-letter alphabet.
    fn any_short_string(buf: &mut [u8; MAX_PROOF_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_PROOF_LEN);
        for cell in buf.iter_mut() {
            let bit: bool = kani::any();
            *cell = if bit { b'a' } else { b'b' };
        }
        len
    }

    /// Verify the banded kernel agrees with the unlimited kernel.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_banded_matches_unlimited() {
        let mut a_buf = [0u8; MAX_PROOF_LEN];
        let mut b_buf = [0u8; MAX_PROOF_LEN];
        let a_len = any_short_string(&mut a_buf);
        let b_len = any_short_string(&mut b_buf);
        let threshold: usize = kani::any_where(|&t| t <= MAX_PROOF_LEN + 1);

        let (short, long) = ordered(&a_buf[..a_len], &b_buf[..b_len]);
        let exact = unlimited(short, long);
        let expected = if exact <= threshold {
            Distance::Within(exact)
        } else {
            Distance::Exceeds
        };

        kani::assert(
            banded(short, long, threshold) == expected,
            "banded result must equal the exact distance or Exceeds",
        );
    }

    /// Verify the unlimited kernel stays inside the length bounds.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_unlimited_bounds() {
        let mut a_buf = [0u8; MAX_PROOF_LEN];
        let mut b_buf = [0u8; MAX_PROOF_LEN];
        let a_len = any_short_string(&mut a_buf);
        let b_len = any_short_string(&mut b_buf);

        let (short, long) = ordered(&a_buf[..a_len], &b_buf[..b_len]);
        let d = unlimited(short, long);

        kani::assert(d >= long.len() - short.len(), "distance below length difference");
        kani::assert(d <= long.len(), "distance above longer length");
    }

    /// Verify a maximal threshold saturates instead of overflowing.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_max_threshold_saturates() {
        let mut a_buf = [0u8; MAX_PROOF_LEN];
        let mut b_buf = [0u8; MAX_PROOF_LEN];
        let a_len = any_short_string(&mut a_buf);
        let b_len = any_short_string(&mut b_buf);

        let (short, long) = ordered(&a_buf[..a_len], &b_buf[..b_len]);
        kani::assert(
            banded(short, long, usize::MAX) == Distance::Within(unlimited(short, long)),
            "maximal threshold must behave like no threshold",
        );
    }
}
