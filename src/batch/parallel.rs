// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring many pairs at once.
//!
//! Comparators are `Copy` and the engines keep no state between calls, so
//! pairs are embarrassingly parallel. With the `parallel` feature rayon
//! spreads them over the pool; without it they run in order on the caller's
//! thread. Output order always matches input order.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use super::{score_pair, BatchOptions, PairRecord, PairScore};

/// Score every pair, preserving input order.
pub fn score_all(pairs: &[(usize, PairRecord)], options: &BatchOptions) -> Vec<PairScore> {
    #[cfg(feature = "parallel")]
    let scores: Vec<PairScore> = pairs
        .par_iter()
        .map(|(line, record)| score_pair(*line, record, options))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<PairScore> = pairs
        .iter()
        .map(|(line, record)| score_pair(*line, record, options))
        .collect();

    summarize(&scores);
    scores
}

/// Score every pair with progress reporting.
#[cfg(feature = "parallel")]
pub fn score_all_with_progress(
    pairs: &[(usize, PairRecord)],
    options: &BatchOptions,
    progress: &ProgressBar,
) -> Vec<PairScore> {
    let counter = AtomicUsize::new(0);
    let total = pairs.len();

    let scores: Vec<PairScore> = pairs
        .par_iter()
        .map(|(line, record)| {
            let score = score_pair(*line, record, options);

            // Update progress
            progress.inc(1);
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            if count % 1000 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            score
        })
        .collect();

    summarize(&scores);
    scores
}

fn summarize(scores: &[PairScore]) {
    let exceeded = scores.iter().filter(|s| s.distance.is_none()).count();
    info!(pairs = scores.len(), exceeded, "batch scored");
}
