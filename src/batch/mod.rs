// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch scoring of string pairs.
//!
//! Input is JSON lines, one `{"left": ..., "right": ...}` object per line.
//! Output is JSON lines too, one score record per input pair, in input order.
//! Every pair is independent, so the work fans out over rayon when the
//! `parallel` feature is on.

pub mod parallel;

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::LevenshteinDistance;
use crate::error::{Result, SimilarityError};
use crate::input::{input, SequenceView};
use crate::similarity::{jaro_similarity, jaro_winkler_similarity};

pub use parallel::*;

/// What one sequence element is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    /// Unicode scalar values
    #[default]
    Char,
    /// Whitespace-separated words
    Word,
}

/// Which similarity score to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    JaroWinkler,
    Jaro,
}

/// Settings shared by every pair in a batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub distance: LevenshteinDistance,
    pub metric: Metric,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PairRecord {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScore {
    /// 1-based line of the pair in the input.
    pub line: usize,
    /// `None` when the distance exceeds the configured threshold.
    pub distance: Option<usize>,
    pub similarity: f64,
}

/// Read JSON-lines pairs. Blank lines are skipped but still counted.
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Vec<(usize, PairRecord)>> {
    let mut pairs = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let record: PairRecord =
            serde_json::from_str(&line).map_err(|e| SimilarityError::BatchRecord {
                line: line_no,
                message: e.to_string(),
            })?;
        pairs.push((line_no, record));
    }

    debug!(pairs = pairs.len(), "read batch input");
    Ok(pairs)
}

/// Write scores as JSON lines.
pub fn write_scores<W: Write>(mut writer: W, scores: &[PairScore]) -> Result<()> {
    for score in scores {
        let json = serde_json::to_string(score).map_err(std::io::Error::from)?;
        writeln!(writer, "{}", json)?;
    }
    writer.flush()?;
    Ok(())
}

/// Split text into whitespace-separated words, the unit of `Unit::Word`.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Score one pair.
pub fn score_pair(line: usize, record: &PairRecord, options: &BatchOptions) -> PairScore {
    let (distance, similarity) = match options.unit {
        Unit::Char => score_views(&input(&record.left), &input(&record.right), options),
        Unit::Word => score_views(&words(&record.left), &words(&record.right), options),
    };

    PairScore {
        line,
        distance,
        similarity,
    }
}

fn score_views<L, R>(left: &L, right: &R, options: &BatchOptions) -> (Option<usize>, f64)
where
    L: SequenceView + ?Sized,
    R: SequenceView<Elem = L::Elem> + ?Sized,
{
    let distance = options.distance.apply(left, right).into_option();
    let similarity = match options.metric {
        Metric::JaroWinkler => jaro_winkler_similarity(left, right),
        Metric::Jaro => jaro_similarity(left, right),
    };
    (distance, similarity)
}
