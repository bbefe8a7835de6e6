// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The algorithms themselves only fail on bad configuration. Exceeding a
//! distance threshold is a result, not an error: see [`crate::Distance`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("Threshold must not be negative, got {0}")]
    NegativeThreshold(i64),

    #[error("Malformed batch record on line {line}: {message}")]
    BatchRecord { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
