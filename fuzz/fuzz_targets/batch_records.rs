// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the JSON-lines batch reader.
//!
//! Arbitrary bytes must produce either pairs or a line-numbered error, never
//! a panic. Whatever parses must score without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use seqsim::batch::{read_pairs, score_all, BatchOptions};
use seqsim::{LevenshteinDistance, SimilarityError};

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }

    match read_pairs(data) {
        Ok(pairs) => {
            let options = BatchOptions {
                distance: LevenshteinDistance::with_threshold(3),
                ..BatchOptions::default()
            };
            let scores = score_all(&pairs, &options);
            assert_eq!(scores.len(), pairs.len());
        }
        Err(SimilarityError::BatchRecord { line, .. }) => assert!(line >= 1),
        Err(SimilarityError::Io(_)) => {} // invalid UTF-8
        Err(e) => panic!("unexpected error: {}", e),
    }
});
