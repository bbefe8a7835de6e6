// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity scoring: Jaro and Jaro-Winkler.
//!
//! Scores run from 0.0 (nothing in common) to 1.0 (identical). Jaro counts
//! elements that match within a sliding window and penalizes the ones that
//! match out of order. Winkler adds a bonus for a shared prefix, on the
//! theory that typos cluster towards the end of a word.

mod jaro_winkler;

pub use jaro_winkler::*;
