// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance: how many single-element edits separate two sequences.
//!
//! Two algorithms behind one comparator. The unlimited form keeps a single
//! rolling row and always returns the exact distance. The bounded form only
//! fills a diagonal band of width `2·threshold + 1` and gives up as soon as
//! the answer is known to be over the threshold, which is what you want when
//! all you care about is "close enough".

mod levenshtein;

pub use levenshtein::*;
