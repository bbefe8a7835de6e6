//! Exact edit distance and similarity scoring over arbitrary sequences.
//!
//! Two engines, one abstraction. Both are written against [`SequenceView`],
//! so the same code compares characters of a string, words of a sentence,
//! or any other run of `PartialEq` elements.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────┐
//!                 │     input.rs     │
//!                 │  (SequenceView,  │
//!                 │  CharView, input)│
//!                 └────────┬─────────┘
//!            ┌─────────────┴─────────────┐
//!            ▼                           ▼
//! ┌─────────────────────┐     ┌─────────────────────┐
//! │      distance/      │     │     similarity/     │
//! │ (edit_distance,     │     │ (jaro_similarity,   │
//! │  edit_distance_     │     │  jaro_winkler_      │
//! │  within, Distance)  │     │  similarity)        │
//! └─────────────────────┘     └─────────────────────┘
//!            │                           │
//!            ▼                           ▼
//! ┌─────────────────────────────────────────────────┐
//! │                   contracts.rs                   │
//! │   (debug-mode bound checks on every result)     │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The engines share nothing but the view trait. Neither allocates beyond a
//! couple of buffers sized to its inputs, and neither keeps state between
//! calls, so any number of comparisons can run concurrently.
//!
//! # Usage
//!
//! ```
//! use seqsim::{edit_distance_within, input, str_edit_distance, str_jaro_winkler, Distance};
//!
//! assert_eq!(str_edit_distance("frog", "fog"), 1);
//! assert_eq!(
//!     edit_distance_within(&input("elephant"), &input("hippo"), 6),
//!     Distance::Exceeds
//! );
//! assert!(str_jaro_winkler("frog", "fog") > 0.9);
//!
//! // Any PartialEq elements work, not just characters.
//! let a = ["new", "york", "city"];
//! let b = ["new", "york"];
//! assert_eq!(seqsim::edit_distance(&a, &b), 1);
//! ```

// Module declarations
pub mod batch;
pub mod contracts;
pub mod distance;
mod error;
pub mod input;
pub mod similarity;
pub mod testing;

// Re-exports for public API
pub use distance::{
    edit_distance, edit_distance_within, str_edit_distance, str_edit_distance_within, Distance,
    LevenshteinDistance,
};
pub use error::{Result, SimilarityError};
pub use input::{input, CharView, SequenceView};
pub use similarity::{
    jaro_similarity, jaro_winkler_similarity, str_jaro, str_jaro_winkler, JaroSimilarity,
    JaroWinklerSimilarity, MAX_PREFIX_LENGTH, WINKLER_BOOST_THRESHOLD, WINKLER_SCALING_FACTOR,
};
