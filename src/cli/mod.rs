// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the seqsim command-line interface.
//!
//! Three subcommands: `distance` and `similarity` compare one pair given on
//! the command line, `batch` scores JSON-lines pairs from a file or stdin.
//! Splitting into words (`--unit word`) happens here, before anything reaches
//! the engines.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use seqsim::batch::{Metric, Unit};

/// Command-line spelling of [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    /// Unicode scalar values
    Char,
    /// Whitespace-separated words
    Word,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Char => Unit::Char,
            UnitArg::Word => Unit::Word,
        }
    }
}

/// Command-line spelling of [`Metric`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    JaroWinkler,
    Jaro,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::JaroWinkler => Metric::JaroWinkler,
            MetricArg::Jaro => Metric::Jaro,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "seqsim",
    about = "Exact edit distance and Jaro-Winkler similarity",
    version
)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "seqsim=trace")
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Levenshtein edit distance between two inputs
    Distance {
        left: String,

        right: String,

        /// Stop once the distance is known to exceed this many edits
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<i64>,

        /// Compare characters or whitespace-separated words
        #[arg(short, long, value_enum, default_value_t = UnitArg::Char)]
        unit: UnitArg,

        /// Print a JSON object instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Similarity score in [0, 1] between two inputs
    Similarity {
        left: String,

        right: String,

        #[arg(short, long, value_enum, default_value_t = MetricArg::JaroWinkler)]
        metric: MetricArg,

        /// Compare characters or whitespace-separated words
        #[arg(short, long, value_enum, default_value_t = UnitArg::Char)]
        unit: UnitArg,

        /// Print a JSON object instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Score JSON-lines pairs ({"left": ..., "right": ...}) and emit JSON lines
    Batch {
        /// Input file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Report distances above this as null
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<i64>,

        #[arg(short, long, value_enum, default_value_t = MetricArg::JaroWinkler)]
        metric: MetricArg,

        /// Compare characters or whitespace-separated words
        #[arg(short, long, value_enum, default_value_t = UnitArg::Char)]
        unit: UnitArg,
    },
}
