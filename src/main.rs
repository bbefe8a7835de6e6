// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::debug;

use seqsim::batch::{self, words, BatchOptions, Metric, Unit};
use seqsim::{
    input, jaro_similarity, jaro_winkler_similarity, Distance, LevenshteinDistance, SequenceView,
};

mod cli;
use cli::display::{render_distance, render_similarity};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries results
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Distance {
            left,
            right,
            threshold,
            unit,
            json,
        } => run_distance(&left, &right, threshold, unit.into(), json),
        Commands::Similarity {
            left,
            right,
            metric,
            unit,
            json,
        } => run_similarity(&left, &right, metric.into(), unit.into(), json),
        Commands::Batch {
            input,
            threshold,
            metric,
            unit,
        } => {
            let options = BatchOptions {
                distance: LevenshteinDistance::new(threshold)?,
                metric: metric.into(),
                unit: unit.into(),
            };
            run_batch(input.as_deref(), &options)
        }
    }
}

fn run_distance(
    left: &str,
    right: &str,
    threshold: Option<i64>,
    unit: Unit,
    as_json: bool,
) -> Result<()> {
    let comparator = LevenshteinDistance::new(threshold)?;
    let distance = match unit {
        Unit::Char => comparator.apply(&input(left), &input(right)),
        Unit::Word => comparator.apply(&words(left), &words(right)),
    };
    debug!(%distance, ?unit, "distance computed");

    if as_json {
        let value = json!({
            "distance": distance.into_option(),
            "threshold": comparator.threshold(),
            "exceeds": matches!(distance, Distance::Exceeds),
        });
        println!("{}", value);
    } else {
        println!("{}", render_distance(distance, comparator.threshold()));
    }
    Ok(())
}

fn run_similarity(left: &str, right: &str, metric: Metric, unit: Unit, as_json: bool) -> Result<()> {
    let score = match unit {
        Unit::Char => similarity(&input(left), &input(right), metric),
        Unit::Word => similarity(&words(left), &words(right), metric),
    };
    debug!(score, ?metric, ?unit, "similarity computed");

    if as_json {
        println!("{}", json!({ "similarity": score }));
    } else {
        println!("{}", render_similarity(score, metric));
    }
    Ok(())
}

fn similarity<L, R>(left: &L, right: &R, metric: Metric) -> f64
where
    L: SequenceView + ?Sized,
    R: SequenceView<Elem = L::Elem> + ?Sized,
{
    match metric {
        Metric::JaroWinkler => jaro_winkler_similarity(left, right),
        Metric::Jaro => jaro_similarity(left, right),
    }
}

fn run_batch(path: Option<&std::path::Path>, options: &BatchOptions) -> Result<()> {
    let pairs = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            batch::read_pairs(BufReader::new(file))?
        }
        None => batch::read_pairs(io::stdin().lock())?,
    };

    let scores = score_pairs(&pairs, options);
    batch::write_scores(io::stdout().lock(), &scores)?;
    Ok(())
}

#[cfg(feature = "parallel")]
fn score_pairs(pairs: &[(usize, batch::PairRecord)], options: &BatchOptions) -> Vec<batch::PairScore> {
    use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

    let progress = ProgressBar::new(pairs.len() as u64);
    if atty::is(atty::Stream::Stderr) {
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:<8} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
        ) {
            progress.set_style(style.progress_chars("━━╸"));
        }
        progress.set_prefix("Scoring");
    } else {
        progress.set_draw_target(ProgressDrawTarget::hidden());
    }

    let scores = batch::score_all_with_progress(pairs, options, &progress);
    progress.finish_and_clear();
    scores
}

#[cfg(not(feature = "parallel"))]
fn score_pairs(pairs: &[(usize, batch::PairRecord)], options: &BatchOptions) -> Vec<batch::PairScore> {
    batch::score_all(pairs, options)
}
