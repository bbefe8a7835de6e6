// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the seqsim CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `SEQSIM_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark. Respects `NO_COLOR` and falls back to
//! plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `SEQSIM_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use seqsim::batch::Metric;
use seqsim::Distance;

/// Cells in a similarity bar.
pub const BAR_WIDTH: usize = 20;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SEQSIM_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; colors 7+ (except 8) are light backgrounds
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Color for a similarity score: green when close, yellow past the Winkler
/// boost threshold, red otherwise.
fn score_color(score: f64) -> fn() -> String {
    if score >= 0.9 {
        GREEN
    } else if score >= seqsim::WINKLER_BOOST_THRESHOLD {
        YELLOW
    } else {
        RED
    }
}

/// `██████████░░░░░░░░░░` for a score in `[0, 1]`.
pub fn score_bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

pub fn render_distance(distance: Distance, threshold: Option<usize>) -> String {
    match (distance, threshold) {
        (Distance::Within(d), None) => {
            format!("{} {}", themed(CYAN, &[BOLD], &d.to_string()), themed(GRAY, &[], "edits"))
        }
        (Distance::Within(d), Some(t)) => format!(
            "{} {}",
            themed(GREEN, &[BOLD], &d.to_string()),
            themed(GRAY, &[], &format!("edits (threshold {})", t))
        ),
        (Distance::Exceeds, Some(t)) => format!(
            "{} {}",
            themed(RED, &[BOLD], &format!("> {}", t)),
            themed(GRAY, &[], "edits (threshold exceeded)")
        ),
        (Distance::Exceeds, None) => themed(RED, &[BOLD], "exceeds"),
    }
}

pub fn render_similarity(score: f64, metric: Metric) -> String {
    let label = match metric {
        Metric::JaroWinkler => "jaro-winkler",
        Metric::Jaro => "jaro",
    };
    let color = score_color(score);
    format!(
        "{} {} {}",
        themed(color, &[BOLD], &format!("{:.4}", score)),
        themed(color, &[], &score_bar(score)),
        themed(GRAY, &[], label)
    )
}
