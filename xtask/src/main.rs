//! Custom cargo commands for the seqsim crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (no fuzzing)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["edit_distance", "jaro_winkler", "batch_records"];

/// Seconds each target runs during `verify`.
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(FUZZ_SECONDS)?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + both feature sets + fuzzing)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy, no fuzzing)
  bench     Run benchmarks
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s (needs cargo-fuzz)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("seqsim Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: Run tests
    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Sequential build
    println!("[3/5] Running tests without the parallel feature...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build passed\n");

    // Step 4: Clippy
    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 5: Fuzz smoke run
    println!("[5/5] Fuzzing each target for {}s...", FUZZ_SECONDS);
    fuzz(FUZZ_SECONDS)?;
    println!("✓ Fuzz targets clean\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check (no fuzzing)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for `seconds`
fn fuzz(seconds: u32) -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", seconds);

    for &target in FUZZ_TARGETS {
        println!("  fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", max_time.as_str()])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("fuzz target {} found a failure", target);
        }
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| env::current_dir())
        .context("Failed to locate project root")?;

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}
