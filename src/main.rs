//! Main entry point for the `duwalk` CLI application.
//!
//! `duwalk` measures the real disk usage and inode count of directory trees
//! by walking filesystem metadata natively instead of shelling out to `du`,
//! while deduplicating hardlinks and staying on the root's filesystem.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Runs the native walk for each given path
//! - In compare mode, runs the external `du`/`find` baselines as well and
//!   reports values, deltas, and per-phase timings
//! - Handles terminal or CSV output formatting and sorting
//!
//! # Output Modes
//! - Terminal lines with size, inode count, and path
//! - CSV export via `--output <file.csv>` (plus `report.json` in compare
//!   mode)
//!
//! # Flags of Interest
//! - `--compare`: Cross-check against `du` and `find`
//! - `--timeout SECS`: Wall-clock limit for the external commands
//! - `--sort size|name`: Sort output by size or name

use anyhow::{Context, Result};
use clap::Parser;
use duwalk::baseline::{du_disk_usage, find_inode_usage};
use duwalk::cli::Args;
use duwalk::data::{sort_records, UsageRecord};
use duwalk::metrics::{print_compare_summary, save_report_json, CompareReport, PhaseTimer};
use duwalk::output::{render_csv, render_terminal};
use duwalk::walk::compute_usage;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Sets up a spinner for one measurement, hidden in quiet mode.
fn setup_spinner(path: &Path, quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} Measuring {msg}... [{elapsed}]")
            .context("Failed to set progress template")?,
    );
    pb.set_message(path.display().to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Measures one path natively and, in compare mode, against the baselines.
fn measure_path(
    path: &Path,
    args: &Args,
    timeout: Duration,
) -> Result<(UsageRecord, Option<CompareReport>)> {
    let pb = setup_spinner(path, args.quiet)?;
    let walk_timer = PhaseTimer::new("walk");
    let usage =
        compute_usage(path).with_context(|| format!("failed to measure {}", path.display()))?;
    let walk_phase = walk_timer.finish();
    pb.finish_and_clear();

    let record = UsageRecord {
        path: path.to_path_buf(),
        usage,
    };

    if !args.compare {
        return Ok((record, None));
    }

    let du_timer = PhaseTimer::new("du");
    let du_bytes = du_disk_usage(path, timeout)?;
    let du_phase = du_timer.finish();

    let find_timer = PhaseTimer::new("find");
    let find_inodes = find_inode_usage(path, timeout)?;
    let find_phase = find_timer.finish();

    let report = CompareReport {
        path: path.display().to_string(),
        native: usage,
        du_bytes,
        find_inodes,
        phases: vec![walk_phase, du_phase, find_phase],
    };

    Ok((record, Some(report)))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let timeout = Duration::from_secs(args.timeout);

    let mut records = Vec::new();
    let mut reports = Vec::new();
    for path in &args.paths {
        let (record, report) = measure_path(path, &args, timeout)?;
        records.push(record);
        reports.extend(report);
    }

    sort_records(&mut records, args.sort);

    if args.output.is_some() {
        render_csv(&records, &args)?;
    } else {
        render_terminal(&records)?;
    }

    for report in &reports {
        print_compare_summary(report);
    }

    if let Some(output) = &args.output {
        if !reports.is_empty() {
            save_report_json(Path::new(output), &reports)
                .map_err(|e| anyhow::anyhow!("failed to save cross-check report: {e}"))?;
        }
    }

    Ok(())
}
