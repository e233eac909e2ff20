//! CLI interface definitions for the `duwalk` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`SortKey`]: an enum for sorting output by `size` or `name`
//! - [`CsvRow`]: the record shape written by the CSV renderer
//!
//! # Example
//!
//! ```bash
//! duwalk /var/lib /var/log --sort size --compare --output usage.csv
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `duwalk` usage measurer.
///
/// Each given path is measured independently with the native metadata walk.
/// Compare mode additionally runs the external `du` and `find` baselines on
/// every path and reports how the native numbers and timings line up.
#[derive(Parser, Debug)]
#[command(name = "duwalk", version, about)]
pub struct Args {
    /// Directories to measure (defaults to current directory)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Sort output by name or size
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    /// Cross-check the native walk against external `du` and `find`
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    /// Timeout in seconds for external commands in compare mode
    #[arg(long, value_name = "SECS", default_value_t = 120)]
    pub timeout: u64,

    /// Write results to a CSV file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,

    /// Hide the progress spinner
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

/// Enum for specifying how to sort measured paths.
///
/// # Variants
/// * `Name` - Sort entries alphabetically by path name
/// * `Size` - Sort entries by allocated bytes in descending order
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum SortKey {
    Name,
    Size,
}

/// A single record of output (used for CSV serialization).
///
/// # Fields
/// * `path` - Full path of the measured directory
/// * `bytes` - Allocated bytes, hardlinks counted once
/// * `bytes_human` - Human-readable size (e.g., "1.2 MB")
/// * `inodes` - Number of distinct entries counted
#[derive(Debug, serde::Serialize)]
pub struct CsvRow {
    pub path: String,
    pub bytes: u64,
    pub bytes_human: String,
    pub inodes: u64,
}
