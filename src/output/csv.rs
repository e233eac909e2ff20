//! CSV output formatter for measured usage records.
//!
//! This module provides functionality to export usage results to CSV format
//! for further processing or analysis.

use crate::cli::{Args, CsvRow};
use crate::data::UsageRecord;
use anyhow::Result;
use csv::Writer;
use humansize::{format_size, DECIMAL};
use std::fs::File;
use std::io;

/// Renders usage records to CSV format.
///
/// # Arguments
/// * `records` - A slice of already-sorted records to render
/// * `args` - Command line arguments; `--output FILE` selects a file target,
///   otherwise rows go to stdout
///
/// # Returns
/// * `Result<()>` - Ok if rendering succeeded, Err if there was an issue
pub fn render(records: &[UsageRecord], args: &Args) -> Result<()> {
    let writer: Box<dyn io::Write> = if let Some(output_file) = &args.output {
        Box::new(File::create(output_file)?)
    } else {
        Box::new(io::stdout())
    };

    let mut csv_writer = Writer::from_writer(writer);

    for record in records {
        let row = CsvRow {
            path: record.path.display().to_string(),
            bytes: record.usage.bytes,
            bytes_human: format_size(record.usage.bytes, DECIMAL),
            inodes: record.usage.inodes,
        };
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;

    if let Some(output_file) = &args.output {
        eprintln!("CSV output written to: {}", output_file);
    }

    Ok(())
}
