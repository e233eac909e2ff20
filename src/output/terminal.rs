//! Terminal output formatter for measured usage records.

use crate::data::UsageRecord;
use anyhow::Result;
use humansize::{format_size, DECIMAL};

/// Renders usage records to terminal output.
///
/// # Arguments
/// * `records` - A slice of already-sorted records to render
///
/// # Returns
/// * `Result<()>` - Ok if rendering succeeded, Err if there was an issue
///
/// # Note
/// This function accepts pre-sorted records and contains no business logic.
/// One line per measured path: human-readable size, inode count, path.
pub fn render(records: &[UsageRecord]) -> Result<()> {
    for record in records {
        println!(
            "{:<12} {:>10} inodes  {}",
            format_size(record.usage.bytes, DECIMAL),
            record.usage.inodes,
            record.path.display()
        );
    }

    Ok(())
}
