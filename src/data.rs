//! Data structures for measured usage results.
//!
//! This module defines the result types returned by the native walk and
//! consumed by the output renderers.

use std::path::PathBuf;

use crate::cli::SortKey;

/// Accumulated usage for one directory tree.
///
/// # Fields
/// * `bytes` - Total allocated storage in bytes (512-byte blocks * 512)
/// * `inodes` - Number of distinct filesystem entries counted
///
/// Hardlinked entries contribute to both fields exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UsageInfo {
    pub bytes: u64,
    pub inodes: u64,
}

/// One measured root path together with its usage totals.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UsageRecord {
    pub path: PathBuf,
    pub usage: UsageInfo,
}

/// Sorts records based on the provided sort key.
///
/// # Behavior
/// * `SortKey::Size` - Sorts by allocated bytes in descending order
/// * `SortKey::Name` - Sorts by path name in ascending order
pub fn sort_records(records: &mut [UsageRecord], sort_key: SortKey) {
    match sort_key {
        SortKey::Size => records.sort_by(|a, b| b.usage.bytes.cmp(&a.usage.bytes)),
        SortKey::Name => records.sort_by(|a, b| a.path.cmp(&b.path)),
    }
}
