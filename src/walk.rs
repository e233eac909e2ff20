//! Native disk usage walk.
//!
//! This module handles:
//! - Recursive directory traversal using `WalkDir`
//! - Allocated-space accounting from `st_blocks` (512-byte units)
//! - Hardlink deduplication via a per-walk set of seen inode numbers
//! - Single-filesystem confinement by device-id comparison
//!
//! The main entry point is [`compute_usage`], which returns a [`UsageInfo`]
//! with total allocated bytes and the number of distinct entries counted.
//!
//! The walk reads metadata only; it never writes, never follows symlinks,
//! and never crosses onto another filesystem. Files that appear or vanish
//! while the walk is running are tolerated: an entry that is gone by the
//! time it is stat'ed is skipped. Any other stat failure aborts the whole
//! computation, since usage accounting is exact rather than best-effort.

use crate::data::UsageInfo;
use crate::error::UsageError;
use crate::stat::StatFields;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Computes deduplicated disk usage and inode counts for a directory tree.
///
/// Performs a depth-first, pre-order traversal rooted at `root`, confined to
/// the filesystem holding the root. Each entry on that filesystem is counted
/// exactly once: entries with more than one hard link are deduplicated by
/// inode number, so the same data reachable through several paths
/// contributes a single inode and a single allocation to the totals.
///
/// # Arguments
/// * `root` - The directory to measure; must be non-empty and statable
///
/// # Returns
/// * `Result<UsageInfo, UsageError>` - Total allocated bytes and entry count
///
/// # Errors
/// Returns an error if:
/// - `root` is empty (`InvalidArgument`, no filesystem access performed)
/// - The root cannot be stat'ed (`RootStat`)
/// - Platform metadata lacks POSIX stat fields (`UnsupportedMetadata`)
/// - Any entry below the root fails to stat for a reason other than
///   vanishing mid-walk (`Stat`)
pub fn compute_usage(root: &Path) -> Result<UsageInfo, UsageError> {
    if root.as_os_str().is_empty() {
        return Err(UsageError::InvalidArgument);
    }

    let root_meta = fs::metadata(root).map_err(|source| UsageError::RootStat {
        path: root.to_path_buf(),
        source,
    })?;
    let root_dev = StatFields::from_metadata(&root_meta)
        .ok_or_else(|| UsageError::UnsupportedMetadata {
            path: root.to_path_buf(),
        })?
        .dev;

    let mut usage = UsageInfo::default();

    // Inodes with nlink > 1 may be reachable through several paths within
    // the tree; remember the ones already counted. Scoped to this walk so
    // repeated calls stay independent.
    let mut deduped_inodes: HashSet<u64> = HashSet::new();

    let mut walker = WalkDir::new(root).follow_links(false).into_iter();
    while let Some(item) = walker.next() {
        let entry = match item {
            Ok(entry) => entry,
            // Expected if files appear/vanish during the walk.
            Err(err) if vanished(&err) => continue,
            Err(err) => {
                return Err(UsageError::Stat {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
        };

        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(err) if vanished(&err) => continue,
            Err(err) => {
                return Err(UsageError::Stat {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
        };

        let stat = StatFields::from_metadata(&meta).ok_or_else(|| {
            UsageError::UnsupportedMetadata {
                path: entry.path().to_path_buf(),
            }
        })?;

        if stat.dev != root_dev {
            // Don't descend into directories on other devices.
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            continue;
        }

        if stat.nlink > 1 {
            // Dedupe things that could be hardlinks.
            if deduped_inodes.insert(stat.ino) {
                usage.bytes += stat.allocated_bytes();
                usage.inodes += 1;
            }
        } else {
            usage.bytes += stat.allocated_bytes();
            usage.inodes += 1;
        }
    }

    Ok(usage)
}

/// True when a traversal error means the entry disappeared between the
/// directory listing and the stat. Only `NotFound` qualifies; every other
/// kind stays fatal.
fn vanished(err: &walkdir::Error) -> bool {
    matches!(
        err.io_error().map(io::Error::kind),
        Some(io::ErrorKind::NotFound)
    )
}
