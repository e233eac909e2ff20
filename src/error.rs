//! Error types for the native usage walk.
//!
//! The walk distinguishes four failure modes so callers can tell an unusable
//! argument from an unreadable root, an unreadable entry, or a platform whose
//! file metadata does not carry POSIX stat fields. Files that vanish while
//! the walk is running are not errors at all; they are skipped inside
//! [`crate::walk::compute_usage`] and never surface here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by [`crate::walk::compute_usage`].
///
/// Every variant aborts the whole computation; there is no partial result.
#[derive(Debug, Error)]
pub enum UsageError {
    /// The directory argument was empty.
    #[error("invalid directory")]
    InvalidArgument,

    /// The root path itself could not be inspected.
    #[error("could not stat {path:?} to get inode usage: {source}")]
    RootStat {
        /// The root path that failed to stat
        path: PathBuf,
        /// The underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// The platform's file metadata does not expose device, inode, link
    /// count, and block count.
    #[error("unsupported file metadata for inode usage of {path:?}")]
    UnsupportedMetadata {
        /// The path whose metadata could not be interpreted
        path: PathBuf,
    },

    /// An entry below the root failed to stat for a reason other than
    /// disappearing mid-walk.
    #[error("unable to count inodes for part of dir {path:?}: {source}")]
    Stat {
        /// The root of the walk that was aborted
        path: PathBuf,
        /// The traversal error that stopped the walk
        #[source]
        source: walkdir::Error,
    },
}
