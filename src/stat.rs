//! POSIX stat field extraction.
//!
//! Usage accounting needs exactly four fields per entry: the device id (to
//! confine the walk to one filesystem), the inode number and hard-link count
//! (to deduplicate hardlinks), and the allocated block count (to measure
//! real disk usage rather than logical size). [`StatFields`] pulls those out
//! of a [`std::fs::Metadata`] value on Unix; elsewhere the shape is simply
//! unavailable and extraction returns `None`.

use std::fs::Metadata;

/// The per-entry stat fields consumed by the usage walk.
#[derive(Debug, Clone, Copy)]
pub struct StatFields {
    /// Device id of the filesystem holding the entry
    pub dev: u64,
    /// Inode number within that device
    pub ino: u64,
    /// Number of directory entries referencing the inode
    pub nlink: u64,
    /// Allocated storage, in 512-byte blocks
    pub blocks: u64,
}

impl StatFields {
    /// Extracts the stat fields from platform metadata.
    ///
    /// Returns `None` when the platform cannot supply the POSIX shape;
    /// callers surface that as an unsupported-metadata error rather than
    /// guessing defaults.
    #[cfg(unix)]
    pub fn from_metadata(meta: &Metadata) -> Option<Self> {
        use std::os::unix::fs::MetadataExt;

        Some(StatFields {
            dev: meta.dev(),
            ino: meta.ino(),
            nlink: meta.nlink(),
            blocks: meta.blocks(),
        })
    }

    #[cfg(not(unix))]
    pub fn from_metadata(_meta: &Metadata) -> Option<Self> {
        None
    }

    /// Allocated bytes for the entry.
    ///
    /// `st_blocks` is always in 512-byte units regardless of the
    /// filesystem's logical block size, so this matches what `du` reports.
    pub fn allocated_bytes(&self) -> u64 {
        self.blocks * 512
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocated_bytes_uses_512_byte_blocks() {
        let fields = StatFields {
            dev: 1,
            ino: 42,
            nlink: 1,
            blocks: 8,
        };
        assert_eq!(fields.allocated_bytes(), 4096);
    }

    #[cfg(unix)]
    #[test]
    fn extraction_succeeds_on_unix() {
        let meta = std::fs::metadata(".").expect("stat cwd");
        let fields = StatFields::from_metadata(&meta).expect("unix metadata has stat fields");
        assert!(fields.nlink >= 1);
    }
}
