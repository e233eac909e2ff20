//! Library crate for duwalk
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Features
//!
//! - **Native usage walk**: deduplicated disk-space and inode accounting by
//!   reading filesystem metadata directly, confined to one filesystem
//! - **External baselines**: `du`/`find` subprocess measurements under a
//!   timeout, for cross-checking the native numbers
//! - **Modular output system**: pluggable formatters (terminal, CSV)
//! - **Compare reporting**: phase timers and JSON cross-check reports
//!
//! # Modules
//!
//! - [`walk`]: The native metadata walk ([`walk::compute_usage`])
//! - [`stat`]: POSIX stat field extraction
//! - [`error`]: Typed errors for the walk
//! - [`baseline`]: External `du`/`find` comparators
//! - [`data`]: Core result types (`UsageInfo`, `UsageRecord`)
//! - [`cli`]: Command-line interface definitions
//! - [`output`]: Output formatters (terminal, CSV)
//! - [`metrics`]: Phase timing and cross-check reports

pub mod baseline;
pub mod cli;
pub mod data;
pub mod error;
pub mod metrics;
pub mod output;
pub mod stat;
pub mod walk;

pub use cli::Args;
pub use data::{UsageInfo, UsageRecord};
pub use error::UsageError;
pub use walk::compute_usage;
