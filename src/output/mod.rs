//! Modular output system for the `duwalk` application.
//!
//! This module provides a pluggable output system with different formatters
//! for displaying measured usage records. The formatters are independent and
//! stateless: each accepts a slice of pre-sorted [`crate::data::UsageRecord`]
//! values and contains no measurement logic of its own.
//!
//! # Available Formatters
//!
//! - **Terminal**: Human-readable output with aligned columns
//! - **CSV**: Machine-readable CSV format for data analysis and processing

pub mod csv;
pub mod terminal;

// Re-export the main render functions for convenience

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use csv::render as render_csv;

/// Terminal output renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use terminal::render as render_terminal;
