//! Timing and cross-check reporting for compare mode.
//!
//! This module provides:
//! - [`PhaseTimer`] - A wrapper around `Instant` for timing measurement phases
//! - [`CompareReport`] - Native walk results next to the `du`/`find` baselines
//! - [`print_compare_summary`] - Terminal output for one cross-check
//! - [`save_report_json`] - JSON output for scripting integration

use crate::data::UsageInfo;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};

/// A timer for measuring the duration of a specific phase or operation.
#[derive(Debug, Clone)]
pub struct PhaseTimer {
    /// The name of the phase being timed
    pub name: String,
    /// The start time of the phase
    pub start: Instant,
}

impl PhaseTimer {
    /// Creates a new timer and starts timing the specified phase.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start: Instant::now(),
        }
    }

    /// Finishes timing the phase and returns the elapsed duration.
    pub fn finish(self) -> PhaseResult {
        PhaseResult {
            name: self.name,
            duration: self.start.elapsed(),
        }
    }
}

/// The result of a completed phase timing operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseResult {
    /// The name of the phase that was timed
    pub name: String,
    /// The duration of the phase
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

/// Custom serialization for Duration to make it human-readable in JSON
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// One measured path cross-checked against the external baselines.
///
/// Holds the native walk result and the values the external `du` and `find`
/// commands reported for the same tree, together with per-phase timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareReport {
    /// The measured directory
    pub path: String,
    /// Native walk totals
    pub native: UsageInfo,
    /// `du -s` result converted to bytes
    pub du_bytes: u64,
    /// `find -xdev` entry count
    pub find_inodes: u64,
    /// Timings for the native walk and both baselines
    pub phases: Vec<PhaseResult>,
}

impl CompareReport {
    /// Signed difference between native bytes and the `du` baseline.
    ///
    /// `du` prints whole kilobytes, so agreement means a delta below 1024
    /// on a static tree.
    pub fn byte_delta(&self) -> i64 {
        self.native.bytes as i64 - self.du_bytes as i64
    }

    /// Signed difference between native inode count and the `find` baseline.
    pub fn inode_delta(&self) -> i64 {
        self.native.inodes as i64 - self.find_inodes as i64
    }
}

/// Prints a formatted cross-check summary to the terminal.
///
/// # Example Output
/// ```text
/// Cross-check: /var/lib
///   native     1204224 bytes   312 inodes
///   du         1204224 bytes
///   find                       312 entries
///   delta      0 bytes, 0 inodes
///   timings    walk 2 ms, du 41 ms, find 38 ms
/// ```
pub fn print_compare_summary(report: &CompareReport) {
    println!("Cross-check: {}", report.path);
    println!(
        "  native     {} bytes   {} inodes",
        report.native.bytes, report.native.inodes
    );
    println!("  du         {} bytes", report.du_bytes);
    println!("  find                       {} entries", report.find_inodes);
    println!(
        "  delta      {} bytes, {} inodes",
        report.byte_delta(),
        report.inode_delta()
    );

    let timings: Vec<String> = report
        .phases
        .iter()
        .map(|p| format!("{} {} ms", p.name, p.duration.as_millis()))
        .collect();
    println!("  timings    {}", timings.join(", "));
    println!();
}

/// Saves cross-check reports to a JSON file for scripting integration.
///
/// The file is written as `report.json` alongside the main output path.
pub fn save_report_json(
    output_path: &Path,
    reports: &[CompareReport],
) -> Result<(), Box<dyn std::error::Error>> {
    let report_path = output_path.with_file_name("report.json");

    let payload = serde_json::json!({
        "reports": reports,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    std::fs::write(&report_path, serde_json::to_string_pretty(&payload)?)?;

    println!("Cross-check report saved to: {}", report_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_phase_timer() {
        let timer = PhaseTimer::new("walk");
        thread::sleep(Duration::from_millis(10));
        let result = timer.finish();

        assert_eq!(result.name, "walk");
        assert!(result.duration.as_millis() >= 10);
    }

    #[test]
    fn test_report_deltas() {
        let report = CompareReport {
            path: "/data".to_string(),
            native: UsageInfo {
                bytes: 4096,
                inodes: 3,
            },
            du_bytes: 4096,
            find_inodes: 4,
            phases: vec![],
        };

        assert_eq!(report.byte_delta(), 0);
        assert_eq!(report.inode_delta(), -1);
    }

    #[test]
    fn test_phase_result_serializes_millis() {
        let result = PhaseResult {
            name: "du".to_string(),
            duration: Duration::from_millis(1500),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("1500"));
    }
}
