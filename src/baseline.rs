//! External baseline measurements via `du` and `find`.
//!
//! These are the subprocess-based measurements the native walk replaces,
//! kept as comparators: [`du_disk_usage`] asks `du -s` for allocated
//! kilobytes, [`find_inode_usage`] counts entries by having
//! `find -xdev -printf .` emit one byte per entry. Both run their command
//! at minimal CPU and I/O priority (`ionice -c3 nice -n 19`) so a
//! cross-check never competes with real workloads, and both enforce a
//! wall-clock timeout with a forceful kill of the child if it overruns.
//!
//! Errors embed the captured stdout and stderr, since a failing `du` or
//! `find` is only diagnosable from its own output.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Measures allocated disk usage of `dir` in bytes using `du -s`.
///
/// The single summary line printed by `du` is in kilobytes; the result is
/// converted with a factor of 1024.
///
/// # Arguments
/// * `dir` - The directory to measure; must be non-empty
/// * `timeout` - Wall-clock limit before the subprocess is killed
///
/// # Errors
/// Returns an error if the directory argument is empty, the command cannot
/// be spawned, it exceeds the timeout, it exits non-zero or writes to
/// stderr, or its output cannot be parsed as a kilobyte count.
pub fn du_disk_usage(dir: &Path, timeout: Duration) -> Result<u64> {
    if dir.as_os_str().is_empty() {
        bail!("invalid directory");
    }

    let mut cmd = Command::new("ionice");
    cmd.args(["-c3", "nice", "-n", "19", "du", "-s"]).arg(dir);

    let output = run_with_timeout(cmd, timeout).context("failed to exec du")?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() || !stderr.trim().is_empty() {
        bail!(
            "du command failed on {} with output stdout: {}, stderr: {} - {}",
            dir.display(),
            stdout,
            stderr,
            output.status
        );
    }

    let usage_kb: u64 = stdout
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .parse()
        .with_context(|| format!("cannot parse 'du' output {stdout}"))?;

    Ok(usage_kb * 1024)
}

/// Counts filesystem entries under `dir` using `find`.
///
/// `find -xdev -printf .` prints one byte per entry without leaving the
/// directory's filesystem, so the byte count of its stdout equals the
/// number of entries visited (the directory itself included).
///
/// # Arguments
/// * `dir` - The directory to measure; must be non-empty
/// * `timeout` - Wall-clock limit before the subprocess is killed
///
/// # Errors
/// Returns an error if the directory argument is empty, the command cannot
/// be spawned, it exceeds the timeout, or it exits non-zero or writes to
/// stderr.
pub fn find_inode_usage(dir: &Path, timeout: Duration) -> Result<u64> {
    if dir.as_os_str().is_empty() {
        bail!("invalid directory");
    }

    let mut cmd = Command::new("ionice");
    cmd.args(["-c3", "nice", "-n", "19", "find"])
        .arg(dir)
        .args(["-xdev", "-printf", "."]);

    let output = run_with_timeout(cmd, timeout).context("failed to exec find")?;
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() || !stderr.trim().is_empty() {
        bail!(
            "find command failed on {}. stderr: {}; status: {}",
            dir.display(),
            stderr,
            output.status
        );
    }

    Ok(output.stdout.len() as u64)
}

/// Runs a command with piped output under a kill-on-timeout watchdog.
///
/// A watchdog thread waits for either a completion signal or the deadline;
/// on the deadline it sends SIGKILL to the child. The watchdog is disarmed
/// as soon as the child has been collected, so a process that finishes in
/// time is never signalled.
fn run_with_timeout(mut cmd: Command, timeout: Duration) -> Result<Output> {
    let child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;

    let pid = child.id() as libc::pid_t;
    let (done_tx, done_rx) = mpsc::channel::<()>();
    let watchdog = thread::spawn(move || {
        if done_rx.recv_timeout(timeout).is_err() {
            eprintln!("Killing pid {pid} due to timeout ({timeout:?})");
            // The child may have already exited; a failed kill is harmless.
            unsafe { libc::kill(pid, libc::SIGKILL) };
        }
    });

    // Drains stdout and stderr concurrently, then reaps the child.
    let result = child.wait_with_output();

    let _ = done_tx.send(());
    let _ = watchdog.join();

    result.context("failed to collect command output")
}
