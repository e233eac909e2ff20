use duwalk::baseline::{du_disk_usage, find_inode_usage};
use duwalk::walk::compute_usage;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;

const TIMEOUT: Duration = Duration::from_secs(60);

/// The baselines run `ionice -c3 nice -n 19 du|find`; all four tools must
/// be present for the agreement tests to mean anything.
fn baseline_tools_available() -> bool {
    ["ionice", "nice", "du", "find"].iter().all(|tool| {
        Command::new(tool)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    })
}

#[test]
fn test_empty_dir_rejected_without_spawning() {
    assert!(du_disk_usage(Path::new(""), TIMEOUT).is_err());
    assert!(find_inode_usage(Path::new(""), TIMEOUT).is_err());
}

#[test]
fn test_du_agrees_with_native_bytes() {
    if !baseline_tools_available() {
        eprintln!("skipping: ionice/nice/du/find not available");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root_path = temp_dir.path();

    let sub = root_path.join("sub");
    fs::create_dir(&sub).expect("Failed to create sub");
    fs::write(root_path.join("a"), vec![b'a'; 4096]).expect("Failed to write a");
    fs::write(root_path.join("b"), vec![b'b'; 10000]).expect("Failed to write b");
    fs::write(sub.join("c"), vec![b'c'; 100]).expect("Failed to write c");

    // A hardlink pair: both this walk and `du` count the inode once.
    fs::hard_link(root_path.join("a"), root_path.join("a_link"))
        .expect("Failed to hardlink");

    let native = compute_usage(root_path).expect("Native walk failed");
    let du_bytes = du_disk_usage(root_path, TIMEOUT).expect("du baseline failed");

    // `du -s` prints whole kilobytes, so agreement is modulo rounding.
    let delta = (native.bytes as i64 - du_bytes as i64).abs();
    assert!(
        delta < 1024,
        "native {} vs du {} differ by {}",
        native.bytes,
        du_bytes,
        delta
    );
}

#[test]
fn test_find_agrees_with_native_inodes() {
    if !baseline_tools_available() {
        eprintln!("skipping: ionice/nice/du/find not available");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root_path = temp_dir.path();

    // No hardlinks here: `find` counts paths, not inodes, so the two
    // measurements only coincide on a link-free tree.
    let sub = root_path.join("sub");
    fs::create_dir(&sub).expect("Failed to create sub");
    fs::write(root_path.join("one.txt"), "one").expect("Failed to write one.txt");
    fs::write(sub.join("two.txt"), "two").expect("Failed to write two.txt");
    fs::write(sub.join("three.txt"), "three").expect("Failed to write three.txt");

    let native = compute_usage(root_path).expect("Native walk failed");
    let find_count = find_inode_usage(root_path, TIMEOUT).expect("find baseline failed");

    assert_eq!(native.inodes, find_count);
}
