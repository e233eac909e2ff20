use criterion::{black_box, criterion_group, criterion_main, Criterion};
use duwalk::baseline::{du_disk_usage, find_inode_usage};
use duwalk::walk::compute_usage;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Duration;
use tempfile::TempDir;

const BASELINE_TIMEOUT: Duration = Duration::from_secs(120);

fn create_test_directory_structure(dir: &Path, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    // Create files in current directory
    for i in 0..files_per_dir {
        let file_path = dir.join(format!("file_{}.txt", i));
        fs::write(&file_path, format!("Content of file {}", i)).unwrap();
    }

    // Create subdirectories
    for i in 0..3 {
        let subdir_path = dir.join(format!("subdir_{}", i));
        fs::create_dir_all(&subdir_path).unwrap();
        create_test_directory_structure(&subdir_path, depth - 1, files_per_dir);
    }
}

/// Hardlinks every file once, so half the walk's entries exercise the
/// dedup path.
fn hardlink_all_files(dir: &Path) {
    let files: Vec<_> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect();

    for (i, file) in files.iter().enumerate() {
        let link = file.with_file_name(format!("link_{}.lnk", i));
        fs::hard_link(file, link).unwrap();
    }
}

fn baseline_tools_available() -> bool {
    ["ionice", "nice", "du", "find"].iter().all(|tool| {
        Command::new(tool)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    })
}

fn benchmark_native_small_directory(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // Small directory structure: 3 levels deep, 5 files per directory
    create_test_directory_structure(root, 3, 5);

    c.bench_function("native_usage_small", |b| {
        b.iter(|| compute_usage(black_box(root)).unwrap())
    });
}

fn benchmark_native_deep_directory(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // Deeper directory structure: 5 levels deep, 10 files per directory
    create_test_directory_structure(root, 5, 10);

    c.bench_function("native_usage_deep", |b| {
        b.iter(|| compute_usage(black_box(root)).unwrap())
    });
}

fn benchmark_native_with_hardlinks(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    create_test_directory_structure(root, 4, 8);
    hardlink_all_files(root);

    c.bench_function("native_usage_hardlinks", |b| {
        b.iter(|| compute_usage(black_box(root)).unwrap())
    });
}

/// The subprocess measurements this crate replaces, over the same tree, for
/// a direct new-vs-old comparison.
fn benchmark_subprocess_baselines(c: &mut Criterion) {
    if !baseline_tools_available() {
        eprintln!("skipping subprocess baselines: ionice/nice/du/find not available");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    create_test_directory_structure(root, 5, 10);

    c.bench_function("du_baseline_deep", |b| {
        b.iter(|| du_disk_usage(black_box(root), BASELINE_TIMEOUT).unwrap())
    });

    c.bench_function("find_baseline_deep", |b| {
        b.iter(|| find_inode_usage(black_box(root), BASELINE_TIMEOUT).unwrap())
    });
}

criterion_group!(
    native_benches,
    benchmark_native_small_directory,
    benchmark_native_deep_directory,
    benchmark_native_with_hardlinks
);

criterion_group!(baseline_benches, benchmark_subprocess_baselines);

criterion_main!(native_benches, baseline_benches);
