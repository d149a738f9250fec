//! Tests running the `dice-prob` binary.
//!
//! Each test works in its own scratch directory, since the binary writes `out.txt`
//! relative to its working directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dice-prob-cli-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dice-prob"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn parse_line(line: &str) -> (u32, f64) {
    let mut parts = line.split(' ');
    let sum = parts.next().unwrap().parse().unwrap();
    let share = parts.next().unwrap().parse().unwrap();
    assert!(parts.next().is_none(), "line = {:?}", line);
    (sum, share)
}

// ─── Successful Runs ───────────────────────────────────────────────────────────

#[test]
fn writes_distribution_file() {
    let dir = scratch_dir("2d6");
    let output = run_in(&dir, &["2", "6", "20000", "false"]);
    assert!(output.status.success(), "stderr = {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    println!("{}", stdout);
    assert!(stdout.starts_with("Distribution of 2d6 using 20000 throws:\n"));
    assert!(stdout.contains("\nSampling:\n"));
    assert!(stdout.contains("\nStatistics:\n   mean: "));

    let written = fs::read_to_string(dir.join("out.txt")).unwrap();
    let lines: Vec<(u32, f64)> = written.lines().map(parse_line).collect();
    assert_eq!(lines.len(), 11);
    let sums: Vec<u32> = lines.iter().map(|&(sum, _)| sum).collect();
    assert_eq!(sums, (2..=12).collect::<Vec<_>>());
    let total: f64 = lines.iter().map(|&(_, share)| share).sum();
    assert!((total - 100.0).abs() < 0.1, "total = {}", total);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn overwrites_previous_output() {
    let dir = scratch_dir("overwrite");
    fs::write(dir.join("out.txt"), "stale\n".repeat(100)).unwrap();

    let output = run_in(&dir, &["4", "6", "1", "true"]);
    assert!(output.status.success(), "stderr = {}", String::from_utf8_lossy(&output.stderr));

    let written = fs::read_to_string(dir.join("out.txt")).unwrap();
    assert!(!written.contains("stale"));
    let lines: Vec<(u32, f64)> = written.lines().map(parse_line).collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines.first().map(|&(sum, _)| sum), Some(3));
    assert_eq!(lines.last().map(|&(sum, _)| sum), Some(18));

    // A single sample lands entirely in one bucket.
    let hits: Vec<f64> = lines.iter().map(|&(_, share)| share).filter(|&share| share > 0.0).collect();
    assert_eq!(hits, vec![100.0]);

    fs::remove_dir_all(&dir).unwrap();
}

// ─── Failures ──────────────────────────────────────────────────────────────────

#[test]
fn wrong_argument_count_fails() {
    let dir = scratch_dir("usage");
    let cases: [&[&str]; 3] = [&[], &["2", "6", "100"], &["2", "6", "100", "true", "extra"]];
    for args in cases {
        let output = run_in(&dir, args);
        assert!(!output.status.success(), "args = {:?}", args);
        assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
    }
    assert!(!dir.join("out.txt").exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn invalid_values_fail_before_sampling() {
    let dir = scratch_dir("invalid");
    for args in [
        &["two", "6", "100", "false"][..],
        &["0", "6", "100", "false"][..],
        &["2", "1", "100", "false"][..],
        &["2", "6", "0", "false"][..],
        &["1", "4294967295", "1", "false"][..],
    ] {
        let output = run_in(&dir, args);
        assert!(!output.status.success(), "args = {:?}", args);
    }
    assert!(!dir.join("out.txt").exists());

    fs::remove_dir_all(&dir).unwrap();
}
