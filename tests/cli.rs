use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use restyle::{CONFIRMATION_MESSAGE, DEFAULT_TARGET};
use tempfile::{tempdir, TempDir};

const BEFORE: &str = include_str!("fixtures/dashboard_before.tsx");
const AFTER: &str = include_str!("fixtures/dashboard_after.tsx");

fn run_in(dir: &Path, args: &[&str]) -> Output {
    run_with_log(dir, args, "off")
}

fn run_with_log(dir: &Path, args: &[&str], filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_restyle"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", filter)
        .output()
        .expect("failed to run restyle")
}

fn workspace_with(content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let target = dir.path().join(DEFAULT_TARGET);
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, content).unwrap();
    (dir, target)
}

#[test]
fn test_parameterless_run_rewrites_default_target() {
    let (dir, target) = workspace_with(BEFORE);

    let output = run_in(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n", CONFIRMATION_MESSAGE)
    );
    assert_eq!(fs::read_to_string(&target).unwrap(), AFTER);
}

#[test]
fn test_debug_logs_stay_on_stderr() {
    let (dir, target) = workspace_with(BEFORE);

    let output = run_with_log(dir.path(), &[], "restyle=debug");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n", CONFIRMATION_MESSAGE)
    );
    assert!(!output.stderr.is_empty());
    assert_eq!(fs::read_to_string(&target).unwrap(), AFTER);
}

#[test]
fn test_each_unmatched_rule_warned_once() {
    let (dir, _target) = workspace_with("rgba(0,0,0,0.05)\n");

    let output = run_with_log(dir.path(), &[], "restyle=warn");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("matched nothing").count(), 14);
    assert_eq!(stderr.matches("'canvas-surface'").count(), 1);
    assert!(!stderr.contains("'grid-dots'"));
}

#[test]
fn test_second_run_keeps_fixed_file() {
    let (dir, target) = workspace_with(BEFORE);

    assert!(run_in(dir.path(), &[]).status.success());
    let output = run_in(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&target).unwrap(), AFTER);
}

#[test]
fn test_file_without_targets_is_unchanged() {
    let plain = "export const Empty = () => <div className=\"p-4\" />\n";
    let (dir, target) = workspace_with(plain);

    let output = run_in(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&target).unwrap(), plain);
}

#[test]
fn test_missing_target_fails_without_confirmation() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains(DEFAULT_TARGET));
}

#[test]
fn test_dry_run_prints_diff_only() {
    let (dir, target) = workspace_with(BEFORE);

    let output = run_in(dir.path(), &["--dry-run"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("+          ? 'border-primary-400 shadow-2xl'"));
    assert!(stdout.contains("Dry run: 17 replacement(s)"));
    assert!(!stdout.contains(CONFIRMATION_MESSAGE));
    assert_eq!(fs::read_to_string(&target).unwrap(), BEFORE);
}

#[test]
fn test_strict_fails_on_drifted_file() {
    let (dir, target) = workspace_with("rgba(0,0,0,0.05)\n");

    let output = run_in(dir.path(), &["--strict"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("canvas-surface"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "rgba(0,0,0,0.05)\n");
}

#[test]
fn test_config_file_and_explicit_target() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("Card.tsx");
    fs::write(&target, "<div className=\"rounded-lg duration-200\" />\n").unwrap();
    let config = dir.path().join("fixups.toml");
    fs::write(
        &config,
        r#"
[[rules]]
name = "radius"
pattern = "rounded-lg"
replacement = "rounded-2xl"

[[rules]]
name = "timing"
kind = "regex"
pattern = 'duration-(\d+)'
replacement = "duration-${1}0"
"#,
    )
    .unwrap();

    let output = run_in(
        dir.path(),
        &["--config", "fixups.toml", "--target", "Card.tsx", "--backup"],
    );
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "<div className=\"rounded-2xl duration-2000\" />\n"
    );

    let backups: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".bak"))
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn test_list_rules_in_order() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &["--list-rules"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[0], " 1. canvas-surface [literal]");
    assert_eq!(lines[6], " 7. drag-border [regex]");
}

#[test]
fn test_dump_config_can_be_loaded_back() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &["--dump-config"]);
    assert!(output.status.success());
    let dumped = dir.path().join("dumped.toml");
    fs::write(&dumped, output.stdout).unwrap();

    let (_ws, target) = workspace_with(BEFORE);
    let output = run_in(
        dir.path(),
        &["--config", "dumped.toml", "--target", target.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&target).unwrap(), AFTER);
}

#[test]
fn test_json_report() {
    let (dir, _target) = workspace_with(BEFORE);

    let output = run_in(dir.path(), &["--json"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["changed"], true);
    assert_eq!(report["written"], true);
    assert_eq!(report["rules"].as_array().unwrap().len(), 15);
    assert_eq!(report["rules"][4]["name"], "panel-surface");
    assert_eq!(report["rules"][4]["matches"], 2);
}
