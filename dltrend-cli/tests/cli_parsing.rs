//! CLI argument parsing and config edge case tests.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dltrend() -> Command {
    Command::cargo_bin("dltrend").expect("dltrend binary")
}

/// A command running in an empty temp dir, so no stray dltrend.toml is picked up.
fn dltrend_in(temp: &TempDir) -> Command {
    let mut cmd = dltrend();
    cmd.current_dir(temp.path());
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    dltrend()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("table"));
}

#[test]
fn test_table_text_reports_total() {
    let temp = TempDir::new().unwrap();

    dltrend_in(&temp)
        .args(["table", "--today", "2026-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.7.2"))
        .stdout(predicate::str::contains("unreleased"))
        .stdout(predicate::str::contains(
            "Total downloads: 8141 (30 releases, 8 major",
        ));
}

#[test]
fn test_table_json_is_parseable() {
    let temp = TempDir::new().unwrap();

    let output = dltrend_in(&temp)
        .args(["table", "--format", "json", "--today", "2026-02-01"])
        .output()
        .expect("run dltrend");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["schema"], "dltrend.series.v1");
    assert_eq!(json["generated_on"], "2026-02-01");
    assert_eq!(json["totals"]["total_downloads"], 8141);
    assert_eq!(json["totals"]["majors"], 8);

    let rows = json["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 31);
    assert_eq!(rows[0]["cumulative_total"], 0);
    assert_eq!(rows[30]["label"], "unreleased");
    assert_eq!(rows[30]["date"], "2026-02-01");
}

#[test]
fn test_table_markdown() {
    let temp = TempDir::new().unwrap();

    dltrend_in(&temp)
        .args(["table", "--format", "md", "--today", "2026-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Downloads trend"))
        .stdout(predicate::str::contains("**1.5.0**"));
}

#[test]
fn test_table_invalid_format_fails() {
    dltrend()
        .args(["table", "--format", "csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_today_fails() {
    dltrend()
        .args(["table", "--today", "2026-13-01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--today"));
}

#[test]
fn test_unknown_flag_exits_one() {
    dltrend()
        .args(["render", "--no-such-flag"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--no-such-flag"));
}

#[test]
fn test_version_exits_zero() {
    dltrend()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("dltrend"));
}

#[test]
fn test_config_headroom_does_not_change_table() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("dltrend.toml"), "[axes]\nheadroom = 5\n").unwrap();

    dltrend_in(&temp)
        .args(["table", "--today", "2026-02-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total downloads: 8141"));
}

#[test]
fn test_bad_config_in_cwd_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("dltrend.toml"), "[axes\nheadroom = ").unwrap();

    dltrend_in(&temp)
        .args(["table", "--today", "2026-02-01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("load dltrend.toml config"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();

    dltrend_in(&temp)
        .args(["table", "--config", "missing.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_render_invalid_color_writes_nothing() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("dltrend.toml"),
        "[style]\nline_color = \"blue\"\n",
    )
    .unwrap();

    dltrend_in(&temp)
        .args(["render", "--today", "2026-02-01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("configure chart renderer"));

    assert!(!temp.path().join("miscellaneous").exists());
}

#[test]
fn test_render_zero_dpi_writes_nothing() {
    let temp = TempDir::new().unwrap();

    dltrend_in(&temp)
        .args(["render", "--dpi", "0", "--today", "2026-02-01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("dpi must be positive"));

    assert!(!temp.path().join("miscellaneous").exists());
}

#[test]
#[ignore = "rasterises text; needs a system sans-serif font"]
fn test_default_run_writes_chart() {
    let temp = TempDir::new().unwrap();

    dltrend_in(&temp).arg("--today").arg("2026-02-01").assert().success();

    let bytes = fs::read(
        temp.path()
            .join("miscellaneous")
            .join("cumulative_downloads_trend.png"),
    )
    .expect("chart written");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
#[ignore = "rasterises text; needs a system sans-serif font"]
fn test_render_out_overrides_config_path() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("dltrend.toml"),
        "[output]\npath = \"from-config/chart.png\"\n",
    )
    .unwrap();

    dltrend_in(&temp)
        .args(["render", "--out", "cli/chart.png", "--today", "2026-02-01"])
        .assert()
        .success();

    assert!(temp.path().join("cli").join("chart.png").exists());
    assert!(!temp.path().join("from-config").exists());
}
