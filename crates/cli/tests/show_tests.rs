//! Integration tests for `minuet-cli show`.

mod common;

use common::{minuet_cmd, temp_config_path, write_temp_config};
use predicates::prelude::*;

#[test]
fn test_show_help() {
    minuet_cmd()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Show the resolved configuration"));
}

#[test]
fn test_show_missing_file_prints_defaults_and_warns() {
    let (_temp_dir, path) = temp_config_path();

    let output = minuet_cmd()
        .arg("--config-path")
        .arg(&path)
        .args(["show", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["NUM_THREADS"], 4);
    assert_eq!(value["QK_BASE"], "0x20000000");
    assert_eq!(value["TOTAL_FEATS_PT"], 64);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn test_show_merges_file_values() {
    let (_temp_dir, path) = write_temp_config(
        r#"{"NUM_THREADS": 8, "output_dir": "traces/", "QK_BASE": "0x21000000", "TILE_FEATS": 32}"#,
    );

    let output = minuet_cmd()
        .arg("--config-path")
        .arg(&path)
        .args(["show", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["NUM_THREADS"], 8);
    assert_eq!(value["output_dir"], "traces/");
    assert_eq!(value["QK_BASE"], "0x21000000");
    assert_eq!(value["TILE_FEATS"], 32);
    assert_eq!(value["TOTAL_FEATS_PT"], 4 * 32);
}

#[test]
fn test_show_json_output_is_a_loadable_config() {
    let (_temp_dir, path) = write_temp_config(r#"{"NUM_THREADS": 6, "PIV_BASE": 4096}"#);

    let output = minuet_cmd()
        .arg("--config-path")
        .arg(&path)
        .args(["show", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let (_copy_dir, copy) = write_temp_config(&String::from_utf8(output.stdout.clone()).unwrap());

    minuet_cmd()
        .arg("--config-path")
        .arg(&copy)
        .args(["check", "--strict"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Missing addresses:\tnone"));

    let reshown = minuet_cmd()
        .arg("--config-path")
        .arg(&copy)
        .args(["show", "--output", "json"])
        .output()
        .unwrap();
    assert_eq!(reshown.stdout, output.stdout);
}

#[test]
fn test_show_logs_load_and_each_warning() {
    let (_temp_dir, path) = write_temp_config(r#"{"KM_BASE": "bad", "NUM_TILES": 2}"#);

    let output = minuet_cmd()
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .arg("--config-path")
        .arg(&path)
        .arg("show")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let loaded: Vec<_> = stderr
        .lines()
        .filter(|line| line.contains("Successfully loaded configuration"))
        .collect();
    assert_eq!(loaded.len(), 1, "stderr: {stderr}");
    assert!(loaded[0].contains(&path.display().to_string()));

    // One bad KM_BASE plus nine missing address keys.
    let warnings: Vec<_> = stderr.lines().filter(|line| line.contains("WARN")).collect();
    assert_eq!(warnings.len(), 10, "stderr: {stderr}");
    assert_eq!(
        warnings
            .iter()
            .filter(|line| line.contains("hex value None"))
            .count(),
        9
    );
    assert!(warnings.iter().any(|line| line.contains("KM_BASE")));
}

#[test]
fn test_show_table_uses_file_keys() {
    let (_temp_dir, path) = write_temp_config(r#"{"debug": true}"#);

    minuet_cmd()
        .arg("--config-path")
        .arg(&path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("debug\ttrue"))
        .stdout(predicate::str::contains("WV_BASE\t0xf00000000"));
}

#[test]
fn test_show_legacy_yaml() {
    let (_temp_dir, path) = write_temp_config(r#"{"N_THREADS_GATHER": 3, "I_BASE": "0x1200"}"#);

    minuet_cmd()
        .arg("--config-path")
        .arg(&path)
        .args(["show", "--legacy", "--output", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N_THREADS: 3"))
        .stdout(predicate::str::contains("TILE_BASE:"))
        .stdout(predicate::str::contains("0x1200"));
}

#[test]
fn test_show_config_path_from_env() {
    let (_temp_dir, path) = write_temp_config(r#"{"NUM_PIVOTS": 7}"#);

    let output = minuet_cmd()
        .env("MINUET_CONFIG_PATH", &path)
        .args(["show", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["NUM_PIVOTS"], 7);
}

#[test]
fn test_invalid_output_format_is_general_error() {
    let (_temp_dir, path) = temp_config_path();

    minuet_cmd()
        .arg("--config-path")
        .arg(&path)
        .args(["show", "--output", "csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}
