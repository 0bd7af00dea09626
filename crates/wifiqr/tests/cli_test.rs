//! Integration tests for the `wifiqr` CLI binary.
//!
//! Each test gets its own temp directory for the config file and history,
//! so nothing touches the user's real configuration.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `wifiqr` binary isolated inside `dir`.
fn wifiqr_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("wifiqr");
    cmd.env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg-config"))
        .env("XDG_DATA_HOME", dir.join("xdg-data"))
        .env("WIFIQR_CONFIG", dir.join("config.toml"))
        .env("WIFIQR_HISTORY__PATH", dir.join("history.json"))
        .env("NO_COLOR", "1")
        .env_remove("WIFIQR_DEFAULTS__OUTPUT")
        .env_remove("WIFIQR_DEFAULTS__COLOR")
        .env_remove("WIFIQR_HISTORY__LIMIT")
        .env_remove("WIFIQR_DECODE__ESCAPE_AWARE")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_owned()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("encode")
            .and(predicate::str::contains("decode"))
            .and(predicate::str::contains("history")),
    );
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wifiqr"));
}

#[test]
fn test_completions_zsh() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Encode ──────────────────────────────────────────────────────────

#[test]
fn test_encode_wpa() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .args(["encode", "--ssid", "Home", "--password", "secret", "--hidden"])
        .assert()
        .success()
        .stdout("WIFI:T:WPA;S:Home;P:secret;H:true;;\n");
}

#[test]
fn test_encode_open_label_drops_password() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .args(["encode", "-n", "Cafe", "-P", "ignored", "-t", "Open Network"])
        .assert()
        .success()
        .stdout("WIFI:T:nopass;S:Cafe;H:false;;\n");
}

#[test]
fn test_encode_escapes_special_characters() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .args(["encode", "-n", "My;Net", "-P", "a:b"])
        .assert()
        .success()
        .stdout("WIFI:T:WPA;S:My\\;Net;P:a\\:b;H:false;;\n");
}

#[test]
fn test_encode_requires_password_for_wpa() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["encode", "-n", "Home"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("password"));
}

#[test]
fn test_encode_rejects_long_ssid() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["encode", "-n", &"x".repeat(33), "-P", "pw"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_encode_json_output() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["-o", "json-compact", "encode", "-n", "Home", "-P", "pw", "-t", "WEP"])
        .output()
        .unwrap();
    assert!(output.status.success());
    insta::assert_snapshot!(
        stdout_of(&output),
        @r#"{"payload":"WIFI:T:WEP;S:Home;P:pw;H:false;;","ssid":"Home","security":"WEP","token":"WEP","hidden":false}"#
    );
}

#[test]
fn test_encode_writes_svg() {
    let dir = TempDir::new().unwrap();
    let svg = dir.path().join("home.svg");
    wifiqr_cmd(dir.path())
        .args(["encode", "-n", "Home", "-P", "pw", "--svg"])
        .arg(&svg)
        .assert()
        .success();
    let markup = std::fs::read_to_string(&svg).unwrap();
    assert!(markup.contains("<svg"));
}

// ── Decode ──────────────────────────────────────────────────────────

#[test]
fn test_decode_json() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["-o", "json-compact", "decode", "WIFI:T:wpa;S:Home;P:pw;H:TRUE;;"])
        .output()
        .unwrap();
    assert!(output.status.success());
    insta::assert_snapshot!(
        stdout_of(&output),
        @r#"{"ssid":"Home","password":"pw","security":"WPA/WPA2","token":"WPA","hidden":true}"#
    );
}

#[test]
fn test_decode_reads_stdin() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .args(["-o", "plain", "decode"])
        .write_stdin("WIFI:T:nopass;S:Lobby;;\n")
        .assert()
        .success()
        .stdout("Lobby\n");
}

#[test]
fn test_decode_bad_prefix_is_data_error() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["decode", "https://example.com"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(65));
    assert!(combined_output(&output).contains("Not a WiFi QR code"));
}

#[test]
fn test_decode_missing_ssid_is_data_error() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["decode", "WIFI:T:WPA;P:pw;;"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(65));
}

#[test]
fn test_decode_escape_aware_flag() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .args(["-o", "plain", "decode", "--escape-aware", "WIFI:S:a\\;b;;"])
        .assert()
        .success()
        .stdout("a;b\n");
}

#[test]
fn test_decode_escape_aware_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[decode]\nescape_aware = true\n",
    )
    .unwrap();
    wifiqr_cmd(dir.path())
        .args(["-o", "plain", "decode", "WIFI:S:a\\;b;;"])
        .assert()
        .success()
        .stdout("a;b\n");
}

// ── Plan ────────────────────────────────────────────────────────────

#[test]
fn test_plan_modern_wep_uses_passphrase() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["-o", "json-compact", "plan", "WIFI:T:WEP;S:Old;P:abcde;;"])
        .output()
        .unwrap();
    assert!(output.status.success());
    insta::assert_snapshot!(
        stdout_of(&output),
        @r#"{"ssid":"Old","auth":{"kind":"wpa2_passphrase","key":"abcde"},"hidden":false,"api":"modern"}"#
    );
}

#[test]
fn test_plan_unknown_security_fails() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["plan", "WIFI:S:Guest;;"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("Cannot join 'Guest'"));
}

// ── Scan ────────────────────────────────────────────────────────────

#[test]
fn test_scan_reports_each_line() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["-o", "plain", "scan"])
        .write_stdin("https://example.com\nWIFI:T:WPA;P:x;;\nWIFI:T:WPA;S:Home;P:pw;;\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "ignored\t-\ninvalid\t-\ndecoded\tHome"
    );
}

#[test]
fn test_scan_connect_records_history() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .args(["scan", "--connect"])
        .write_stdin("WIFI:T:WPA;S:Home;P:pw;;\n")
        .assert()
        .success();
    wifiqr_cmd(dir.path())
        .args(["-o", "plain", "history", "list"])
        .assert()
        .success()
        .stdout("Home\n");
}

// ── History ─────────────────────────────────────────────────────────

fn save(dir: &Path, payload: &str) {
    wifiqr_cmd(dir)
        .args(["-q", "decode", "--save", payload])
        .assert()
        .success();
}

#[test]
fn test_history_is_newest_first_and_deduplicated() {
    let dir = TempDir::new().unwrap();
    save(dir.path(), "WIFI:T:WPA;S:Home;P:pw;;");
    save(dir.path(), "WIFI:T:nopass;S:Cafe;;");
    save(dir.path(), "WIFI:T:WPA;S:Home;P:new;;");

    wifiqr_cmd(dir.path())
        .args(["-o", "plain", "history", "list"])
        .assert()
        .success()
        .stdout("Home\nCafe\n");
}

#[test]
fn test_history_favorite_filter() {
    let dir = TempDir::new().unwrap();
    save(dir.path(), "WIFI:T:WPA;S:Home;P:pw;;");
    save(dir.path(), "WIFI:T:nopass;S:Cafe;;");

    wifiqr_cmd(dir.path())
        .args(["history", "favorite", "Home"])
        .assert()
        .success()
        .stderr(predicate::str::contains("added to favorites"));

    wifiqr_cmd(dir.path())
        .args(["-o", "plain", "history", "list", "--favorites"])
        .assert()
        .success()
        .stdout("Home\n");
}

#[test]
fn test_history_qr_reencodes_payload() {
    let dir = TempDir::new().unwrap();
    save(dir.path(), "WIFI:T:wpa;S:Home;P:pw;H:true;;");
    wifiqr_cmd(dir.path())
        .args(["history", "qr", "Home"])
        .assert()
        .success()
        .stdout("WIFI:T:WPA;S:Home;P:pw;H:true;;\n");
}

#[test]
fn test_history_qr_keeps_unrecognised_token() {
    let dir = TempDir::new().unwrap();
    save(dir.path(), "WIFI:T:Unknown;S:Lab;P:pw;;");
    wifiqr_cmd(dir.path())
        .args(["history", "qr", "Lab"])
        .assert()
        .success()
        .stdout("WIFI:T:Unknown;S:Lab;P:pw;H:false;;\n");
}

#[test]
fn test_history_skips_entry_without_ssid() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("history.json"),
        r#"[
            {"ssid":"","password":"pw","security":"WPA","hidden":false,"favorite":false,"saved_at":"2024-01-01T00:00:00Z"},
            {"ssid":"Home","password":"pw","security":"WPA","hidden":false,"favorite":false,"saved_at":"2024-01-01T00:00:00Z"}
        ]"#,
    )
    .unwrap();
    wifiqr_cmd(dir.path())
        .args(["-o", "plain", "history", "list"])
        .assert()
        .success()
        .stdout("Home\n");
}

#[test]
fn test_history_show_missing_is_not_found() {
    let dir = TempDir::new().unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["history", "show", "Nowhere"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_history_delete_needs_yes_without_terminal() {
    let dir = TempDir::new().unwrap();
    save(dir.path(), "WIFI:T:WPA;S:Home;P:pw;;");

    let output = wifiqr_cmd(dir.path())
        .args(["history", "delete", "Home"])
        .write_stdin("")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("--yes"));

    wifiqr_cmd(dir.path())
        .args(["-y", "history", "delete", "Home"])
        .assert()
        .success();
    wifiqr_cmd(dir.path())
        .args(["-o", "plain", "history", "list"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_history_clear() {
    let dir = TempDir::new().unwrap();
    save(dir.path(), "WIFI:T:WPA;S:Home;P:pw;;");
    wifiqr_cmd(dir.path())
        .args(["-y", "history", "clear"])
        .assert()
        .success();
    wifiqr_cmd(dir.path())
        .args(["-o", "json-compact", "history", "list"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_corrupt_history_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("history.json"), "{not json").unwrap();
    wifiqr_cmd(dir.path())
        .args(["-o", "json-compact", "history", "list"])
        .assert()
        .success()
        .stdout("[]\n");
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_flag() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("custom.toml");
    wifiqr_cmd(dir.path())
        .arg("--config")
        .arg(&custom)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", custom.display()));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    let output = wifiqr_cmd(dir.path())
        .args(["config", "init"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(6));

    wifiqr_cmd(dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_reflects_env() {
    let dir = TempDir::new().unwrap();
    wifiqr_cmd(dir.path())
        .env("WIFIQR_HISTORY__LIMIT", "7")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("limit = 7"));
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[history]\nlimit = 0\n").unwrap();
    let output = wifiqr_cmd(dir.path())
        .args(["decode", "WIFI:S:Home;;"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("history.limit"));
}
