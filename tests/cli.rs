use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary with an empty config directory and no backend override
/// from the caller's environment.
fn reminder_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reminder").unwrap();
    cmd.env("REMINDER_CONFIG_DIR", config_dir.path())
        .env_remove("REMINDER_BACKEND")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_help() {
    let temp = TempDir::new().unwrap();
    let assert = reminder_cmd(&temp).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for name in ["create", "edit", "fetch", "delete", "health"] {
        assert!(stdout.contains(&format!("{name} --help")), "{name} missing");
    }
}

#[test]
fn test_help_flag_prints_help() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<command> [<args>]"));
}

#[test]
fn test_unknown_command_fails() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .arg("remind")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid command 'remind'"));
}

#[test]
fn test_insufficient_arguments_shows_usage_hint() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args(["create", "-t", "Tea"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("incorrect use of create"))
        .stderr(predicate::str::contains("create --help"))
        .stderr(predicate::str::contains(
            "create expects at least 3 arg(s), 2 provided",
        ));
}

#[test]
fn test_command_help_lists_flags() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args(["edit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--id"))
        .stdout(predicate::str::contains("--title"));
}

#[test]
fn test_create_against_memory_backend() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args([
            "--backend",
            "memory://",
            "create",
            "--title",
            "Water",
            "-m",
            "Drink a glass",
            "-d",
            "10m",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reminder created successfully"))
        .stdout(predicate::str::contains("\"title\": \"Water\""))
        .stdout(predicate::str::contains("\"duration\": 600"));
}

#[test]
fn test_create_against_http_placeholder() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args(["create", "-t", "Water", "-m", "Drink"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "http://localhost:3000/reminders",
        ));
}

#[test]
fn test_invalid_duration_fails() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args(["--backend", "memory://", "create", "-t", "a", "-d", "soon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid duration 'soon'"));
}

#[test]
fn test_sub_second_duration_is_rejected() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args(["--backend", "memory://", "create", "-t", "a", "-d", "500ms"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid duration '500ms'"));
}

#[test]
fn test_duration_overflow_is_an_error() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args([
            "--backend",
            "memory://",
            "create",
            "-t",
            "a",
            "-d",
            "18446744073709551615s1s",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("number out of range"));
}

#[test]
fn test_backend_error_is_wrapped() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args(["--backend", "memory://", "fetch", "--id", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "could not fetch reminder(s) : reminder not found: 3",
        ));
}

#[test]
fn test_malformed_flag_fails() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args(["delete", "--ids", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("could not parse 'delete' flags"));
}

#[test]
fn test_health_uses_config_file_backend() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{ "backend": "memory://from-config" }"#,
    )
    .unwrap();

    reminder_cmd(&temp)
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Backend at memory://from-config is healthy",
        ));
}

#[test]
fn test_backend_precedence_flag_over_env() {
    let temp = TempDir::new().unwrap();

    reminder_cmd(&temp)
        .env("REMINDER_BACKEND", "memory://from-env")
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("memory://from-env"));

    reminder_cmd(&temp)
        .env("REMINDER_BACKEND", "memory://from-env")
        .args(["--backend", "memory://from-flag", "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("memory://from-flag"));
}

#[test]
fn test_unhealthy_backend_fails() {
    let temp = TempDir::new().unwrap();
    reminder_cmd(&temp)
        .args(["--backend", "localhost:3000", "health"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not healthy"));
}
