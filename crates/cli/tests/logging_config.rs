use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../core/tests/fixtures").join(name)
}

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("fumes.log");

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1

[logging]
level = "warn"
file_level = "debug"
file = "{}"
"#,
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fumes"));
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .arg(fixture("CircleSquare.swift"))
        .arg(root.join("View.swift"))
        .assert()
        .success();

    assert!(log_file.exists(), "Log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("extracted color"));
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let config_path = root.join("config.toml");
    fs::write(&config_path, "version = 1\n[logging]\nlevel = \"trace\"\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fumes"));
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .arg(fixture("CircleSquare.swift"))
        .arg(root.join("View.swift"))
        .assert()
        .success()
        .stderr(predicates::str::contains("extracted color"));
}

#[test]
fn test_configured_verbose_reports_duplicates() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let input = root.join("Dots.swift");
    fs::write(
        &input,
        "class Dots: NSObject {\n    /// Dot\n    UIColor.white.setFill()\n    /// Dot\n    UIColor.black.setFill()\n}\n",
    )
    .unwrap();

    let config_path = root.join("config.toml");
    fs::write(
        &config_path,
        "version = 1\n[transpiler]\nverbose = true\n[logging]\nlevel = \"error\"\n",
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fumes"));
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config_path)
        .arg(&input)
        .arg(root.join("View.swift"))
        .assert()
        .success()
        .stderr(predicates::str::contains("duplicate variable named dotFillColor"));
}

#[test]
fn test_verbose_reports_duplicates() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let input = root.join("Dots.swift");
    fs::write(
        &input,
        "class Dots: NSObject {\n    /// Dot\n    UIColor.white.setFill()\n    /// Dot\n    UIColor.black.setFill()\n}\n",
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fumes"));
    cmd.env("XDG_CONFIG_HOME", root)
        .env_remove("RUST_LOG")
        .arg("-v")
        .arg(&input)
        .arg(root.join("View.swift"))
        .assert()
        .success()
        .stderr(predicates::str::contains("duplicate variable named dotFillColor"));
}
