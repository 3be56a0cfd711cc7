//! Runs the built `iwd` binary against temporary repositories and checks
//! the exit status and stdout the release workflow relies on.

use std::path::Path;
use std::process::{Command, Output};

const BLUEPRINT: &str = r#"blueprint:
  name: Integration Watchdog
  domain: automation
  input:
    issue_sensor:
      name: Issue sensor
    notify_service:
      name: Notify service
    max_reload_attempts:
      name: Max reload attempts
      default: 3
trigger:
  - platform: state
    entity_id: !input issue_sensor
action:
  - service: !input notify_service
"#;

const HACS: &str = r#"{
  "name": "Integration Watchdog",
  "description": "Reloads integrations that report issues",
  "domains": ["automation"],
  "homeassistant": "2024.1.0"
}"#;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn valid_repo(root: &Path) {
    write(root, iwd_core::BLUEPRINT_PATH, BLUEPRINT);
    write(root, iwd_core::METADATA_PATH, HACS);
    write(root, iwd_core::README_PATH, "# Integration Watchdog\n");
    write(root, iwd_core::WORKFLOW_PATH, "name: Validate\n");
}

fn iwd(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iwd"))
        .args(args)
        .current_dir(root)
        .output()
        .expect("failed to spawn iwd")
}

#[test]
fn valid_repository_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());

    let output = iwd(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout:\n{stdout}");
    assert!(stdout.starts_with("🚀 Starting Integration Watchdog validation...\n"));
    assert!(stdout.contains("✅ Repository structure validation passed"));
    assert!(stdout.contains("✅ HACS configuration validation passed"));
    assert!(stdout.contains("✅ Blueprint YAML validation passed"));
    assert!(stdout.trim_end().ends_with("🎉 All validations passed! Ready for release."));
}

#[test]
fn broken_repository_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());
    write(dir.path(), iwd_core::METADATA_PATH, "{\"name\": \"x\",}");

    let output = iwd(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("❌ JSON parsing error: "));
    assert!(stdout
        .trim_end()
        .ends_with("💥 Some validations failed. Please fix the issues above."));
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());

    let quiet = iwd(dir.path(), &[]);
    let loud = iwd(dir.path(), &["-vv"]);
    assert_eq!(quiet.stdout, loud.stdout);
    assert_eq!(loud.status.code(), Some(0));
    assert!(!loud.stderr.is_empty());
}

#[test]
fn unknown_arguments_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = iwd(dir.path(), &["--root", "/tmp"]);
    assert_eq!(output.status.code(), Some(2));
}
