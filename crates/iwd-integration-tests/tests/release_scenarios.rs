//! # End-to-End Release Scenarios
//!
//! Builds throwaway repositories on disk and drives the full runner over
//! them: structure, then HACS metadata, then blueprint. Each scenario checks
//! both the per-check verdicts and the process exit code.

use std::path::Path;

use iwd_cli::{write_report, RunReport, Runner};
use iwd_core::{RepoLayout, BLUEPRINT_PATH, METADATA_PATH, README_PATH, WORKFLOW_PATH};

const BLUEPRINT: &str = r#"blueprint:
  name: Integration Watchdog
  description: Reload integrations that raise repair issues.
  domain: automation
  input:
    issue_sensor:
      name: Issue sensor
      selector:
        entity:
          domain: binary_sensor
    notify_service:
      name: Notify service
      default: notify.notify
    max_reload_attempts:
      name: Max reload attempts
      default: 3
      selector:
        number:
          min: 1
          max: 10
mode: single
trigger:
  - platform: state
    entity_id: !input issue_sensor
    to: "on"
condition: []
action:
  - repeat:
      count: !input max_reload_attempts
      sequence:
        - service: homeassistant.reload_config_entry
  - service: !input notify_service
    data:
      message: "Integration reloaded"
"#;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn hacs() -> serde_json::Value {
    serde_json::json!({
        "name": "Integration Watchdog",
        "description": "Reloads integrations that report issues",
        "domains": ["automation"],
        "homeassistant": "2024.1.0",
        "content_in_root": false
    })
}

fn valid_repo(root: &Path) {
    write(root, BLUEPRINT_PATH, BLUEPRINT);
    write(root, METADATA_PATH, &hacs().to_string());
    write(root, README_PATH, "# Integration Watchdog\n");
    write(root, WORKFLOW_PATH, "name: Validate\non: [push]\n");
}

fn run(root: &Path) -> RunReport {
    Runner::new(RepoLayout::default()).run(root)
}

fn render(report: &RunReport) -> String {
    let mut buf = Vec::new();
    write_report(report, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn verdicts(report: &RunReport) -> Vec<bool> {
    report.checks().iter().map(|c| c.outcome.passed()).collect()
}

#[test]
fn scenario_a_valid_repository_passes() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());

    let report = run(dir.path());
    assert_eq!(verdicts(&report), vec![true, true, true]);
    assert_eq!(report.exit_code(), 0);

    let text = render(&report);
    assert!(!text.contains('❌'), "{text}");
    assert!(!text.contains("⚠️"), "{text}");
    assert!(text.ends_with("🎉 All validations passed! Ready for release.\n"));
}

#[test]
fn scenario_b_trailing_comma_in_hacs_json() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());
    write(
        dir.path(),
        METADATA_PATH,
        r#"{
  "name": "Integration Watchdog",
  "description": "Reloads integrations that report issues",
  "domains": ["automation"],
  "homeassistant": "2024.1.0",
}"#,
    );

    let report = run(dir.path());
    assert_eq!(verdicts(&report), vec![true, false, true]);
    assert_eq!(report.exit_code(), 1);

    let metadata = &report.checks()[1];
    assert_eq!(metadata.subject, "hacs.json");
    let error = metadata.outcome.first_error().unwrap();
    assert!(error.starts_with("JSON parsing error: "), "{error}");
    assert!(error.contains("trailing comma"), "{error}");

    assert!(render(&report)
        .ends_with("💥 Some validations failed. Please fix the issues above.\n"));
}

#[test]
fn scenario_c_tagged_input_value_parses_as_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());
    let tagged = BLUEPRINT.replace(
        "    issue_sensor:\n      name: Issue sensor\n      selector:\n        entity:\n          domain: binary_sensor\n",
        "    issue_sensor: !input upstream_issue_sensor\n",
    );
    assert_ne!(tagged, BLUEPRINT);
    write(dir.path(), BLUEPRINT_PATH, &tagged);

    let document = iwd_schema::yaml::from_str(&tagged).unwrap();
    assert_eq!(
        document["blueprint"]["input"]["issue_sensor"].as_str(),
        Some("!input upstream_issue_sensor")
    );

    let report = run(dir.path());
    assert_eq!(verdicts(&report), vec![true, true, true]);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn scenario_d_missing_workflow_still_runs_every_check() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());
    std::fs::remove_file(dir.path().join(WORKFLOW_PATH)).unwrap();

    let report = run(dir.path());
    assert_eq!(report.checks().len(), 3);
    assert_eq!(verdicts(&report), vec![false, true, true]);
    assert_eq!(report.exit_code(), 1);

    let text = render(&report);
    let listing = format!("❌ Missing required files/directories:\n   - {WORKFLOW_PATH}\n");
    assert!(text.contains(&listing), "{text}");
    assert!(text.contains("✅ HACS configuration validation passed"));
    assert!(text.contains("✅ Blueprint YAML validation passed"));
}

#[test]
fn content_in_root_warning_does_not_fail_the_release() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());
    let mut descriptor = hacs();
    descriptor["content_in_root"] = serde_json::json!(true);
    write(dir.path(), METADATA_PATH, &descriptor.to_string());

    let report = run(dir.path());
    assert_eq!(report.exit_code(), 0);
    let warning = "⚠️  Warning: content_in_root should be false for organized structure\n";
    let passed = "✅ HACS configuration validation passed\n";
    assert!(render(&report).contains(&format!("{warning}{passed}")));
}

#[test]
fn every_category_of_problem_is_reported_in_one_pass() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());
    std::fs::remove_file(dir.path().join(README_PATH)).unwrap();
    let mut descriptor = hacs();
    descriptor["domains"] = serde_json::json!(["integration"]);
    write(dir.path(), METADATA_PATH, &descriptor.to_string());
    write(
        dir.path(),
        BLUEPRINT_PATH,
        &BLUEPRINT.replace("domain: automation", "domain: script"),
    );

    let report = run(dir.path());
    assert_eq!(verdicts(&report), vec![false, false, false]);

    let text = render(&report);
    assert!(text.contains("   - README.md\n"));
    assert!(text.contains(r#"❌ HACS domains must include 'automation', got: ["integration"]"#));
    assert!(text.contains("❌ Blueprint domain must be 'automation', got: script"));
}

#[test]
fn runs_are_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    valid_repo(dir.path());
    std::fs::remove_file(dir.path().join(WORKFLOW_PATH)).unwrap();

    assert_eq!(run(dir.path()), run(dir.path()));
}
