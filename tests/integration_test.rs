//! End-to-end tests for the `requirements-check` binary.

use assert_cmd::Command;
use requirements_check::VERSION;
use tempfile::TempDir;

const REMINDER: &str = "\
[REQUIREMENTS CHECK] This project has a requirements.md managed by the requirements-editor agent.

Before implementing changes, assess whether the user's message implies:
- A new requirement not yet in requirements.md
- A correction to an existing requirement (\"actually it should...\", \"that's wrong\")
- A new constraint or business rule
- A domain knowledge correction (glossary, quirk, mapping)
- A new external system dependency (belongs in systems.md)
- A decision that should be logged
- A non-goal (\"we don't need X\", \"that was just a workaround for...\")
- A new deliverable or artifact that should exist (documentation, config files, reports)

If YES: state the proposed change concisely, confirm with the user, then delegate the update \
to the requirements-editor agent BEFORE implementing code changes.
If NO: proceed normally. Do not mention this check.";

fn hook() -> Command {
    let mut cmd = Command::cargo_bin("requirements-check").unwrap();
    cmd.arg("user-prompt-submit");
    cmd
}

fn project_with_marker() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("requirements.md"), "# Requirements\n").unwrap();
    dir
}

fn payload(prompt: &str, dir: &TempDir) -> String {
    serde_json::json!({ "prompt": prompt, "cwd": dir.path().to_string_lossy() }).to_string()
}

#[test]
fn test_version_exists() {
    assert!(!VERSION.is_empty());
}

#[test]
fn test_acknowledgement_without_marker() {
    hook().write_stdin(r#"{"prompt": "ok", "cwd": "/tmp"}"#).assert().success().stdout("");
}

#[test]
fn test_feature_request_with_marker_emits_reminder() {
    let dir = project_with_marker();
    hook()
        .write_stdin(payload("we should also support CSV export", &dir))
        .assert()
        .success()
        .stdout(format!("{REMINDER}\n"));
}

#[test]
fn test_acknowledgement_with_marker_is_silent() {
    let dir = project_with_marker();
    hook().write_stdin(payload("thanks", &dir)).assert().success().stdout("");
}

#[test]
fn test_unparseable_input_is_silent() {
    hook().write_stdin("this is { not json").assert().success().stdout("").stderr("");
}

#[test]
fn test_empty_input_is_silent() {
    hook().write_stdin("").assert().success().stdout("");
}

#[test]
fn test_missing_cwd_defaults_to_process_directory() {
    let dir = TempDir::new().unwrap();
    hook()
        .current_dir(dir.path())
        .write_stdin(r#"{"prompt": "please fix the login bug"}"#)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_missing_cwd_uses_marker_in_process_directory() {
    let dir = project_with_marker();
    hook()
        .current_dir(dir.path())
        .write_stdin(r#"{"prompt": "please fix the login bug"}"#)
        .assert()
        .success()
        .stdout(format!("{REMINDER}\n"));
}

#[test]
fn test_disabled_config_is_silent() {
    let dir = project_with_marker();
    std::fs::create_dir_all(dir.path().join(".claude")).unwrap();
    std::fs::write(dir.path().join(".claude/requirements-check.yaml"), "enabled: false\n").unwrap();

    hook()
        .write_stdin(payload("we should also support CSV export", &dir))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_debug_logging_records_invocation() {
    let dir = project_with_marker();
    std::fs::create_dir_all(dir.path().join(".claude")).unwrap();
    std::fs::write(dir.path().join(".claude/requirements-check.yaml"), "debug_logging: true\n")
        .unwrap();

    hook()
        .current_dir(dir.path())
        .write_stdin(r#"{"prompt": "ok"}"#)
        .assert()
        .success()
        .stdout("");

    let log =
        std::fs::read_to_string(dir.path().join(".claude/requirements-check-events.jsonl")).unwrap();
    let lines: Vec<serde_json::Value> =
        log.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["hook_type"], "user-prompt-submit");
    assert_eq!(lines[0]["input"]["prompt"], "ok");
}

#[test]
fn test_debug_log_follows_payload_cwd() {
    let project = project_with_marker();
    std::fs::create_dir_all(project.path().join(".claude")).unwrap();
    let config = project.path().join(".claude/requirements-check.yaml");
    std::fs::write(config, "debug_logging: true\n").unwrap();
    let elsewhere = TempDir::new().unwrap();

    hook()
        .current_dir(elsewhere.path())
        .write_stdin(payload("we should also support CSV export", &project))
        .assert()
        .success()
        .stdout(format!("{REMINDER}\n"));

    let log = project.path().join(".claude/requirements-check-events.jsonl");
    assert_eq!(std::fs::read_to_string(log).unwrap().lines().count(), 1);
    assert!(!elsewhere.path().join(".claude").exists());
}

#[test]
fn test_separator_padded_short_prompt_is_silent() {
    let dir = project_with_marker();
    hook().write_stdin(payload("\u{1f}123456789", &dir)).assert().success().stdout("");
}

#[test]
fn test_reminder_command_prints_reminder() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("requirements-check")
        .unwrap()
        .current_dir(dir.path())
        .arg("reminder")
        .assert()
        .success()
        .stdout(format!("{REMINDER}\n"));
}

#[test]
fn test_check_command_does_not_read_stdin() {
    let dir = project_with_marker();
    Command::cargo_bin("requirements-check")
        .unwrap()
        .args(["check", "--prompt", "we should also support CSV export", "--cwd"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("")
        .stderr("remind: the reminder would be injected\n");
}
