//! Debug event log for hook invocations.
//!
//! A project that sets `debug_logging: true` in its config gets one JSON line
//! per hook run in `.claude/requirements-check-events.jsonl`, next to the
//! config that turned it on. The project is the payload's `cwd`, so the log
//! follows the project regardless of where the hook process was started.

use crate::config::ProjectConfig;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Event log path relative to the project root.
pub const HOOK_EVENTS_FILE: &str = ".claude/requirements-check-events.jsonl";

/// One line of the event log.
#[derive(Debug, Serialize)]
struct HookEvent<'a> {
    timestamp: DateTime<Utc>,
    hook_type: &'a str,
    /// The payload as JSON, or as a plain string when it isn't JSON.
    input: serde_json::Value,
}

impl<'a> HookEvent<'a> {
    fn new(hook_type: &'a str, raw_input: &str) -> Self {
        let input = serde_json::from_str(raw_input)
            .unwrap_or_else(|_| serde_json::Value::String(raw_input.to_string()));
        Self { timestamp: Utc::now(), hook_type, input }
    }
}

/// Get the event log path for a project directory.
pub fn events_path(project_dir: &Path) -> PathBuf {
    project_dir.join(HOOK_EVENTS_FILE)
}

/// Record a hook invocation if the project has debug logging enabled.
///
/// Failures are dropped; the log never affects what the hook prints.
pub fn record_hook_event(project_dir: &Path, hook_type: &str, raw_input: &str) {
    if !ProjectConfig::load_or_default(project_dir).debug_logging {
        return;
    }

    let _ = append_event(&events_path(project_dir), &HookEvent::new(hook_type, raw_input));
}

fn append_event(log_path: &Path, event: &HookEvent<'_>) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let line = serde_json::to_string(event)?;
    let mut file = OpenOptions::new().create(true).append(true).open(log_path)?;
    writeln!(file, "{line}")?;
    Ok(())
}
