//! `UserPromptSubmit` hook that injects a requirements-check reminder.
//!
//! When the user submits a substantive prompt in a project that keeps a
//! `requirements.md`, the agent is reminded to assess whether the prompt
//! changes the documented requirements before it starts on code. Short
//! prompts and bare acknowledgements ("ok", "thanks", ...) never trigger the
//! reminder, and neither does any project without the marker file.

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::templates::{self, REQUIREMENTS_CHECK_TEMPLATE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File whose presence in the project directory enables the reminder.
pub const MARKER_FILE: &str = "requirements.md";

/// Prompts shorter than this (after trimming) are treated as trivial.
pub const MIN_PROMPT_CHARS: usize = 10;

/// Acknowledgement replies that never trigger the reminder.
pub const ACKNOWLEDGEMENTS: &[&str] =
    &["y", "n", "yes", "no", "ok", "continue", "go", "do it", "yep", "nah", "sure", "thanks"];

/// Input provided to the hook by Claude Code.
///
/// Only `prompt` and `cwd` are read; any other fields in the payload are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequirementsCheckInput {
    /// The user's prompt text.
    #[serde(default)]
    pub prompt: Option<String>,
    /// The project directory the session is running in.
    #[serde(default)]
    pub cwd: Option<String>,
}

impl RequirementsCheckInput {
    /// The prompt text, or an empty string when absent.
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or_default()
    }

    /// The project directory, or `.` when absent.
    pub fn cwd(&self) -> &Path {
        Path::new(self.cwd.as_deref().unwrap_or("."))
    }
}

/// Why the hook stayed silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The payload was not a JSON object with string fields.
    MalformedInput,
    /// The prompt was too short or a bare acknowledgement.
    TrivialPrompt,
    /// The project has no `requirements.md`.
    NoMarkerFile,
    /// The project config turned the reminder off.
    Disabled,
}

impl SkipReason {
    /// Human-readable description for diagnostics.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::MalformedInput => "input is not a valid hook payload",
            Self::TrivialPrompt => "prompt is too short or an acknowledgement",
            Self::NoMarkerFile => "project has no requirements.md",
            Self::Disabled => "disabled in project config",
        }
    }
}

/// Outcome of evaluating one prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Inject the reminder.
    Remind,
    /// Stay silent.
    Skip(SkipReason),
}

/// Output from the requirements-check hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementsCheckOutput {
    /// What the hook decided.
    pub decision: Decision,
    /// Text to print on stdout, present only for [`Decision::Remind`].
    pub reminder: Option<String>,
}

impl RequirementsCheckOutput {
    const fn skip(reason: SkipReason) -> Self {
        Self { decision: Decision::Skip(reason), reminder: None }
    }
}

/// Parse the hook payload.
///
/// # Errors
///
/// Returns an error if the input is not JSON, is not a JSON object, or has a
/// non-string `prompt` or `cwd`.
pub fn parse_requirements_check_input(input: &str) -> Result<RequirementsCheckInput> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    if !value.is_object() {
        let err = <serde_json::Error as serde::de::Error>::custom(
            "hook payload must be a JSON object",
        );
        return Err(err.into());
    }
    Ok(serde_json::from_value(value)?)
}

/// Characters stripped from both ends of a prompt: Unicode whitespace plus
/// the ASCII file, group, record and unit separators.
fn is_prompt_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Check whether a prompt is too insignificant to warrant the reminder.
pub fn is_trivial_prompt(prompt: &str) -> bool {
    let normalized = prompt.trim_matches(is_prompt_whitespace).to_lowercase();
    normalized.chars().count() < MIN_PROMPT_CHARS
        || ACKNOWLEDGEMENTS.contains(&normalized.as_str())
}

/// Path of the marker file for a project directory.
pub fn marker_path(cwd: &Path) -> PathBuf {
    cwd.join(MARKER_FILE)
}

/// Check whether the project directory contains the marker file.
pub fn has_marker_file(cwd: &Path) -> bool {
    marker_path(cwd).exists()
}

/// Decide whether a parsed payload should trigger the reminder.
///
/// Gates run in order and the first one that fails decides: triviality,
/// marker file, then the project config.
pub fn evaluate(input: &RequirementsCheckInput) -> Decision {
    if is_trivial_prompt(input.prompt()) {
        return Decision::Skip(SkipReason::TrivialPrompt);
    }

    let cwd = input.cwd();
    if !has_marker_file(cwd) {
        return Decision::Skip(SkipReason::NoMarkerFile);
    }

    if !ProjectConfig::load_or_default(cwd).enabled {
        return Decision::Skip(SkipReason::Disabled);
    }

    Decision::Remind
}

/// Project directory named by a raw payload, `.` when it has none or cannot
/// be parsed.
pub fn payload_project_dir(raw_input: &str) -> PathBuf {
    parse_requirements_check_input(raw_input)
        .map_or_else(|_| PathBuf::from("."), |input| input.cwd().to_path_buf())
}

/// Render the reminder text from the currently loaded templates.
///
/// # Errors
///
/// Returns an error if the reminder template fails to render.
pub fn reminder_text() -> Result<String> {
    templates::render(REQUIREMENTS_CHECK_TEMPLATE, &tera::Context::new())
}

/// Render the reminder text for a project.
///
/// Templates are reloaded so that the project's `templates_dir` override, if
/// configured, takes precedence over the embedded text.
///
/// # Errors
///
/// Returns an error if the override directory holds invalid templates or the
/// reminder fails to render.
pub fn project_reminder_text(project_dir: &Path) -> Result<String> {
    let config = ProjectConfig::load_or_default(project_dir);
    templates::init_templates(config.resolved_templates_dir(project_dir).as_deref())?;
    reminder_text()
}

/// Run the requirements-check hook on a raw stdin payload.
///
/// A malformed payload is not an error: it yields a silent skip.
///
/// # Errors
///
/// Returns an error only if the reminder is due but cannot be rendered.
pub fn run_requirements_check_hook(raw_input: &str) -> Result<RequirementsCheckOutput> {
    let Ok(input) = parse_requirements_check_input(raw_input) else {
        return Ok(RequirementsCheckOutput::skip(SkipReason::MalformedInput));
    };

    match evaluate(&input) {
        Decision::Remind => {
            let reminder = project_reminder_text(input.cwd())?;
            Ok(RequirementsCheckOutput { decision: Decision::Remind, reminder: Some(reminder) })
        }
        Decision::Skip(reason) => Ok(RequirementsCheckOutput::skip(reason)),
    }
}
