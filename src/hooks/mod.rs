//! Hook implementations for Claude Code.

mod requirements_check;

pub use requirements_check::{
    evaluate, has_marker_file, is_trivial_prompt, marker_path, parse_requirements_check_input,
    payload_project_dir, project_reminder_text, reminder_text, run_requirements_check_hook,
    Decision, RequirementsCheckInput, RequirementsCheckOutput, SkipReason, ACKNOWLEDGEMENTS,
    MARKER_FILE, MIN_PROMPT_CHARS,
};
