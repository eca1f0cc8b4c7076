//! Command execution for the CLI.
//!
//! Every command produces a [`CliOutput`]; the binary only prints it.

use crate::cli::Command;
use crate::config;
use crate::hook_logging;
use crate::hooks::{
    evaluate, payload_project_dir, project_reminder_text, run_requirements_check_hook, Decision,
    RequirementsCheckInput,
};
use std::path::Path;
use std::process::ExitCode;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Run a CLI command with the given stdin input.
pub fn run(command: Command, stdin: &str) -> CliOutput {
    // Log hook events into the payload's project when it asks for them
    if let Some(hook_type) = command.hook_type() {
        hook_logging::record_hook_event(&payload_project_dir(stdin), hook_type, stdin);
    }

    match command {
        Command::Check { prompt, cwd } => run_check(prompt, &cwd),
        Command::Reminder { cwd } => run_reminder(&cwd),
        Command::EnsureConfig { dir } => run_ensure_config(&dir),
        Command::Version => run_version(),
        Command::UserPromptSubmit => run_user_prompt_submit_cmd(stdin),
    }
}

// === Utility Commands ===

fn run_version() -> CliOutput {
    CliOutput {
        exit_code: ExitCode::SUCCESS,
        stdout: vec![],
        stderr: vec![format!("requirements-check v{}", crate::VERSION)],
    }
}

fn run_ensure_config(dir: &Path) -> CliOutput {
    match config::ensure_config_in(dir) {
        Ok(config) => {
            let path = config::ProjectConfig::config_path(dir);
            let messages = vec![
                format!("Config ensured at {}", path.display()),
                format!("  enabled: {}", config.enabled),
                format!("  debug_logging: {}", config.debug_logging),
            ];
            CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![], stderr: messages }
        }
        Err(e) => error_output(format!("Error ensuring config: {e}")),
    }
}

fn run_reminder(cwd: &Path) -> CliOutput {
    match project_reminder_text(cwd) {
        Ok(text) => CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![text], stderr: vec![] },
        Err(e) => error_output(format!("Error rendering reminder: {e}")),
    }
}

fn run_check(prompt: String, cwd: &Path) -> CliOutput {
    let input = RequirementsCheckInput {
        prompt: Some(prompt),
        cwd: Some(cwd.to_string_lossy().into_owned()),
    };

    let message = match evaluate(&input) {
        Decision::Remind => "remind: the reminder would be injected".to_string(),
        Decision::Skip(reason) => format!("skip: {}", reason.describe()),
    };

    CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![], stderr: vec![message] }
}

// === Hook Commands ===

fn run_user_prompt_submit_cmd(stdin: &str) -> CliOutput {
    // The hook must never block the prompt, so every path exits 0
    match run_requirements_check_hook(stdin) {
        Ok(output) => CliOutput {
            exit_code: ExitCode::SUCCESS,
            stdout: output.reminder.into_iter().collect(),
            stderr: vec![],
        },
        Err(e) => CliOutput {
            exit_code: ExitCode::SUCCESS,
            stdout: vec![],
            stderr: vec![format!("Error running user-prompt-submit hook: {e}")],
        },
    }
}

fn error_output(message: String) -> CliOutput {
    CliOutput { exit_code: ExitCode::from(1), stdout: vec![], stderr: vec![message] }
}
