//! Command-line interface for requirements-check.
//!
//! The hook itself is invoked by Claude Code with a JSON payload on stdin.
//! The remaining commands are for setting up and debugging a project.

mod run;


pub use run::{run, CliOutput};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Remind Claude to check prompts against a project's requirements.md.
///
/// Register `requirements-check user-prompt-submit` as a `UserPromptSubmit`
/// hook. It stays silent unless the prompt is substantive and the project
/// directory contains a requirements.md.
#[derive(Parser, Debug)]
#[command(name = "requirements-check")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dry-run the hook for a prompt and report what it would do.
    Check {
        /// The prompt text to evaluate
        #[arg(long)]
        prompt: String,

        /// Project directory to look for requirements.md in
        #[arg(long, default_value = ".")]
        cwd: PathBuf,
    },

    /// Print the reminder text, including any project template override.
    Reminder {
        /// Project directory whose config is consulted
        #[arg(long, default_value = ".")]
        cwd: PathBuf,
    },

    /// Ensure config file exists (create with defaults if not).
    #[command(name = "ensure-config")]
    EnsureConfig {
        /// Project directory to write the config into
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show version information.
    Version,

    /// Run the user prompt submit hook (stdin: JSON hook input).
    ///
    /// This is called by Claude Code when the user submits a prompt.
    /// Not intended for direct use.
    #[command(name = "user-prompt-submit", hide = true)]
    UserPromptSubmit,
}

impl Command {
    /// Returns true if this command requires stdin input.
    #[must_use]
    pub const fn needs_stdin(&self) -> bool {
        matches!(self, Self::UserPromptSubmit)
    }

    /// Returns the hook type name for logging, or None for non-hook commands.
    #[must_use]
    pub const fn hook_type(&self) -> Option<&'static str> {
        match self {
            Self::UserPromptSubmit => Some("user-prompt-submit"),
            _ => None,
        }
    }
}
