//! # `requirements_check`
//!
//! A `UserPromptSubmit` hook for Claude Code that reminds the agent to check
//! whether a prompt changes the project's `requirements.md`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod hook_logging;
pub mod hooks;
pub mod templates;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
