//! Configuration management for requirements-check.
//!
//! This module handles the `.claude/requirements-check.yaml` file which stores
//! project-specific settings for the hook. The file is optional: a project
//! without it gets the defaults.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file path relative to project root.
pub const CONFIG_FILE_PATH: &str = ".claude/requirements-check.yaml";

/// Project configuration for the requirements hook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Whether the reminder is injected at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Whether every hook invocation is appended to the debug event log.
    #[serde(default)]
    pub debug_logging: bool,

    /// Directory of `*.tera` files overriding the embedded messages.
    /// Relative paths are resolved against the project directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
}

const fn default_enabled() -> bool {
    true
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { enabled: default_enabled(), debug_logging: false, templates_dir: None }
    }
}

impl ProjectConfig {
    /// Load config from a specific base directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = Self::config_path(base_dir);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        // An empty file is valid YAML but deserializes to unit, not a mapping.
        if content.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Load config from a base directory, falling back to defaults on any
    /// failure.
    pub fn load_or_default(base_dir: &Path) -> Self {
        Self::load_from(base_dir).ok().flatten().unwrap_or_default()
    }

    /// Save config to a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, base_dir: &Path) -> Result<()> {
        let config_path = Self::config_path(base_dir);

        // Ensure .claude directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the config file path for a base directory.
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_PATH)
    }

    /// The template override directory, resolved against `base_dir`.
    pub fn resolved_templates_dir(&self, base_dir: &Path) -> Option<PathBuf> {
        self.templates_dir.as_ref().map(|dir| base_dir.join(dir))
    }
}

/// Ensure config exists in a specific directory.
///
/// Returns the existing config, or writes and returns the defaults.
///
/// # Errors
///
/// Returns an error if config cannot be loaded or saved.
pub fn ensure_config_in(base_dir: &Path) -> Result<ProjectConfig> {
    if let Some(config) = ProjectConfig::load_from(base_dir)? {
        return Ok(config);
    }

    let config = ProjectConfig::default();
    config.save_to(base_dir)?;
    Ok(config)
}
