//! Configuration management for Odinsweep
//!
//! This module handles loading, parsing, and validating Odinsweep
//! configuration from YAML files (`odinsweep.yml`).

use anyhow::{Context, Result};
use globset::Glob;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// Main configuration structure for Odinsweep
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SweepConfig {
    /// Batch cleaner configuration
    pub clean: CleanConfig,
}

/// Batch cleaner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Directory containing the generated files
    pub directory: String,

    /// Filename suffix selecting candidate files
    pub extension: String,

    /// Glob patterns for files inside the directory that must never be
    /// rewritten (hand-maintained files mixed into a generated tree)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Skip the write-back when a file had no matches
    #[serde(default = "default_skip_unchanged_writes")]
    pub skip_unchanged_writes: bool,

    /// Continue past files that fail to read or write instead of aborting
    #[serde(default)]
    pub skip_errors: bool,
}

/// Default value for skip_unchanged_writes
fn default_skip_unchanged_writes() -> bool {
    true
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            directory: "./odin-assimp".to_string(),
            extension: ".odin".to_string(),
            exclude_patterns: Vec::new(),
            skip_unchanged_writes: true,
            skip_errors: false,
        }
    }
}

impl SweepConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: SweepConfig = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yml::to_string(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Find configuration file in current directory or parent directories
    pub fn find_config_file() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join("odinsweep.yml");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join(".odinsweep.yml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.clean.directory.is_empty() {
            anyhow::bail!("Clean directory cannot be empty");
        }
        if self.clean.extension.is_empty() {
            anyhow::bail!("File extension cannot be empty");
        }
        if !self.clean.extension.starts_with('.') {
            anyhow::bail!(
                "File extension must start with '.': {}",
                self.clean.extension
            );
        }

        for pattern in &self.clean.exclude_patterns {
            Glob::new(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;
        }

        Ok(())
    }
}
