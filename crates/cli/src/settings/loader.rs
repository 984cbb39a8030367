// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-file settings loading with precedence.
//!
//! Settings are layered field by field:
//! 1. Built-in defaults - lowest priority
//! 2. Global (`~/.permgate/settings.json` or `$PERMGATE_CONFIG_DIR/settings.json`)
//! 3. Project (`.permgate/settings.json` in the working directory) - highest priority

use std::path::{Path, PathBuf};

use super::config::PermissionConfig;
use super::file::SettingsFile;

/// Directory name for both global and project settings.
pub const SETTINGS_DIR: &str = ".permgate";

/// Settings file name inside a settings directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Paths to search for settings files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsPaths {
    /// Global settings
    pub global: Option<PathBuf>,
    /// Project settings
    pub project: Option<PathBuf>,
}

impl SettingsPaths {
    /// Resolve settings paths from an explicit global directory.
    pub fn resolve(config_dir: &Path, working_dir: &Path) -> Self {
        Self {
            global: Some(config_dir.join(SETTINGS_FILE)),
            project: Some(working_dir.join(SETTINGS_DIR).join(SETTINGS_FILE)),
        }
    }

    /// Resolve settings paths from the environment.
    ///
    /// `PERMGATE_CONFIG_DIR` wins over `<home>/.permgate`; with neither the
    /// global layer is skipped.
    pub fn from_env(home: Option<&Path>, working_dir: &Path) -> Self {
        let config_dir = crate::env::config_dir().or_else(|| home.map(|h| h.join(SETTINGS_DIR)));
        match config_dir {
            Some(dir) => Self::resolve(&dir, working_dir),
            None => Self::project_only(working_dir),
        }
    }

    /// Create paths for testing (no global).
    pub fn project_only(working_dir: &Path) -> Self {
        Self {
            global: None,
            project: Some(working_dir.join(SETTINGS_DIR).join(SETTINGS_FILE)),
        }
    }
}

/// Loads and merges settings from multiple files.
pub struct SettingsLoader {
    paths: SettingsPaths,
}

impl SettingsLoader {
    pub fn new(paths: SettingsPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &SettingsPaths {
        &self.paths
    }

    /// Load and merge all settings files over the built-in defaults.
    ///
    /// Missing files are silently skipped. Unreadable or invalid files are
    /// logged at `warn` and skipped.
    pub fn load(&self) -> PermissionConfig {
        let mut config = PermissionConfig::builtin();

        for path in self.layers() {
            if !path.exists() {
                continue;
            }
            match SettingsFile::load(path) {
                Ok(file) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    config.merge(file);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping settings file");
                }
            }
        }

        config
    }

    /// Settings files that exist, lowest precedence first.
    pub fn existing_files(&self) -> Vec<&Path> {
        self.layers().filter(|p| p.exists()).collect()
    }

    fn layers(&self) -> impl Iterator<Item = &Path> {
        [&self.paths.global, &self.paths.project]
            .into_iter()
            .flatten()
            .map(PathBuf::as_path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
