// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Effective permission configuration and built-in defaults.

use serde::Serialize;

use super::file::SettingsFile;
use crate::permission::{PatternRule, PermissionMode};

/// Mode used when no settings file names one.
pub const DEFAULT_MODE: PermissionMode = PermissionMode::AcceptEdits;

/// Built-in dangerous patterns: `(pattern, description)`.
pub const DEFAULT_DANGEROUS_PATTERNS: &[(&str, &str)] = &[
    ("rm -rf", "recursive force delete"),
    ("rm -fr", "recursive force delete"),
    ("sudo ", "command run as root"),
    ("git push --force", "force push"),
    ("git push -f", "force push"),
    ("git reset --hard", "discard uncommitted changes"),
    ("git clean -f", "delete untracked files"),
    ("chmod 777", "world-writable permissions"),
    ("chmod -R", "recursive permission change"),
    ("chown -R", "recursive ownership change"),
    ("kill -9", "force kill a process"),
    ("pkill ", "kill processes by name"),
    ("killall ", "kill processes by name"),
    ("truncate ", "truncate a file"),
    ("npm publish", "publish a package"),
    ("cargo publish", "publish a crate"),
    ("docker system prune", "remove docker data"),
];

/// Built-in catastrophic patterns: `(pattern, description)`.
pub const DEFAULT_CATASTROPHIC_PATTERNS: &[(&str, &str)] = &[
    ("mkfs", "format a filesystem"),
    ("dd if=/dev/zero of=/dev/", "overwrite a block device"),
    ("dd if=/dev/random of=/dev/", "overwrite a block device"),
    ("dd if=/dev/urandom of=/dev/", "overwrite a block device"),
    ("> /dev/sda", "overwrite a disk"),
    ("> /dev/nvme", "overwrite a disk"),
    (":(){ :|:& };:", "fork bomb"),
    ("shred /dev/", "shred a block device"),
    ("wipefs", "wipe filesystem signatures"),
];

/// Built-in protected paths.
pub const DEFAULT_PROTECTED_PATHS: &[&str] = &[
    "~/.ssh",
    "~/.gnupg",
    "~/.aws",
    "~/.kube",
    "~/.config/gcloud",
    "~/.docker/config.json",
    "~/.netrc",
];

/// The merged configuration the decision engine runs with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionConfig {
    pub mode: PermissionMode,
    pub dangerous_patterns: Vec<PatternRule>,
    pub catastrophic_patterns: Vec<PatternRule>,
    pub protected_paths: Vec<String>,
}

impl Default for PermissionConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PermissionConfig {
    /// Built-in defaults.
    pub fn builtin() -> Self {
        Self {
            mode: DEFAULT_MODE,
            dangerous_patterns: rules(DEFAULT_DANGEROUS_PATTERNS),
            catastrophic_patterns: rules(DEFAULT_CATASTROPHIC_PATTERNS),
            protected_paths: DEFAULT_PROTECTED_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// A configuration with no rules or protected paths.
    pub fn empty(mode: PermissionMode) -> Self {
        Self {
            mode,
            dangerous_patterns: Vec::new(),
            catastrophic_patterns: Vec::new(),
            protected_paths: Vec::new(),
        }
    }

    /// Merge a settings file over this configuration.
    ///
    /// Each field present in `file` replaces the current value outright;
    /// lists are not concatenated.
    pub fn merge(&mut self, file: SettingsFile) {
        if let Some(mode) = file.mode {
            self.mode = mode;
        }
        if let Some(rules) = file.dangerous_patterns {
            self.dangerous_patterns = rules;
        }
        if let Some(rules) = file.catastrophic_patterns {
            self.catastrophic_patterns = rules;
        }
        if let Some(paths) = file.protected_paths {
            self.protected_paths = paths;
        }
    }
}

fn rules(table: &[(&str, &str)]) -> Vec<PatternRule> {
    table
        .iter()
        .map(|(pattern, description)| PatternRule::new(*pattern, *description))
        .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
