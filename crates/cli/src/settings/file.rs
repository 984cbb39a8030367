// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A single permission settings file.
//!
//! ```json5
//! {
//!   // any field may be omitted; omitted fields fall through to lower layers
//!   "mode": "fullAuto",
//!   "dangerousPatterns": [{ "pattern": "terraform apply", "description": "infra change" }],
//!   "catastrophicPatterns": [{ "pattern": "mkfs", "description": "format a filesystem" }],
//!   "protectedPaths": ["~/.ssh", ".env.production"],
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::permission::{PatternRule, PermissionMode};

/// Errors reading or parsing a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings file schema.
///
/// This is permissive - unknown fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    #[serde(default)]
    pub mode: Option<PermissionMode>,

    #[serde(default)]
    pub dangerous_patterns: Option<Vec<PatternRule>>,

    #[serde(default)]
    pub catastrophic_patterns: Option<Vec<PatternRule>>,

    #[serde(default)]
    pub protected_paths: Option<Vec<String>>,
}

impl SettingsFile {
    /// Load and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse and validate settings from a JSON/JSON5 string.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        parse_json5_or_json::<Self>(content).map(Self::validated)
    }

    /// Drop entries that could never match and fill in missing descriptions.
    fn validated(mut self) -> Self {
        if let Some(rules) = self.dangerous_patterns.take() {
            self.dangerous_patterns = Some(validate_rules(rules, "dangerousPatterns"));
        }
        if let Some(rules) = self.catastrophic_patterns.take() {
            self.catastrophic_patterns = Some(validate_rules(rules, "catastrophicPatterns"));
        }
        if let Some(paths) = self.protected_paths.take() {
            let before = paths.len();
            let kept: Vec<String> = paths
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            if kept.len() != before {
                tracing::warn!(
                    dropped = before - kept.len(),
                    "ignoring empty protectedPaths entries"
                );
            }
            self.protected_paths = Some(kept);
        }
        self
    }
}

fn validate_rules(rules: Vec<PatternRule>, field: &str) -> Vec<PatternRule> {
    rules
        .into_iter()
        .filter_map(|mut rule| {
            if rule.pattern.is_empty() {
                tracing::warn!(
                    field,
                    description = %rule.description,
                    "ignoring rule with empty pattern"
                );
                return None;
            }
            if rule.description.trim().is_empty() {
                rule.description = rule.pattern.clone();
            }
            Some(rule)
        })
        .collect()
}

/// Parse content as JSON5, falling back to strict JSON on parse failure.
///
/// JSON5 supports comments and trailing commas, making config files more readable.
fn parse_json5_or_json<T: serde::de::DeserializeOwned>(
    content: &str,
) -> Result<T, serde_json::Error> {
    json5::from_str(content).or_else(|_| serde_json::from_str(content))
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
