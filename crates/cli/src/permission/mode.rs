// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission modes and their auto-approval scopes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission handling modes, ordered from most to least restrictive.
///
/// Each mode auto-approves everything the previous one does, plus:
/// - `Default`: nothing, every gated request is confirmed
/// - `AcceptEdits`: file writes and edits
/// - `FullAuto`: bash commands that match no dangerous pattern
/// - `BypassPermissions`: everything except the unconditional blocks
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionMode {
    /// Confirm every gated request
    Default,
    /// Accept file edits automatically
    #[serde(alias = "accept-edits")]
    AcceptEdits,
    /// Accept edits and safe bash commands
    #[serde(alias = "full-auto")]
    FullAuto,
    /// Skip confirmation entirely
    #[serde(alias = "bypass-permissions")]
    BypassPermissions,
}

impl PermissionMode {
    /// All modes in cycle order.
    pub const ALL: [PermissionMode; 4] = [
        Self::Default,
        Self::AcceptEdits,
        Self::FullAuto,
        Self::BypassPermissions,
    ];

    /// Canonical name used in settings files and commands.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AcceptEdits => "acceptEdits",
            Self::FullAuto => "fullAuto",
            Self::BypassPermissions => "bypassPermissions",
        }
    }

    /// Get the display name for this mode (for status output)
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AcceptEdits => "accept edits",
            Self::FullAuto => "full auto",
            Self::BypassPermissions => "bypass permissions",
        }
    }

    /// One-line summary of what the mode auto-approves.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => "Ask before every write, edit and bash command",
            Self::AcceptEdits => "Auto-approve file writes and edits; ask before bash commands",
            Self::FullAuto => {
                "Auto-approve edits and bash commands; ask before dangerous commands"
            }
            Self::BypassPermissions => {
                "Auto-approve everything except catastrophic commands and protected paths"
            }
        }
    }

    /// Parse a mode name leniently.
    ///
    /// Accepts the canonical camelCase names as well as kebab-case and
    /// snake_case spellings, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        let folded: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "default" => Some(Self::Default),
            "acceptedits" => Some(Self::AcceptEdits),
            "fullauto" => Some(Self::FullAuto),
            "bypasspermissions" => Some(Self::BypassPermissions),
            _ => None,
        }
    }

    /// Cycle to the next permission mode (keyboard shortcut).
    ///
    /// Default → AcceptEdits → FullAuto → BypassPermissions → Default
    pub fn cycle_next(&self) -> Self {
        match self {
            Self::Default => Self::AcceptEdits,
            Self::AcceptEdits => Self::FullAuto,
            Self::FullAuto => Self::BypassPermissions,
            Self::BypassPermissions => Self::Default,
        }
    }

    /// Check if this mode auto-accepts write/edit operations.
    pub fn accepts_edits(&self) -> bool {
        *self >= Self::AcceptEdits
    }

    /// Check if this mode auto-accepts bash commands with no dangerous match.
    pub fn accepts_safe_bash(&self) -> bool {
        *self >= Self::FullAuto
    }

    /// Check if this mode allows all operations without prompting.
    pub fn allows_all(&self) -> bool {
        matches!(self, Self::BypassPermissions)
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PermissionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown permission mode: {s}"))
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
