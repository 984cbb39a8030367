// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-session permission state: the current mode and session-level approvals.

use std::collections::BTreeSet;

use serde::Serialize;

use super::mode::PermissionMode;
use super::request::ToolName;

/// Approvals granted with "allow for session".
///
/// Bash approvals are keyed by the exact command string; write/edit
/// approvals by tool name. Entries are only ever removed all at once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionAllow {
    tools: BTreeSet<String>,
    commands: BTreeSet<String>,
}

impl SessionAllow {
    pub fn allow_tool(&mut self, tool: &ToolName) {
        self.tools.insert(tool.as_str().to_string());
    }

    pub fn allow_command(&mut self, command: &str) {
        self.commands.insert(command.to_string());
    }

    pub fn allows_tool(&self, tool: &ToolName) -> bool {
        self.tools.contains(tool.as_str())
    }

    /// Exact string comparison; `ls -la` does not cover `ls  -la`.
    pub fn allows_command(&self, command: &str) -> bool {
        self.commands.contains(command)
    }

    pub fn tools(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(String::as_str)
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.tools.clear();
        self.commands.clear();
    }
}

/// Mode and approval state for one session.
///
/// Every mode transition clears the session approvals, including a
/// transition to the mode already in effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionSession {
    mode: PermissionMode,
    allow: SessionAllow,
}

impl PermissionSession {
    /// Start a session in `mode` with no approvals.
    pub fn new(mode: PermissionMode) -> Self {
        Self {
            mode,
            allow: SessionAllow::default(),
        }
    }

    /// Start a session from a configured mode plus startup overrides.
    pub fn start(configured: PermissionMode, overrides: &SessionOverrides) -> Self {
        Self::new(overrides.apply(configured))
    }

    pub fn mode(&self) -> PermissionMode {
        self.mode
    }

    pub fn allow(&self) -> &SessionAllow {
        &self.allow
    }

    pub(crate) fn allow_mut(&mut self) -> &mut SessionAllow {
        &mut self.allow
    }

    /// Switch to `mode`, returning the previous mode.
    pub fn set_mode(&mut self, mode: PermissionMode) -> PermissionMode {
        let previous = std::mem::replace(&mut self.mode, mode);
        self.allow.clear();
        tracing::info!(from = %previous, to = %mode, "permission mode changed");
        previous
    }

    /// Advance to the next mode in cycle order, returning the new mode.
    pub fn cycle_mode(&mut self) -> PermissionMode {
        let next = self.mode.cycle_next();
        self.set_mode(next);
        next
    }
}

/// Startup overrides equivalent to CLI flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionOverrides {
    /// Force `bypassPermissions` regardless of anything else.
    pub skip_permissions: bool,
    /// Mode name; ignored when it names no known mode.
    pub mode: Option<String>,
}

impl SessionOverrides {
    /// Apply the overrides on top of the configured mode.
    pub fn apply(&self, configured: PermissionMode) -> PermissionMode {
        let mut mode = configured;
        if let Some(name) = self.mode.as_deref() {
            match PermissionMode::parse(name) {
                Some(parsed) => mode = parsed,
                None => tracing::warn!(name, "ignoring unknown permission mode override"),
            }
        }
        if self.skip_permissions {
            mode = PermissionMode::BypassPermissions;
        }
        mode
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
