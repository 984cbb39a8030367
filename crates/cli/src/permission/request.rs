// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool invocation requests as seen by the permission gate.

use std::fmt;

/// Tool being invoked.
///
/// Only `Write`, `Edit` and `Bash` go through the decision pipeline; every
/// other tool is passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ToolName {
    Write,
    Edit,
    Bash,
    /// Any tool the gate does not police, keeping the caller's spelling.
    Other(String),
}

impl ToolName {
    /// Parse a tool name case-insensitively (`"Bash"` and `"bash"` are the same tool).
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "write" => Self::Write,
            "edit" => Self::Edit,
            "bash" => Self::Bash,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// Get the string representation of the tool name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Write => "write",
            Self::Edit => "edit",
            Self::Bash => "bash",
            Self::Other(name) => name,
        }
    }

    /// Whether requests for this tool are subject to permission checks.
    pub fn is_gated(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Whether this tool modifies a file at a path.
    pub fn is_file_edit(&self) -> bool {
        matches!(self, Self::Write | Self::Edit)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tool arguments the gate inspects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolInput {
    /// Target path for write/edit.
    pub path: Option<String>,
    /// Command line for bash.
    pub command: Option<String>,
}

/// A single tool invocation awaiting a decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub tool: ToolName,
    pub input: ToolInput,
}

impl Request {
    pub fn new(tool: ToolName, input: ToolInput) -> Self {
        Self { tool, input }
    }

    /// Bash request for `command`.
    pub fn bash(command: impl Into<String>) -> Self {
        Self::new(
            ToolName::Bash,
            ToolInput {
                command: Some(command.into()),
                ..Default::default()
            },
        )
    }

    /// Write request targeting `path`.
    pub fn write(path: impl Into<String>) -> Self {
        Self::new(
            ToolName::Write,
            ToolInput {
                path: Some(path.into()),
                ..Default::default()
            },
        )
    }

    /// Edit request targeting `path`.
    pub fn edit(path: impl Into<String>) -> Self {
        Self::new(
            ToolName::Edit,
            ToolInput {
                path: Some(path.into()),
                ..Default::default()
            },
        )
    }

    /// The bash command, or an empty string when none was supplied.
    pub fn command(&self) -> &str {
        self.input.command.as_deref().unwrap_or("")
    }

    /// The write/edit target path, if any.
    pub fn path(&self) -> Option<&str> {
        self.input.path.as_deref().filter(|p| !p.is_empty())
    }

    /// Short human label for prompts and logs, e.g. `bash: ls -la`.
    pub fn summary(&self) -> String {
        match &self.tool {
            ToolName::Bash => format!("bash: {}", self.command()),
            tool if tool.is_file_edit() => {
                format!("{}: {}", tool, self.path().unwrap_or("<no path>"))
            }
            tool => tool.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
