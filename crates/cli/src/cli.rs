// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::permission::SessionOverrides;

/// Permission gate for coding-agent tool calls
#[derive(Parser, Debug)]
#[command(name = "permgate", version, about = "Permission gate for coding-agent tool calls")]
pub struct Cli {
    /// Working directory for relative paths and project settings
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Permission mode (default, acceptEdits, fullAuto, bypassPermissions)
    #[arg(long, global = true, value_name = "NAME")]
    pub mode: Option<String>,

    /// Bypass all permission checks.
    /// Catastrophic commands and protected paths are still blocked.
    #[arg(long, global = true, env = crate::env::PERMGATE_SKIP_PERMISSIONS)]
    pub dangerously_skip_permissions: bool,

    /// Never prompt; requests that need approval are blocked
    #[arg(long, global = true)]
    pub no_ui: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Decide one JSON request read from stdin
    Check,

    /// Decide JSON-lines messages from stdin until EOF
    Serve,

    /// Show which rules a bash command triggers
    Classify {
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },

    /// Show the effective mode and rule tables
    Status,
}

impl Cli {
    /// Session overrides from the global flags.
    pub fn overrides(&self) -> SessionOverrides {
        SessionOverrides {
            skip_permissions: self.dangerously_skip_permissions,
            mode: self.mode.clone(),
        }
    }

    /// `--cwd` made absolute, falling back to the process working directory.
    pub fn working_dir(&self) -> PathBuf {
        match &self.cwd {
            Some(dir) => std::path::absolute(dir).unwrap_or_else(|_| dir.clone()),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
