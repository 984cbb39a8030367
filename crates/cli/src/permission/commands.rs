// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session commands: `mode`, `status` and the mode-cycle shortcut.

use thiserror::Error;

use super::gate::PermissionGate;
use super::mode::PermissionMode;
use super::session::PermissionSession;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error(
        "unknown permission mode: {0} (expected one of: default, acceptEdits, fullAuto, bypassPermissions)"
    )]
    UnknownMode(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// A parsed session command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// `mode [NAME]`; without a name the picker is opened
    Mode(Option<String>),
    Status,
    Cycle,
}

impl SessionCommand {
    /// Parse a command name (with or without a leading `/`) and its arguments.
    pub fn parse(name: &str, args: Option<&str>) -> Result<Self, CommandError> {
        let args = args.map(str::trim).filter(|a| !a.is_empty());
        match name.trim().trim_start_matches('/') {
            "mode" => Ok(Self::Mode(args.map(String::from))),
            "status" => Ok(Self::Status),
            "cycle" => Ok(Self::Cycle),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Run `command` against `gate`, returning the user-facing message.
///
/// An unknown mode name leaves the mode unchanged.
pub fn execute(gate: &mut PermissionGate, command: SessionCommand) -> Result<String, CommandError> {
    match command {
        SessionCommand::Mode(Some(name)) => {
            let mode = PermissionMode::parse(&name).ok_or(CommandError::UnknownMode(name))?;
            gate.set_mode(mode);
            Ok(mode_changed(mode))
        }
        SessionCommand::Mode(None) => Ok(pick_mode(gate)),
        SessionCommand::Status => Ok(status_report(gate.session())),
        SessionCommand::Cycle => Ok(mode_changed(gate.cycle_mode())),
    }
}

fn mode_changed(mode: PermissionMode) -> String {
    format!(
        "Permission mode set to {} ({})",
        mode.name(),
        mode.display_name()
    )
}

/// Interactive picker; reports the current mode when there is no UI or the
/// picker is cancelled.
fn pick_mode(gate: &mut PermissionGate) -> String {
    let current = gate.mode();
    let Some(port) = gate.approval_port() else {
        return format!("Current permission mode: {}", current.name());
    };

    let options: Vec<String> = PermissionMode::ALL
        .iter()
        .map(|mode| {
            let marker = if *mode == current { " (current)" } else { "" };
            format!("{}{} - {}", mode.name(), marker, mode.description())
        })
        .collect();

    match port
        .select("Select permission mode", &options)
        .and_then(|index| PermissionMode::ALL.get(index).copied())
    {
        Some(mode) => {
            gate.set_mode(mode);
            mode_changed(mode)
        }
        None => format!("Permission mode unchanged: {}", current.name()),
    }
}

/// Mode, its description, and the session approvals.
pub fn status_report(session: &PermissionSession) -> String {
    let mode = session.mode();
    let mut report = format!(
        "Permission mode: {} ({})\n  {}\n",
        mode.name(),
        mode.display_name(),
        mode.description()
    );

    let allow = session.allow();
    if allow.is_empty() {
        report.push_str("Session approvals: none");
        return report;
    }
    report.push_str("Session approvals:");
    for tool in allow.tools() {
        report.push_str(&format!("\n  tool: {tool}"));
    }
    for command in allow.commands() {
        report.push_str(&format!("\n  command: {command}"));
    }
    report
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
