// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::permission::approval::ScriptedApproval;
use crate::permission::{PathResolver, PermissionChecker, Request, ToolName};
use crate::settings::PermissionConfig;
use rstest::rstest;

fn gate(mode: PermissionMode) -> PermissionGate {
    let checker = PermissionChecker::new(
        &PermissionConfig::builtin(),
        PathResolver::new("/home/dev", "/home/dev/project"),
    );
    PermissionGate::new(checker, PermissionSession::new(mode))
}

// =========================================================================
// Parse Tests
// =========================================================================

#[rstest]
#[case("mode", None, SessionCommand::Mode(None))]
#[case("/mode", Some("fullAuto"), SessionCommand::Mode(Some("fullAuto".into())))]
#[case("mode", Some("  "), SessionCommand::Mode(None))]
#[case("status", None, SessionCommand::Status)]
#[case("/status", Some("ignored"), SessionCommand::Status)]
#[case("cycle", None, SessionCommand::Cycle)]
fn test_parse(#[case] name: &str, #[case] args: Option<&str>, #[case] expected: SessionCommand) {
    assert_eq!(SessionCommand::parse(name, args).unwrap(), expected);
}

#[test]
fn test_parse_unknown_command() {
    assert_eq!(
        SessionCommand::parse("compact", None),
        Err(CommandError::UnknownCommand("compact".into()))
    );
}

// =========================================================================
// Execute Tests
// =========================================================================

#[test]
fn test_mode_with_name_sets_mode_and_clears_approvals() {
    let mut gate = gate(PermissionMode::Default)
        .with_approval_port(Box::new(ScriptedApproval::new([Some(1)])));
    assert!(gate.decide(&Request::bash("npm test")).is_allowed());

    let message = execute(&mut gate, SessionCommand::Mode(Some("full-auto".into()))).unwrap();

    assert_eq!(gate.mode(), PermissionMode::FullAuto);
    assert!(gate.session().allow().is_empty());
    assert!(message.contains("fullAuto"), "{message}");
}

#[test]
fn test_unknown_mode_leaves_mode_unchanged() {
    let mut gate = gate(PermissionMode::AcceptEdits);
    let err = execute(&mut gate, SessionCommand::Mode(Some("yolo".into()))).unwrap_err();
    assert_eq!(err, CommandError::UnknownMode("yolo".into()));
    assert_eq!(gate.mode(), PermissionMode::AcceptEdits);
}

#[test]
fn test_mode_without_ui_reports_current() {
    let mut gate = gate(PermissionMode::FullAuto);
    let message = execute(&mut gate, SessionCommand::Mode(None)).unwrap();
    assert_eq!(message, "Current permission mode: fullAuto");
}

#[test]
fn test_mode_picker_selects_mode() {
    let mut gate = gate(PermissionMode::Default)
        .with_approval_port(Box::new(ScriptedApproval::new([Some(3)])));
    execute(&mut gate, SessionCommand::Mode(None)).unwrap();
    assert_eq!(gate.mode(), PermissionMode::BypassPermissions);
}

#[test]
fn test_mode_picker_cancel_keeps_mode() {
    let mut gate = gate(PermissionMode::Default)
        .with_approval_port(Box::new(ScriptedApproval::new([None])));
    let message = execute(&mut gate, SessionCommand::Mode(None)).unwrap();
    assert_eq!(gate.mode(), PermissionMode::Default);
    assert!(message.contains("unchanged"), "{message}");
}

#[test]
fn test_cycle_command() {
    let mut gate = gate(PermissionMode::BypassPermissions);
    let message = execute(&mut gate, SessionCommand::Cycle).unwrap();
    assert_eq!(gate.mode(), PermissionMode::Default);
    assert!(message.contains("default"), "{message}");
}

// =========================================================================
// Status Tests
// =========================================================================

#[test]
fn test_status_without_approvals() {
    let session = PermissionSession::new(PermissionMode::AcceptEdits);
    let report = status_report(&session);
    assert!(report.starts_with("Permission mode: acceptEdits (accept edits)"));
    assert!(report.contains(PermissionMode::AcceptEdits.description()));
    assert!(report.ends_with("Session approvals: none"));
}

#[test]
fn test_status_lists_approvals() {
    let mut session = PermissionSession::new(PermissionMode::Default);
    session.allow_mut().allow_tool(&ToolName::Edit);
    session.allow_mut().allow_command("cargo build");

    let report = status_report(&session);
    assert!(report.contains("\n  tool: edit"), "{report}");
    assert!(report.contains("\n  command: cargo build"), "{report}");
}

#[test]
fn test_status_command_matches_report() {
    let mut gate = gate(PermissionMode::Default);
    let message = execute(&mut gate, SessionCommand::Status).unwrap();
    assert_eq!(message, status_report(gate.session()));
}
