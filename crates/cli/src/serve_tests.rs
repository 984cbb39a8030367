// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::permission::{
    PathResolver, PermissionChecker, PermissionGate, PermissionMode, PermissionSession,
    ScriptedApproval,
};
use crate::settings::PermissionConfig;
use serde_json::{json, Value};

fn shared(mode: PermissionMode) -> SharedGate {
    let checker = PermissionChecker::new(
        &PermissionConfig::builtin(),
        PathResolver::new("/home/dev", "/home/dev/project"),
    );
    SharedGate::new(PermissionGate::new(checker, PermissionSession::new(mode)))
}

fn run(gate: &SharedGate, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    run_session(gate, input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_one_reply_per_message() {
    let gate = shared(PermissionMode::FullAuto);
    let replies = run(
        &gate,
        concat!(
            r#"{"type":"toolCall","toolName":"Bash","input":{"command":"echo hi"}}"#,
            "\n\n",
            r#"{"type":"toolCall","toolName":"Bash","input":{"command":"rm -rf /"}}"#,
            "\n",
        ),
    );

    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0], json!({"type": "decision"}));
    assert_eq!(replies[1]["block"], true);
    assert!(replies[1]["reason"]
        .as_str()
        .unwrap()
        .contains("root directory"));
}

#[test]
fn test_malformed_line_does_not_end_session() {
    let gate = shared(PermissionMode::FullAuto);
    let replies = run(
        &gate,
        concat!(
            "{oops\n",
            r#"{"type":"toolCall","input":{"command":"ls"}}"#,
            "\n",
            r#"{"type":"cycleMode"}"#,
            "\n",
        ),
    );

    assert_eq!(replies[0]["type"], "error");
    assert_eq!(replies[1]["type"], "error");
    assert_eq!(replies[1]["message"], "missing field: toolName");
    assert_eq!(replies[2]["type"], "commandResult");
    assert_eq!(gate.mode(), PermissionMode::BypassPermissions);
}

#[test]
fn test_mode_command_changes_later_decisions() {
    let gate = shared(PermissionMode::Default);
    let replies = run(
        &gate,
        concat!(
            r#"{"type":"toolCall","toolName":"Write","input":{"path":"README.md"}}"#,
            "\n",
            r#"{"type":"command","name":"mode","args":"acceptEdits"}"#,
            "\n",
            r#"{"type":"toolCall","toolName":"Write","input":{"path":"README.md"}}"#,
            "\n",
        ),
    );

    assert_eq!(replies[0]["block"], true);
    assert_eq!(replies[1], json!({
        "type": "commandResult",
        "ok": true,
        "message": "Permission mode set to acceptEdits (accept edits)"
    }));
    assert_eq!(replies[2], json!({"type": "decision"}));
}

#[test]
fn test_command_errors_are_reported() {
    let gate = shared(PermissionMode::Default);
    let replies = run(
        &gate,
        concat!(
            r#"{"type":"command","name":"mode","args":"yolo"}"#,
            "\n",
            r#"{"type":"command","name":"compact"}"#,
            "\n",
        ),
    );

    assert_eq!(replies[0]["ok"], false);
    assert!(replies[0]["message"]
        .as_str()
        .unwrap()
        .contains("unknown permission mode: yolo"));
    assert_eq!(replies[1]["ok"], false);
    assert_eq!(gate.mode(), PermissionMode::Default);
}

#[test]
fn test_status_command() {
    let gate = shared(PermissionMode::FullAuto);
    let reply = handle_message(
        &gate,
        ServeMessage::Command {
            name: "status".into(),
            args: None,
        },
    );
    let ServeReply::CommandResult { ok, message } = reply else {
        panic!("expected command result");
    };
    assert!(ok);
    assert!(message.starts_with("Permission mode: fullAuto"));
}

#[test]
fn test_prompts_go_through_the_approval_port() {
    let checker = PermissionChecker::new(
        &PermissionConfig::builtin(),
        PathResolver::new("/home/dev", "/home/dev/project"),
    );
    let gate = SharedGate::new(
        PermissionGate::new(checker, PermissionSession::new(PermissionMode::Default))
            .with_approval_port(Box::new(ScriptedApproval::new([Some(1)]))),
    );
    let line = r#"{"type":"toolCall","toolName":"Bash","input":{"command":"make"}}"#;
    let replies = run(&gate, &format!("{line}\n{line}\n"));

    // Second call is covered by the session approval from the first
    assert_eq!(replies, vec![json!({"type": "decision"}); 2]);
}
