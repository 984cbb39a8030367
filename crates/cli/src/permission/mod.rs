// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission handling for tool execution.
//!
//! This module decides whether a write, edit or bash request is allowed,
//! blocked, or needs interactive approval:
//!
//! - Permission modes and the session approval cache
//! - Catastrophic, dangerous and shell-trick command classification
//! - Critical recursive-delete and protected-path resolution
//! - The ordered decision pipeline and the approval coordinator

pub mod approval;
pub mod check;
pub mod commands;
pub mod gate;
pub mod mode;
pub mod path;
pub mod pattern;
pub mod request;
pub mod session;

pub use approval::{ApprovalChoice, ApprovalPort, ScriptedApproval};
pub use check::{
    CommandClassification, Decision, PermissionChecker, PromptKind, PromptRequest, Verdict,
};
pub use commands::{CommandError, SessionCommand};
pub use gate::{PermissionGate, SharedGate};
pub use mode::PermissionMode;
pub use path::{PathResolver, ProtectedPath, ProtectedPaths};
pub use pattern::{find_match, find_shell_trick, PatternRule, ShellTrickRule};
pub use request::{Request, ToolInput, ToolName};
pub use session::{PermissionSession, SessionAllow, SessionOverrides};
