// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON wire formats for `check` and `serve`.
//!
//! A tool request:
//!
//! ```json
//! {"toolName": "Bash", "input": {"command": "ls -la"}}
//! ```
//!
//! `tool_name`, `tool_input` and `file_path` are accepted as well. A
//! blocked request is answered with `{"block": true, "reason": "..."}`;
//! an allowed one with nothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::permission::{Decision, Request, ToolInput, ToolName};

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(&'static str),
}

/// A tool request as it arrives on the wire.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WireRequest {
    #[serde(default, alias = "tool_name")]
    pub tool_name: Option<String>,

    #[serde(default, alias = "tool_input")]
    pub input: WireInput,
}

/// Tool arguments; fields the gate does not inspect are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct WireInput {
    #[serde(default, alias = "file_path", alias = "filePath")]
    pub path: Option<String>,

    #[serde(default)]
    pub command: Option<String>,
}

impl WireRequest {
    pub fn into_request(self) -> Result<Request, ProtocolError> {
        let name = self
            .tool_name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ProtocolError::MissingField("toolName"))?;
        Ok(Request::new(
            ToolName::parse(&name),
            ToolInput {
                path: self.input.path,
                command: self.input.command,
            },
        ))
    }
}

/// Parse a single request document.
pub fn parse_request(content: &str) -> Result<Request, ProtocolError> {
    serde_json::from_str::<WireRequest>(content)?.into_request()
}

/// Response for a blocked request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockResponse {
    pub block: bool,
    pub reason: String,
}

impl BlockResponse {
    /// `None` for an allowed decision.
    pub fn from_decision(decision: &Decision) -> Option<Self> {
        decision.reason().map(|reason| Self {
            block: true,
            reason: reason.to_string(),
        })
    }
}

/// A line read by `serve`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServeMessage {
    ToolCall(WireRequest),
    Command {
        name: String,
        #[serde(default)]
        args: Option<String>,
    },
    CycleMode,
}

/// A line written by `serve`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServeReply {
    Decision {
        #[serde(skip_serializing_if = "Option::is_none")]
        block: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    CommandResult {
        ok: bool,
        message: String,
    },
    Error {
        message: String,
    },
}

impl ServeReply {
    pub fn decision(decision: &Decision) -> Self {
        match decision.reason() {
            None => ServeReply::Decision {
                block: None,
                reason: None,
            },
            Some(reason) => ServeReply::Decision {
                block: Some(true),
                reason: Some(reason.to_string()),
            },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ServeReply::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
