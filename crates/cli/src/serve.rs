// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Long-lived JSON-lines session over a reader/writer pair.

use std::io::{self, BufRead, Write};

use crate::permission::commands::{self, CommandError, SessionCommand};
use crate::permission::SharedGate;
use crate::protocol::{ServeMessage, ServeReply};

/// Answer one message.
pub fn handle_message(gate: &SharedGate, message: ServeMessage) -> ServeReply {
    match message {
        ServeMessage::ToolCall(wire) => match wire.into_request() {
            Ok(request) => ServeReply::decision(&gate.decide(&request)),
            Err(e) => ServeReply::error(e.to_string()),
        },
        ServeMessage::Command { name, args } => command_reply(
            SessionCommand::parse(&name, args.as_deref())
                .and_then(|command| gate.with(|g| commands::execute(g, command))),
        ),
        ServeMessage::CycleMode => {
            command_reply(gate.with(|g| commands::execute(g, SessionCommand::Cycle)))
        }
    }
}

fn command_reply(result: Result<String, CommandError>) -> ServeReply {
    match result {
        Ok(message) => ServeReply::CommandResult { ok: true, message },
        Err(e) => ServeReply::CommandResult {
            ok: false,
            message: e.to_string(),
        },
    }
}

/// Read messages from `input` until EOF, writing one reply line per message.
///
/// Blank lines are skipped. A malformed line gets an error reply and the
/// session continues.
pub fn run_session<R: BufRead, W: Write>(
    gate: &SharedGate,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match serde_json::from_str::<ServeMessage>(&line) {
            Ok(message) => handle_message(gate, message),
            Err(e) => {
                tracing::warn!(error = %e, "malformed serve message");
                ServeReply::error(format!("invalid message: {e}"))
            }
        };
        let encoded = serde_json::to_string(&reply).map_err(io::Error::other)?;
        writeln!(output, "{encoded}")?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "serve_tests.rs"]
mod tests;
