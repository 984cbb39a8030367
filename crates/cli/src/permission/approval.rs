// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive approval of prompted requests.
//!
//! A [`PromptRequest`] is rendered to text, handed to an [`ApprovalPort`],
//! and the selected option is turned into a [`Decision`]. Anything other
//! than an explicit allow, including cancellation, is a denial.

use std::collections::VecDeque;

use super::check::{Decision, PromptKind, PromptRequest};
use super::request::ToolName;
use super::session::PermissionSession;

/// Block reason when the user does not allow a prompted request.
pub const USER_DENIED: &str = "user denied";

/// An interactive surface that can ask the user to pick one option.
pub trait ApprovalPort {
    /// Present `prompt` with `options` and return the chosen index.
    ///
    /// `None` means the prompt was cancelled.
    fn select(&mut self, prompt: &str, options: &[String]) -> Option<usize>;
}

/// User's selection in the approval prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalChoice {
    AllowOnce,
    AllowSession,
    Deny,
}

impl ApprovalChoice {
    /// Choices offered for `kind`, in option order.
    pub fn options(kind: PromptKind) -> &'static [ApprovalChoice] {
        match kind {
            PromptKind::Standard => &[
                ApprovalChoice::AllowOnce,
                ApprovalChoice::AllowSession,
                ApprovalChoice::Deny,
            ],
            PromptKind::ShellTrick => &[ApprovalChoice::AllowOnce, ApprovalChoice::Deny],
        }
    }

    /// Map a port answer to a choice; cancelled or out-of-range is `Deny`.
    pub fn from_answer(kind: PromptKind, answer: Option<usize>) -> Self {
        answer
            .and_then(|index| Self::options(kind).get(index).copied())
            .unwrap_or(ApprovalChoice::Deny)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalChoice::AllowOnce => "Allow once",
            ApprovalChoice::AllowSession => "Allow for session",
            ApprovalChoice::Deny => "Deny",
        }
    }
}

/// Option labels for `kind`.
pub fn option_labels(kind: PromptKind) -> Vec<String> {
    ApprovalChoice::options(kind)
        .iter()
        .map(|choice| choice.label().to_string())
        .collect()
}

/// Render the prompt body shown above the options.
pub fn prompt_text(prompt: &PromptRequest) -> String {
    let request = &prompt.request;
    let (title, subject) = match &request.tool {
        ToolName::Bash => ("Bash command", request.command().to_string()),
        ToolName::Write => ("Write file", request.path().unwrap_or("<no path>").to_string()),
        ToolName::Edit => ("Edit file", request.path().unwrap_or("<no path>").to_string()),
        ToolName::Other(name) => (name.as_str(), String::new()),
    };

    let mut text = format!("{title}\n");
    if !subject.is_empty() {
        text.push_str(&format!("   {subject}\n"));
    }
    if let Some(trick) = prompt.shell_trick {
        text.push_str(&format!(
            "\n ⚠ Uses {trick}; the command that runs may differ from what is shown\n"
        ));
    }
    if let Some(dangerous) = &prompt.dangerous {
        text.push_str(&format!("\n ⚠ Dangerous: {dangerous}\n"));
    }
    text.push_str(&format!(
        "\nPermission mode: {}\nDo you want to proceed?",
        prompt.mode.display_name()
    ));
    text
}

/// Ask `port` about `prompt` and apply the answer to `session`.
///
/// "Allow for session" records the exact command for bash and the tool
/// name otherwise. Shell-trick prompts never record anything.
pub fn resolve<P: ApprovalPort + ?Sized>(
    prompt: &PromptRequest,
    session: &mut PermissionSession,
    port: &mut P,
) -> Decision {
    let answer = port.select(&prompt_text(prompt), &option_labels(prompt.kind));
    let choice = ApprovalChoice::from_answer(prompt.kind, answer);
    let request = &prompt.request;

    match choice {
        ApprovalChoice::AllowOnce => {
            tracing::info!(request = %request.summary(), "allowed once");
            Decision::Allow
        }
        ApprovalChoice::AllowSession => {
            if request.tool == ToolName::Bash {
                session.allow_mut().allow_command(request.command());
            } else {
                session.allow_mut().allow_tool(&request.tool);
            }
            tracing::info!(request = %request.summary(), "allowed for session");
            Decision::Allow
        }
        ApprovalChoice::Deny => {
            tracing::info!(request = %request.summary(), cancelled = answer.is_none(), "denied");
            Decision::block(USER_DENIED)
        }
    }
}

/// An [`ApprovalPort`] that replays scripted answers.
///
/// Once the script runs out every prompt is cancelled.
#[derive(Clone, Debug, Default)]
pub struct ScriptedApproval {
    answers: VecDeque<Option<usize>>,
    prompts: Vec<String>,
}

impl ScriptedApproval {
    pub fn new(answers: impl IntoIterator<Item = Option<usize>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts seen so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl ApprovalPort for ScriptedApproval {
    fn select(&mut self, prompt: &str, _options: &[String]) -> Option<usize> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().flatten()
    }
}

#[cfg(test)]
#[path = "approval_tests.rs"]
mod tests;
