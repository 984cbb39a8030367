// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission checking logic for tool execution.
//!
//! [`PermissionChecker::evaluate`] runs a gated request through a fixed,
//! ordered pipeline. Earlier steps win:
//!
//! 1. Bash: recursive force delete of `/`, home or a critical directory - block
//! 2. Bash: catastrophic pattern - block
//! 3. Write/Edit: target inside a protected path - block
//! 4. Bash: command mentions a protected path - block
//! 5. Bash outside `bypassPermissions`: shell trick - prompt (allow once or
//!    deny), or block without an interactive surface
//! 6. `bypassPermissions` - allow
//! 7. Mode auto-approves the tool or command - allow
//! 8. Session approval for the exact command or tool - allow
//! 9. Prompt, or block without an interactive surface
//!
//! Steps 1-4 hold in every mode and regardless of session approvals.

use super::mode::PermissionMode;
use super::path::{PathResolver, ProtectedPaths};
use super::pattern::{find_match, find_shell_trick, PatternRule};
use super::request::{Request, ToolName};
use super::session::PermissionSession;
use crate::settings::PermissionConfig;

const NOT_OVERRIDABLE: &str = "no permission mode can override this";

/// Engine output for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Block { reason: String },
    /// Interactive approval required
    Prompt(PromptRequest),
}

impl Verdict {
    fn block(reason: impl Into<String>) -> Self {
        Verdict::Block {
            reason: reason.into(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Verdict::Allow => "allow",
            Verdict::Block { .. } => "block",
            Verdict::Prompt(_) => "prompt",
        }
    }
}

/// Final outcome for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Block { reason: String },
}

impl Decision {
    pub fn block(reason: impl Into<String>) -> Self {
        Decision::Block {
            reason: reason.into(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Block reason, if blocked.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Block { reason } => Some(reason),
        }
    }
}

/// Which set of choices a prompt offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// Allow once / Allow for session / Deny
    Standard,
    /// Allow once / Deny
    ShellTrick,
}

/// Everything an approval surface needs to render a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptRequest {
    pub kind: PromptKind,
    pub request: Request,
    pub mode: PermissionMode,
    /// Description of the dangerous pattern the command matched
    pub dangerous: Option<String>,
    /// Description of the shell trick the command uses
    pub shell_trick: Option<&'static str>,
}

/// Everything the classifiers report for one bash command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandClassification {
    pub critical_delete: Option<String>,
    pub catastrophic: Option<PatternRule>,
    pub protected_path: Option<String>,
    pub shell_trick: Option<&'static str>,
    pub dangerous: Option<PatternRule>,
}

impl CommandClassification {
    /// Whether an unconditional block applies.
    pub fn is_blocked(&self) -> bool {
        self.critical_delete.is_some()
            || self.catastrophic.is_some()
            || self.protected_path.is_some()
    }
}

/// Decision engine over a fixed rule set.
#[derive(Clone, Debug)]
pub struct PermissionChecker {
    dangerous: Vec<PatternRule>,
    catastrophic: Vec<PatternRule>,
    protected: ProtectedPaths,
    resolver: PathResolver,
}

impl PermissionChecker {
    /// Build a checker from a merged configuration.
    ///
    /// Protected paths are resolved once, here.
    pub fn new(config: &PermissionConfig, resolver: PathResolver) -> Self {
        Self {
            dangerous: config.dangerous_patterns.clone(),
            catastrophic: config.catastrophic_patterns.clone(),
            protected: ProtectedPaths::resolve(&config.protected_paths, &resolver),
            resolver,
        }
    }

    pub fn dangerous_patterns(&self) -> &[PatternRule] {
        &self.dangerous
    }

    pub fn catastrophic_patterns(&self) -> &[PatternRule] {
        &self.catastrophic
    }

    pub fn protected_paths(&self) -> &ProtectedPaths {
        &self.protected
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Evaluate `request` against the session's mode and approvals.
    pub fn evaluate(
        &self,
        request: &Request,
        session: &PermissionSession,
        has_ui: bool,
    ) -> Verdict {
        let verdict = self.run_pipeline(request, session, has_ui);
        tracing::debug!(
            tool = %request.tool,
            mode = %session.mode(),
            verdict = verdict.label(),
            "evaluated request"
        );
        verdict
    }

    fn run_pipeline(
        &self,
        request: &Request,
        session: &PermissionSession,
        has_ui: bool,
    ) -> Verdict {
        if !request.tool.is_gated() {
            return Verdict::Allow;
        }

        if let Some(reason) = self.unconditional_block(request) {
            return Verdict::block(reason);
        }

        let mode = session.mode();
        let is_bash = request.tool == ToolName::Bash;
        let command = request.command();

        if is_bash && !mode.allows_all() {
            if let Some(trick) = find_shell_trick(command) {
                if !has_ui {
                    return Verdict::block(format!(
                        "bash command uses {} and cannot be confirmed without an interactive prompt",
                        trick.description
                    ));
                }
                return Verdict::Prompt(PromptRequest {
                    kind: PromptKind::ShellTrick,
                    request: request.clone(),
                    mode,
                    dangerous: None,
                    shell_trick: Some(trick.description),
                });
            }
        }

        if mode.allows_all() {
            return Verdict::Allow;
        }

        let dangerous = if is_bash {
            find_match(command, &self.dangerous)
        } else {
            None
        };

        if auto_approves(mode, &request.tool, dangerous.is_some()) {
            return Verdict::Allow;
        }

        let approved = if is_bash {
            session.allow().allows_command(command) || session.allow().allows_tool(&request.tool)
        } else {
            session.allow().allows_tool(&request.tool)
        };
        if approved {
            return Verdict::Allow;
        }

        if !has_ui {
            return Verdict::block(format!(
                "{} requires approval in {} mode but no interactive prompt is available",
                request.tool, mode
            ));
        }

        Verdict::Prompt(PromptRequest {
            kind: PromptKind::Standard,
            request: request.clone(),
            mode,
            dangerous: dangerous.map(|rule| rule.label().to_string()),
            shell_trick: None,
        })
    }

    /// Steps that block in every mode.
    fn unconditional_block(&self, request: &Request) -> Option<String> {
        match &request.tool {
            ToolName::Bash => {
                let command = request.command();
                if let Some(hit) = self.resolver.find_critical_delete(command) {
                    return Some(format!("catastrophic command: {hit}; {NOT_OVERRIDABLE}"));
                }
                if let Some(rule) = find_match(command, &self.catastrophic) {
                    return Some(format!(
                        "catastrophic command: {} (matched \"{}\"); {NOT_OVERRIDABLE}",
                        rule.label(),
                        rule.pattern
                    ));
                }
                self.protected.find_in_command(command).map(|entry| {
                    format!(
                        "protected path: command references {}; {NOT_OVERRIDABLE}",
                        entry.path().display()
                    )
                })
            }
            tool if tool.is_file_edit() => {
                let target = self.resolver.resolve(request.path()?);
                self.protected.find_covering(&target).map(|entry| {
                    format!(
                        "protected path: {} is inside {}; {NOT_OVERRIDABLE}",
                        target.display(),
                        entry.path().display()
                    )
                })
            }
            _ => None,
        }
    }

    /// Run every classifier over `command` without applying the pipeline.
    pub fn classify(&self, command: &str) -> CommandClassification {
        let classification = CommandClassification {
            critical_delete: self.resolver.find_critical_delete(command),
            catastrophic: find_match(command, &self.catastrophic).cloned(),
            protected_path: self
                .protected
                .find_in_command(command)
                .map(|entry| entry.path().display().to_string()),
            shell_trick: find_shell_trick(command).map(|trick| trick.description),
            dangerous: find_match(command, &self.dangerous).cloned(),
        };
        tracing::debug!(command, ?classification, "classified command");
        classification
    }
}

/// Whether `mode` approves `tool` without asking.
fn auto_approves(mode: PermissionMode, tool: &ToolName, dangerous: bool) -> bool {
    match tool {
        ToolName::Write | ToolName::Edit => mode.accepts_edits(),
        ToolName::Bash => mode.allows_all() || (mode.accepts_safe_bash() && !dangerous),
        ToolName::Other(_) => true,
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
