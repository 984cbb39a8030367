// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The permission gate: checker, session state and approval surface together.

use std::sync::Arc;

use parking_lot::Mutex;

use super::approval::{self, ApprovalPort};
use super::check::{Decision, PermissionChecker, Verdict};
use super::mode::PermissionMode;
use super::request::Request;
use super::session::PermissionSession;

/// Turns requests into final decisions for one session.
pub struct PermissionGate {
    checker: PermissionChecker,
    session: PermissionSession,
    port: Option<Box<dyn ApprovalPort + Send>>,
}

impl PermissionGate {
    /// Create a gate with no interactive surface.
    pub fn new(checker: PermissionChecker, session: PermissionSession) -> Self {
        Self {
            checker,
            session,
            port: None,
        }
    }

    /// Attach an interactive approval surface.
    pub fn with_approval_port(mut self, port: Box<dyn ApprovalPort + Send>) -> Self {
        self.port = Some(port);
        self
    }

    pub fn has_ui(&self) -> bool {
        self.port.is_some()
    }

    pub fn checker(&self) -> &PermissionChecker {
        &self.checker
    }

    pub fn session(&self) -> &PermissionSession {
        &self.session
    }

    pub fn mode(&self) -> PermissionMode {
        self.session.mode()
    }

    /// Set the mode, clearing session approvals. Returns the previous mode.
    pub fn set_mode(&mut self, mode: PermissionMode) -> PermissionMode {
        self.session.set_mode(mode)
    }

    /// Advance to the next mode, clearing session approvals.
    pub fn cycle_mode(&mut self) -> PermissionMode {
        self.session.cycle_mode()
    }

    pub(crate) fn approval_port(&mut self) -> Option<&mut (dyn ApprovalPort + Send + 'static)> {
        self.port.as_deref_mut()
    }

    /// Decide `request`, asking the approval surface when required.
    pub fn decide(&mut self, request: &Request) -> Decision {
        let verdict = self.checker.evaluate(request, &self.session, self.has_ui());
        let decision = match verdict {
            Verdict::Allow => Decision::Allow,
            Verdict::Block { reason } => Decision::Block { reason },
            Verdict::Prompt(prompt) => match self.port.as_deref_mut() {
                Some(port) => approval::resolve(&prompt, &mut self.session, port),
                // evaluate() never prompts without a UI
                None => Decision::block(format!(
                    "{} requires approval in {} mode but no interactive prompt is available",
                    request.tool,
                    self.session.mode()
                )),
            },
        };
        match &decision {
            Decision::Allow => tracing::debug!(request = %request.summary(), "allowed"),
            Decision::Block { reason } => {
                tracing::debug!(request = %request.summary(), reason = %reason, "blocked")
            }
        }
        decision
    }
}

/// A gate shared across threads.
///
/// Decisions, mode changes and cycles are serialized behind one lock, so a
/// transition clears session approvals atomically with respect to decisions.
#[derive(Clone)]
pub struct SharedGate {
    inner: Arc<Mutex<PermissionGate>>,
}

impl SharedGate {
    pub fn new(gate: PermissionGate) -> Self {
        Self {
            inner: Arc::new(Mutex::new(gate)),
        }
    }

    pub fn decide(&self, request: &Request) -> Decision {
        self.inner.lock().decide(request)
    }

    pub fn set_mode(&self, mode: PermissionMode) -> PermissionMode {
        self.inner.lock().set_mode(mode)
    }

    pub fn cycle_mode(&self) -> PermissionMode {
        self.inner.lock().cycle_mode()
    }

    pub fn mode(&self) -> PermissionMode {
        self.inner.lock().mode()
    }

    /// Run `f` with exclusive access to the gate.
    pub fn with<T>(&self, f: impl FnOnce(&mut PermissionGate) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
