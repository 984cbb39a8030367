// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command pattern matching.
//!
//! Two kinds of rules are matched against the raw command text:
//!
//! - [`PatternRule`] - configurable literal substrings, used for both the
//!   dangerous and the catastrophic lists
//! - [`ShellTrickRule`] - a fixed regex set for constructs that can hide the
//!   command actually executed (`$(...)`, backticks, `eval`, `sh -c`, ...)
//!
//! Matching never parses shell syntax. In both cases the first rule in list
//! order wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A literal substring rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Substring searched for in the command
    pub pattern: String,
    /// Human-readable explanation shown in prompts and block reasons
    #[serde(default)]
    pub description: String,
}

impl PatternRule {
    pub fn new(pattern: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            description: description.into(),
        }
    }

    /// Check if this rule's pattern occurs in `command`.
    ///
    /// An empty pattern never matches.
    pub fn matches(&self, command: &str) -> bool {
        !self.pattern.is_empty() && command.contains(&self.pattern)
    }

    /// Description, falling back to the pattern itself.
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.pattern
        } else {
            &self.description
        }
    }
}

/// Return the first rule in `rules` whose pattern is a substring of `command`.
pub fn find_match<'a>(command: &str, rules: &'a [PatternRule]) -> Option<&'a PatternRule> {
    rules.iter().find(|rule| rule.matches(command))
}

/// A fixed regex rule for command-hiding shell constructs.
#[derive(Debug)]
pub struct ShellTrickRule {
    pub regex: Regex,
    pub description: &'static str,
}

impl ShellTrickRule {
    pub fn matches(&self, command: &str) -> bool {
        self.regex.is_match(command)
    }
}

/// Shell-trick patterns in match order.
const SHELL_TRICK_PATTERNS: &[(&str, &str)] = &[
    (r"\$\(", "command substitution $(...)"),
    (r"`[^`]*`", "backtick command substitution"),
    (r"\beval\b", "eval of constructed code"),
    (
        r"\b(?:bash|sh|zsh|dash|ksh|fish)\s+-[A-Za-z]*c\b",
        "shell invoked with -c",
    ),
    (
        r"\|\s*(?:sudo\s+)?(?:bash|sh|zsh|dash|ksh|fish)\b",
        "output piped into a shell",
    ),
    (r"\bexec\s", "exec replacing the shell"),
    (
        r"(?:^|[^\w.-])source\s+\S|(?:^|[;&|(]|\bthen|\bdo)\s*\.\s+\S",
        "source of a script file",
    ),
    (r"[<>]\(", "process substitution"),
];

static SHELL_TRICKS: LazyLock<Vec<ShellTrickRule>> = LazyLock::new(|| {
    SHELL_TRICK_PATTERNS
        .iter()
        .filter_map(|(pattern, description)| {
            Regex::new(pattern).ok().map(|regex| ShellTrickRule {
                regex,
                description,
            })
        })
        .collect()
});

/// The fixed shell-trick rule set, in match order.
pub fn shell_tricks() -> &'static [ShellTrickRule] {
    &SHELL_TRICKS
}

/// Return the first shell-trick rule matching `command`.
pub fn find_shell_trick(command: &str) -> Option<&'static ShellTrickRule> {
    shell_tricks().iter().find(|rule| rule.matches(command))
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
