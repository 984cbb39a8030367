// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented approval prompt on the controlling terminal.
//!
//! Renders in the same shape as the TUI permission dialog:
//!
//! ```text
//! ────────────────────────────────────────────────────────────
//! Bash command
//!    rm -rf build
//!
//!  ⚠ Dangerous: recursive force delete
//!
//! Permission mode: full auto
//! Do you want to proceed?
//!  1. Allow once
//!  2. Allow for session
//!  3. Deny
//!
//!  Esc/empty line to cancel
//! >
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};

use crate::permission::ApprovalPort;

const SEPARATOR_WIDTH: usize = 60;

/// An [`ApprovalPort`] that reads numbered answers line by line.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<BufReader<File>, File> {
    /// Open the controlling terminal for reading and writing.
    pub fn open_tty() -> io::Result<Self> {
        let tty = OpenOptions::new().read(true).write(true).open("/dev/tty")?;
        let output = tty.try_clone()?;
        Ok(Self::new(BufReader::new(tty), output))
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn render(&mut self, prompt: &str, options: &[String]) -> io::Result<()> {
        writeln!(self.output, "{}", "─".repeat(SEPARATOR_WIDTH))?;
        writeln!(self.output, "{prompt}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, " {}. {option}", i + 1)?;
        }
        writeln!(self.output)?;
        writeln!(self.output, " Esc/empty line to cancel")?;
        write!(self.output, "> ")?;
        self.output.flush()
    }

    fn read_answer(&mut self, count: usize) -> io::Result<Option<usize>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(parse_answer(&line, count))
    }
}

/// Parse a 1-based answer; anything empty, non-numeric or out of range is `None`.
fn parse_answer(line: &str, count: usize) -> Option<usize> {
    let answer = line.trim();
    if answer.is_empty() || answer.starts_with('\u{1b}') {
        return None;
    }
    answer
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
}

impl<R: BufRead, W: Write> ApprovalPort for TerminalPrompt<R, W> {
    fn select(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        let result = self
            .render(prompt, options)
            .and_then(|()| self.read_answer(options.len()));
        match result {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "approval prompt failed; treating as cancelled");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
