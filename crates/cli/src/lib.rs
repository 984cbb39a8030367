// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission gate for coding-agent tool calls.
//!
//! Every write, edit or bash request is decided as allow, block, or
//! "ask the user". Catastrophic commands and protected paths are blocked in
//! every mode; the rest depends on the permission mode, the session
//! approvals and whether an interactive prompt is available.
//!
#![doc = include_str!("../README.md")]

pub mod cli;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod permission;
pub mod prompt;
pub mod protocol;
pub mod serve;
pub mod settings;
