// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by permgate are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `PERMGATE_CONFIG_DIR`: Override for the global settings directory.
pub fn config_dir() -> Option<PathBuf> {
    non_empty(names::PERMGATE_CONFIG_DIR).map(PathBuf::from)
}

/// `PERMGATE_LOG`: Log filter directive (e.g. `debug`, `permgate=trace`).
pub fn log_filter() -> Option<String> {
    non_empty(names::PERMGATE_LOG)
}

/// `HOME`: User's home directory.
pub fn home() -> Option<PathBuf> {
    non_empty(names::HOME).map(PathBuf::from)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
