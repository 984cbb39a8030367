// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Permission settings: built-in defaults, settings files, and layered loading.

pub mod config;
pub mod file;
pub mod loader;

pub use config::PermissionConfig;
pub use file::{SettingsError, SettingsFile};
pub use loader::{SettingsLoader, SettingsPaths};
