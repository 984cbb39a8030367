// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_builtin_defaults() {
    let config = PermissionConfig::builtin();
    assert_eq!(config.mode, PermissionMode::AcceptEdits);
    assert_eq!(config.dangerous_patterns.len(), DEFAULT_DANGEROUS_PATTERNS.len());
    assert_eq!(
        config.catastrophic_patterns.len(),
        DEFAULT_CATASTROPHIC_PATTERNS.len()
    );
    assert!(config.protected_paths.iter().any(|p| p == "~/.ssh"));
    assert_eq!(config, PermissionConfig::default());
}

#[test]
fn test_builtin_rules_have_descriptions() {
    let config = PermissionConfig::builtin();
    for rule in config
        .dangerous_patterns
        .iter()
        .chain(&config.catastrophic_patterns)
    {
        assert!(!rule.pattern.is_empty());
        assert!(!rule.description.is_empty(), "{}", rule.pattern);
    }
}

#[test]
fn test_merge_absent_fields_keep_current() {
    let mut config = PermissionConfig::builtin();
    config.merge(SettingsFile::default());
    assert_eq!(config, PermissionConfig::builtin());
}

#[test]
fn test_merge_present_fields_replace() {
    let mut config = PermissionConfig::builtin();
    config.merge(SettingsFile {
        mode: Some(PermissionMode::Default),
        dangerous_patterns: Some(vec![PatternRule::new("make deploy", "deploy")]),
        catastrophic_patterns: None,
        protected_paths: Some(vec![]),
    });

    assert_eq!(config.mode, PermissionMode::Default);
    assert_eq!(
        config.dangerous_patterns,
        vec![PatternRule::new("make deploy", "deploy")]
    );
    assert_eq!(
        config.catastrophic_patterns,
        PermissionConfig::builtin().catastrophic_patterns
    );
    assert!(config.protected_paths.is_empty());
}

#[test]
fn test_empty_config() {
    let config = PermissionConfig::empty(PermissionMode::FullAuto);
    assert_eq!(config.mode, PermissionMode::FullAuto);
    assert!(config.dangerous_patterns.is_empty());
    assert!(config.catastrophic_patterns.is_empty());
    assert!(config.protected_paths.is_empty());
}

#[test]
fn test_config_serializes_camel_case() {
    let json = serde_json::to_value(PermissionConfig::empty(PermissionMode::Default)).unwrap();
    assert_eq!(json["mode"], "default");
    assert!(json["dangerousPatterns"].is_array());
    assert!(json["protectedPaths"].is_array());
}
