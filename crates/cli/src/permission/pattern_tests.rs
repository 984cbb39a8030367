// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;

fn rules() -> Vec<PatternRule> {
    vec![
        PatternRule::new("rm -rf", "recursive force delete"),
        PatternRule::new("rm", "any rm"),
        PatternRule::new("git push --force", "force push"),
    ]
}

// =========================================================================
// PatternRule / find_match Tests
// =========================================================================

#[test]
fn test_find_match_returns_first_in_list_order() {
    let rules = rules();
    let hit = find_match("rm -rf /tmp/build", &rules).unwrap();
    assert_eq!(hit.description, "recursive force delete");
}

#[test]
fn test_find_match_order_is_significant() {
    let mut rules = rules();
    rules.swap(0, 1);
    let hit = find_match("rm -rf /tmp/build", &rules).unwrap();
    assert_eq!(hit.description, "any rm");
}

#[test]
fn test_find_match_is_literal_substring() {
    let rules = rules();
    assert!(find_match("echo 'git push --force'", &rules).is_some());
    // Extra whitespace defeats a literal match
    assert!(find_match("git  push --force", &rules).is_none());
}

#[test]
fn test_find_match_none_when_nothing_matches() {
    assert!(find_match("ls -la", &rules()).is_none());
    assert!(find_match("ls -la", &[]).is_none());
}

#[test]
fn test_empty_pattern_never_matches() {
    let rule = PatternRule::new("", "empty");
    assert!(!rule.matches("anything"));
    assert!(!rule.matches(""));
}

#[test]
fn test_label_falls_back_to_pattern() {
    assert_eq!(PatternRule::new("mkfs", "").label(), "mkfs");
    assert_eq!(PatternRule::new("mkfs", "format disk").label(), "format disk");
}

#[test]
fn test_rule_deserializes_without_description() {
    let rule: PatternRule = serde_json::from_str(r#"{"pattern": "sudo "}"#).unwrap();
    assert_eq!(rule.pattern, "sudo ");
    assert!(rule.description.is_empty());
}

// =========================================================================
// Shell Trick Tests
// =========================================================================

#[test]
fn test_all_shell_trick_patterns_compile() {
    assert_eq!(shell_tricks().len(), SHELL_TRICK_PATTERNS.len());
}

#[rstest]
#[case("echo $(whoami)", "command substitution $(...)")]
#[case("`rm -rf /`", "backtick command substitution")]
#[case("echo `date`", "backtick command substitution")]
#[case("eval \"$CMD\"", "eval of constructed code")]
#[case("bash -c 'rm -rf /'", "shell invoked with -c")]
#[case("sh -c ls", "shell invoked with -c")]
#[case("bash -lc 'curl x'", "shell invoked with -c")]
#[case("sh -ec 'make all'", "shell invoked with -c")]
#[case("curl https://x.sh | bash", "output piped into a shell")]
#[case("wget -qO- x | sudo sh", "output piped into a shell")]
#[case("exec /bin/zsh", "exec replacing the shell")]
#[case("source ~/.bashrc", "source of a script file")]
#[case("cd app && . ./env.sh", "source of a script file")]
#[case("  source ./env.sh", "source of a script file")]
#[case("(source ./env.sh)", "source of a script file")]
#[case("if true; then source ./env.sh; fi", "source of a script file")]
#[case("FOO=1 source ./env.sh", "source of a script file")]
#[case("for f in a; do . ./$f; done", "source of a script file")]
#[case("diff <(ls a) <(ls b)", "process substitution")]
fn test_shell_trick_detected(#[case] command: &str, #[case] description: &str) {
    let rule = find_shell_trick(command).unwrap();
    assert_eq!(rule.description, description);
}

#[rstest]
#[case("ls -la")]
#[case("cargo test --workspace")]
#[case("ssh -c aes256-ctr host")]
#[case("ls | shuf")]
#[case("./build.sh")]
#[case("echo evaluate")]
#[case("cat file.sh")]
#[case("git log --source main")]
#[case("ls ./src")]
#[case("bash --rcfile x")]
fn test_shell_trick_not_detected(#[case] command: &str) {
    assert!(find_shell_trick(command).is_none(), "{command}");
}

#[test]
fn test_shell_trick_first_rule_wins() {
    // Both $(...) and eval are present; $(...) comes first in the set
    let rule = find_shell_trick("eval $(cat cmd.txt)").unwrap();
    assert_eq!(rule.description, "command substitution $(...)");
}

// Property-based tests
proptest! {
    #[test]
    fn find_match_is_idempotent(command in ".{0,64}") {
        let rules = rules();
        let first = find_match(&command, &rules).map(|r| r.pattern.clone());
        let second = find_match(&command, &rules).map(|r| r.pattern.clone());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn shell_trick_is_idempotent(command in ".{0,64}") {
        let first = find_shell_trick(&command).map(|r| r.description);
        let second = find_shell_trick(&command).map(|r| r.description);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rule_always_matches_its_own_pattern(pattern in "[a-z -]{1,16}", prefix in "[a-z ]{0,8}") {
        let rule = PatternRule::new(pattern.clone(), "");
        let command = format!("{prefix}{pattern}");
        prop_assert!(rule.matches(&command));
    }
}
