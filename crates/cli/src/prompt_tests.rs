// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;

fn options() -> Vec<String> {
    vec!["Allow once".into(), "Allow for session".into(), "Deny".into()]
}

fn ask(answer: &str) -> (Option<usize>, String) {
    let mut output = Vec::new();
    let selected = {
        let mut prompt = TerminalPrompt::new(answer.as_bytes(), &mut output);
        prompt.select("Bash command\n   ls -la", &options())
    };
    (selected, String::from_utf8(output).unwrap())
}

#[rstest]
#[case("1\n", Some(0))]
#[case("2\n", Some(1))]
#[case(" 3 \n", Some(2))]
#[case("4\n", None)]
#[case("0\n", None)]
#[case("yes\n", None)]
#[case("\n", None)]
#[case("\u{1b}\n", None)]
#[case("", None)]
fn test_answers(#[case] input: &str, #[case] expected: Option<usize>) {
    assert_eq!(ask(input).0, expected);
}

#[test]
fn test_render_layout() {
    let (_, output) = ask("1\n");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "─".repeat(SEPARATOR_WIDTH));
    assert_eq!(lines[1], "Bash command");
    assert_eq!(lines[2], "   ls -la");
    assert_eq!(lines[3], " 1. Allow once");
    assert_eq!(lines[4], " 2. Allow for session");
    assert_eq!(lines[5], " 3. Deny");
    assert_eq!(lines[7], " Esc/empty line to cancel");
    assert!(output.ends_with("> "));
}

#[test]
fn test_consecutive_prompts_read_successive_lines() {
    let mut output = Vec::new();
    let mut prompt = TerminalPrompt::new("2\n1\n".as_bytes(), &mut output);
    assert_eq!(prompt.select("first", &options()), Some(1));
    assert_eq!(prompt.select("second", &options()), Some(0));
    assert_eq!(prompt.select("third", &options()), None);
}
