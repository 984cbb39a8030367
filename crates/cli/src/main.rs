// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! permgate binary entry point.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use permgate::cli::{Cli, Command};
use permgate::output_diagnostic::{print_blocked, print_error, print_warning};
use permgate::permission::commands::status_report;
use permgate::permission::{
    CommandClassification, PathResolver, PermissionChecker, PermissionGate, PermissionSession,
    SharedGate,
};
use permgate::prompt::TerminalPrompt;
use permgate::protocol::{parse_request, BlockResponse};
use permgate::serve::run_session;
use permgate::settings::{SettingsLoader, SettingsPaths};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let working_dir = cli.working_dir();
    let home = permgate::env::home().unwrap_or_else(|| {
        print_warning("HOME is not set; treating / as the home directory");
        PathBuf::from("/")
    });

    let loader = SettingsLoader::new(SettingsPaths::from_env(Some(&home), &working_dir));
    let config = loader.load();
    let checker = PermissionChecker::new(&config, PathResolver::new(home, working_dir));

    if let Command::Classify { command } = &cli.command {
        print_classification(&checker.classify(&command.join(" ")));
        return ExitCode::SUCCESS;
    }

    let session = PermissionSession::start(config.mode, &cli.overrides());
    let mut gate = PermissionGate::new(checker, session);
    if !cli.no_ui {
        match TerminalPrompt::open_tty() {
            Ok(prompt) => gate = gate.with_approval_port(Box::new(prompt)),
            Err(e) => tracing::debug!(error = %e, "no terminal; prompts will block"),
        }
    }

    match cli.command {
        Command::Check => run_check(&mut gate),
        Command::Serve => {
            let shared = SharedGate::new(gate);
            match run_session(&shared, io::stdin().lock(), io::stdout().lock()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    print_error(format_args!("serve failed: {e}"));
                    ExitCode::FAILURE
                }
            }
        }
        Command::Status => {
            print_status(&gate, &loader);
            ExitCode::SUCCESS
        }
        Command::Classify { .. } => ExitCode::SUCCESS,
    }
}

fn init_tracing() {
    let filter = permgate::env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Decide a single request from stdin.
fn run_check(gate: &mut PermissionGate) -> ExitCode {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        print_error(format_args!("Failed to read request: {e}"));
        return ExitCode::FAILURE;
    }

    let request = match parse_request(&input) {
        Ok(request) => request,
        Err(e) => {
            print_error(format_args!("Invalid request: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let decision = gate.decide(&request);
    if let Some(response) = BlockResponse::from_decision(&decision) {
        match serde_json::to_string(&response) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                print_error(format_args!("Failed to encode response: {e}"));
                return ExitCode::FAILURE;
            }
        }
        print_blocked(&response.reason);
    }
    ExitCode::SUCCESS
}

fn print_classification(c: &CommandClassification) {
    let none = || "none".to_string();
    println!(
        "critical delete: {}",
        c.critical_delete.clone().unwrap_or_else(none)
    );
    println!(
        "catastrophic:    {}",
        c.catastrophic
            .as_ref()
            .map(|r| format!("{} ({})", r.label(), r.pattern))
            .unwrap_or_else(none)
    );
    println!(
        "protected path:  {}",
        c.protected_path.clone().unwrap_or_else(none)
    );
    println!(
        "shell trick:     {}",
        c.shell_trick.map(String::from).unwrap_or_else(none)
    );
    println!(
        "dangerous:       {}",
        c.dangerous
            .as_ref()
            .map(|r| format!("{} ({})", r.label(), r.pattern))
            .unwrap_or_else(none)
    );
    let verdict = if c.is_blocked() {
        "blocked in every mode"
    } else if c.shell_trick.is_some() || c.dangerous.is_some() {
        "needs confirmation"
    } else {
        "no rule triggered"
    };
    println!("verdict:         {verdict}");
}

fn print_status(gate: &PermissionGate, loader: &SettingsLoader) {
    println!("{}", status_report(gate.session()));
    println!(
        "Interactive prompt: {}",
        if gate.has_ui() { "available" } else { "none" }
    );

    let files = loader.existing_files();
    println!("\nSettings files:");
    if files.is_empty() {
        println!("  (built-in defaults)");
    }
    for path in files {
        println!("  {}", path.display());
    }

    let checker = gate.checker();
    println!("\nCatastrophic patterns:");
    for rule in checker.catastrophic_patterns() {
        println!("  {:<28} {}", rule.pattern, rule.label());
    }
    println!("\nDangerous patterns:");
    for rule in checker.dangerous_patterns() {
        println!("  {:<28} {}", rule.pattern, rule.label());
    }
    println!("\nProtected paths:");
    for entry in checker.protected_paths().iter() {
        println!("  {}", entry.path().display());
    }
}
