//! Main entry point for safety-guard.
//!
//! Parses arguments, sets up logging, then either answers one hook request
//! from stdin or checks a command given on the command line.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use safety_guard::cli::{Cli, Command};
use safety_guard::config::GuardConfig;
use safety_guard::security::{CommandValidator, Decision};
use safety_guard::{hook, utils};

/// Exit status of `check` when the command would be blocked.
const CHECK_DENIED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging before anything else; flushes on drop
    let _log_guard = utils::logger::init_logging(cli.log_dir.as_deref());

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("exiting with failure: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = GuardConfig::capture(cli.project_dir);
    let validator = CommandValidator::new(config).context("failed to build command validator")?;

    match cli.command {
        Some(Command::Check { command }) => check(&validator, &command),
        None => {
            hook::run(io::stdin().lock(), io::stdout().lock(), &validator)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(validator: &CommandValidator, command: &str) -> Result<ExitCode> {
    let decision = validator.validate(command);
    let mut out = io::stdout().lock();

    match &decision {
        Decision::Allow => writeln!(out, "allow")?,
        Decision::Warn { message } => writeln!(out, "warn: {}", message)?,
        Decision::Deny { reason } => writeln!(out, "deny: {}", reason)?,
    }

    if decision.is_denied() {
        Ok(ExitCode::from(CHECK_DENIED))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
