//! Command-line arguments.

use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{Parser, Subcommand};

use crate::config::{LOG_DIR_ENV, PROJECT_DIR_ENV};

/// Pre-execution guard for shell commands proposed by an AI assistant.
///
/// Without a subcommand, reads a hook request as JSON from stdin and writes
/// the decision as JSON to stdout.
#[derive(Parser, Debug)]
#[command(name = "safety-guard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory; `rm -rf` outside it is blocked
    ///
    /// Empty values are accepted here and fall back to the working directory.
    #[arg(
        long,
        env = PROJECT_DIR_ENV,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub project_dir: Option<PathBuf>,

    /// Write logs to a timestamped file in this directory instead of stderr
    #[arg(
        long,
        env = LOG_DIR_ENV,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a single command line and print the decision
    Check {
        /// The shell command to check
        command: String,
    },
}
