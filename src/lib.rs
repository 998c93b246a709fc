//! safety-guard - a pre-execution guard for shell commands proposed by an AI
//! coding assistant.
//!
//! This library provides:
//! - Command validation against a fixed set of catastrophic-operation rules
//! - The `PreToolUse` hook adapter that speaks the host's JSON protocol
//! - Configuration capture and logging setup for the binary
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use safety_guard::config::GuardConfig;
//! use safety_guard::security::{CommandValidator, Decision};
//!
//! let validator = CommandValidator::new(GuardConfig {
//!     project_root: PathBuf::from("/home/user/proj"),
//!     working_dir: Some(PathBuf::from("/home/user/proj")),
//!     home_dir: Some(PathBuf::from("/home/user")),
//! })?;
//!
//! assert!(validator.validate("rm -rf /etc").is_denied());
//! assert_eq!(validator.validate("cargo test"), Decision::Allow);
//! # Ok::<(), safety_guard::security::GuardError>(())
//! ```

pub mod cli;
pub mod config;
pub mod hook;
pub mod security;
pub mod utils;

// Re-export commonly used types
pub use config::GuardConfig;
pub use hook::{HookError, HookRequest, HookResponse};
pub use security::{CommandValidator, Decision};
