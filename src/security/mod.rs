//! Security module for command analysis and safety checks.
//!
//! This module inspects shell commands proposed by the assistant and decides
//! whether they may run, run with a warning, or must be blocked. Matching is
//! textual: commands are never parsed into a shell syntax tree.

mod analyzer;
mod paths;

use std::path::Path;

pub use analyzer::{CommandValidator, GuardError};
pub use paths::{Containment, PathResolver, ResolveError};

use crate::config::GuardConfig;

/// Verdict for a single proposed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Run the command, nothing to say.
    Allow,
    /// Run the command, but surface `message` to the user.
    Warn { message: String },
    /// Block the command.
    Deny { reason: String },
}

impl Decision {
    pub fn is_denied(&self) -> bool {
        matches!(self, Decision::Deny { .. })
    }

    /// Message attached to the decision, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Warn { message } => Some(message),
            Decision::Deny { reason } => Some(reason),
        }
    }
}

/// Validate `command` against `project_root` with a one-off validator.
///
/// The working directory and home directory are taken from the current
/// process. Hold on to a [`CommandValidator`] instead when checking more than
/// one command.
pub fn validate(command: &str, project_root: impl AsRef<Path>) -> Result<Decision, GuardError> {
    let config = GuardConfig::capture(Some(project_root.as_ref().to_path_buf()));
    let validator = CommandValidator::new(config)?;
    Ok(validator.validate(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_one_off() {
        let decision = validate("rm -rf ../up", "/home/user/proj").unwrap();
        assert!(decision.is_denied());
        assert_eq!(validate("ls", "/home/user/proj").unwrap(), Decision::Allow);
    }

    #[test]
    fn test_decision_message() {
        assert_eq!(Decision::Allow.message(), None);
        let warn = Decision::Warn {
            message: "careful".to_string(),
        };
        assert_eq!(warn.message(), Some("careful"));
        assert!(!warn.is_denied());
    }
}
