//! Runtime configuration for the guard.
//!
//! This is the only place that reads ambient process state (working
//! directory, home directory). Everything downstream receives it explicitly.

use std::env;
use std::path::PathBuf;

/// Environment variable the host sets to the project being worked on.
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Environment variable naming a directory for log files.
pub const LOG_DIR_ENV: &str = "SAFETY_GUARD_LOG_DIR";

/// Values the validator needs to judge deletion targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// Trust boundary for destructive operations.
    pub project_root: PathBuf,
    /// Base for relative paths. `None` if the process could not read it.
    pub working_dir: Option<PathBuf>,
    /// Expansion of `~`. `None` if unknown.
    pub home_dir: Option<PathBuf>,
}

impl GuardConfig {
    /// Capture configuration from the running process.
    ///
    /// An unset or empty `project_dir` falls back to the working directory,
    /// and to `.` if even that is unavailable.
    pub fn capture(project_dir: Option<PathBuf>) -> Self {
        let working_dir = env::current_dir().ok();
        let project_root = project_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| working_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        tracing::debug!(
            project_root = %project_root.display(),
            working_dir = ?working_dir,
            "captured guard configuration"
        );

        Self {
            project_root,
            working_dir,
            home_dir: dirs::home_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_explicit_project_dir_wins() {
        let config = GuardConfig::capture(Some(PathBuf::from("/srv/app")));
        assert_eq!(config.project_root, PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_missing_or_empty_project_dir_uses_cwd() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(GuardConfig::capture(None).project_root, cwd);
        assert_eq!(GuardConfig::capture(Some(PathBuf::new())).project_root, cwd);
        assert_eq!(GuardConfig::capture(None).working_dir, Some(cwd));
    }
}
