//! Command analysis against the catastrophic-operation rules.
//!
//! Rules run in a fixed order and the first one with an opinion wins:
//!
//! 1. `rm -rf` of anything with a `.git` segment - deny
//! 2. `rm -rf` of a parent-relative or out-of-project absolute path - deny
//! 3. force push naming `main` or `master` - deny
//! 4. `git reflog expire` - deny
//! 5. `git gc --aggressive` together with `--prune=now` - deny
//! 6. any other force push - allow with a warning
//!
//! Everything else is allowed silently.

use std::path::PathBuf;

use regex::Regex;
use thiserror::Error;

use super::paths::{Containment, PathResolver};
use super::Decision;
use crate::config::GuardConfig;

const RM_RECURSIVE_FORCE: &str = r"\brm\s+(-[rf]{2}|-[rf]\s+-[rf])\s+";

const GIT_DIR_REASON: &str =
    "🚨 BLOCKED: 'rm -rf .git' destroys all git history and is unrecoverable!";

const PROTECTED_FORCE_PUSH_REASON: &str = "🚨 BLOCKED: Force push to main/master is extremely dangerous!\n\n\
This PERMANENTLY OVERWRITES shared history and can cause:\n\
• Lost work for other developers\n\
• Broken CI/CD pipelines\n\
• Inability to rollback\n\n\
If you REALLY need this:\n\
1. Coordinate with your team\n\
2. Run it yourself, outside the assistant: git push --force-with-lease origin main";

const REFLOG_EXPIRE_REASON: &str = "🚨 BLOCKED: 'git reflog expire' removes your undo safety net!\n\n\
This makes it impossible to recover from mistakes like:\n\
• Accidental hard resets\n\
• Deleted branches\n\
• Lost commits\n\n\
Reflog is your backup - don't delete it!";

const AGGRESSIVE_PRUNE_REASON: &str = "🚨 BLOCKED: Aggressive 'git gc --prune=now' can destroy recoverable objects!\n\n\
This removes objects that might be needed for:\n\
• Undoing recent operations\n\
• Recovering deleted branches\n\
• Accessing reflog history\n\n\
Let git handle garbage collection automatically.";

const FORCE_PUSH_WARNING: &str = "⚠️  WARNING: Force push detected. This will overwrite remote branch history.\n\
Consider using 'git push --force-with-lease' instead for safety.";

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("rule pattern `{pattern}` failed to compile")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

fn compile(pattern: &str) -> Result<Regex, GuardError> {
    Regex::new(pattern).map_err(|source| GuardError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Compiled rule patterns.
#[derive(Debug)]
struct RuleSet {
    rm_git_dir: Regex,
    rm_targets: Regex,
    force_push: Regex,
    protected_branch: Regex,
    reflog_expire: Regex,
    gc_aggressive: Regex,
    prune_now: Regex,
}

impl RuleSet {
    fn compile() -> Result<Self, GuardError> {
        Ok(Self {
            rm_git_dir: compile(&format!(r"{RM_RECURSIVE_FORCE}.*\.git\b"))?,
            rm_targets: compile(&format!(r"{RM_RECURSIVE_FORCE}(.+)"))?,
            force_push: compile(r"\bgit\s+push\s+.*(-f|--force)\b")?,
            protected_branch: compile(r"\b(main|master)\b")?,
            reflog_expire: compile(r"\bgit\s+reflog\s+expire\b")?,
            gc_aggressive: compile(r"\bgit\s+gc\b.*--aggressive\b")?,
            prune_now: compile(r"--prune=now\b")?,
        })
    }
}

/// Validates proposed shell commands against a fixed project root.
#[derive(Debug)]
pub struct CommandValidator {
    rules: RuleSet,
    project_root: PathBuf,
    resolver: PathResolver,
}

impl CommandValidator {
    pub fn new(config: GuardConfig) -> Result<Self, GuardError> {
        let GuardConfig {
            project_root,
            working_dir,
            home_dir,
        } = config;
        Ok(Self {
            rules: RuleSet::compile()?,
            project_root,
            resolver: PathResolver::new(working_dir, home_dir),
        })
    }

    /// Decide whether `command` may run.
    ///
    /// Pure over its inputs: the same command always yields the same
    /// decision for a given validator.
    pub fn validate(&self, command: &str) -> Decision {
        let rules = &self.rules;

        if rules.rm_git_dir.is_match(command) {
            tracing::debug!(rule = "rm-git-dir", "matched");
            return Decision::Deny {
                reason: GIT_DIR_REASON.to_string(),
            };
        }

        if let Some(tail) = rules.rm_targets.captures(command).and_then(|c| c.get(2)) {
            if let Some(reason) = self.check_rm_targets(tail.as_str()) {
                return Decision::Deny { reason };
            }
        }

        let force_push = rules.force_push.is_match(command);
        if force_push && rules.protected_branch.is_match(command) {
            tracing::debug!(rule = "force-push-protected", "matched");
            return Decision::Deny {
                reason: PROTECTED_FORCE_PUSH_REASON.to_string(),
            };
        }

        if rules.reflog_expire.is_match(command) {
            tracing::debug!(rule = "reflog-expire", "matched");
            return Decision::Deny {
                reason: REFLOG_EXPIRE_REASON.to_string(),
            };
        }

        if rules.gc_aggressive.is_match(command) && rules.prune_now.is_match(command) {
            tracing::debug!(rule = "gc-aggressive-prune", "matched");
            return Decision::Deny {
                reason: AGGRESSIVE_PRUNE_REASON.to_string(),
            };
        }

        if force_push {
            tracing::debug!(rule = "force-push", "matched");
            return Decision::Warn {
                message: FORCE_PUSH_WARNING.to_string(),
            };
        }

        Decision::Allow
    }

    /// Returns a deny reason for the first target that escapes the project.
    fn check_rm_targets(&self, tail: &str) -> Option<String> {
        for raw in tail.split_whitespace() {
            let path = raw.trim_matches(|c| c == '"' || c == '\'');
            if path.is_empty() {
                continue;
            }

            if path.starts_with("../") || path.contains("/../") {
                tracing::debug!(rule = "rm-parent", path, "matched");
                return Some(format!(
                    "🚨 BLOCKED: 'rm -rf {path}' targets parent directory! Only project files can be deleted."
                ));
            }

            // relative targets without traversal are trusted
            if !path.starts_with('/') {
                continue;
            }

            match self.resolver.containment(path, &self.project_root) {
                Containment::Inside => {}
                Containment::Outside => {
                    tracing::debug!(rule = "rm-outside-project", path, "matched");
                    return Some(format!(
                        "🚨 BLOCKED: 'rm -rf {path}' targets files outside project directory!"
                    ));
                }
                Containment::Undetermined(err) => {
                    tracing::warn!(path, error = %err, "could not resolve rm target, blocking");
                    return Some(format!(
                        "🚨 BLOCKED: 'rm -rf {path}' could not be checked against the project directory ({err})."
                    ));
                }
            }
        }
        None
    }
}
