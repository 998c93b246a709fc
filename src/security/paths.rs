//! Path resolution for deletion targets.
//!
//! Targets are resolved lexically against values captured up front (working
//! directory, home directory), so checking a path never touches the
//! filesystem and nonexistent paths resolve like any other.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("cannot expand `~` in `{0}`: home directory is unknown")]
    UnknownHome(String),
    #[error("cannot make `{0}` absolute: working directory is unknown")]
    UnknownWorkingDir(String),
}

/// Where a resolved path lies relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
    /// Either the target or the root could not be resolved.
    Undetermined(ResolveError),
}

#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    working_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(working_dir: Option<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            working_dir,
            home_dir,
        }
    }

    /// Expand `~`, make absolute, and normalise `raw`.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, ResolveError> {
        let expanded = self.expand_home(raw)?;
        let absolute = if expanded.is_absolute() {
            expanded
        } else {
            match &self.working_dir {
                Some(cwd) => cwd.join(expanded),
                None => return Err(ResolveError::UnknownWorkingDir(raw.to_string())),
            }
        };
        Ok(normalize(&absolute))
    }

    /// Check whether `target` resolves to a path under `project_root`.
    pub fn containment(&self, target: &str, project_root: &Path) -> Containment {
        let root = match self.resolve(&project_root.to_string_lossy()) {
            Ok(root) => root,
            Err(e) => return Containment::Undetermined(e),
        };
        match self.resolve(target) {
            Ok(path) if path.starts_with(&root) => Containment::Inside,
            Ok(_) => Containment::Outside,
            Err(e) => Containment::Undetermined(e),
        }
    }

    fn expand_home(&self, raw: &str) -> Result<PathBuf, ResolveError> {
        // `~user` is left alone
        let rest = match raw.strip_prefix('~') {
            Some("") => "",
            Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
            _ => return Ok(PathBuf::from(raw)),
        };
        match &self.home_dir {
            Some(home) if rest.is_empty() => Ok(home.clone()),
            Some(home) => Ok(home.join(rest)),
            None => Err(ResolveError::UnknownHome(raw.to_string())),
        }
    }
}

/// Collapse `.` and `..` components without consulting the filesystem.
/// `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolver() -> PathResolver {
        PathResolver::new(
            Some(PathBuf::from("/home/user/proj")),
            Some(PathBuf::from("/home/user")),
        )
    }

    #[test]
    fn test_normalize_collapses_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/a//b/")), PathBuf::from("/a/b"));
        assert_eq!(normalize(Path::new("/../..")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_expands_home() {
        let r = resolver();
        assert_eq!(r.resolve("~").unwrap(), PathBuf::from("/home/user"));
        assert_eq!(r.resolve("~/notes").unwrap(), PathBuf::from("/home/user/notes"));
        // not a home reference
        assert_eq!(
            r.resolve("~other/x").unwrap(),
            PathBuf::from("/home/user/proj/~other/x")
        );
    }

    #[test]
    fn test_resolve_relative_uses_working_dir() {
        let r = resolver();
        assert_eq!(r.resolve("build").unwrap(), PathBuf::from("/home/user/proj/build"));
        assert_eq!(r.resolve("./a/../b").unwrap(), PathBuf::from("/home/user/proj/b"));
    }

    #[test]
    fn test_resolve_errors() {
        let r = PathResolver::new(None, None);
        assert_eq!(
            r.resolve("~/x"),
            Err(ResolveError::UnknownHome("~/x".to_string()))
        );
        assert_eq!(
            r.resolve("rel"),
            Err(ResolveError::UnknownWorkingDir("rel".to_string()))
        );
        assert_eq!(r.resolve("/abs/./x").unwrap(), PathBuf::from("/abs/x"));
    }

    #[test]
    fn test_containment_inside_and_outside() {
        let r = resolver();
        let root = Path::new("/home/user/proj");
        assert_eq!(r.containment("/home/user/proj/build", root), Containment::Inside);
        assert_eq!(r.containment("/home/user/proj", root), Containment::Inside);
        assert_eq!(r.containment("/etc/passwd", root), Containment::Outside);
        assert_eq!(r.containment("/home/user/proj/../other", root), Containment::Outside);
    }

    #[test]
    fn test_containment_is_component_wise() {
        let r = resolver();
        assert_eq!(
            r.containment("/home/user/proj2", Path::new("/home/user/proj")),
            Containment::Outside
        );
    }

    #[test]
    fn test_containment_relative_root() {
        let r = PathResolver::new(Some(PathBuf::from("/work")), None);
        assert_eq!(r.containment("/work/proj/x", Path::new("proj")), Containment::Inside);
        assert_eq!(r.containment("/elsewhere", Path::new("proj")), Containment::Outside);
    }

    #[test]
    fn test_containment_undetermined() {
        let r = PathResolver::new(None, None);
        assert!(matches!(
            r.containment("/tmp/x", Path::new("proj")),
            Containment::Undetermined(ResolveError::UnknownWorkingDir(_))
        ));
        assert!(matches!(
            r.containment("~/x", Path::new("/home/user/proj")),
            Containment::Undetermined(ResolveError::UnknownHome(_))
        ));
    }
}
