use crate::run::RunnerError;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub kind: PathKind,
}

/// Makes `argument` absolute against the working directory and stats it.
pub fn resolve_target_path(argument: &Path) -> Result<ResolvedPath, RunnerError> {
    let path = if argument.is_absolute() {
        argument.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(RunnerError::CurrentDir)?;
        absolute_path_from(&cwd, argument)
    };

    let metadata = fs::metadata(&path).map_err(|source| RunnerError::PathInfo {
        path: path.clone(),
        source,
    })?;
    let kind = if metadata.is_dir() {
        PathKind::Directory
    } else {
        PathKind::File
    };
    debug!(path = %path.display(), ?kind, "resolved target path");

    Ok(ResolvedPath { path, kind })
}

/// Joins `relative` onto `base` and removes `.` and `..` segments lexically.
pub fn absolute_path_from(base: &Path, relative: &Path) -> PathBuf {
    let mut joined = PathBuf::new();
    for component in base.join(relative).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` above the root stays at the root.
                joined.pop();
            }
            other => joined.push(other.as_os_str()),
        }
    }
    joined
}

#[cfg(test)]
#[path = "resolve_path_test.rs"]
mod tests;
