use crate::run::RunnerError;
use std::borrow::Cow;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Which files under a scanned directory count as workflow definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorOptions {
    /// Matched against the whole path with `/` separators.
    pub path_segment: String,
    /// Case-sensitive file name suffixes.
    pub extensions: Vec<String>,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            path_segment: ".github/workflows".to_string(),
            extensions: vec![".yml".to_string(), ".yaml".to_string()],
        }
    }
}

pub fn find_workflow_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, RunnerError> {
    find_workflow_files_with_options(root, &LocatorOptions::default())
}

/// Walks `root` depth-first in file name order. The first I/O error ends the walk.
pub fn find_workflow_files_with_options(
    root: impl AsRef<Path>,
    options: &LocatorOptions,
) -> Result<Vec<PathBuf>, RunnerError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
        let entry = entry.map_err(RunnerError::Traversal)?;
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.into_path();
        if is_workflow_candidate(path.as_path(), options) {
            debug!(path = %path.display(), "found workflow file");
            files.push(path);
        } else {
            trace!(path = %path.display(), "skipping non-workflow file");
        }
    }
    Ok(files)
}

pub fn is_workflow_candidate(path: &Path, options: &LocatorOptions) -> bool {
    let Some(file_name) = path.file_name() else {
        return false;
    };
    let file_name = file_name.to_string_lossy();
    normalize_separators(path).contains(options.path_segment.as_str())
        && options
            .extensions
            .iter()
            .any(|extension| file_name.ends_with(extension.as_str()))
}

fn normalize_separators(path: &Path) -> Cow<'_, str> {
    let text = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        text
    } else {
        Cow::Owned(text.replace(MAIN_SEPARATOR, "/"))
    }
}

#[cfg(test)]
#[path = "find_workflows_test.rs"]
mod tests;
