use crate::cli::Cli;
use crate::io::{find_workflow_files, resolve_target_path, PathKind};
use clap::error::ErrorKind;
use clap::Parser;
use gha_sdk::{parse_workflow_document, render_workflow_report, ParseError};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const USAGE: &str = "usage: detect-gha-jobs <workflow-file-or-directory>";

/// Printed ahead of every report when a directory is scanned.
pub const DIRECTORY_SEPARATOR: &str = "----------------------------------------";

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("{0}")]
    Usage(String),
    #[error("failed to get current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    #[error("failed to get path info for `{}`: {source}", .path.display())]
    PathInfo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to search workflow files: {0}")]
    Traversal(#[source] walkdir::Error),
    #[error("no workflow files found")]
    NoWorkflowsFound,
    #[error("failed to read file: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] ParseError),
    #[error("write output failed: {0}")]
    Output(#[source] std::io::Error),
}

/// Parses `args` (program name first) and runs the scan, returning the exit code.
///
/// Fatal errors are written to `err` without a prefix.
pub fn run<I, T>(args: I, out: &mut impl Write, err: &mut impl Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return match write!(out, "{}", error.render()) {
                Ok(()) => 0,
                Err(_) => 1,
            };
        }
        Err(error) => {
            let usage = RunnerError::Usage(error.render().to_string().trim_end().to_string());
            let _ = writeln!(err, "{usage}");
            return 1;
        }
    };

    match execute(&cli, out, err) {
        Ok(()) => 0,
        Err(error) => {
            debug!(?error, "run failed");
            let _ = writeln!(err, "{error}");
            1
        }
    }
}

pub fn execute(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> Result<(), RunnerError> {
    let Some(argument) = cli.path.as_deref() else {
        return Err(RunnerError::Usage(USAGE.to_string()));
    };

    let target = resolve_target_path(argument)?;
    match target.kind {
        PathKind::Directory => report_directory(target.path.as_path(), out, err),
        PathKind::File => report_workflow_file(target.path.as_path(), out),
    }
}

/// A file that cannot be read or decoded is reported on `err` and skipped.
fn report_directory(
    root: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), RunnerError> {
    let files = find_workflow_files(root)?;
    if files.is_empty() {
        return Err(RunnerError::NoWorkflowsFound);
    }

    for file in &files {
        writeln!(out, "{DIRECTORY_SEPARATOR}").map_err(RunnerError::Output)?;
        match report_workflow_file(file.as_path(), out) {
            Ok(()) => {}
            Err(error @ RunnerError::Output(_)) => return Err(error),
            Err(error) => {
                warn!(path = %file.display(), %error, "skipping workflow file");
                writeln!(err, "warning: error processing {}: {error}", file.display())
                    .map_err(RunnerError::Output)?;
            }
        }
    }
    Ok(())
}

/// Reads, decodes and prints one workflow file. Nothing is printed on failure.
pub fn report_workflow_file(path: &Path, out: &mut impl Write) -> Result<(), RunnerError> {
    let bytes = fs::read(path).map_err(|source| RunnerError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_workflow_document(bytes.as_slice())?;
    debug!(path = %path.display(), jobs = document.jobs.len(), "decoded workflow");

    out.write_all(render_workflow_report(path, &document).as_bytes())
        .map_err(RunnerError::Output)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
