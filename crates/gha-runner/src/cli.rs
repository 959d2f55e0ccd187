use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "detect-gha-jobs")]
#[command(about = "List the jobs declared in GitHub Actions workflow files")]
#[command(version)]
pub struct Cli {
    /// A workflow file, or a directory to search for `.github/workflows/*.y(a)ml`.
    #[arg(value_name = "WORKFLOW_FILE_OR_DIRECTORY")]
    pub path: Option<PathBuf>,
    #[arg(hide = true)]
    pub ignored: Vec<OsString>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
