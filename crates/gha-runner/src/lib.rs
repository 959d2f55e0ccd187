mod cli;
mod io;
mod logging;
mod run;

pub use cli::Cli;
pub use io::{
    absolute_path_from, find_workflow_files, find_workflow_files_with_options,
    is_workflow_candidate, resolve_target_path, LocatorOptions, PathKind, ResolvedPath,
};
pub use logging::init_logging;
pub use run::{execute, report_workflow_file, run, RunnerError, DIRECTORY_SEPARATOR, USAGE};
