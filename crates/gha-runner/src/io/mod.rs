mod find_workflows;
mod resolve_path;

pub use find_workflows::{
    find_workflow_files, find_workflow_files_with_options, is_workflow_candidate, LocatorOptions,
};
pub use resolve_path::{absolute_path_from, resolve_target_path, PathKind, ResolvedPath};
