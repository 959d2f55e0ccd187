use super::Cli;
use clap::{CommandFactory, Parser};
use std::path::Path;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parses_single_path() {
    let cli = Cli::try_parse_from(["detect-gha-jobs", ".github/workflows/ci.yml"])
        .expect("path argument must parse");
    assert_eq!(
        cli.path.as_deref(),
        Some(Path::new(".github/workflows/ci.yml"))
    );
    assert!(cli.ignored.is_empty());
}

#[test]
fn cli_allows_missing_path() {
    let cli = Cli::try_parse_from(["detect-gha-jobs"]).expect("missing path is left to the runner");
    assert!(cli.path.is_none());
}

#[test]
fn cli_ignores_extra_positionals() {
    let cli = Cli::try_parse_from(["detect-gha-jobs", "repo", "extra", "more"])
        .expect("extra positionals must parse");
    assert_eq!(cli.path.as_deref(), Some(Path::new("repo")));
    assert_eq!(cli.ignored.len(), 2);
}
