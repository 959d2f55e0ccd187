mod yaml;

use crate::documents::WorkflowDocument;
use serde_yaml::Value;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Yaml(serde_yaml::Error),
    #[error(transparent)]
    Schema(serde_yaml::Error),
    #[error("document root must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
}

/// Decodes one workflow file. The document is accepted whole or not at all.
///
/// An empty file (or one holding only comments) is an empty workflow. Only the
/// first document of a multi-document stream is read.
pub fn parse_workflow_document(input: &[u8]) -> Result<WorkflowDocument, ParseError> {
    match yaml::parse_yaml(input)? {
        Value::Null => Ok(WorkflowDocument::default()),
        Value::Mapping(_) => yaml::parse_typed(input),
        other => Err(ParseError::NotAMapping {
            found: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
