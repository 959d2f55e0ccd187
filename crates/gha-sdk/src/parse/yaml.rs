use super::ParseError;
use crate::documents::WorkflowDocument;
use serde::Deserialize;
use serde_yaml::{Deserializer, Value};

/// Untyped pass over the first document in the stream. Going through `Value`
/// rejects repeated mapping keys, which the typed decode into a map would
/// silently collapse. Any documents after the first are ignored.
pub(super) fn parse_yaml(input: &[u8]) -> Result<Value, ParseError> {
    match Deserializer::from_slice(input).next() {
        Some(document) => Value::deserialize(document).map_err(ParseError::Yaml),
        None => Ok(Value::Null),
    }
}

/// Typed pass straight from the source text, so scalars read as strings keep
/// their spelling (`3.10`, `0x1F`) and numeric job ids become string keys.
pub(super) fn parse_typed(input: &[u8]) -> Result<WorkflowDocument, ParseError> {
    match Deserializer::from_slice(input).next() {
        Some(document) => WorkflowDocument::deserialize(document).map_err(ParseError::Schema),
        None => Ok(WorkflowDocument::default()),
    }
}
