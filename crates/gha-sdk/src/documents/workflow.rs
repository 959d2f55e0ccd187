use super::de::{jobs_in_document_order, null_as_default};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;

/// A single GitHub Actions workflow file.
///
/// Only `name` and the job identifiers are ever reported. `on` is kept as an
/// opaque value so that documents carrying arbitrary trigger blocks still decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkflowDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "on")]
    pub triggers: Value,
    /// Keyed by job id, in the order the jobs appear in the file.
    #[serde(default, deserialize_with = "jobs_in_document_order")]
    pub jobs: IndexMap<String, JobDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobDescriptor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "runs-on")]
    pub runs_on: Value,
    #[serde(default)]
    pub environment: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<Value>,
    #[serde(default)]
    pub needs: Value,
    #[serde(default, rename = "if", deserialize_with = "null_as_default")]
    pub condition: String,
}

impl JobDescriptor {
    /// The declared job name, or `None` when the job has no (or a blank) `name`.
    pub fn display_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.as_str())
        }
    }
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
