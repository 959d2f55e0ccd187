use crate::documents::WorkflowDocument;
use std::path::Path;

/// Renders the job summary for one workflow file.
///
/// Every job block ends with a blank line; a job without a name has no
/// `Job Name:` line at all.
pub fn render_workflow_report(path: &Path, document: &WorkflowDocument) -> String {
    let mut lines = Vec::<String>::new();
    lines.push(format!("File: {}", path.display()));
    lines.push(format!("Workflow: {}", document.name));

    for (job_id, job) in &document.jobs {
        lines.push(format!("Job ID: {job_id}"));
        if let Some(name) = job.display_name() {
            lines.push(format!("Job Name: {name}"));
        }
        lines.push(String::new());
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
