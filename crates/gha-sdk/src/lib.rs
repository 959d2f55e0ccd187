pub mod documents;
pub mod parse;
pub mod report;

pub use documents::{JobDescriptor, WorkflowDocument};
pub use parse::{parse_workflow_document, ParseError};
pub use report::render_workflow_report;
