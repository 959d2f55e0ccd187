mod de;
mod workflow;

pub use workflow::{JobDescriptor, WorkflowDocument};
