mod text;

pub use text::render_workflow_report;
