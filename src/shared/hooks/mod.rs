// Custom Dioxus hooks
pub mod use_screening_workflow;

pub use use_screening_workflow::{use_screening_workflow, ScreeningWorkflow};
