//! Mock screening service
//!
//! Canned members and results, the staged job state machine, and the
//! registry whose driver tasks advance jobs on a schedule.

pub mod answers;
pub mod fixtures;
pub mod job;
pub mod queries;
pub mod registry;

pub use answers::{answer_for, AnswerTopic};
pub use fixtures::find_member;
pub use job::{JobStage, ScreeningJob, StageSchedule};
pub use queries::generate_queries;
pub use registry::{InstalledJob, ScreeningRegistry};
