//! Structured logging helpers for the screening workflow
//!
//! Client and server log the same operations with the same field names,
//! so a browser console trace and a server trace line up.

/// Operation names attached to every event
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    MemberLookup,
    ScreeningStart,
    StageTransition,
    StatusPoll,
    QueryGeneration,
    ChatAnswer,
    Workflow,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::MemberLookup => "member_lookup",
            LogOperation::ScreeningStart => "screening_start",
            LogOperation::StageTransition => "stage_transition",
            LogOperation::StatusPoll => "status_poll",
            LogOperation::QueryGeneration => "query_generation",
            LogOperation::ChatAnswer => "chat_answer",
            LogOperation::Workflow => "workflow",
        }
    }
}

/// Log member lookup result
pub fn log_member_lookup(nm_id: &str, found: bool) {
    if found {
        tracing::info!(
            operation = LogOperation::MemberLookup.as_str(),
            nm_id = nm_id,
            "Network Member found"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::MemberLookup.as_str(),
            nm_id = nm_id,
            "Network Member not found"
        );
    }
}

/// Log a screening job being started
pub fn log_screening_started(requested: Option<&str>, nm_id: &str, generation: u64) {
    tracing::info!(
        operation = LogOperation::ScreeningStart.as_str(),
        requested_id = ?requested,
        nm_id = nm_id,
        generation = generation,
        "Screening started"
    );
}

/// Log a job moving to its next stage
pub fn log_stage_transition(nm_id: &str, generation: u64, label: &str) {
    tracing::info!(
        operation = LogOperation::StageTransition.as_str(),
        nm_id = nm_id,
        generation = generation,
        status = label,
        "Screening stage advanced"
    );
}

/// Log a driver stopping before the job completed
pub fn log_stage_driver_cancelled(nm_id: &str, generation: u64) {
    tracing::debug!(
        operation = LogOperation::StageTransition.as_str(),
        nm_id = nm_id,
        generation = generation,
        "Stage driver cancelled"
    );
}

/// Log a status update received by the polling loop
pub fn log_poll_status(nm_id: &str, label: &str) {
    tracing::debug!(
        operation = LogOperation::StatusPoll.as_str(),
        nm_id = nm_id,
        status = label,
        "Polled screening status"
    );
}

/// Log a swallowed polling failure
pub fn log_poll_error(nm_id: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::StatusPoll.as_str(),
        nm_id = nm_id,
        error = error,
        "Status poll failed, retrying on next tick"
    );
}

/// Log query generation for a member
pub fn log_queries_generated(nm_id: &str, resolved: bool, count: usize) {
    tracing::debug!(
        operation = LogOperation::QueryGeneration.as_str(),
        nm_id = nm_id,
        member_resolved = resolved,
        query_count = count,
        "Generated screening queries"
    );
}

/// Log a canned chat answer
pub fn log_chat_answer(nm_id: &str, topic: &str) {
    tracing::info!(
        operation = LogOperation::ChatAnswer.as_str(),
        nm_id = nm_id,
        topic = topic,
        "Answered follow-up question"
    );
}

/// Log a workflow stage change on the client
pub fn log_workflow_transition(from: &str, to: &str) {
    tracing::info!(
        operation = LogOperation::Workflow.as_str(),
        from = from,
        to = to,
        "Workflow transition"
    );
}

/// Log a response dropped because the view moved on
pub fn log_stale_response(kind: &str) {
    tracing::debug!(
        operation = LogOperation::Workflow.as_str(),
        response = kind,
        "Dropped stale response"
    );
}

/// Macro for creating a span around one screening
#[macro_export]
macro_rules! screening_span {
    ($nm_id:expr, $generation:expr) => {
        tracing::info_span!("screening", nm_id = $nm_id, generation = $generation)
    };
}
