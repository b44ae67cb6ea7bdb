use thiserror::Error;

/// Errors surfaced by the screening workflow controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// Bad or missing local input; never reaches the network
    #[error("{0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to start screening: {0}")]
    Start(String),

    #[error("Failed to load queries: {0}")]
    Load(String),

    #[error("Failed to get an answer: {0}")]
    Chat(String),

    /// Network or parse failure while polling; logged and retried
    #[error("Status poll failed: {0}")]
    PollTransport(String),

    /// Response arrived after the view it was requested from was left
    #[error("Request superseded by navigation")]
    Cancelled,
}

impl WorkflowError {
    pub fn validation(message: impl Into<String>) -> Self {
        WorkflowError::Validation(message.into())
    }

    /// Whether the error should be shown to the user
    pub fn is_visible(&self) -> bool {
        !matches!(self, WorkflowError::Cancelled | WorkflowError::PollTransport(_))
    }
}

/// Errors returned by the mock screening service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Network Member not found")]
    MemberNotFound(String),

    #[error("Screening not found")]
    ScreeningNotFound(String),

    #[error("Missing nm_id or user_query")]
    MissingField(&'static str),
}
