use serde::{Deserialize, Serialize};

/// Terminal status label of a screening job
pub const COMPLETED_LABEL: &str = "Completed";

/// Summary and evidence produced by a completed screening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResults {
    /// HTML fragment rendered as-is by the results page
    pub summary: String,
    pub citations: Vec<String>,
}

/// Status record returned by `GET /api/status/{id}`
///
/// `results` is only present once `status` is the terminal label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningStatus {
    pub nm_id: String,
    pub status: String,
    /// Epoch milliseconds, present while the job is still running
    #[serde(rename = "startTime", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<ScreeningResults>,
}

impl ScreeningStatus {
    /// Case-insensitive match against the terminal label
    pub fn is_completed(&self) -> bool {
        self.status.eq_ignore_ascii_case(COMPLETED_LABEL)
    }
}

/// Response of `GET /api/start_screening`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartScreeningResponse {
    pub message: String,
    pub nm_id: String,
}

/// Response of `GET /api/queries/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueriesResponse {
    pub queries: Vec<String>,
}

/// Body of `POST /api/answer_query` as sent by the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerQueryRequest {
    #[serde(default)]
    pub nm_id: Option<String>,
    #[serde(default)]
    pub user_query: Option<String>,
}

impl AnswerQueryRequest {
    pub fn new(nm_id: impl Into<String>, user_query: impl Into<String>) -> Self {
        Self {
            nm_id: Some(nm_id.into()),
            user_query: Some(user_query.into()),
        }
    }
}

/// Response of `POST /api/answer_query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerQueryResponse {
    pub answer: String,
}

/// Response of `GET /api/ping`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// Error body shared by every non-2xx API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
