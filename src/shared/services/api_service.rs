//! HTTP client for the screening API
//!
//! Uses gloo-net in the browser and reqwest everywhere else; both paths
//! decode the same `{error}` body on failure.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::domain::models::{
    AnswerQueryRequest, AnswerQueryResponse, ErrorResponse, NetworkMember, QueriesResponse,
    ScreeningStatus, StartScreeningResponse,
};
use crate::domain::workflow::ScreeningApi;
use crate::shared::errors::WorkflowError;

/// Failure of a single HTTP exchange, before mapping onto the workflow taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpFailure {
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("{0}")]
    Transport(String),
}

impl HttpFailure {
    fn is_not_found(&self) -> bool {
        matches!(self, HttpFailure::Status { code: 404, .. })
    }

    /// Message from the `{error}` body, or the transport error
    fn message(&self) -> String {
        match self {
            HttpFailure::Status { message, .. } => message.clone(),
            HttpFailure::Transport(message) => message.clone(),
        }
    }
}

// API Service for centralized HTTP requests
#[derive(Debug, Clone)]
pub struct ApiService {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiService {
    pub fn new() -> Self {
        Self::with_base_url(ClientConfig::default().base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    // Generic GET request
    #[cfg(target_arch = "wasm32")]
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, HttpFailure> {
        use gloo_net::http::Request;

        let response = Request::get(&self.url(endpoint))
            .send()
            .await
            .map_err(|e| HttpFailure::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    // Generic POST request
    #[cfg(target_arch = "wasm32")]
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, HttpFailure> {
        use gloo_net::http::Request;

        let response = Request::post(&self.url(endpoint))
            .json(body)
            .map_err(|e| HttpFailure::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| HttpFailure::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn decode<T: DeserializeOwned>(
        response: gloo_net::http::Response,
    ) -> Result<T, HttpFailure> {
        if !response.ok() {
            let code = response.status();
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => response.status_text(),
            };
            return Err(HttpFailure::Status { code, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| HttpFailure::Transport(e.to_string()))
    }

    // Generic GET request
    #[cfg(not(target_arch = "wasm32"))]
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, HttpFailure> {
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| HttpFailure::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    // Generic POST request
    #[cfg(not(target_arch = "wasm32"))]
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, HttpFailure> {
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| HttpFailure::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, HttpFailure> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
            };
            return Err(HttpFailure::Status {
                code: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| HttpFailure::Transport(e.to_string()))
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ScreeningApi for ApiService {
    async fn lookup_member(&self, nm_id: &str) -> Result<NetworkMember, WorkflowError> {
        self.get(&format!("/api/get_nm_info/{}", urlencoding::encode(nm_id)))
            .await
            .map_err(|e| WorkflowError::NotFound(e.message()))
    }

    async fn start_screening(&self, nm_id: &str) -> Result<StartScreeningResponse, WorkflowError> {
        self.get(&format!("/api/start_screening?nm_id={}", urlencoding::encode(nm_id)))
            .await
            .map_err(|e| WorkflowError::Start(e.to_string()))
    }

    async fn fetch_status(&self, nm_id: &str) -> Result<ScreeningStatus, WorkflowError> {
        self.get(&format!("/api/status/{}", urlencoding::encode(nm_id)))
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    WorkflowError::NotFound(e.message())
                } else {
                    WorkflowError::PollTransport(e.to_string())
                }
            })
    }

    async fn fetch_queries(&self, nm_id: &str) -> Result<Vec<String>, WorkflowError> {
        self.get::<QueriesResponse>(&format!("/api/queries/{}", urlencoding::encode(nm_id)))
            .await
            .map(|body| body.queries)
            .map_err(|e| WorkflowError::Load(e.to_string()))
    }

    async fn answer_query(&self, nm_id: &str, user_query: &str) -> Result<String, WorkflowError> {
        self.post::<AnswerQueryResponse, _>(
            "/api/answer_query",
            &AnswerQueryRequest::new(nm_id, user_query),
        )
        .await
        .map(|body| body.answer)
        .map_err(|e| WorkflowError::Chat(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_cleanly() {
        let api = ApiService::with_base_url("http://127.0.0.1:3001/");
        assert_eq!(api.url("/api/status/6023085"), "http://127.0.0.1:3001/api/status/6023085");

        let same_origin = ApiService::with_base_url("");
        assert_eq!(same_origin.url("api/ping"), "/api/ping");
    }

    #[test]
    fn test_http_failure_display() {
        let failure = HttpFailure::Status {
            code: 404,
            message: "Screening not found".into(),
        };
        assert!(failure.is_not_found());
        assert_eq!(failure.to_string(), "HTTP 404: Screening not found");
        assert_eq!(failure.message(), "Screening not found");
    }
}
