//! HTTP handlers of the mock screening service

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::config::ServiceConfig;
use crate::screening::ScreeningRegistry;

pub mod answer;
pub mod error;
pub mod members;
pub mod ping;
pub mod queries;
pub mod screening;

pub use answer::answer_query_handler;
pub use members::get_member_handler;
pub use ping::ping_handler;
pub use queries::queries_handler;
pub use screening::{start_screening_handler, status_handler};

/// Shared state of the screening handlers
#[derive(Clone)]
pub struct ScreeningHandlerState {
    pub registry: Arc<ScreeningRegistry>,
    pub answer_delay: Duration,
    pub ping_message: Arc<str>,
}

impl ScreeningHandlerState {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            registry: Arc::new(ScreeningRegistry::new(config.schedule)),
            answer_delay: config.answer_delay,
            ping_message: Arc::from(config.ping_message.as_str()),
        }
    }
}

/// All `/api` routes, with the handler state attached
pub fn api_router(state: ScreeningHandlerState) -> Router {
    Router::new()
        .route("/api/get_nm_info/{nm_id}", get(get_member_handler))
        .route("/api/start_screening", get(start_screening_handler))
        .route("/api/status/{nm_id}", get(status_handler))
        .route("/api/queries/{nm_id}", get(queries_handler))
        .route("/api/answer_query", post(answer_query_handler))
        .route("/api/ping", get(ping_handler))
        .layer(Extension(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::domain::workflow::ScreeningApi;
    use crate::shared::errors::WorkflowError;
    use crate::shared::services::ApiService;

    fn test_state() -> ScreeningHandlerState {
        let config = ServiceConfig {
            answer_delay: Duration::ZERO,
            ..ServiceConfig::default()
        };
        ScreeningHandlerState::new(&config)
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn answer_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/answer_query")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let (status, body) = send(api_router(test_state()), get_request("/api/ping")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "ping" }));
    }

    #[tokio::test]
    async fn test_member_lookup() {
        let router = api_router(test_state());

        let (status, body) = send(router.clone(), get_request("/api/get_nm_info/12345")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Sarah Johnson");
        assert_eq!(body["nm_id"], "12345");

        let (status, body) = send(router, get_request("/api/get_nm_info/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Network Member not found" }));
    }

    #[tokio::test]
    async fn test_status_before_start_is_not_found() {
        let (status, body) =
            send(api_router(test_state()), get_request("/api/status/6023085")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Screening not found" }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_then_poll() {
        let router = api_router(test_state());

        let (status, body) = send(router.clone(), get_request("/api/start_screening")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Screening started successfully");
        assert_eq!(body["nm_id"], "6023085");

        let (_, body) = send(router.clone(), get_request("/api/status/6023085")).await;
        assert_eq!(body["status"], "Initializing screening process...");
        assert!(body["startTime"].is_i64());
        assert!(body.get("results").is_none());

        tokio::time::sleep(Duration::from_millis(12_100)).await;
        let (_, body) = send(router, get_request("/api/status/6023085")).await;
        assert_eq!(body["status"], "Completed");
        assert_eq!(body["results"]["citations"].as_array().unwrap().len(), 12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_echoes_known_member() {
        let router = api_router(test_state());

        let (_, body) = send(router.clone(), get_request("/api/start_screening?nm_id=12345")).await;
        assert_eq!(body["nm_id"], "12345");

        let (_, body) = send(router, get_request("/api/start_screening?nm_id=unknown")).await;
        assert_eq!(body["nm_id"], "6023085");
    }

    #[tokio::test]
    async fn test_queries_substitute_member_name() {
        let (status, body) =
            send(api_router(test_state()), get_request("/api/queries/6023085")).await;
        assert_eq!(status, StatusCode::OK);

        let queries = body["queries"].as_array().unwrap();
        assert_eq!(queries.len(), 20);
        assert!(queries[0].as_str().unwrap().contains("Michael Bartikoski"));
    }

    #[tokio::test]
    async fn test_answer_query() {
        let router = api_router(test_state());

        let (status, body) = send(
            router.clone(),
            answer_request(json!({ "nm_id": "6023085", "user_query": "Any lawsuits?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["answer"].as_str().unwrap().contains("legal"));

        let (status, body) = send(router, answer_request(json!({ "nm_id": "6023085" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing nm_id or user_query" }));
    }

    #[tokio::test]
    async fn test_answer_query_rejects_non_json_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/answer_query")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("nm_id=6023085"))
            .unwrap();

        let (status, body) = send(api_router(test_state()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing nm_id or user_query" }));
    }

    #[tokio::test]
    async fn test_answer_query_rejects_malformed_json() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/answer_query")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"nm_id\": "))
            .unwrap();

        let (status, body) = send(api_router(test_state()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing nm_id or user_query" }));
    }

    #[tokio::test]
    async fn test_answer_query_accepts_numeric_member_id() {
        let (status, body) = send(
            api_router(test_state()),
            answer_request(json!({ "nm_id": 6023085, "user_query": "work history" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["answer"].as_str().unwrap().contains("work history"));
    }

    #[tokio::test]
    async fn test_answer_query_rejects_blank_query() {
        let (status, body) = send(
            api_router(test_state()),
            answer_request(json!({ "nm_id": "6023085", "user_query": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing nm_id or user_query" }));
    }

    #[tokio::test]
    async fn test_answer_query_accepts_form_body() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/answer_query")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("nm_id=6023085&user_query=any+lawsuits"))
            .unwrap();

        let (status, body) = send(api_router(test_state()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["answer"].as_str().unwrap().contains("legal"));
    }

    async fn serve(router: Router) -> ApiService {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        ApiService::with_base_url(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn test_api_service_maps_error_bodies() {
        let api = serve(api_router(test_state())).await;

        let member = api.lookup_member("12345").await.unwrap();
        assert_eq!(member.name, "Sarah Johnson");

        assert_eq!(
            api.lookup_member("999").await,
            Err(WorkflowError::NotFound("Network Member not found".into()))
        );
        assert!(matches!(
            api.fetch_status("6023085").await,
            Err(WorkflowError::NotFound(message)) if message == "Screening not found"
        ));
        assert_eq!(
            api.answer_query("6023085", "   ").await,
            Err(WorkflowError::Chat(
                "HTTP 400: Missing nm_id or user_query".into()
            ))
        );
    }
}
