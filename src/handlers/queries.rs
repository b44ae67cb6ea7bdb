use axum::{extract::Path, Json};

use crate::domain::models::QueriesResponse;
use crate::screening::generate_queries;

/// GET /api/queries/{nm_id}
pub async fn queries_handler(Path(nm_id): Path<String>) -> Json<QueriesResponse> {
    Json(QueriesResponse {
        queries: generate_queries(&nm_id),
    })
}
