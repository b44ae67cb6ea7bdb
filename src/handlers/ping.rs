use axum::{Extension, Json};

use super::ScreeningHandlerState;
use crate::domain::models::PingResponse;

/// GET /api/ping
pub async fn ping_handler(
    Extension(state): Extension<ScreeningHandlerState>,
) -> Json<PingResponse> {
    Json(PingResponse {
        message: state.ping_message.to_string(),
    })
}
