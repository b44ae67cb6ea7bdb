//! Screening start and status handlers

use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use serde::Deserialize;

use super::ScreeningHandlerState;
use crate::domain::models::{ScreeningStatus, StartScreeningResponse};
use crate::screening::find_member;
use crate::shared::constants::DEMO_SCREENING_ID;
use crate::shared::errors::ServiceError;
use crate::shared::logging::log_screening_started;

#[derive(Debug, Default, Deserialize)]
pub struct StartScreeningQuery {
    /// Member the caller looked up; unknown or absent falls back to the demo id
    #[serde(default)]
    pub nm_id: Option<String>,
}

/// Identifier a new screening is keyed by
pub fn screening_id_for(requested: Option<&str>) -> &str {
    match requested {
        Some(nm_id) if find_member(nm_id).is_some() => nm_id,
        _ => DEMO_SCREENING_ID,
    }
}

/// GET /api/start_screening
/// Start a staged screening job and return the identifier to poll
pub async fn start_screening_handler(
    Extension(state): Extension<ScreeningHandlerState>,
    Query(params): Query<StartScreeningQuery>,
) -> Json<StartScreeningResponse> {
    let requested = params.nm_id.as_deref().map(str::trim);
    let nm_id = screening_id_for(requested).to_string();

    let generation = state.registry.start(&nm_id);
    log_screening_started(requested, &nm_id, generation);

    Json(StartScreeningResponse {
        message: "Screening started successfully".to_string(),
        nm_id,
    })
}

/// GET /api/status/{nm_id}
pub async fn status_handler(
    Extension(state): Extension<ScreeningHandlerState>,
    Path(nm_id): Path<String>,
) -> Result<Json<ScreeningStatus>, ServiceError> {
    state
        .registry
        .status(&nm_id)
        .map(Json)
        .ok_or(ServiceError::ScreeningNotFound(nm_id))
}
