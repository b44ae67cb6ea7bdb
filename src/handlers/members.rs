use axum::{extract::Path, Json};

use crate::domain::models::NetworkMember;
use crate::screening::find_member;
use crate::shared::errors::ServiceError;
use crate::shared::logging::log_member_lookup;

/// GET /api/get_nm_info/{nm_id}
/// Fixture lookup by exact identifier
pub async fn get_member_handler(
    Path(nm_id): Path<String>,
) -> Result<Json<NetworkMember>, ServiceError> {
    let member = find_member(&nm_id).cloned();
    log_member_lookup(&nm_id, member.is_some());

    member.map(Json).ok_or(ServiceError::MemberNotFound(nm_id))
}
