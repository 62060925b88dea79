use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::analytics_dto::SystemStatsResponse,
    error::Result,
    models::user::{Actor, Role},
    utils::time::now,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Platform-wide counters", body = SystemStatsResponse),
        (status = 401, description = "Missing identity"),
        (status = 403, description = "Not an admin")
    )
)]
#[axum::debug_handler]
pub async fn system_stats(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<impl IntoResponse> {
    actor.require(&[Role::Admin])?;
    tracing::info!(actor_id = %actor.id, "system stats requested");
    let stats = state.analytics_service.system_stats(now())?;
    Ok(Json(SystemStatsResponse::from(stats)))
}
