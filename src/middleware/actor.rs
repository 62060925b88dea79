use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::models::user::{Actor, Role};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

fn unauthorized(reason: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": reason }))).into_response()
}

/// Turns the identity headers set by the upstream auth layer into an
/// [`Actor`] request extension.
pub async fn resolve_actor(mut req: Request, next: Next) -> Response {
    let headers = req.headers();
    let Some(raw_id) = headers.get(USER_ID_HEADER).and_then(|v| v.to_str().ok()) else {
        return unauthorized("missing_user_id");
    };
    let Ok(id) = Uuid::parse_str(raw_id.trim()) else {
        return unauthorized("invalid_user_id");
    };
    let Some(raw_role) = headers.get(USER_ROLE_HEADER).and_then(|v| v.to_str().ok()) else {
        return unauthorized("missing_user_role");
    };
    let Ok(role) = raw_role.parse::<Role>() else {
        return unauthorized("invalid_user_role");
    };

    tracing::debug!(actor_id = %id, ?role, "resolved actor");
    req.extensions_mut().insert(Actor::new(id, role));
    next.run(req).await
}
