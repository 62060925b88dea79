use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        candidate_dto::UpdateProfilePayload,
        filter_dto::{CandidateSearchQuery, CandidateSearchResponse},
    },
    error::Result,
    models::user::{Actor, Role},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/users/search",
    params(
        ("search" = Option<String>, Query, description = "Matches name or any skill"),
        ("skills" = Option<String>, Query, description = "Comma separated skills"),
        ("minAge" = Option<String>, Query, description = "Minimum age"),
        ("maxAge" = Option<String>, Query, description = "Maximum age"),
        ("employmentType" = Option<String>, Query, description = "full-time or part-time"),
        ("workMode" = Option<String>, Query, description = "onsite, remote or hybrid"),
        ("page" = Option<String>, Query, description = "Page number, default 1"),
        ("limit" = Option<String>, Query, description = "Page size, default 10")
    ),
    responses(
        (status = 200, description = "Matching candidates", body = CandidateSearchResponse),
        (status = 403, description = "Not an employer or admin")
    )
)]
#[axum::debug_handler]
pub async fn search_candidates(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<CandidateSearchQuery>,
) -> Result<impl IntoResponse> {
    actor.require(&[Role::Employer, Role::Admin])?;
    let criteria = query.criteria();
    tracing::info!(actor_id = %actor.id, role = ?actor.role, ?criteria, "candidate search");

    let page = state
        .candidate_service
        .search(&criteria, query.page_request())?;
    Ok(Json(CandidateSearchResponse::from(page)))
}

#[utoipa::path(
    put,
    path = "/api/users/profile",
    request_body = UpdateProfilePayload,
    responses(
        (status = 200, description = "Profile saved", body = CandidateRecord),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Not a candidate")
    )
)]
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state.candidate_service.upsert_profile(&actor, payload)?;
    Ok(Json(profile))
}
