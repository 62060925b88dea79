use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::interview_dto::{
        InterviewListResponse, InterviewResponse, ScheduleInterviewPayload,
        UpdateInterviewStatusPayload,
    },
    error::Result,
    models::user::{Actor, Role},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/interviews",
    request_body = ScheduleInterviewPayload,
    responses(
        (status = 201, description = "Interview scheduled", body = InterviewResponse),
        (status = 400, description = "Invalid payload or application not reviewed"),
        (status = 409, description = "Application already has an interview")
    )
)]
#[axum::debug_handler]
pub async fn schedule_interview(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<ScheduleInterviewPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interview = state.interview_service.schedule(&actor, payload)?;
    Ok((StatusCode::CREATED, Json(InterviewResponse::from(interview))))
}

#[utoipa::path(
    get,
    path = "/api/interviews/mine",
    responses(
        (status = 200, description = "Interviews the caller takes part in", body = InterviewListResponse)
    )
)]
#[axum::debug_handler]
pub async fn my_interviews(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<impl IntoResponse> {
    actor.require(&[Role::Candidate, Role::Employer])?;
    let interviews = state.interview_service.list_for(&actor)?;
    Ok(Json(InterviewListResponse::from(interviews)))
}

#[utoipa::path(
    get,
    path = "/api/interviews/{id}",
    params(("id" = Uuid, Path, description = "Interview ID")),
    responses(
        (status = 200, description = "Interview", body = InterviewResponse),
        (status = 403, description = "Not a participant"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn get_interview(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let interview = state.interview_service.get(&actor, id)?;
    Ok(Json(InterviewResponse::from(interview)))
}

#[utoipa::path(
    patch,
    path = "/api/interviews/{id}/status",
    params(("id" = Uuid, Path, description = "Interview ID")),
    request_body = UpdateInterviewStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = InterviewResponse),
        (status = 400, description = "Interview already completed or cancelled"),
        (status = 403, description = "Transition not allowed for the caller")
    )
)]
#[axum::debug_handler]
pub async fn update_interview_status(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewStatusPayload>,
) -> Result<impl IntoResponse> {
    let interview = state
        .interview_service
        .update_status(&actor, id, payload.status)?;
    Ok(Json(InterviewResponse::from(interview)))
}

#[utoipa::path(
    delete,
    path = "/api/interviews/{id}",
    params(("id" = Uuid, Path, description = "Interview ID")),
    responses(
        (status = 200, description = "Interview deleted"),
        (status = 403, description = "Not the scheduling employer"),
        (status = 404, description = "Interview not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_interview(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.interview_service.delete(&actor, id)?;
    Ok(Json(json!({ "success": true, "message": "Interview deleted" })))
}
