use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::application_dto::{
        ApplicantListResponse, ApplicantsQuery, ApplicationListResponse, ApplicationResponse,
        ApplyPayload, UpdateApplicationStatusPayload,
    },
    error::Result,
    models::user::Actor,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = ApplyPayload,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationResponse),
        (status = 404, description = "Job not found"),
        (status = 409, description = "Already applied")
    )
)]
#[axum::debug_handler]
pub async fn apply(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<ApplyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let application = state.application_service.apply(&actor, payload)?;
    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(application)),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/applications/{id}/status",
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = ApplicationResponse),
        (status = 403, description = "Not the job owner"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApplicationStatusPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let application = state
        .application_service
        .update_status(&actor, id, payload)?;
    tracing::info!(application_id = %id, status = ?application.status, "application status updated");
    Ok(Json(ApplicationResponse::from(application)))
}

#[utoipa::path(
    get,
    path = "/api/applications/employer/applicants",
    params(
        ("jobId" = Option<String>, Query, description = "Restrict to one job"),
        ("status" = Option<String>, Query, description = "Application status"),
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
        (status = 200, description = "Unique applicants across the employer's jobs", body = ApplicantListResponse),
        (status = 400, description = "Malformed jobId"),
        (status = 403, description = "Not an employer or admin")
    )
)]
#[axum::debug_handler]
pub async fn employer_applicants(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<ApplicantsQuery>,
) -> Result<impl IntoResponse> {
    let criteria = query.criteria();
    tracing::info!(actor_id = %actor.id, role = ?actor.role, ?criteria, "employer applicants");

    let applicants = state.application_service.employer_applicants(
        &actor,
        query.job_id()?,
        query.status(),
        &criteria,
    )?;
    let page = query.page_request().slice(applicants);
    Ok(Json(ApplicantListResponse {
        success: true,
        count: page.items.len(),
        total: page.total,
        page: page.page,
        pages: page.pages,
        applicants: page.items,
    }))
}

#[utoipa::path(
    get,
    path = "/api/applications/candidate/my-applications",
    responses(
        (status = 200, description = "The caller's applications, newest first", body = ApplicationListResponse),
        (status = 403, description = "Not a candidate")
    )
)]
#[axum::debug_handler]
pub async fn my_applications(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<impl IntoResponse> {
    let applications = state.application_service.list_for_candidate(&actor)?;
    Ok(Json(ApplicationListResponse::from(applications)))
}

#[utoipa::path(
    get,
    path = "/api/applications/job/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Applications to the job, newest first", body = ApplicationListResponse),
        (status = 403, description = "Not the job owner"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn job_applications(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let applications = state.application_service.list_for_job(&actor, id)?;
    Ok(Json(ApplicationListResponse::from(applications)))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(("id" = Uuid, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application", body = ApplicationResponse),
        (status = 403, description = "Neither the applicant nor the job owner"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn get_application(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let application = state.application_service.get(&actor, id)?;
    Ok(Json(ApplicationResponse::from(application)))
}
