use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        filter_dto::{JobListQuery, JobListResponse},
        job_dto::{CreateJobPayload, EmployerJobsResponse, JobResponse, UpdateJobStatusPayload},
    },
    error::Result,
    models::user::Actor,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("search" = Option<String>, Query, description = "Matches title, description or skills"),
        ("skills" = Option<String>, Query, description = "Comma separated skills"),
        ("employmentType" = Option<String>, Query, description = "full-time, part-time, contract or internship"),
        ("workMode" = Option<String>, Query, description = "onsite, remote or hybrid"),
        ("minExperience" = Option<String>, Query, description = "Minimum required years"),
        ("maxExperience" = Option<String>, Query, description = "Maximum required years"),
        ("status" = Option<String>, Query, description = "Defaults to open"),
        ("page" = Option<String>, Query, description = "Page number, default 1"),
        ("limit" = Option<String>, Query, description = "Page size, default 10")
    ),
    responses((status = 200, description = "Job postings", body = JobListResponse))
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let page = state
        .job_service
        .list(&query.criteria(), query.page_request())?;
    Ok(Json(JobListResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job posting", body = JobResponse),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get(id)?;
    Ok(Json(JobResponse::from(job)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/employer/my-jobs",
    responses(
        (status = 200, description = "The caller's postings, newest first", body = EmployerJobsResponse),
        (status = 403, description = "Not an employer")
    )
)]
#[axum::debug_handler]
pub async fn my_jobs(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list_for_employer(&actor)?;
    Ok(Json(EmployerJobsResponse::from(jobs)))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created", body = JobRecord),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Not an employer")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(&actor, payload)?;
    tracing::info!(job_id = %job.id, employer_id = %actor.id, "job created");
    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    patch,
    path = "/api/jobs/{id}/status",
    params(("id" = Uuid, Path, description = "Job ID")),
    request_body = UpdateJobStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = JobRecord),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job_status(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobStatusPayload>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.update_status(&actor, id, payload.status)?;
    Ok(Json(job))
}
