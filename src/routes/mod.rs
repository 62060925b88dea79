pub mod admin;
pub mod analytics;
pub mod applications;
pub mod candidates;
pub mod health;
pub mod interviews;
pub mod jobs;

use axum::{
    response::Json,
    routing::{get, patch, post, put},
    Router,
};
use utoipa::OpenApi;

use crate::{
    dto::{
        analytics_dto::{
            AgeBucket, Demographics, ExperienceBucket, JobMetric, MonthlyBucket, SkillCount,
            SystemStats, SystemStatsResponse, TimeToHire,
        },
        application_dto::{
            ApplicantApplication, ApplicantListResponse, ApplicantSummary, ApplicationListResponse,
            ApplicationResponse, ApplyPayload, UpdateApplicationStatusPayload,
        },
        candidate_dto::UpdateProfilePayload,
        filter_dto::{CandidateSearchResponse, JobListResponse},
        interview_dto::{
            InterviewListResponse, InterviewResponse, ScheduleInterviewPayload,
            UpdateInterviewStatusPayload,
        },
        job_dto::{CreateJobPayload, EmployerJobsResponse, JobResponse, UpdateJobStatusPayload},
    },
    middleware::actor::resolve_actor,
    models::{
        application::{ApplicationRecord, ApplicationStatus},
        candidate::{CandidateRecord, EmploymentPreference, JobPreferences, WorkModePreference},
        interview::{InterviewMode, InterviewRecord, InterviewStatus},
        job::{EmploymentType, JobRecord, JobStatus, WorkMode},
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        jobs::list_jobs,
        jobs::get_job,
        jobs::my_jobs,
        jobs::create_job,
        jobs::update_job_status,
        candidates::search_candidates,
        candidates::update_profile,
        applications::apply,
        applications::update_application_status,
        applications::employer_applicants,
        applications::my_applications,
        applications::job_applications,
        applications::get_application,
        interviews::schedule_interview,
        interviews::my_interviews,
        interviews::get_interview,
        interviews::update_interview_status,
        interviews::delete_interview,
        analytics::hiring_trends,
        analytics::time_to_hire,
        analytics::demographics,
        admin::system_stats,
    ),
    components(schemas(
        CandidateRecord,
        JobPreferences,
        EmploymentPreference,
        WorkModePreference,
        JobRecord,
        EmploymentType,
        WorkMode,
        JobStatus,
        ApplicationRecord,
        ApplicationStatus,
        InterviewRecord,
        InterviewMode,
        InterviewStatus,
        CandidateSearchResponse,
        JobListResponse,
        JobResponse,
        EmployerJobsResponse,
        CreateJobPayload,
        UpdateJobStatusPayload,
        UpdateProfilePayload,
        ApplyPayload,
        UpdateApplicationStatusPayload,
        ApplicationResponse,
        ApplicationListResponse,
        ApplicantApplication,
        ApplicantSummary,
        ApplicantListResponse,
        ScheduleInterviewPayload,
        UpdateInterviewStatusPayload,
        InterviewResponse,
        InterviewListResponse,
        MonthlyBucket,
        JobMetric,
        TimeToHire,
        AgeBucket,
        SkillCount,
        ExperienceBucket,
        Demographics,
        SystemStats,
        SystemStatsResponse,
    )),
    tags((name = "hiremate", description = "Applicant filtering, workflow and hiring analytics"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Public routes plus the identity-scoped API. Transport layers (CORS,
/// tracing) are added by the caller.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/jobs", get(jobs::list_jobs))
        .route("/api/jobs/:id", get(jobs::get_job));

    let scoped = Router::new()
        .route("/api/jobs", post(jobs::create_job))
        .route("/api/jobs/employer/my-jobs", get(jobs::my_jobs))
        .route("/api/jobs/:id/status", patch(jobs::update_job_status))
        .route("/api/users/search", get(candidates::search_candidates))
        .route("/api/users/profile", put(candidates::update_profile))
        .route("/api/applications", post(applications::apply))
        .route("/api/applications/:id", get(applications::get_application))
        .route(
            "/api/applications/:id/status",
            patch(applications::update_application_status),
        )
        .route(
            "/api/applications/employer/applicants",
            get(applications::employer_applicants),
        )
        .route(
            "/api/applications/candidate/my-applications",
            get(applications::my_applications),
        )
        .route("/api/applications/job/:id", get(applications::job_applications))
        .route("/api/interviews", post(interviews::schedule_interview))
        .route("/api/interviews/mine", get(interviews::my_interviews))
        .route(
            "/api/interviews/:id/status",
            patch(interviews::update_interview_status),
        )
        .route(
            "/api/interviews/:id",
            get(interviews::get_interview).delete(interviews::delete_interview),
        )
        .route("/api/analytics/hiring-trends", get(analytics::hiring_trends))
        .route("/api/analytics/time-to-hire", get(analytics::time_to_hire))
        .route("/api/analytics/demographics", get(analytics::demographics))
        .route("/api/admin/stats", get(admin::system_stats))
        .route_layer(axum::middleware::from_fn(resolve_actor));

    public.merge(scoped).with_state(state)
}
