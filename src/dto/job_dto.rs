use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::job::{EmploymentType, JobRecord, JobStatus, WorkMode};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    #[validate(
        length(min = 1, max = 200),
        custom(function = "crate::utils::validation::not_blank")
    )]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    #[validate(range(max = 60))]
    pub experience_required: u32,
    pub employment_type: EmploymentType,
    pub work_mode: WorkMode,
    #[validate(length(min = 1))]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateJobStatusPayload {
    pub status: JobStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JobResponse {
    pub success: bool,
    pub job: JobRecord,
}

impl From<JobRecord> for JobResponse {
    fn from(job: JobRecord) -> Self {
        Self { success: true, job }
    }
}

/// Unpaginated list, used for an employer's own postings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployerJobsResponse {
    pub success: bool,
    pub count: usize,
    pub jobs: Vec<JobRecord>,
}

impl From<Vec<JobRecord>> for EmployerJobsResponse {
    fn from(jobs: Vec<JobRecord>) -> Self {
        Self {
            success: true,
            count: jobs.len(),
            jobs,
        }
    }
}
