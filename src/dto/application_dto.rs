use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::filter_dto::{parse_choice, CandidateSearchQuery, PageRequest};
use crate::error::{Error, Result};
use crate::models::application::{ApplicationRecord, ApplicationStatus};
use crate::models::candidate::CandidateRecord;
use crate::services::filter_service::FilterCriteria;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyPayload {
    pub job_id: Uuid,
    #[validate(length(max = 5000))]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateApplicationStatusPayload {
    pub status: ApplicationStatus,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Query for the employer applicants view: candidate filters plus
/// application-level `status` and `jobId`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicantsQuery {
    pub job_id: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub skills: Option<String>,
    pub min_age: Option<String>,
    pub max_age: Option<String>,
    pub employment_type: Option<String>,
    pub work_mode: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ApplicantsQuery {
    pub fn criteria(&self) -> FilterCriteria {
        CandidateSearchQuery {
            search: self.search.clone(),
            skills: self.skills.clone(),
            min_age: self.min_age.clone(),
            max_age: self.max_age.clone(),
            employment_type: self.employment_type.clone(),
            work_mode: self.work_mode.clone(),
            page: None,
            limit: None,
        }
        .criteria()
    }

    pub fn status(&self) -> Option<ApplicationStatus> {
        parse_choice(self.status.as_deref())
    }

    /// Blank means every job; anything else must be a valid id.
    pub fn job_id(&self) -> Result<Option<Uuid>> {
        let Some(raw) = self.job_id.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        Uuid::parse_str(raw)
            .map(Some)
            .map_err(|_| Error::BadRequest(format!("Invalid jobId: {raw}")))
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantApplication {
    pub application_id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// One row per candidate, carrying every application they made to the
/// employer's jobs, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSummary {
    #[serde(flatten)]
    pub candidate: CandidateRecord,
    pub applications: Vec<ApplicantApplication>,
    pub latest_application_status: ApplicationStatus,
    pub latest_application_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantListResponse {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    pub page: u32,
    pub pages: u64,
    pub applicants: Vec<ApplicantSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub success: bool,
    pub application: ApplicationRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListResponse {
    pub success: bool,
    pub count: usize,
    pub applications: Vec<ApplicationRecord>,
}

impl From<Vec<ApplicationRecord>> for ApplicationListResponse {
    fn from(applications: Vec<ApplicationRecord>) -> Self {
        Self {
            success: true,
            count: applications.len(),
            applications,
        }
    }
}

impl From<ApplicationRecord> for ApplicationResponse {
    fn from(application: ApplicationRecord) -> Self {
        Self {
            success: true,
            application,
        }
    }
}
