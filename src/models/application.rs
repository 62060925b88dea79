use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    /// Stages after which an employer may schedule an interview.
    pub fn is_review_stage(self) -> bool {
        matches!(self, Self::Reviewed | Self::Shortlisted | Self::Accepted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub notes: Option<String>,
    /// Submission time, also reported as "applied at".
    pub created_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}
