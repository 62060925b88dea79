use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum WorkMode {
    Onsite,
    Remote,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    OnHold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub experience_required: u32,
    pub employment_type: EmploymentType,
    pub work_mode: WorkMode,
    pub location: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl JobRecord {
    pub fn is_owned_by(&self, employer_id: Uuid) -> bool {
        self.employer_id == employer_id
    }
}
