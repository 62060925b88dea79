use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::lenient::deserialize_lenient_u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentPreference {
    FullTime,
    PartTime,
    #[default]
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum WorkModePreference {
    Onsite,
    Remote,
    Hybrid,
    #[default]
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobPreferences {
    #[serde(default)]
    pub employment_type: EmploymentPreference,
    #[serde(default)]
    pub work_mode: WorkModePreference,
}

impl JobPreferences {
    /// "both" accepts any requested employment type.
    pub fn accepts_employment(&self, requested: EmploymentPreference) -> bool {
        self.employment_type == requested || self.employment_type == EmploymentPreference::Both
    }

    /// "any" accepts any requested work mode.
    pub fn accepts_work_mode(&self, requested: WorkModePreference) -> bool {
        self.work_mode == requested || self.work_mode == WorkModePreference::Any
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub age: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Years of professional experience.
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub experience: Option<u32>,
    #[serde(default)]
    pub job_preferences: JobPreferences,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
