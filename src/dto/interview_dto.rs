use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::interview::{InterviewMode, InterviewRecord, InterviewStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_venue"))]
pub struct ScheduleInterviewPayload {
    pub application_id: Uuid,
    pub date: NaiveDate,
    /// Local time, e.g. `14:30`.
    #[validate(length(min = 1, max = 32))]
    pub time: String,
    pub mode: InterviewMode,
    #[validate(url)]
    pub meeting_link: Option<String>,
    pub location: Option<String>,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn validate_venue(payload: &ScheduleInterviewPayload) -> Result<(), ValidationError> {
    match payload.mode {
        InterviewMode::Online if !has_text(payload.meeting_link.as_deref()) => {
            let mut err = ValidationError::new("meeting_link_required");
            err.message = Some("Meeting link is required for online interviews".into());
            Err(err)
        }
        InterviewMode::Onsite if !has_text(payload.location.as_deref()) => {
            let mut err = ValidationError::new("location_required");
            err.message = Some("Location is required for onsite interviews".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateInterviewStatusPayload {
    pub status: InterviewStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResponse {
    pub success: bool,
    pub interview: InterviewRecord,
}

impl From<InterviewRecord> for InterviewResponse {
    fn from(interview: InterviewRecord) -> Self {
        Self {
            success: true,
            interview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewListResponse {
    pub success: bool,
    pub count: usize,
    pub interviews: Vec<InterviewRecord>,
}

impl From<Vec<InterviewRecord>> for InterviewListResponse {
    fn from(interviews: Vec<InterviewRecord>) -> Self {
        Self {
            success: true,
            count: interviews.len(),
            interviews,
        }
    }
}
