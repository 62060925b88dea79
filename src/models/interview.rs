use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InterviewMode {
    Online,
    Onsite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    #[default]
    Scheduled,
    Confirmed,
    Declined,
    Completed,
    Cancelled,
}

impl InterviewStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Which side of an interview an actor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    Candidate,
    Employer,
}

impl Participant {
    pub fn may_set(self, status: InterviewStatus) -> bool {
        match self {
            Participant::Candidate => {
                matches!(status, InterviewStatus::Confirmed | InterviewStatus::Declined)
            }
            Participant::Employer => status != InterviewStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub id: Uuid,
    pub application_id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub employer_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub mode: InterviewMode,
    pub meeting_link: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub status: InterviewStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl InterviewRecord {
    pub fn participant(&self, actor_id: Uuid) -> Option<Participant> {
        if actor_id == self.candidate_id {
            Some(Participant::Candidate)
        } else if actor_id == self.employer_id {
            Some(Participant::Employer)
        } else {
            None
        }
    }
}
