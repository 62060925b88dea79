use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    /// `YYYY-MM`
    pub month: String,
    pub total: u64,
    pub reviewed: u64,
    pub shortlisted: u64,
    pub rejected: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobMetric {
    pub job_title: String,
    pub applicants: u64,
    pub avg_days: i64,
    pub posted_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeToHire {
    pub overall_average: i64,
    pub job_metrics: Vec<JobMetric>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgeBucket {
    pub range: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceBucket {
    pub level: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub total_applicants: u64,
    pub age_distribution: Vec<AgeBucket>,
    pub top_skills: Vec<SkillCount>,
    pub experience_distribution: Vec<ExperienceBucket>,
}

/// Platform-wide counters for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub total_users: u64,
    pub total_candidates: u64,
    pub total_employers: u64,
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub total_applications: u64,
    pub pending_applications: u64,
    pub total_interviews: u64,
    pub upcoming_interviews: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemStatsResponse {
    pub success: bool,
    pub data: SystemStats,
}

impl From<SystemStats> for SystemStatsResponse {
    fn from(data: SystemStats) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HiringTrendQuery {
    pub period: Option<String>,
}
