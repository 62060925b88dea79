use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::models::candidate::{CandidateRecord, EmploymentPreference, WorkModePreference};
use crate::models::job::{JobRecord, JobStatus};
use crate::services::filter_service::{FilterCriteria, JobFilterCriteria};
use crate::utils::lenient::parse_u32;

const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Raw query for `/api/users/search`.
///
/// Everything stays a string here; conversion into criteria applies the
/// parse-with-fallback rules (malformed numbers and "any" mean "not set").
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateSearchQuery {
    pub search: Option<String>,
    /// Comma separated.
    pub skills: Option<String>,
    pub min_age: Option<String>,
    pub max_age: Option<String>,
    pub employment_type: Option<String>,
    pub work_mode: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl CandidateSearchQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.clone(),
            skills: split_list(self.skills.as_deref()),
            age_min: self.min_age.as_deref().and_then(parse_u32),
            age_max: self.max_age.as_deref().and_then(parse_u32),
            employment_type: parse_choice::<EmploymentPreference>(self.employment_type.as_deref())
                .filter(|t| *t != EmploymentPreference::Both),
            work_mode: parse_choice::<WorkModePreference>(self.work_mode.as_deref())
                .filter(|m| *m != WorkModePreference::Any),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct JobListQuery {
    pub search: Option<String>,
    pub skills: Option<String>,
    pub employment_type: Option<String>,
    /// Older clients send `jobType`.
    pub job_type: Option<String>,
    pub work_mode: Option<String>,
    pub min_experience: Option<String>,
    pub max_experience: Option<String>,
    pub status: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl JobListQuery {
    /// Listing shows open jobs unless the query names a status.
    pub fn criteria(&self) -> JobFilterCriteria {
        let employment = self.employment_type.as_deref().or(self.job_type.as_deref());
        JobFilterCriteria {
            search: self.search.clone(),
            skills: split_list(self.skills.as_deref()),
            employment_type: parse_choice(employment),
            work_mode: parse_choice(self.work_mode.as_deref()),
            min_experience: self.min_experience.as_deref().and_then(parse_u32),
            max_experience: self.max_experience.as_deref().and_then(parse_u32),
            status: Some(parse_choice(self.status.as_deref()).unwrap_or(JobStatus::Open)),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}

/// Parses an enum by its serde name; blank, "any" or unknown values are `None`.
pub fn parse_choice<T: DeserializeOwned>(raw: Option<&str>) -> Option<T> {
    let value = raw?.trim().to_ascii_lowercase();
    if value.is_empty() || value == "any" {
        return None;
    }
    serde_json::from_value(JsonValue::String(value)).ok()
}

pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page.and_then(parse_u32).filter(|p| *p >= 1).unwrap_or(1);
        let limit = limit
            .and_then(parse_u32)
            .filter(|l| *l >= 1)
            .map(|l| l.min(MAX_PAGE_SIZE))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page, limit }
    }

    pub fn slice<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len() as u64;
        let limit = u64::from(self.limit);
        let skip = (u64::from(self.page) - 1) * limit;
        let items: Vec<T> = items
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(self.limit as usize)
            .collect();

        Page {
            items,
            total,
            page: self.page,
            pages: total.div_ceil(limit),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSearchResponse {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    pub page: u32,
    pub pages: u64,
    pub candidates: Vec<CandidateRecord>,
}

impl From<Page<CandidateRecord>> for CandidateSearchResponse {
    fn from(value: Page<CandidateRecord>) -> Self {
        Self {
            success: true,
            count: value.items.len(),
            total: value.total,
            page: value.page,
            pages: value.pages,
            candidates: value.items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    pub page: u32,
    pub pages: u64,
    pub jobs: Vec<JobRecord>,
}

impl From<Page<JobRecord>> for JobListResponse {
    fn from(value: Page<JobRecord>) -> Self {
        Self {
            success: true,
            count: value.items.len(),
            total: value.total,
            page: value.page,
            pages: value.pages,
            jobs: value.items,
        }
    }
}
