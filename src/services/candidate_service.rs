use std::sync::Arc;

use crate::database::store::RecruitmentStore;
use crate::dto::candidate_dto::UpdateProfilePayload;
use crate::dto::filter_dto::{Page, PageRequest};
use crate::error::{Error, Result};
use crate::models::candidate::{CandidateRecord, JobPreferences};
use crate::models::user::{Actor, Role};
use crate::services::filter_service::{filter_candidates, FilterCriteria};
use crate::utils::time::now;

#[derive(Clone)]
pub struct CandidateService {
    store: Arc<dyn RecruitmentStore>,
}

impl CandidateService {
    pub fn new(store: Arc<dyn RecruitmentStore>) -> Self {
        Self { store }
    }

    pub fn search(
        &self,
        criteria: &FilterCriteria,
        page: PageRequest,
    ) -> Result<Page<CandidateRecord>> {
        let matched = filter_candidates(self.store.candidates()?, criteria);
        tracing::debug!(matched = matched.len(), page = page.page, "candidate search");
        Ok(page.slice(matched))
    }

    /// Creates the caller's profile on first save; later saves only touch the
    /// fields present in the payload.
    pub fn upsert_profile(
        &self,
        actor: &Actor,
        payload: UpdateProfilePayload,
    ) -> Result<CandidateRecord> {
        actor.require(&[Role::Candidate])?;
        if payload.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(Error::BadRequest("name must not be blank".to_string()));
        }

        let timestamp = now();
        let mut record = match self.store.candidate(actor.id)? {
            Some(existing) => existing,
            None => {
                let name = payload
                    .name
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .ok_or_else(|| {
                        Error::BadRequest("name is required when creating a profile".to_string())
                    })?;
                CandidateRecord {
                    id: actor.id,
                    name,
                    age: None,
                    skills: Vec::new(),
                    experience: None,
                    job_preferences: JobPreferences::default(),
                    created_at: Some(timestamp),
                    updated_at: None,
                }
            }
        };

        if let Some(name) = payload.name {
            record.name = name.trim().to_string();
        }
        if let Some(age) = payload.age {
            record.age = Some(age);
        }
        if let Some(skills) = payload.skills {
            record.skills = skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(experience) = payload.experience {
            record.experience = Some(experience);
        }
        if let Some(preferences) = payload.job_preferences {
            record.job_preferences = preferences;
        }
        record.updated_at = Some(timestamp);

        self.store.upsert_candidate(record)
    }
}
