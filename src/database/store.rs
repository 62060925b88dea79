use std::path::Path;
use std::sync::RwLock;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::application::ApplicationRecord;
use crate::models::candidate::CandidateRecord;
use crate::models::interview::InterviewRecord;
use crate::models::job::JobRecord;

/// Source of already-fetched records for the engine and workflow services.
#[cfg_attr(test, mockall::automock)]
pub trait RecruitmentStore: Send + Sync {
    fn candidates(&self) -> Result<Vec<CandidateRecord>>;
    fn candidate(&self, id: Uuid) -> Result<Option<CandidateRecord>>;
    fn upsert_candidate(&self, candidate: CandidateRecord) -> Result<CandidateRecord>;

    fn jobs(&self) -> Result<Vec<JobRecord>>;
    fn job(&self, id: Uuid) -> Result<Option<JobRecord>>;
    fn insert_job(&self, job: JobRecord) -> Result<JobRecord>;
    fn update_job(&self, job: JobRecord) -> Result<JobRecord>;

    fn applications(&self) -> Result<Vec<ApplicationRecord>>;
    fn application(&self, id: Uuid) -> Result<Option<ApplicationRecord>>;
    /// Fails with `Error::Conflict` if the candidate already applied to the job.
    fn insert_application(&self, application: ApplicationRecord) -> Result<ApplicationRecord>;
    fn update_application(&self, application: ApplicationRecord) -> Result<ApplicationRecord>;

    fn interviews(&self) -> Result<Vec<InterviewRecord>>;
    fn interview(&self, id: Uuid) -> Result<Option<InterviewRecord>>;
    /// Fails with `Error::Conflict` if the application already has an interview.
    fn insert_interview(&self, interview: InterviewRecord) -> Result<InterviewRecord>;
    fn update_interview(&self, interview: InterviewRecord) -> Result<InterviewRecord>;
    fn delete_interview(&self, id: Uuid) -> Result<bool>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub candidates: Vec<CandidateRecord>,
    pub jobs: Vec<JobRecord>,
    pub applications: Vec<ApplicationRecord>,
    pub interviews: Vec<InterviewRecord>,
}

/// Process-local snapshot with no durability.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: RwLock<Snapshot>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let store = Self::new();
        {
            let mut data = store.data.write()?;
            data.candidates = snapshot.candidates;
            data.jobs = snapshot.jobs;
        }
        for application in snapshot.applications {
            store.insert_application(application)?;
        }
        for interview in snapshot.interviews {
            store.insert_interview(interview)?;
        }
        Ok(store)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading seed data from {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("parsing seed data from {}", path.display()))?;
        Self::from_snapshot(snapshot)
    }
}

fn replace_by_id<T, F>(items: &mut [T], item: T, id_of: F, kind: &str) -> Result<T>
where
    T: Clone,
    F: Fn(&T) -> Uuid,
{
    let id = id_of(&item);
    let slot = items
        .iter_mut()
        .find(|existing| id_of(existing) == id)
        .ok_or_else(|| Error::NotFound(format!("{kind} {id} not found")))?;
    *slot = item.clone();
    Ok(item)
}

impl RecruitmentStore for InMemoryStore {
    fn candidates(&self) -> Result<Vec<CandidateRecord>> {
        Ok(self.data.read()?.candidates.clone())
    }

    fn candidate(&self, id: Uuid) -> Result<Option<CandidateRecord>> {
        Ok(self
            .data
            .read()?
            .candidates
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    fn upsert_candidate(&self, candidate: CandidateRecord) -> Result<CandidateRecord> {
        let mut data = self.data.write()?;
        match data.candidates.iter_mut().find(|c| c.id == candidate.id) {
            Some(existing) => *existing = candidate.clone(),
            None => data.candidates.push(candidate.clone()),
        }
        Ok(candidate)
    }

    fn jobs(&self) -> Result<Vec<JobRecord>> {
        Ok(self.data.read()?.jobs.clone())
    }

    fn job(&self, id: Uuid) -> Result<Option<JobRecord>> {
        Ok(self.data.read()?.jobs.iter().find(|j| j.id == id).cloned())
    }

    fn insert_job(&self, job: JobRecord) -> Result<JobRecord> {
        let mut data = self.data.write()?;
        if data.jobs.iter().any(|j| j.id == job.id) {
            return Err(Error::Conflict(format!("job {} already exists", job.id)));
        }
        data.jobs.push(job.clone());
        Ok(job)
    }

    fn update_job(&self, job: JobRecord) -> Result<JobRecord> {
        let mut data = self.data.write()?;
        replace_by_id(&mut data.jobs, job, |j| j.id, "job")
    }

    fn applications(&self) -> Result<Vec<ApplicationRecord>> {
        Ok(self.data.read()?.applications.clone())
    }

    fn application(&self, id: Uuid) -> Result<Option<ApplicationRecord>> {
        Ok(self
            .data
            .read()?
            .applications
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    fn insert_application(&self, application: ApplicationRecord) -> Result<ApplicationRecord> {
        let mut data = self.data.write()?;
        let duplicate = data.applications.iter().any(|existing| {
            existing.id == application.id
                || (existing.job_id == application.job_id
                    && existing.candidate_id == application.candidate_id)
        });
        if duplicate {
            return Err(Error::Conflict(
                "Candidate has already applied for this job".to_string(),
            ));
        }
        data.applications.push(application.clone());
        Ok(application)
    }

    fn update_application(&self, application: ApplicationRecord) -> Result<ApplicationRecord> {
        let mut data = self.data.write()?;
        replace_by_id(&mut data.applications, application, |a| a.id, "application")
    }

    fn interviews(&self) -> Result<Vec<InterviewRecord>> {
        Ok(self.data.read()?.interviews.clone())
    }

    fn interview(&self, id: Uuid) -> Result<Option<InterviewRecord>> {
        Ok(self
            .data
            .read()?
            .interviews
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    fn insert_interview(&self, interview: InterviewRecord) -> Result<InterviewRecord> {
        let mut data = self.data.write()?;
        let duplicate = data.interviews.iter().any(|existing| {
            existing.id == interview.id || existing.application_id == interview.application_id
        });
        if duplicate {
            return Err(Error::Conflict(
                "Interview already scheduled for this application".to_string(),
            ));
        }
        data.interviews.push(interview.clone());
        Ok(interview)
    }

    fn update_interview(&self, interview: InterviewRecord) -> Result<InterviewRecord> {
        let mut data = self.data.write()?;
        replace_by_id(&mut data.interviews, interview, |i| i.id, "interview")
    }

    fn delete_interview(&self, id: Uuid) -> Result<bool> {
        let mut data = self.data.write()?;
        let before = data.interviews.len();
        data.interviews.retain(|i| i.id != id);
        Ok(data.interviews.len() != before)
    }
}
