use std::sync::Arc;

use uuid::Uuid;

use crate::database::store::RecruitmentStore;
use crate::dto::filter_dto::{Page, PageRequest};
use crate::dto::job_dto::CreateJobPayload;
use crate::error::{Error, Result};
use crate::models::job::{JobRecord, JobStatus};
use crate::models::user::{Actor, Role};
use crate::services::filter_service::{filter_jobs, JobFilterCriteria};
use crate::utils::time::now;

#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn RecruitmentStore>,
}

impl JobService {
    pub fn new(store: Arc<dyn RecruitmentStore>) -> Self {
        Self { store }
    }

    /// Newest postings first.
    pub fn list(&self, criteria: &JobFilterCriteria, page: PageRequest) -> Result<Page<JobRecord>> {
        let mut jobs = self.store.jobs()?;
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let matched = filter_jobs(jobs, criteria);
        tracing::debug!(matched = matched.len(), page = page.page, "job listing");
        Ok(page.slice(matched))
    }

    pub fn get(&self, id: Uuid) -> Result<JobRecord> {
        self.store
            .job(id)?
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))
    }

    /// Every posting of the calling employer, whatever its status, newest first.
    pub fn list_for_employer(&self, actor: &Actor) -> Result<Vec<JobRecord>> {
        actor.require(&[Role::Employer])?;
        let mut jobs: Vec<JobRecord> = self
            .store
            .jobs()?
            .into_iter()
            .filter(|j| j.is_owned_by(actor.id))
            .collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    pub fn create(&self, actor: &Actor, payload: CreateJobPayload) -> Result<JobRecord> {
        actor.require(&[Role::Employer])?;

        let title = payload.title.trim();
        if title.is_empty() {
            return Err(Error::BadRequest("Job title must not be blank".to_string()));
        }

        let job = JobRecord {
            id: Uuid::new_v4(),
            employer_id: actor.id,
            title: title.to_string(),
            description: payload.description,
            company_name: payload.company_name,
            required_skills: payload
                .required_skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            experience_required: payload.experience_required,
            employment_type: payload.employment_type,
            work_mode: payload.work_mode,
            location: payload.location,
            status: JobStatus::Open,
            created_at: now(),
            updated_at: None,
        };
        self.store.insert_job(job)
    }

    pub fn update_status(&self, actor: &Actor, id: Uuid, status: JobStatus) -> Result<JobRecord> {
        actor.require(&[Role::Employer, Role::Admin])?;

        let mut job = self
            .store
            .job(id)?
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))?;
        if !actor.is_admin() && !job.is_owned_by(actor.id) {
            tracing::warn!(job_id = %id, actor_id = %actor.id, "job status change by non-owner");
            return Err(Error::Forbidden(
                "Only the posting employer can change this job".to_string(),
            ));
        }

        job.status = status;
        job.updated_at = Some(now());
        self.store.update_job(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::store::InMemoryStore;
    use crate::models::job::{EmploymentType, WorkMode};

    fn payload(title: &str) -> CreateJobPayload {
        CreateJobPayload {
            title: title.to_string(),
            description: "Ship features".to_string(),
            company_name: "Acme".to_string(),
            required_skills: vec!["Rust".into(), "".into()],
            experience_required: 2,
            employment_type: EmploymentType::FullTime,
            work_mode: WorkMode::Remote,
            location: None,
        }
    }

    #[test]
    fn created_jobs_are_open_and_owned() {
        let service = JobService::new(Arc::new(InMemoryStore::new()));
        let employer = Actor::new(Uuid::new_v4(), Role::Employer);

        let job = service.create(&employer, payload("Backend")).expect("create");
        assert_eq!(job.status, JobStatus::Open);
        assert!(job.is_owned_by(employer.id));
        assert_eq!(job.required_skills, vec!["Rust"]);
    }

    #[test]
    fn listing_hides_closed_jobs_by_default() {
        let service = JobService::new(Arc::new(InMemoryStore::new()));
        let employer = Actor::new(Uuid::new_v4(), Role::Employer);
        let open = service.create(&employer, payload("Open role")).expect("create");
        let closed = service.create(&employer, payload("Closed role")).expect("create");
        service
            .update_status(&employer, closed.id, JobStatus::Closed)
            .expect("close");

        let criteria = JobFilterCriteria {
            status: Some(JobStatus::Open),
            ..JobFilterCriteria::default()
        };
        let page = service.list(&criteria, PageRequest::default()).expect("list");
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, open.id);
    }

    #[test]
    fn only_owner_or_admin_changes_status() {
        let service = JobService::new(Arc::new(InMemoryStore::new()));
        let owner = Actor::new(Uuid::new_v4(), Role::Employer);
        let other = Actor::new(Uuid::new_v4(), Role::Employer);
        let admin = Actor::new(Uuid::new_v4(), Role::Admin);
        let job = service.create(&owner, payload("Role")).expect("create");

        let err = service
            .update_status(&other, job.id, JobStatus::Closed)
            .expect_err("not owner");
        assert!(matches!(err, Error::Forbidden(_)));

        let updated = service
            .update_status(&admin, job.id, JobStatus::OnHold)
            .expect("admin may");
        assert_eq!(updated.status, JobStatus::OnHold);

        let err = service
            .update_status(&owner, Uuid::new_v4(), JobStatus::Closed)
            .expect_err("missing");
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn blank_titles_are_rejected() {
        let service = JobService::new(Arc::new(InMemoryStore::new()));
        let employer = Actor::new(Uuid::new_v4(), Role::Employer);

        let err = service.create(&employer, payload("   ")).expect_err("blank");
        assert!(matches!(err, Error::BadRequest(_)));
        let job = service.create(&employer, payload("  Backend  ")).expect("create");
        assert_eq!(job.title, "Backend");
    }

    #[test]
    fn employer_sees_all_own_jobs_newest_first() {
        let store = Arc::new(InMemoryStore::new());
        let service = JobService::new(store.clone());
        let employer = Actor::new(Uuid::new_v4(), Role::Employer);
        let other = Actor::new(Uuid::new_v4(), Role::Employer);

        let mut older = service.create(&employer, payload("Older")).expect("create");
        older.created_at = older.created_at - chrono::Duration::days(5);
        older.status = JobStatus::Closed;
        store.update_job(older.clone()).expect("backdate");
        let newer = service.create(&employer, payload("Newer")).expect("create");
        service.create(&other, payload("Elsewhere")).expect("create");

        let mine = service.list_for_employer(&employer).expect("list");
        let ids: Vec<Uuid> = mine.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);

        let candidate = Actor::new(Uuid::new_v4(), Role::Candidate);
        assert!(matches!(
            service.list_for_employer(&candidate),
            Err(Error::Forbidden(_))
        ));
    }

    #[test]
    fn single_job_lookup() {
        let service = JobService::new(Arc::new(InMemoryStore::new()));
        let employer = Actor::new(Uuid::new_v4(), Role::Employer);
        let job = service.create(&employer, payload("Role")).expect("create");

        assert_eq!(service.get(job.id).expect("found").title, "Role");
        assert!(matches!(service.get(Uuid::new_v4()), Err(Error::NotFound(_))));
    }

    #[test]
    fn candidates_cannot_post_jobs() {
        let service = JobService::new(Arc::new(InMemoryStore::new()));
        let candidate = Actor::new(Uuid::new_v4(), Role::Candidate);
        assert!(matches!(
            service.create(&candidate, payload("Nope")),
            Err(Error::Forbidden(_))
        ));
    }
}
