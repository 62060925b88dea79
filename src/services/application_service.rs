use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::database::store::RecruitmentStore;
use crate::dto::application_dto::{
    ApplicantApplication, ApplicantSummary, ApplyPayload, UpdateApplicationStatusPayload,
};
use crate::error::{Error, Result};
use crate::models::application::{ApplicationRecord, ApplicationStatus};
use crate::models::job::{JobRecord, JobStatus};
use crate::models::user::{Actor, Role};
use crate::services::filter_service::FilterCriteria;
use crate::utils::time::now;

#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<dyn RecruitmentStore>,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn RecruitmentStore>) -> Self {
        Self { store }
    }

    pub fn apply(&self, actor: &Actor, payload: ApplyPayload) -> Result<ApplicationRecord> {
        actor.require(&[Role::Candidate])?;

        let job = self
            .store
            .job(payload.job_id)?
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", payload.job_id)))?;
        if job.status != JobStatus::Open {
            return Err(Error::BadRequest(
                "This job is no longer accepting applications".to_string(),
            ));
        }

        let application = ApplicationRecord {
            id: Uuid::new_v4(),
            job_id: job.id,
            candidate_id: actor.id,
            status: ApplicationStatus::Pending,
            cover_letter: payload.cover_letter,
            notes: None,
            created_at: now(),
            reviewed_at: None,
        };
        let application = self.store.insert_application(application)?;
        tracing::info!(
            application_id = %application.id,
            job_id = %job.id,
            candidate_id = %actor.id,
            "application submitted"
        );
        Ok(application)
    }

    pub fn update_status(
        &self,
        actor: &Actor,
        id: Uuid,
        payload: UpdateApplicationStatusPayload,
    ) -> Result<ApplicationRecord> {
        actor.require(&[Role::Employer, Role::Admin])?;

        let mut application = self
            .store
            .application(id)?
            .ok_or_else(|| Error::NotFound(format!("Application {} not found", id)))?;
        let job = self.store.job(application.job_id)?.ok_or_else(|| {
            Error::NotFound(format!("Job {} not found", application.job_id))
        })?;
        if !actor.is_admin() && !job.is_owned_by(actor.id) {
            tracing::warn!(application_id = %id, actor_id = %actor.id, "application update by non-owner");
            return Err(Error::Forbidden(
                "Only the posting employer can review this application".to_string(),
            ));
        }

        if application.reviewed_at.is_none() && payload.status != ApplicationStatus::Pending {
            application.reviewed_at = Some(now());
        }
        application.status = payload.status;
        if payload.notes.is_some() {
            application.notes = payload.notes;
        }
        self.store.update_application(application)
    }

    /// The candidate's own applications, newest first.
    pub fn list_for_candidate(&self, actor: &Actor) -> Result<Vec<ApplicationRecord>> {
        actor.require(&[Role::Candidate])?;
        let mut applications: Vec<ApplicationRecord> = self
            .store
            .applications()?
            .into_iter()
            .filter(|a| a.candidate_id == actor.id)
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(applications)
    }

    /// Applications to one job, newest first. Only the owner or an admin may look.
    pub fn list_for_job(&self, actor: &Actor, job_id: Uuid) -> Result<Vec<ApplicationRecord>> {
        actor.require(&[Role::Employer, Role::Admin])?;
        let job = self
            .store
            .job(job_id)?
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", job_id)))?;
        if !actor.is_admin() && !job.is_owned_by(actor.id) {
            return Err(Error::Forbidden(
                "Only the posting employer can view these applications".to_string(),
            ));
        }

        let mut applications: Vec<ApplicationRecord> = self
            .store
            .applications()?
            .into_iter()
            .filter(|a| a.job_id == job_id)
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(applications)
    }

    pub fn get(&self, actor: &Actor, id: Uuid) -> Result<ApplicationRecord> {
        let application = self
            .store
            .application(id)?
            .ok_or_else(|| Error::NotFound(format!("Application {} not found", id)))?;
        if actor.is_admin() || application.candidate_id == actor.id {
            return Ok(application);
        }

        let owns_job = actor.role == Role::Employer
            && self
                .store
                .job(application.job_id)?
                .is_some_and(|job| job.is_owned_by(actor.id));
        if !owns_job {
            return Err(Error::Forbidden(
                "Not authorized to view this application".to_string(),
            ));
        }
        Ok(application)
    }

    /// Unique candidates who applied to the actor's jobs (every job for an
    /// admin), newest application first, narrowed by `criteria`.
    pub fn employer_applicants(
        &self,
        actor: &Actor,
        job_id: Option<Uuid>,
        status: Option<ApplicationStatus>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<ApplicantSummary>> {
        actor.require(&[Role::Employer, Role::Admin])?;

        let scope = actor.employer_scope();
        let jobs: HashMap<Uuid, JobRecord> = self
            .store
            .jobs()?
            .into_iter()
            .filter(|j| scope.map_or(true, |owner| j.is_owned_by(owner)))
            .filter(|j| job_id.map_or(true, |wanted| j.id == wanted))
            .map(|j| (j.id, j))
            .collect();

        let mut applications: Vec<ApplicationRecord> = self
            .store
            .applications()?
            .into_iter()
            .filter(|a| jobs.contains_key(&a.job_id))
            .filter(|a| status.map_or(true, |s| a.status == s))
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut order: Vec<Uuid> = Vec::new();
        let mut grouped: HashMap<Uuid, Vec<ApplicantApplication>> = HashMap::new();
        for application in &applications {
            let entries = grouped.entry(application.candidate_id).or_insert_with(|| {
                order.push(application.candidate_id);
                Vec::new()
            });
            entries.push(ApplicantApplication {
                application_id: application.id,
                job_id: application.job_id,
                job_title: jobs
                    .get(&application.job_id)
                    .map(|j| j.title.clone())
                    .unwrap_or_default(),
                status: application.status,
                applied_at: application.created_at,
            });
        }

        let mut candidates: HashMap<Uuid, _> = self
            .store
            .candidates()?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let applicants: Vec<ApplicantSummary> = order
            .into_iter()
            .filter_map(|candidate_id| {
                let candidate = candidates.remove(&candidate_id)?;
                let applications = grouped.remove(&candidate_id)?;
                let latest = applications.first()?;
                Some(ApplicantSummary {
                    latest_application_status: latest.status,
                    latest_application_date: latest.applied_at,
                    candidate,
                    applications,
                })
            })
            .filter(|summary| criteria.matches(&summary.candidate))
            .collect();

        tracing::debug!(
            applications = applications.len(),
            applicants = applicants.len(),
            "built employer applicants"
        );
        Ok(applicants)
    }
}
