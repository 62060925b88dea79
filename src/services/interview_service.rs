use std::sync::Arc;

use uuid::Uuid;

use crate::database::store::RecruitmentStore;
use crate::dto::interview_dto::ScheduleInterviewPayload;
use crate::error::{Error, Result};
use crate::models::interview::{InterviewMode, InterviewRecord, InterviewStatus};
use crate::models::user::{Actor, Role};
use crate::utils::time::now;

#[derive(Clone)]
pub struct InterviewService {
    store: Arc<dyn RecruitmentStore>,
}

impl InterviewService {
    pub fn new(store: Arc<dyn RecruitmentStore>) -> Self {
        Self { store }
    }

    /// The application must belong to one of the employer's jobs and have
    /// moved past `pending` without being rejected.
    pub fn schedule(
        &self,
        actor: &Actor,
        payload: ScheduleInterviewPayload,
    ) -> Result<InterviewRecord> {
        actor.require(&[Role::Employer])?;

        let application = self.store.application(payload.application_id)?.ok_or_else(|| {
            Error::NotFound(format!("Application {} not found", payload.application_id))
        })?;
        let job = self.store.job(application.job_id)?.ok_or_else(|| {
            Error::NotFound(format!("Job {} not found", application.job_id))
        })?;
        if !job.is_owned_by(actor.id) {
            return Err(Error::Forbidden(
                "Interviews can only be scheduled for your own jobs".to_string(),
            ));
        }
        if !application.status.is_review_stage() {
            return Err(Error::BadRequest(format!(
                "Cannot schedule an interview for an application in status {:?}",
                application.status
            )));
        }

        let (meeting_link, location) = match payload.mode {
            InterviewMode::Online => (payload.meeting_link, None),
            InterviewMode::Onsite => (None, payload.location),
        };
        let interview = InterviewRecord {
            id: Uuid::new_v4(),
            application_id: application.id,
            job_id: job.id,
            candidate_id: application.candidate_id,
            employer_id: actor.id,
            date: payload.date,
            time: payload.time.trim().to_string(),
            mode: payload.mode,
            meeting_link,
            location,
            status: InterviewStatus::Scheduled,
            notes: payload.notes,
            created_at: now(),
        };
        let interview = self.store.insert_interview(interview)?;
        tracing::info!(
            interview_id = %interview.id,
            application_id = %application.id,
            date = %interview.date,
            "interview scheduled"
        );
        Ok(interview)
    }

    /// Interviews the actor takes part in, soonest first. Admins see all.
    pub fn list_for(&self, actor: &Actor) -> Result<Vec<InterviewRecord>> {
        let mut interviews: Vec<InterviewRecord> = self
            .store
            .interviews()?
            .into_iter()
            .filter(|i| match actor.role {
                Role::Candidate => i.candidate_id == actor.id,
                Role::Employer => i.employer_id == actor.id,
                Role::Admin => true,
            })
            .collect();
        interviews.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        Ok(interviews)
    }

    /// Visible to its two participants and to admins.
    pub fn get(&self, actor: &Actor, id: Uuid) -> Result<InterviewRecord> {
        let interview = self.find(id)?;
        if !actor.is_admin() && interview.participant(actor.id).is_none() {
            return Err(Error::Forbidden(
                "Not authorized to view this interview".to_string(),
            ));
        }
        Ok(interview)
    }

    pub fn update_status(
        &self,
        actor: &Actor,
        id: Uuid,
        status: InterviewStatus,
    ) -> Result<InterviewRecord> {
        let mut interview = self.find(id)?;
        let participant = interview
            .participant(actor.id)
            .ok_or_else(|| Error::Forbidden("Not a participant of this interview".to_string()))?;

        if interview.status.is_terminal() {
            return Err(Error::BadRequest(format!(
                "Interview is already {:?}",
                interview.status
            )));
        }
        if !participant.may_set(status) {
            tracing::warn!(
                interview_id = %id,
                actor_id = %actor.id,
                ?participant,
                ?status,
                "rejected interview status change"
            );
            return Err(Error::Forbidden(format!(
                "{:?} cannot set interview status to {:?}",
                participant, status
            )));
        }

        interview.status = status;
        self.store.update_interview(interview)
    }

    pub fn delete(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let interview = self.find(id)?;
        if interview.employer_id != actor.id {
            return Err(Error::Forbidden(
                "Only the scheduling employer can delete this interview".to_string(),
            ));
        }
        if !self.store.delete_interview(id)? {
            return Err(Error::NotFound(format!("Interview {} not found", id)));
        }
        tracing::info!(interview_id = %id, "interview deleted");
        Ok(())
    }

    fn find(&self, id: Uuid) -> Result<InterviewRecord> {
        self.store
            .interview(id)?
            .ok_or_else(|| Error::NotFound(format!("Interview {} not found", id)))
    }
}
