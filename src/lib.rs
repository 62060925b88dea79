pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::database::store::RecruitmentStore;
use crate::services::{
    analytics_service::AnalyticsService, application_service::ApplicationService,
    candidate_service::CandidateService, interview_service::InterviewService,
    job_service::JobService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub candidate_service: CandidateService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub interview_service: InterviewService,
    pub analytics_service: AnalyticsService,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn RecruitmentStore>) -> Self {
        Self {
            config: Arc::new(config),
            candidate_service: CandidateService::new(store.clone()),
            job_service: JobService::new(store.clone()),
            application_service: ApplicationService::new(store.clone()),
            interview_service: InterviewService::new(store.clone()),
            analytics_service: AnalyticsService::new(store),
        }
    }
}
