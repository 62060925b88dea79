pub mod analytics_service;
pub mod application_service;
pub mod candidate_service;
pub mod filter_service;
pub mod interview_service;
pub mod job_service;
