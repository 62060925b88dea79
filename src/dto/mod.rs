pub mod analytics_dto;
pub mod application_dto;
pub mod candidate_dto;
pub mod filter_dto;
pub mod interview_dto;
pub mod job_dto;
