pub mod application;
pub mod candidate;
pub mod interview;
pub mod job;
pub mod user;
