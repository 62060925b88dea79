pub mod actor;
pub mod cors;
