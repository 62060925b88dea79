pub mod lenient;
pub mod time;
pub mod validation;
