use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::candidate::JobPreferences;

/// Profile fields a candidate may set on themselves. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[validate(
        length(min = 1, max = 120),
        custom(function = "crate::utils::validation::not_blank")
    )]
    pub name: Option<String>,
    #[validate(range(min = 14, max = 100))]
    pub age: Option<u32>,
    pub skills: Option<Vec<String>>,
    #[validate(range(max = 60))]
    pub experience: Option<u32>,
    pub job_preferences: Option<JobPreferences>,
}
