use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Candidate,
    Employer,
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "candidate" => Ok(Self::Candidate),
            "employer" => Ok(Self::Employer),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// The authenticated caller, as resolved by the upstream identity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require(&self, allowed: &[Role]) -> crate::error::Result<()> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(crate::error::Error::Forbidden(format!(
                "role {:?} is not allowed to perform this action",
                self.role
            )))
        }
    }

    /// Employer scope for analytics and applicant views; admins see everything.
    pub fn employer_scope(&self) -> Option<Uuid> {
        match self.role {
            Role::Admin => None,
            _ => Some(self.id),
        }
    }
}
