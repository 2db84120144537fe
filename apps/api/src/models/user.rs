use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Searches job postings.
    Seeker,
    /// Searches candidate profiles.
    Company,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Seeker => "seeker",
            Role::Company => "company",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "seeker" => Some(Role::Seeker),
            "company" => Some(Role::Company),
            _ => None,
        }
    }
}

/// The signed-in user. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Mock identity for a role; no credentials are involved.
    pub fn mock(role: Role) -> Self {
        let email = match role {
            Role::Seeker => "seeker@example.com",
            Role::Company => "company@example.com",
        };
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            role,
        }
    }
}
