//! Signed-in account records.

use serde::{Deserialize, Serialize};

use super::Choice;

/// Account tier; gates organization-only sections such as Team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Individual,
    Organization,
}

impl Choice for Role {
    const ALL: &'static [Self] = &[Self::Individual, Self::Organization];

    fn value(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Organization => "organization",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Organization => "Organization",
        }
    }
}

/// The session user persisted in `localStorage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    pub created_at: String,
}

impl User {
    #[must_use]
    pub fn is_organization(&self) -> bool {
        self.role == Role::Organization
    }

    /// Company name for organizations, personal name otherwise.
    #[must_use]
    pub fn display_org(&self) -> &str {
        match (self.role, self.company_name.as_deref()) {
            (Role::Organization, Some(company)) => company,
            _ => &self.name,
        }
    }
}
