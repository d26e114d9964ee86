//! Organization team roster. Invites, removals and role changes only touch
//! local state; nothing is sent anywhere.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use crate::data;
use crate::model::{MemberStatus, TeamMember, TeamRole};
use crate::state::{matches_query, new_id};
use crate::util::format::now_rfc3339;
use crate::util::validate::{ValidationError, validate_email};

#[derive(Clone, Debug, Default)]
pub struct TeamRoster {
    pub members: Vec<TeamMember>,
}

impl TeamRoster {
    #[must_use]
    pub fn seeded() -> Self {
        Self { members: data::team_members() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Add a pending member for `email`.
    ///
    /// # Errors
    ///
    /// Malformed email, or [`ValidationError::DuplicateMember`] when the
    /// address is already on the roster.
    pub fn invite(&mut self, email: &str, role: TeamRole) -> Result<TeamMember, ValidationError> {
        let email = validate_email(email)?;
        if self.members.iter().any(|m| m.email.eq_ignore_ascii_case(&email)) {
            return Err(ValidationError::DuplicateMember(email));
        }
        let member = TeamMember {
            id: new_id("tm"),
            name: name_from_email(&email),
            email,
            role,
            status: MemberStatus::Pending,
            joined_at: now_rfc3339(),
        };
        log::info!("invited {} as {role:?}", member.email);
        self.members.push(member.clone());
        Ok(member)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        self.members.len() != before
    }

    /// # Errors
    ///
    /// [`ValidationError::NotFound`] for an unknown id.
    pub fn change_role(&mut self, id: &str, role: TeamRole) -> Result<(), ValidationError> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ValidationError::NotFound("Member"))?;
        member.role = role;
        Ok(())
    }

    /// Members whose name or email contains `query`, optionally limited to
    /// one status.
    #[must_use]
    pub fn filtered(&self, query: &str, status: Option<MemberStatus>) -> Vec<TeamMember> {
        self.members
            .iter()
            .filter(|m| status.is_none_or(|s| m.status == s))
            .filter(|m| matches_query(query, &[&m.name, &m.email]))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn count_by_status(&self, status: MemberStatus) -> usize {
        self.members.iter().filter(|m| m.status == status).count()
    }
}

/// Display name guessed from the local part: `jane.doe` -> `Jane Doe`.
#[must_use]
pub fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let words: Vec<String> = local
        .split(['.', '_', '-', '+'])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() { local.to_owned() } else { words.join(" ") }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
