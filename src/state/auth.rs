//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Credentials are the two fixed
//! demo accounts; the signed-in user is persisted as JSON through a
//! [`SessionVault`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::model::{Choice, Role, User};
use crate::util::storage::{SessionVault, StorageError};
use crate::util::validate::{self, SignupForm, ValidationError};

/// A fixed login accepted by [`AuthState::login`].
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub role: Role,
    pub company_name: Option<&'static str>,
    pub created_at: &'static str,
}

impl DemoAccount {
    #[must_use]
    pub fn user(&self) -> User {
        User {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            role: self.role,
            avatar: None,
            company_name: self.company_name.map(str::to_owned),
            created_at: self.created_at.to_owned(),
        }
    }
}

pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        email: "demo@individual.com",
        password: "demo123",
        id: "user-individual",
        name: "Alex Morgan",
        role: Role::Individual,
        company_name: None,
        created_at: "2024-01-15T09:00:00Z",
    },
    DemoAccount {
        email: "demo@organization.com",
        password: "demo123",
        id: "user-organization",
        name: "Jordan Lee",
        role: Role::Organization,
        company_name: Some("Acme Analytics"),
        created_at: "2023-06-01T09:00:00Z",
    },
];

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays `true` until [`AuthState::restore`] has read storage, so
/// guards do not bounce a returning user to `/login` on first render.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the stored session has been read.
    #[must_use]
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn is_organization(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_organization)
    }

    /// Load the persisted session. A corrupt entry is removed and the user
    /// stays signed out.
    pub fn restore(&mut self, vault: &SessionVault) {
        self.user = match vault.load() {
            Ok(user) => user,
            Err(e @ StorageError::Corrupt { .. }) => {
                log::warn!("discarding stored session: {e}");
                if let Err(e) = vault.clear() {
                    log::warn!("failed to clear corrupt session: {e}");
                }
                None
            }
            Err(e) => {
                log::warn!("session storage unreadable: {e}");
                None
            }
        };
        self.loading = false;
    }

    /// Exact match against [`DEMO_ACCOUNTS`]. On success the user is stored;
    /// on failure neither state nor storage changes.
    pub fn login(&mut self, vault: &SessionVault, email: &str, password: &str) -> bool {
        let Some(account) = DEMO_ACCOUNTS.iter().find(|a| a.email == email && a.password == password) else {
            log::info!("login rejected for {email:?}");
            return false;
        };
        let user = account.user();
        if let Err(e) = vault.save(&user) {
            log::warn!("session will not survive reload: {e}");
        }
        log::info!("signed in as {} ({})", user.email, user.role.label());
        self.user = Some(user);
        self.loading = false;
        true
    }

    pub fn logout(&mut self, vault: &SessionVault) {
        if let Err(e) = vault.clear() {
            log::warn!("failed to clear session: {e}");
        }
        self.user = None;
        self.loading = false;
    }

    /// Validate and apply profile edits, rewriting the stored session.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] for bad input or when nobody is signed in.
    pub fn update_profile(
        &mut self,
        vault: &SessionVault,
        name: &str,
        company_name: &str,
    ) -> Result<User, ValidationError> {
        let Some(user) = self.user.as_mut() else {
            return Err(ValidationError::NotFound("Session"));
        };
        let (name, company) = validate::validate_profile(name, company_name, user.role)?;
        user.name = name;
        if company.is_some() {
            user.company_name = company;
        }
        let updated = user.clone();
        if let Err(e) = vault.save(&updated) {
            log::warn!("profile change not persisted: {e}");
        }
        Ok(updated)
    }

    /// Mock signup: validates the form but creates no account.
    ///
    /// # Errors
    ///
    /// The first failing field.
    pub fn signup(form: &SignupForm) -> Result<SignupForm, ValidationError> {
        let form = validate::validate_signup(form)?;
        log::info!("signup accepted for {} (mock, no account created)", form.email);
        Ok(form)
    }
}
