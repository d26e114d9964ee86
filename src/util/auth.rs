//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `/app` shell and the auth pages apply identical redirect rules, so the
//! decision is a pure function of the session user and the path.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::model::{Role, User};
use crate::state::auth::AuthState;
use crate::state::nav::{NavState, replace_with};

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/app/dashboard";
pub const TEAM_PATH: &str = "/app/team";

/// Outcome of checking a path against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    /// No session: send to the login page.
    Login,
    /// Signed in but not permitted here (or already signed in on an auth page).
    Dashboard,
}

impl Access {
    /// Redirect target, `None` when access is allowed.
    #[must_use]
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::Login => Some(LOGIN_PATH),
            Self::Dashboard => Some(DASHBOARD_PATH),
        }
    }
}

/// Redirect decision once the session has been restored.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where a signed-in session should be sent from `path`, once restored.
#[must_use]
pub fn signed_in_redirect(state: &AuthState, path: &str) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    let user = state.user.as_ref()?;
    route_access(Some(user), path).redirect()
}

#[must_use]
pub fn is_auth_page(path: &str) -> bool {
    path == LOGIN_PATH || path == SIGNUP_PATH
}

/// Role required to open `path`, if any.
#[must_use]
pub fn required_role(path: &str) -> Option<Role> {
    (path == TEAM_PATH || path.starts_with("/app/team/")).then_some(Role::Organization)
}

#[must_use]
pub fn route_access(user: Option<&User>, path: &str) -> Access {
    match user {
        None if is_auth_page(path) => Access::Allow,
        None => Access::Login,
        Some(_) if is_auth_page(path) => Access::Dashboard,
        Some(user) => match required_role(path) {
            Some(role) if user.role != role => Access::Dashboard,
            _ => Access::Allow,
        },
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let nav = use_context::<RwSignal<NavState>>();
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            log::debug!("no session; redirecting to {LOGIN_PATH}");
            replace_with(nav, &navigate, LOGIN_PATH);
        }
    });
}

/// Send an already signed-in session away from the auth page at `path`.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F, path: &'static str)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let nav = use_context::<RwSignal<NavState>>();
    Effect::new(move || {
        if let Some(target) = auth.with(|state| signed_in_redirect(state, path)) {
            log::debug!("session present on {path}; redirecting to {target}");
            replace_with(nav, &navigate, target);
        }
    });
}
