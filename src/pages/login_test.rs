use std::sync::Arc;

use super::*;
use crate::util::storage::MemoryStore;

fn vault() -> SessionVault {
    SessionVault::new(Arc::new(MemoryStore::default()), "session")
}

#[test]
fn submit_login_accepts_demo_pair_with_whitespace() {
    let mut state = AuthState::default();
    let vault = vault();
    assert_eq!(submit_login(&mut state, &vault, "  demo@individual.com ", "demo123"), Ok(()));
    assert!(state.user.is_some());
    assert!(vault.load().unwrap().is_some());
}

#[test]
fn submit_login_reports_field_errors_before_credentials() {
    let mut state = AuthState::default();
    assert_eq!(
        submit_login(&mut state, &vault(), "", "demo123"),
        Err(ValidationError::Required("Email"))
    );
    assert_eq!(
        submit_login(&mut state, &vault(), "demo@individual.com", ""),
        Err(ValidationError::Required("Password"))
    );
}

#[test]
fn submit_login_wrong_password() {
    let mut state = AuthState::default();
    let vault = vault();
    assert_eq!(
        submit_login(&mut state, &vault, "demo@organization.com", "nope"),
        Err(ValidationError::InvalidCredentials)
    );
    assert!(vault.load().unwrap().is_none());
}
