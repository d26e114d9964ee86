use super::*;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        avatar: None,
        company_name: None,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user(Role::Individual)), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn anonymous_users_only_reach_auth_pages() {
    assert_eq!(route_access(None, LOGIN_PATH), Access::Allow);
    assert_eq!(route_access(None, SIGNUP_PATH), Access::Allow);
    assert_eq!(route_access(None, DASHBOARD_PATH), Access::Login);
    assert_eq!(route_access(None, "/app/reports/sales-overview"), Access::Login);
}

#[test]
fn signed_in_users_skip_auth_pages() {
    let u = user(Role::Individual);
    assert_eq!(route_access(Some(&u), LOGIN_PATH), Access::Dashboard);
    assert_eq!(route_access(Some(&u), SIGNUP_PATH), Access::Dashboard);
    assert_eq!(route_access(Some(&u), "/app/profile"), Access::Allow);
}

#[test]
fn team_requires_organization() {
    assert_eq!(route_access(Some(&user(Role::Individual)), TEAM_PATH), Access::Dashboard);
    assert_eq!(route_access(Some(&user(Role::Organization)), TEAM_PATH), Access::Allow);
    assert_eq!(required_role("/app/teams"), None);
}

#[test]
fn access_redirect_targets() {
    assert_eq!(Access::Allow.redirect(), None);
    assert_eq!(Access::Login.redirect(), Some("/login"));
    assert_eq!(Access::Dashboard.redirect(), Some("/app/dashboard"));
}

#[test]
fn signed_in_session_leaves_signup_for_dashboard() {
    let state = AuthState { user: Some(user(Role::Organization)), loading: false };
    assert_eq!(signed_in_redirect(&state, SIGNUP_PATH), Some(DASHBOARD_PATH));
    assert_eq!(signed_in_redirect(&state, LOGIN_PATH), Some(DASHBOARD_PATH));
}

#[test]
fn signed_in_redirect_waits_for_restore_and_session() {
    let restoring = AuthState { user: Some(user(Role::Individual)), loading: true };
    assert_eq!(signed_in_redirect(&restoring, SIGNUP_PATH), None);
    let anonymous = AuthState { user: None, loading: false };
    assert_eq!(signed_in_redirect(&anonymous, SIGNUP_PATH), None);
}

#[test]
fn signed_in_redirect_enforces_role_gate() {
    let state = AuthState { user: Some(user(Role::Individual)), loading: false };
    assert_eq!(signed_in_redirect(&state, TEAM_PATH), Some(DASHBOARD_PATH));
    assert_eq!(signed_in_redirect(&state, "/app/reports"), None);
}
