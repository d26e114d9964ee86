//! Login page checking the demo credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::PortalConfig;
use crate::state::auth::{AuthState, DEMO_ACCOUNTS};
use crate::util::auth::{LOGIN_PATH, install_signed_in_redirect};
use crate::util::storage::SessionVault;
use crate::util::validate::{ValidationError, validate_login};

/// Validate the form, then try the credentials.
///
/// # Errors
///
/// Field errors first; [`ValidationError::InvalidCredentials`] when the pair
/// matches no account.
pub fn submit_login(
    state: &mut AuthState,
    vault: &SessionVault,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    let (email, password) = validate_login(email, password)?;
    if state.login(vault, &email, &password) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCredentials)
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let vault = expect_context::<SessionVault>();
    let config = expect_context::<PortalConfig>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // Covers both a restored session and a successful submit.
    install_signed_in_redirect(auth, use_navigate(), LOGIN_PATH);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = auth
            .try_update(|state| submit_login(state, &vault, &email.get_untracked(), &password.get_untracked()));
        match outcome {
            Some(Ok(())) => error.set(None),
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => log::warn!("auth state disposed during login"),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{config.app_name}</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit">
                        "Sign in"
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Demo accounts"</p>
                <div class="login-demo">
                    {DEMO_ACCOUNTS
                        .iter()
                        .map(|account| {
                            let account = *account;
                            view! {
                                <button
                                    class="btn login-demo__account"
                                    type="button"
                                    on:click=move |_| {
                                        email.set(account.email.to_owned());
                                        password.set(account.password.to_owned());
                                        error.set(None);
                                    }
                                >
                                    <span>{account.name}</span>
                                    <span class="login-demo__email">{account.email}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="login-card__footer">
                    "No account? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
