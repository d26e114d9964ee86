//! Signup page. Validation only: no account is created, the user is sent to
//! the login page with a notice.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::select::{Select, choice_options};
use crate::config::PortalConfig;
use crate::model::{Choice, Role};
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState, show_toast};
use crate::util::auth::{LOGIN_PATH, SIGNUP_PATH, install_signed_in_redirect};
use crate::util::validate::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<PortalConfig>();
    let navigate = use_navigate();

    install_signed_in_redirect(auth, navigate.clone(), SIGNUP_PATH);

    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(None::<String>);
    let toast_ms = config.toast_dismiss_ms;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match AuthState::signup(&form.get_untracked()) {
            Ok(accepted) => {
                error.set(None);
                show_toast(
                    ui,
                    ToastKind::Success,
                    format!("Welcome, {}! Sign in with a demo account to continue.", accepted.name),
                    toast_ms,
                );
                navigate(LOGIN_PATH, NavigateOptions::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let text_input = move |placeholder: &'static str, kind: &'static str, field: fn(&mut SignupForm) -> &mut String| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *field(f) = value);
                }
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    {text_input("Full name", "text", |f| &mut f.name)}
                    {text_input("you@example.com", "email", |f| &mut f.email)}
                    {text_input("Password (8+ characters)", "password", |f| &mut f.password)}
                    {text_input("Confirm password", "password", |f| &mut f.confirm_password)}
                    <Select
                        label="Account type"
                        options={choice_options::<Role>()}
                        value=Signal::derive(move || form.get().role.value().to_owned())
                        on_change=Callback::new(move |value: String| {
                            if let Some(role) = Role::from_value(&value) {
                                form.update(|f| f.role = role);
                            }
                        })
                    />
                    <Show when=move || form.get().role == Role::Organization>
                        {text_input("Company name", "text", |f| &mut f.company_name)}
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit">
                        "Sign up"
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
