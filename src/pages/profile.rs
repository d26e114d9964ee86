//! Profile settings: display name and organization name.

use leptos::prelude::*;

use crate::config::PortalConfig;
use crate::model::{Choice, User};
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState, show_toast};
use crate::util::format::{format_date, initials};
use crate::util::storage::SessionVault;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let vault = expect_context::<SessionVault>();
    let toast_ms = expect_context::<PortalConfig>().toast_dismiss_ms;

    let current = auth.get_untracked().user;
    let name = RwSignal::new(current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let company = RwSignal::new(current.as_ref().and_then(|u| u.company_name.clone()).unwrap_or_default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = auth.try_update(|a| a.update_profile(&vault, &name.get_untracked(), &company.get_untracked()));
        match outcome {
            Some(Ok(user)) => {
                error.set(None);
                name.set(user.name);
                show_toast(ui, ToastKind::Success, "Profile updated", toast_ms);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => log::warn!("auth state disposed during profile update"),
        }
    };

    let is_org = move || auth.with(AuthState::is_organization);
    let field = move |f: fn(&User) -> String| move || auth.with(|a| a.user.as_ref().map(f).unwrap_or_default());

    view! {
        <div class="profile-page">
            <header class="page-header">
                <h1>"Profile"</h1>
                <p class="page-header__subtitle">"Manage your account details."</p>
            </header>
            <section class="profile-card">
                <span class="profile-card__avatar">{move || initials(&name.get())}</span>
                <dl class="profile-card__meta">
                    <div>
                        <dt>"Email"</dt>
                        <dd>{field(|u| u.email.clone())}</dd>
                    </div>
                    <div>
                        <dt>"Account type"</dt>
                        <dd>{field(|u| u.role.label().to_owned())}</dd>
                    </div>
                    <div>
                        <dt>"Member since"</dt>
                        <dd>{field(|u| format_date(&u.created_at))}</dd>
                    </div>
                </dl>
            </section>
            <form class="profile-form" on:submit=on_submit>
                <label class="dialog__label">
                    "Full name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <Show when=is_org>
                    <label class="dialog__label">
                        "Company name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || company.get()
                            on:input=move |ev| company.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" class="btn btn--primary">
                    "Save changes"
                </button>
            </form>
        </div>
    }
}
