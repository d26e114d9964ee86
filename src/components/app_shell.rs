//! Authenticated layout for every `/app/*` route: sidebar, header and the
//! routed page in the outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns the route guards so pages can assume a signed-in user with
//! the right role.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::nav::{NavState, replace_with};
use crate::state::ui::UiState;
use crate::util::auth::{install_unauth_redirect, route_access};

#[component]
pub fn AppShell() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let navigate = use_navigate();
    let nav = use_context::<RwSignal<NavState>>();

    install_unauth_redirect(auth, navigate.clone());

    // Role gate: signed-in users outside their role go to the dashboard.
    Effect::new(move || {
        let path = location.pathname.get();
        let state = auth.get();
        let Some(user) = state.user.as_ref() else {
            return;
        };
        if let Some(target) = route_access(Some(user), &path).redirect() {
            log::info!("{path} not available to {}; redirecting to {target}", user.email);
            replace_with(nav, &navigate, target);
        }
    });

    view! {
        <Show
            when=move || {
                let state = auth.get();
                !state.loading && state.user.is_some()
            }
            fallback=move || {
                view! {
                    <div class="app-shell app-shell--loading">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="app-shell" class:app-shell--collapsed=move || ui.get().sidebar_collapsed>
                <Sidebar/>
                <div class="app-shell__main">
                    <Header/>
                    <main class="app-shell__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}
