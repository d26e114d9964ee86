//! Primary navigation rail. Organization-only entries are hidden for
//! individual accounts.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::PortalConfig;
use crate::model::Role;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub role: Option<Role>,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/app/dashboard", label: "Dashboard", icon: "▦", role: None },
    NavItem { href: "/app/reports", label: "Reports", icon: "▤", role: None },
    NavItem { href: "/app/team", label: "Team", icon: "◍", role: Some(Role::Organization) },
    NavItem { href: "/app/notifications", label: "Notifications", icon: "◔", role: None },
    NavItem { href: "/app/support", label: "Support", icon: "?", role: None },
    NavItem { href: "/app/profile", label: "Profile", icon: "◉", role: None },
];

/// Entries visible to `role`.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    NAV_ITEMS.iter().copied().filter(|item| item.role.is_none_or(|r| r == role)).collect()
}

/// Whether `item` should render as the active entry for `path`.
pub fn is_active(item: &NavItem, path: &str) -> bool {
    path == item.href || path.strip_prefix(item.href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<PortalConfig>();
    let location = use_location();

    let items = move || nav_items(auth.get().role().unwrap_or(Role::Individual));

    view! {
        <aside
            class="sidebar"
            class:sidebar--collapsed=move || ui.get().sidebar_collapsed
            class:sidebar--open=move || ui.get().sidebar_open
        >
            <div class="sidebar__brand">
                <span class="sidebar__logo" aria-hidden="true">"◆"</span>
                <span class="sidebar__name">{config.app_name}</span>
            </div>
            <nav class="sidebar__nav">
                {move || {
                    items()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    class="sidebar__link"
                                    class:sidebar__link--active=move || is_active(&item, &location.pathname.get())
                                    href=item.href
                                    title=item.label
                                    on:click=move |_| ui.update(|s| s.sidebar_open = false)
                                >
                                    <span class="sidebar__icon" aria-hidden="true">{item.icon}</span>
                                    <span class="sidebar__label">{item.label}</span>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <button
                class="btn sidebar__collapse"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
                title="Collapse sidebar"
            >
                {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
            </button>
        </aside>
    }
}
