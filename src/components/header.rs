//! Top bar: history controls, theme toggle, notification bell and user menu.

use leptos::prelude::*;
use navigation::Direction;

use crate::model::Choice;
use crate::state::auth::AuthState;
use crate::state::nav::{self, NavState};
use crate::state::notifications::NotificationCenter;
use crate::state::ui::UiState;
use crate::util::auth::LOGIN_PATH;
use crate::util::dark_mode;
use crate::util::format::{format_date_time, initials};
use crate::util::storage::SessionVault;

const BELL_PREVIEW_COUNT: usize = 5;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let nav_state = expect_context::<RwSignal<NavState>>();
    let notifications = expect_context::<RwSignal<NotificationCenter>>();
    let vault = expect_context::<SessionVault>();

    let bell_open = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    let theme_vault = vault.clone();
    let on_toggle_theme = move |_| {
        let next = dark_mode::toggle(theme_vault.store(), ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    // The shell's unauthenticated-redirect effect takes over once the user
    // is cleared.
    let on_logout = move |_| {
        auth.update(|a| a.logout(&vault));
        menu_open.set(false);
        log::info!("signed out; returning to {LOGIN_PATH}");
    };

    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let user_detail = move || {
        auth.get()
            .user
            .map(|u| format!("{} · {}", u.display_org(), u.role.label()))
            .unwrap_or_default()
    };

    view! {
        <header class="header toolbar">
            <button
                class="btn header__menu"
                title="Toggle navigation"
                on:click=move |_| ui.update(|s| s.sidebar_open = !s.sidebar_open)
            >
                "☰"
            </button>
            <div class="header__history">
                <button
                    class="btn"
                    title="Back (Alt+←)"
                    disabled=move || !nav_state.get().can_go_back()
                    on:click=move |_| nav::go(nav_state, Direction::Back)
                >
                    "←"
                </button>
                <button
                    class="btn"
                    title="Forward (Alt+→)"
                    disabled=move || !nav_state.get().can_go_forward()
                    on:click=move |_| nav::go(nav_state, Direction::Forward)
                >
                    "→"
                </button>
            </div>

            <span class="toolbar__spacer"></span>

            <button class="btn toolbar__dark-toggle" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <div class="header__bell">
                <button
                    class="btn"
                    title="Notifications"
                    on:click=move |_| {
                        menu_open.set(false);
                        bell_open.update(|o| *o = !*o);
                    }
                >
                    "🔔"
                    <Show when=move || { notifications.get().unread_count() > 0 }>
                        <span class="header__bell-count">{move || notifications.get().unread_count()}</span>
                    </Show>
                </button>
                <Show when=move || bell_open.get()>
                    <div class="header__dropdown">
                        <div class="header__dropdown-head">
                            <span>"Notifications"</span>
                            <button
                                class="btn btn--link"
                                on:click=move |_| notifications.update(NotificationCenter::mark_all_as_read)
                            >
                                "Mark all read"
                            </button>
                        </div>
                        <ul class="header__dropdown-list">
                            {move || {
                                notifications
                                    .get()
                                    .recent(BELL_PREVIEW_COUNT)
                                    .into_iter()
                                    .map(|n| {
                                        let id = n.id.clone();
                                        view! {
                                            <li
                                                class="header__notification"
                                                class:header__notification--unread=!n.read
                                                on:click=move |_| {
                                                    notifications.update(|c| {
                                                        c.mark_as_read(&id);
                                                    });
                                                }
                                            >
                                                <strong>{n.title}</strong>
                                                <span>{n.message}</span>
                                                <time>{format_date_time(&n.timestamp)}</time>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                        <a class="header__dropdown-all" href="/app/notifications" on:click=move |_| bell_open.set(false)>
                            "View all"
                        </a>
                    </div>
                </Show>
            </div>

            <div class="header__user">
                <button
                    class="header__avatar"
                    title="Account"
                    on:click=move |_| {
                        bell_open.set(false);
                        menu_open.update(|o| *o = !*o);
                    }
                >
                    {move || initials(&user_name())}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="header__dropdown header__dropdown--menu">
                        <div class="header__user-name">{user_name}</div>
                        <div class="header__user-detail">{user_detail}</div>
                        <a class="header__menu-item" href="/app/profile" on:click=move |_| menu_open.set(false)>
                            "Profile"
                        </a>
                        <button class="header__menu-item" on:click=on_logout.clone()>
                            "Log out"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
