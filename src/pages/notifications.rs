//! Full notification list with read/unread and kind filters.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::select::{Select, SelectOption};
use crate::model::{Choice, Notification, NotificationKind, Tone};
use crate::state::notifications::{NotificationCenter, NotificationFilter};
use crate::util::format::{count_label, format_relative};

const UNREAD_VALUE: &str = "unread";

/// Filter select entries: all, unread, then one per kind.
pub fn filter_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "All notifications"), SelectOption::new(UNREAD_VALUE, "Unread")];
    options.extend(NotificationKind::ALL.iter().map(|k| SelectOption::new(k.value(), k.label())));
    options
}

/// Inverse of [`filter_value`]; unknown values fall back to all.
pub fn filter_from_value(raw: &str) -> NotificationFilter {
    match raw {
        UNREAD_VALUE => NotificationFilter::Unread,
        other => NotificationKind::from_value(other).map_or(NotificationFilter::All, NotificationFilter::Kind),
    }
}

pub fn filter_value(filter: NotificationFilter) -> &'static str {
    match filter {
        NotificationFilter::All => "",
        NotificationFilter::Unread => UNREAD_VALUE,
        NotificationFilter::Kind(kind) => kind.value(),
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let center = expect_context::<RwSignal<NotificationCenter>>();
    let filter = RwSignal::new(NotificationFilter::All);

    let visible = Memo::new(move |_| center.with(|c| c.filtered(filter.get())));
    let unread = move || center.with(NotificationCenter::unread_count);

    view! {
        <div class="notifications-page">
            <header class="page-header">
                <div>
                    <h1>"Notifications"</h1>
                    <p class="page-header__subtitle">
                        {move || format!("{} unread", count_label(unread(), "notification", None))}
                    </p>
                </div>
                <div class="page-header__actions">
                    <button
                        class="btn"
                        disabled=move || unread() == 0
                        on:click=move |_| center.update(NotificationCenter::mark_all_as_read)
                    >
                        "Mark all as read"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || center.with(|c| c.items.is_empty())
                        on:click=move |_| center.update(NotificationCenter::clear_all)
                    >
                        "Clear all"
                    </button>
                </div>
            </header>
            <div class="filter-bar">
                <Select
                    label="Show"
                    options=filter_options()
                    value=Signal::derive(move || filter_value(filter.get()).to_owned())
                    on_change=Callback::new(move |v: String| filter.set(filter_from_value(&v)))
                />
            </div>
            <Show
                when=move || !visible.get().is_empty()
                fallback=|| view! { <p class="empty-state">"You're all caught up."</p> }
            >
                <ul class="notification-list">
                    <For each=move || visible.get() key=|n| (n.id.clone(), n.read) let:notification>
                        <NotificationRow notification=notification/>
                    </For>
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn NotificationRow(notification: Notification) -> impl IntoView {
    let center = expect_context::<RwSignal<NotificationCenter>>();
    let id = StoredValue::new(notification.id.clone());
    let when = format_relative(&notification.timestamp, time::OffsetDateTime::now_utc());
    let unread = !notification.read;

    view! {
        <li class="notification-list__item" class:notification-list__item--unread=unread>
            <div class="notification-list__body">
                <div class="notification-list__title">
                    <strong>{notification.title.clone()}</strong>
                    <Badge tone=notification.priority.tone() label=notification.priority.label()/>
                    <Badge tone=Tone::Neutral label=notification.kind.label()/>
                </div>
                <p>{notification.message.clone()}</p>
                <time>{when}</time>
            </div>
            <div class="notification-list__actions">
                <Show when=move || unread>
                    <button
                        class="btn btn--link"
                        on:click=move |_| {
                            center.update(|c| {
                                id.with_value(|id| c.mark_as_read(id));
                            });
                        }
                    >
                        "Mark as read"
                    </button>
                </Show>
                <button
                    class="btn btn--link"
                    on:click=move |_| {
                        center.update(|c| {
                            id.with_value(|id| c.remove(id));
                        });
                    }
                >
                    "Remove"
                </button>
            </div>
        </li>
    }
}
