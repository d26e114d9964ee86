//! Team management for organization accounts: roster, invites, role
//! changes and removal.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::modal::Modal;
use crate::components::select::{Select, choice_options, choice_options_with_all};
use crate::config::PortalConfig;
use crate::model::{Choice, MemberStatus, NotificationKind, Priority, TeamMember, TeamRole};
use crate::state::notifications::NotificationCenter;
use crate::state::team::TeamRoster;
use crate::state::ui::{ToastKind, UiState, show_toast};
use crate::util::format::{count_label, format_date, initials};

#[component]
pub fn TeamPage() -> impl IntoView {
    let team = expect_context::<RwSignal<TeamRoster>>();
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(None::<MemberStatus>);
    let invite_open = RwSignal::new(false);

    let members = Memo::new(move |_| team.with(|t| t.filtered(&query.get(), status.get())));

    view! {
        <div class="team-page">
            <header class="page-header">
                <div>
                    <h1>"Team"</h1>
                    <p class="page-header__subtitle">{move || count_label(team.with(TeamRoster::len), "member", None)}</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| invite_open.set(true)>
                    "Invite member"
                </button>
            </header>
            <section class="stat-grid">
                {MemberStatus::ALL
                    .iter()
                    .map(|&s| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__value">{move || team.with(|t| t.count_by_status(s))}</span>
                                <span class="stat-card__label">{s.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <div class="filter-bar">
                <input
                    class="filter-bar__search"
                    type="search"
                    placeholder="Search by name or email..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <Select
                    label="Status"
                    options={choice_options_with_all::<MemberStatus>("All statuses")}
                    value=Signal::derive(move || status.get().map(|s| s.value().to_owned()).unwrap_or_default())
                    on_change=Callback::new(move |v: String| status.set(MemberStatus::from_value(&v)))
                />
            </div>
            <Show
                when=move || !members.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No team members match your filters."</p> }
            >
                <table class="team-table">
                    <thead>
                        <tr>
                            <th>"Member"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th>"Joined"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || members.get() key=|m| (m.id.clone(), m.role, m.status) let:member>
                            <MemberRow member=member/>
                        </For>
                    </tbody>
                </table>
            </Show>
            <Show when=move || invite_open.get()>
                <InviteModal on_close=Callback::new(move |()| invite_open.set(false))/>
            </Show>
        </div>
    }
}

#[component]
fn MemberRow(member: TeamMember) -> impl IntoView {
    let team = expect_context::<RwSignal<TeamRoster>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast_ms = expect_context::<PortalConfig>().toast_dismiss_ms;

    let id = StoredValue::new(member.id.clone());
    let role = member.role;
    let on_role = Callback::new(move |v: String| {
        let Some(next) = TeamRole::from_value(&v) else {
            return;
        };
        let outcome = team.try_update(|t| id.with_value(|id| t.change_role(id, next)));
        if let Some(Err(e)) = outcome {
            show_toast(ui, ToastKind::Error, e.to_string(), toast_ms);
        }
    });
    let name = member.name.clone();
    let on_remove = move |_| {
        let removed = team.try_update(|t| id.with_value(|id| t.remove(id))).unwrap_or(false);
        if removed {
            show_toast(ui, ToastKind::Info, format!("{name} was removed from the team"), toast_ms);
        }
    };

    view! {
        <tr class="team-table__row">
            <td class="team-table__member">
                <span class="team-table__avatar">{initials(&member.name)}</span>
                <div>
                    <div class="team-table__name">{member.name.clone()}</div>
                    <div class="team-table__email">{member.email.clone()}</div>
                </div>
            </td>
            <td>
                <Select
                    label="Role"
                    options={choice_options::<TeamRole>()}
                    value=Signal::derive(move || role.value().to_owned())
                    on_change=on_role
                />
            </td>
            <td><Badge tone=member.status.tone() label=member.status.label()/></td>
            <td>{format_date(&member.joined_at)}</td>
            <td>
                <button class="btn btn--danger" on:click=on_remove>
                    "Remove"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn InviteModal(on_close: Callback<()>) -> impl IntoView {
    let team = expect_context::<RwSignal<TeamRoster>>();
    let notifications = expect_context::<RwSignal<NotificationCenter>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast_ms = expect_context::<PortalConfig>().toast_dismiss_ms;

    let email = RwSignal::new(String::new());
    let role = RwSignal::new(TeamRole::Viewer);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = team.try_update(|t| t.invite(&email.get_untracked(), role.get_untracked()));
        match outcome {
            Some(Ok(member)) => {
                notifications.update(|n| {
                    n.notify(
                        NotificationKind::Team,
                        "Invitation sent",
                        format!("{} was invited as {}", member.email, member.role.label()),
                        Priority::Low,
                    );
                });
                show_toast(ui, ToastKind::Success, format!("Invitation sent to {}", member.email), toast_ms);
                on_close.run(());
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => log::warn!("team roster disposed during invite"),
        }
    };

    view! {
        <Modal title="Invite team member" on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="colleague@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <Select
                    label="Role"
                    options={choice_options::<TeamRole>()}
                    value=Signal::derive(move || role.get().value().to_owned())
                    on_change=Callback::new(move |v: String| {
                        if let Some(r) = TeamRole::from_value(&v) {
                            role.set(r);
                        }
                    })
                />
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Send invite"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
