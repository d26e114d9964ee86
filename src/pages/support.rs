//! Support desk: ticket list, new-ticket dialog and the selected ticket's
//! thread.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::modal::Modal;
use crate::components::select::{Select, choice_options, choice_options_with_all};
use crate::config::PortalConfig;
use crate::model::{Choice, MessageAuthor, NotificationKind, Priority, SupportTicket, TicketCategory, TicketKind, TicketStatus};
use crate::state::notifications::NotificationCenter;
use crate::state::support::{SupportDesk, TicketDraft};
use crate::state::ui::{ToastKind, UiState, show_toast};
use crate::util::format::{format_date, format_date_time, truncate};

const PREVIEW_CHARS: usize = 80;

#[component]
pub fn SupportPage() -> impl IntoView {
    let desk = expect_context::<RwSignal<SupportDesk>>();
    let query = RwSignal::new(String::new());
    let status = RwSignal::new(None::<TicketStatus>);
    let selected = RwSignal::new(None::<String>);
    let create_open = RwSignal::new(false);

    let tickets = Memo::new(move |_| desk.with(|d| d.filtered(status.get(), &query.get())));

    view! {
        <div class="support-page">
            <header class="page-header">
                <div>
                    <h1>"Support"</h1>
                    <p class="page-header__subtitle">
                        {move || {
                            desk.with(|d| {
                                format!(
                                    "{} open, {} in progress",
                                    d.count_by_status(TicketStatus::Open),
                                    d.count_by_status(TicketStatus::InProgress),
                                )
                            })
                        }}
                    </p>
                </div>
                <button class="btn btn--primary" on:click=move |_| create_open.set(true)>
                    "New ticket"
                </button>
            </header>
            <div class="filter-bar">
                <input
                    class="filter-bar__search"
                    type="search"
                    placeholder="Search tickets..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <Select
                    label="Status"
                    options={choice_options_with_all::<TicketStatus>("All statuses")}
                    value=Signal::derive(move || status.get().map(|s| s.value().to_owned()).unwrap_or_default())
                    on_change=Callback::new(move |v: String| status.set(TicketStatus::from_value(&v)))
                />
            </div>
            <div class="support-page__layout">
                <ul class="ticket-list">
                    <Show when=move || tickets.with(Vec::is_empty)>
                        <li class="empty-state">"No tickets match your filters."</li>
                    </Show>
                    <For each=move || tickets.get() key=|t| (t.id.clone(), t.updated_at.clone(), t.status) let:ticket>
                        <TicketRow ticket=ticket selected=selected/>
                    </For>
                </ul>
                <section class="ticket-thread">
                    {move || match selected.get().and_then(|id| desk.with(|d| d.find(&id).cloned())) {
                        Some(ticket) => view! { <TicketThread ticket=ticket/> }.into_any(),
                        None => view! { <p class="empty-state">"Select a ticket to view the conversation."</p> }.into_any(),
                    }}
                </section>
            </div>
            <Show when=move || create_open.get()>
                <NewTicketModal
                    on_close=Callback::new(move |()| create_open.set(false))
                    on_created=Callback::new(move |id: String| selected.set(Some(id)))
                />
            </Show>
        </div>
    }
}

#[component]
fn TicketRow(ticket: SupportTicket, selected: RwSignal<Option<String>>) -> impl IntoView {
    let id = ticket.id.clone();
    let is_selected = {
        let id = id.clone();
        move || selected.get().as_deref() == Some(id.as_str())
    };
    let preview = ticket.last_message().map(|m| truncate(&m.body, PREVIEW_CHARS)).unwrap_or_default();

    view! {
        <li
            class="ticket-list__item"
            class:ticket-list__item--selected=is_selected
            on:click=move |_| selected.set(Some(id.clone()))
        >
            <div class="ticket-list__head">
                <span class="ticket-list__id">{format!("#{}", ticket.id)}</span>
                <Badge tone=ticket.status.tone() label=ticket.status.label()/>
            </div>
            <strong>{ticket.subject.clone()}</strong>
            <p class="ticket-list__preview">{preview}</p>
            <time>{format_date(&ticket.updated_at)}</time>
        </li>
    }
}

#[component]
fn TicketThread(ticket: SupportTicket) -> impl IntoView {
    let desk = expect_context::<RwSignal<SupportDesk>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast_ms = expect_context::<PortalConfig>().toast_dismiss_ms;

    let id = StoredValue::new(ticket.id.clone());
    let reply = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let accepts_replies = ticket.status.accepts_replies();
    let current_status = ticket.status;

    let on_status = Callback::new(move |v: String| {
        let Some(next) = TicketStatus::from_value(&v) else {
            return;
        };
        match desk.try_update(|d| id.with_value(|id| d.set_status(id, next))) {
            Some(Ok(())) => {
                show_toast(ui, ToastKind::Info, format!("Ticket marked {}", next.label().to_lowercase()), toast_ms);
            }
            Some(Err(e)) => {
                show_toast(ui, ToastKind::Error, e.to_string(), toast_ms);
            }
            None => log::warn!("support desk disposed during status change"),
        }
    });

    let on_reply = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match desk.try_update(|d| id.with_value(|id| d.reply(id, &reply.get_untracked()))) {
            Some(Ok(())) => {
                reply.set(String::new());
                error.set(None);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => log::warn!("support desk disposed during reply"),
        }
    };

    view! {
        <div class="ticket-thread__inner">
            <header class="ticket-thread__header">
                <div>
                    <h2>{ticket.subject.clone()}</h2>
                    <p class="ticket-thread__meta">
                        {format!("#{} · {} · {}", ticket.id, ticket.kind.label(), ticket.category.label())}
                    </p>
                </div>
                <Select
                    label="Status"
                    options={choice_options::<TicketStatus>()}
                    value=Signal::derive(move || current_status.value().to_owned())
                    on_change=on_status
                />
            </header>
            <ol class="ticket-thread__messages">
                {ticket
                    .messages
                    .iter()
                    .map(|m| {
                        let from_agent = m.author == MessageAuthor::Agent;
                        view! {
                            <li class="message" class:message--agent=from_agent class:message--user=!from_agent>
                                <div class="message__head">
                                    <strong>{m.author_name.clone()}</strong>
                                    <time>{format_date_time(&m.sent_at)}</time>
                                </div>
                                <p>{m.body.clone()}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <Show
                when=move || accepts_replies
                fallback=|| view! { <p class="ticket-thread__closed">"This ticket is closed."</p> }
            >
                <form class="ticket-thread__reply" on:submit=on_reply>
                    <textarea
                        class="dialog__input"
                        rows="3"
                        placeholder="Write a reply..."
                        prop:value=move || reply.get()
                        on:input=move |ev| reply.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button type="submit" class="btn btn--primary">
                        "Send reply"
                    </button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn NewTicketModal(on_close: Callback<()>, on_created: Callback<String>) -> impl IntoView {
    let desk = expect_context::<RwSignal<SupportDesk>>();
    let notifications = expect_context::<RwSignal<NotificationCenter>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toast_ms = expect_context::<PortalConfig>().toast_dismiss_ms;

    let draft = RwSignal::new(TicketDraft::default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match desk.try_update(|d| draft.with_untracked(|draft| d.create(draft))) {
            Some(Ok(ticket)) => {
                notifications.update(|n| {
                    n.notify(
                        NotificationKind::Support,
                        "Ticket received",
                        format!("We received ticket #{}: {}", ticket.id, ticket.subject),
                        Priority::Medium,
                    );
                });
                show_toast(ui, ToastKind::Success, format!("Ticket #{} created", ticket.id), toast_ms);
                on_created.run(ticket.id);
                on_close.run(());
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => log::warn!("support desk disposed during ticket creation"),
        }
    };

    view! {
        <Modal title="New support ticket" on_close=on_close>
            <form class="dialog__form" on:submit=on_submit>
                <Select
                    label="Type"
                    options={choice_options::<TicketKind>()}
                    value=Signal::derive(move || draft.with(|d| d.kind.value().to_owned()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(kind) = TicketKind::from_value(&v) {
                            draft.update(|d| d.kind = kind);
                        }
                    })
                />
                <Select
                    label="Category"
                    options={choice_options::<TicketCategory>()}
                    value=Signal::derive(move || draft.with(|d| d.category.value().to_owned()))
                    on_change=Callback::new(move |v: String| {
                        if let Some(category) = TicketCategory::from_value(&v) {
                            draft.update(|d| d.category = category);
                        }
                    })
                />
                <label class="dialog__label">
                    "Subject"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.subject.clone())
                        on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Message"
                    <textarea
                        class="dialog__input"
                        rows="5"
                        prop:value=move || draft.with(|d| d.message.clone())
                        on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Submit ticket"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
