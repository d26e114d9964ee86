//! Reports list with search, visibility filter and sort order.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;

use crate::components::report_card::ReportCard;
use crate::components::select::{Select, choice_options};
use crate::data;
use crate::model::{Choice, Dashboard};
use crate::state::{matches_query, newest_first};
use crate::util::format::count_label;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    All,
    Public,
    Private,
}

impl Choice for Visibility {
    const ALL: &'static [Self] = &[Self::All, Self::Public, Self::Private];

    fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All reports",
            Self::Public => "Public",
            Self::Private => "Private",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Recent,
    Title,
    Views,
}

impl Choice for SortOrder {
    const ALL: &'static [Self] = &[Self::Recent, Self::Title, Self::Views];

    fn value(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Title => "title",
            Self::Views => "views",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Recent => "Recently updated",
            Self::Title => "Title (A-Z)",
            Self::Views => "Most viewed",
        }
    }
}

/// Reports matching `query` (title or description) and `visibility`,
/// ordered by `sort`.
pub fn filter_reports(reports: &[Dashboard], query: &str, visibility: Visibility, sort: SortOrder) -> Vec<Dashboard> {
    let mut out: Vec<Dashboard> = reports
        .iter()
        .filter(|r| match visibility {
            Visibility::All => true,
            Visibility::Public => r.is_public,
            Visibility::Private => !r.is_public,
        })
        .filter(|r| matches_query(query, &[&r.title, &r.description]))
        .cloned()
        .collect();
    match sort {
        SortOrder::Recent => out.sort_by(|a, b| newest_first(&a.updated_at, &b.updated_at)),
        SortOrder::Title => out.sort_by_key(|r| r.title.to_lowercase()),
        SortOrder::Views => out.sort_by(|a, b| b.views.cmp(&a.views)),
    }
    out
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let reports = StoredValue::new(data::dashboards());
    let query = RwSignal::new(String::new());
    let visibility = RwSignal::new(Visibility::All);
    let sort = RwSignal::new(SortOrder::Recent);

    let visible = Memo::new(move |_| {
        reports.with_value(|all| filter_reports(all, &query.get(), visibility.get(), sort.get()))
    });

    view! {
        <div class="reports-page">
            <header class="page-header">
                <h1>"Reports"</h1>
                <p class="page-header__subtitle">{move || count_label(visible.get().len(), "report", None)}</p>
            </header>
            <div class="filter-bar">
                <input
                    class="filter-bar__search"
                    type="search"
                    placeholder="Search reports..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <Select
                    label="Visibility"
                    options={choice_options::<Visibility>()}
                    value=Signal::derive(move || visibility.get().value().to_owned())
                    on_change=Callback::new(move |v: String| visibility.set(Visibility::from_value(&v).unwrap_or_default()))
                />
                <Select
                    label="Sort by"
                    options={choice_options::<SortOrder>()}
                    value=Signal::derive(move || sort.get().value().to_owned())
                    on_change=Callback::new(move |v: String| sort.set(SortOrder::from_value(&v).unwrap_or_default()))
                />
            </div>
            <Show
                when=move || !visible.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No reports match your filters."</p> }
            >
                <div class="report-grid">
                    <For each=move || visible.get() key=|r| r.id.clone() let:report>
                        <ReportCard report=report/>
                    </For>
                </div>
            </Show>
        </div>
    }
}
