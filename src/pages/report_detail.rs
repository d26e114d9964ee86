//! Report detail: metadata, fullscreen viewer, export and share.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::badge::Badge;
use crate::components::export_menu::ExportMenu;
use crate::components::share_modal::ShareModal;
use crate::data;
use crate::model::{Choice, Dashboard, Tone};
use crate::util::format::{format_date, format_date_time, format_number};

/// DOM id of the element sent fullscreen.
const VIEWER_ID: &str = "report-viewer";

#[component]
pub fn ReportDetailPage() -> impl IntoView {
    let params = use_params_map();
    let report = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| data::find_dashboard(&id)));

    view! {
        {move || match report.get() {
            Some(report) => view! { <ReportDetail report=report/> }.into_any(),
            None => {
                view! {
                    <div class="empty-state">
                        <h1>"Report not found"</h1>
                        <p>"The report you are looking for does not exist or was removed."</p>
                        <a class="btn" href="/app/reports">"Back to reports"</a>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn ReportDetail(report: Dashboard) -> impl IntoView {
    let share_open = RwSignal::new(false);
    let on_fullscreen = move |_| toggle_fullscreen();
    let (visibility_tone, visibility) = if report.is_public {
        (Tone::Success, "Public")
    } else {
        (Tone::Neutral, "Private")
    };
    let share_report = StoredValue::new(report.clone());

    view! {
        <div class="report-detail">
            <header class="page-header report-detail__header">
                <div>
                    <a class="report-detail__back" href="/app/reports">"← All reports"</a>
                    <h1>{report.title.clone()}</h1>
                    <p class="page-header__subtitle">{report.description.clone()}</p>
                </div>
                <div class="report-detail__actions">
                    <button class="btn" on:click=on_fullscreen>
                        "Fullscreen"
                    </button>
                    <ExportMenu report=report.clone()/>
                    <button class="btn btn--primary" on:click=move |_| share_open.set(true)>
                        "Share"
                    </button>
                </div>
            </header>
            <dl class="report-detail__meta">
                <div>
                    <dt>"Category"</dt>
                    <dd><Badge tone=Tone::Info label=report.category.label()/></dd>
                </div>
                <div>
                    <dt>"Visibility"</dt>
                    <dd><Badge tone=visibility_tone label=visibility/></dd>
                </div>
                <div>
                    <dt>"Created"</dt>
                    <dd>{format_date(&report.created_at)}</dd>
                </div>
                <div>
                    <dt>"Last updated"</dt>
                    <dd>{format_date_time(&report.updated_at)}</dd>
                </div>
                <div>
                    <dt>"Views"</dt>
                    <dd>{format_number(report.views)}</dd>
                </div>
            </dl>
            <div id=VIEWER_ID class="report-detail__viewer">
                <img src=report.thumbnail_url.clone() alt=format!("{} preview", report.title)/>
            </div>
            <Show when=move || share_open.get()>
                <ShareModal report=share_report.get_value() on_close=Callback::new(move |()| share_open.set(false))/>
            </Show>
        </div>
    }
}

fn toggle_fullscreen() {
    #[cfg(feature = "csr")]
    match crate::util::browser::toggle_fullscreen(VIEWER_ID) {
        Ok(entered) => log::debug!("fullscreen {}", if entered { "requested" } else { "exited" }),
        Err(e) => log::warn!("fullscreen failed: {e}"),
    }
    #[cfg(not(feature = "csr"))]
    log::debug!("fullscreen for #{VIEWER_ID} requires a browser");
}
