//! Clickable card for a report in grids on the dashboard and reports pages.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::model::{Choice, Dashboard, Tone};
use crate::util::format::{format_date, format_number, pluralize, truncate};

const DESCRIPTION_PREVIEW_CHARS: usize = 90;

#[component]
pub fn ReportCard(report: Dashboard) -> impl IntoView {
    let href = format!("/app/reports/{}", report.id);
    let (visibility_tone, visibility) = if report.is_public {
        (Tone::Success, "Public")
    } else {
        (Tone::Neutral, "Private")
    };

    view! {
        <a class="report-card" href=href>
            <img class="report-card__thumb" src=report.thumbnail_url alt="" loading="lazy"/>
            <div class="report-card__body">
                <div class="report-card__meta">
                    <Badge tone=Tone::Info label=report.category.label()/>
                    <Badge tone=visibility_tone label=visibility/>
                </div>
                <h3 class="report-card__title">{report.title}</h3>
                <p class="report-card__description">
                    {truncate(&report.description, DESCRIPTION_PREVIEW_CHARS)}
                </p>
                <div class="report-card__footer">
                    <span>{format!("Updated {}", format_date(&report.updated_at))}</span>
                    <span>{format!("{} {}", format_number(report.views), pluralize(i64::from(report.views), "view", None))}</span>
                </div>
            </div>
        </a>
    }
}
