//! Dashboard home: greeting, headline stats and the most recently updated
//! reports.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::report_card::ReportCard;
use crate::data;
use crate::model::Dashboard;
use crate::state::auth::AuthState;
use crate::state::newest_first;
use crate::state::notifications::NotificationCenter;
use crate::state::team::TeamRoster;
use crate::util::format::format_number;

pub const RECENT_REPORT_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_reports: usize,
    pub public_reports: usize,
    pub total_views: u32,
    pub unread_notifications: usize,
    /// Only shown to organizations.
    pub team_size: Option<usize>,
}

pub fn dashboard_stats(reports: &[Dashboard], unread_notifications: usize, team_size: Option<usize>) -> DashboardStats {
    DashboardStats {
        total_reports: reports.len(),
        public_reports: reports.iter().filter(|r| r.is_public).count(),
        total_views: reports.iter().map(|r| r.views).fold(0, u32::saturating_add),
        unread_notifications,
        team_size,
    }
}

/// The `limit` most recently updated reports.
pub fn recent_reports(reports: &[Dashboard], limit: usize) -> Vec<Dashboard> {
    let mut sorted = reports.to_vec();
    sorted.sort_by(|a, b| newest_first(&a.updated_at, &b.updated_at));
    sorted.truncate(limit);
    sorted
}

pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationCenter>>();
    let team = expect_context::<RwSignal<TeamRoster>>();
    let reports = data::dashboards();

    let stats = {
        let reports = reports.clone();
        move || {
            let team_size = auth.get().is_organization().then(|| team.get().len());
            dashboard_stats(&reports, notifications.get().unread_count(), team_size)
        }
    };
    let greeting = move || {
        let name = auth.get().user.map(|u| u.name).unwrap_or_default();
        format!("Welcome back, {}", first_name(&name))
    };
    let recent = recent_reports(&reports, RECENT_REPORT_COUNT);

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>{greeting}</h1>
                <p class="page-header__subtitle">"Here is what's happening with your reports."</p>
            </header>
            <section class="stat-grid">
                {move || {
                    let s = stats();
                    view! {
                        <StatCard label="Reports" value=s.total_reports.to_string()/>
                        <StatCard label="Public reports" value=s.public_reports.to_string()/>
                        <StatCard label="Total views" value=format_number(s.total_views)/>
                        <StatCard label="Unread notifications" value=s.unread_notifications.to_string()/>
                        {s.team_size.map(|n| view! { <StatCard label="Team members" value=n.to_string()/> })}
                    }
                }}
            </section>
            <section class="dashboard-page__recent">
                <div class="section-header">
                    <h2>"Recent reports"</h2>
                    <a href="/app/reports">"View all"</a>
                </div>
                <div class="report-grid">
                    {recent.into_iter().map(|report| view! { <ReportCard report=report/> }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
