//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::app_shell::AppShell;
use crate::components::nav_tracker::NavTracker;
use crate::components::toast_host::ToastHost;
use crate::config::PortalConfig;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, notifications::NotificationsPage,
    profile::ProfilePage, report_detail::ReportDetailPage, reports::ReportsPage, signup::SignupPage,
    support::SupportPage, team::TeamPage,
};
use crate::state::{
    auth::AuthState, nav::NavState, notifications::NotificationCenter, support::SupportDesk, team::TeamRoster,
    ui::UiState,
};
use crate::util::auth::DASHBOARD_PATH;
use crate::util::dark_mode;
use crate::util::storage::{SessionVault, default_store};

/// Root application component.
///
/// Provides all shared state contexts, restores the stored session after
/// mount, and sets up client-side routing.
#[component]
pub fn App(config: PortalConfig) -> impl IntoView {
    provide_meta_context();

    let vault = SessionVault::new(default_store(), config.session_key.clone());

    let dark = dark_mode::read_preference(vault.store(), dark_mode::system_prefers_dark());
    dark_mode::apply(dark);

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::restoring());
    let ui = RwSignal::new(UiState { dark_mode: dark, ..UiState::default() });
    let notifications = RwSignal::new(NotificationCenter::seeded());
    let team = RwSignal::new(TeamRoster::seeded());
    let support = RwSignal::new(SupportDesk::seeded());
    let nav = RwSignal::new(NavState::new(config.swipe, config.history_limit));

    provide_context(auth);
    provide_context(ui);
    provide_context(notifications);
    provide_context(team);
    provide_context(support);
    provide_context(nav);
    provide_context(vault.clone());
    provide_context(config.clone());

    // Guards wait on `loading`; restoring after mount keeps the first paint
    // on the loading state rather than flashing the login page.
    Effect::new(move || auth.update(|a| a.restore(&vault)));

    view! {
        <Title text=config.app_name/>

        <Router>
            <NavTracker/>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <ParentRoute path=path!("/app") view=AppShell>
                    <Route path=path!("/") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/reports") view=ReportsPage/>
                    <Route path=path!("/reports/:id") view=ReportDetailPage/>
                    <Route path=path!("/team") view=TeamPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                    <Route path=path!("/notifications") view=NotificationsPage/>
                    <Route path=path!("/support") view=SupportPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
