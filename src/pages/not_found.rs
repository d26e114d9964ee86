//! Fallback for unmatched routes.

use leptos::prelude::*;

use crate::util::auth::DASHBOARD_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"The page you requested could not be found."</p>
            <a class="btn btn--primary" href=DASHBOARD_PATH>
                "Go to dashboard"
            </a>
        </div>
    }
}
