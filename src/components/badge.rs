//! Small status pill.

use leptos::prelude::*;

use crate::model::Tone;

#[component]
pub fn Badge(tone: Tone, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=format!("badge {}", tone.class())>{label}</span> }
}
