//! Fixed-position stack of toasts from [`UiState`].

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || ui.get().toasts key=|t| t.id.clone() let:toast>
                {
                    let id = toast.id.clone();
                    view! {
                        <div class=format!("toast {}", toast.kind.tone().class()) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| {
                                    ui.update(|s| {
                                        s.dismiss_toast(&id);
                                    });
                                }
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
