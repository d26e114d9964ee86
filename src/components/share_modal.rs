//! Share dialog: copy link, e-mail client, or Gmail compose.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::config::PortalConfig;
use crate::model::Dashboard;
use crate::state::ui::UiState;
use crate::util::share::ShareMessage;

#[component]
pub fn ShareModal(report: Dashboard, on_close: Callback<()>) -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let message = ShareMessage::for_report(&config.share_base_url, &report);
    let copied = RwSignal::new(false);

    let copy_url = message.url.clone();
    let toast_ms = config.toast_dismiss_ms;
    let on_copy = move |_| copy_link(copy_url.clone(), ui, copied, toast_ms);

    view! {
        <Modal title=format!("Share \"{}\"", report.title) on_close=on_close>
            <div class="share-modal">
                <label class="dialog__label">
                    "Report link"
                    <div class="share-modal__link">
                        <input class="dialog__input" type="text" readonly=true value=message.url.clone()/>
                        <button class="btn" on:click=on_copy>
                            {move || if copied.get() { "Copied" } else { "Copy" }}
                        </button>
                    </div>
                </label>
                <div class="dialog__actions">
                    <a class="btn" href=message.mailto()>
                        "Email"
                    </a>
                    <a class="btn" href=message.gmail() target="_blank" rel="noopener noreferrer">
                        "Gmail"
                    </a>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(feature = "csr")]
fn copy_link(url: String, ui: RwSignal<UiState>, copied: RwSignal<bool>, toast_ms: u64) {
    use crate::state::ui::{ToastKind, show_toast};

    leptos::task::spawn_local(async move {
        match crate::util::browser::copy_text(&url).await {
            Ok(()) => {
                copied.set(true);
                show_toast(ui, ToastKind::Success, "Link copied", toast_ms);
            }
            Err(e) => log::warn!("copy link failed: {e}"),
        }
    });
}

#[cfg(not(feature = "csr"))]
fn copy_link(url: String, _ui: RwSignal<UiState>, _copied: RwSignal<bool>, _toast_ms: u64) {
    log::debug!("clipboard unavailable off-browser: {url}");
}
