//! Export dropdown for the report detail page.
//!
//! Exports are simulated: after `export_delay_ms` the mock payload is
//! downloaded. The pending timer checks an alive flag so leaving the page
//! mid-export does nothing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::config::PortalConfig;
use crate::model::{Choice, Dashboard};
use crate::state::ui::UiState;
use crate::util::export::ExportFormat;

#[component]
pub fn ExportMenu(report: Dashboard) -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let open = RwSignal::new(false);
    let busy = RwSignal::new(None::<ExportFormat>);
    let report = StoredValue::new(report);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let start_export = Callback::new(move |format: ExportFormat| {
        if busy.get_untracked().is_some() {
            return;
        }
        open.set(false);
        busy.set(Some(format));
        let ctx = ExportContext {
            ui,
            busy,
            alive: alive.clone(),
            delay_ms: config.export_delay_ms,
            toast_ms: config.toast_dismiss_ms,
        };
        run_export(report.get_value(), format, ctx);
    });

    view! {
        <div class="export-menu">
            <button
                class="btn"
                disabled=move || busy.get().is_some()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || match busy.get() {
                    Some(format) => format!("Exporting {}...", format.extension().to_uppercase()),
                    None => "Export".to_owned(),
                }}
            </button>
            <Show when=move || open.get()>
                <ul class="export-menu__list" role="menu">
                    {ExportFormat::ALL
                        .iter()
                        .map(|format| {
                            let format = *format;
                            view! {
                                <li>
                                    <button
                                        class="export-menu__item"
                                        role="menuitem"
                                        on:click=move |_| start_export.run(format)
                                    >
                                        {format.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

struct ExportContext {
    ui: RwSignal<UiState>,
    busy: RwSignal<Option<ExportFormat>>,
    alive: Arc<AtomicBool>,
    delay_ms: u64,
    toast_ms: u64,
}

#[cfg(feature = "csr")]
fn run_export(report: Dashboard, format: ExportFormat, ctx: ExportContext) {
    use crate::state::ui::{ToastKind, show_toast};

    let delay = u32::try_from(ctx.delay_ms).unwrap_or(u32::MAX);
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay).await;
        if !ctx.alive.load(Ordering::Relaxed) {
            return;
        }
        match crate::util::export::export_report(&report, format) {
            Ok(filename) => {
                show_toast(ctx.ui, ToastKind::Success, format!("Downloaded {filename}"), ctx.toast_ms);
            }
            Err(e) => {
                log::error!("export of {} failed: {e}", report.id);
                show_toast(ctx.ui, ToastKind::Error, "Export failed", ctx.toast_ms);
            }
        }
        ctx.busy.set(None);
    });
}

#[cfg(not(feature = "csr"))]
fn run_export(report: Dashboard, format: ExportFormat, ctx: ExportContext) {
    let filename = crate::util::export::export_filename(&report, format);
    log::debug!(
        "export of {filename} skipped off-browser (delay {} ms, toast {} ms, alive {})",
        ctx.delay_ms,
        ctx.toast_ms,
        ctx.alive.load(Ordering::Relaxed)
    );
    ctx.ui.update(|s| {
        s.push_toast(crate::state::ui::ToastKind::Info, format!("{filename} is only available in the browser"));
    });
    ctx.busy.set(None);
}
