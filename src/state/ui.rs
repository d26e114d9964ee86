//! Local UI chrome state (theme, sidebar, toasts).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so rendering
//! controls can evolve independently of the mock data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

use crate::model::Tone;
use crate::state::new_id;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Success => Tone::Success,
            Self::Error => Tone::Danger,
            Self::Info => Tone::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    /// Mobile drawer; independent of the desktop collapse toggle.
    pub sidebar_open: bool,
    pub toasts: Vec<Toast>,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Queue a toast and return its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = new_id("toast");
        self.toasts.push(Toast { id: id.clone(), kind, message: message.into() });
        id
    }

    /// Returns `false` if the toast was already gone.
    pub fn dismiss_toast(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}

/// Push a toast and schedule its removal after `dismiss_ms`. The timer is a
/// no-op if the toast was dismissed first or the signal has been disposed.
pub fn show_toast(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>, dismiss_ms: u64) -> Option<String> {
    let message = message.into();
    let id = ui.try_update(|s| s.push_toast(kind, message))?;
    #[cfg(feature = "csr")]
    {
        let id = id.clone();
        let delay = u32::try_from(dismiss_ms).unwrap_or(u32::MAX);
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            ui.try_update(|s| s.dismiss_toast(&id));
        });
    }
    #[cfg(not(feature = "csr"))]
    log::debug!("toast {id} auto-dismiss ({dismiss_ms} ms) needs a browser timer");
    Some(id)
}
