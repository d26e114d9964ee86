//! Dark mode preference and toggle.
//!
//! The stored preference wins; without one the system
//! `prefers-color-scheme` media query decides. The active theme is applied
//! as a `data-theme` attribute on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failed write is logged and the in-memory
//! toggle still takes effect for the session.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage::KeyValueStore;

pub const DARK_MODE_KEY: &str = "portal_dark_mode";

/// Stored preference, falling back to `system_prefers_dark`.
pub fn read_preference(store: &dyn KeyValueStore, system_prefers_dark: bool) -> bool {
    match store.get(DARK_MODE_KEY) {
        Ok(Some(value)) => value == "true",
        Ok(None) => system_prefers_dark,
        Err(e) => {
            log::warn!("dark mode preference unreadable: {e}");
            system_prefers_dark
        }
    }
}

/// `(prefers-color-scheme: dark)`; always `false` off-browser.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let theme = if enabled { "dark" } else { "light" };
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", theme) {
                log::warn!("failed to apply theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("theme change ignored off-browser (dark={enabled})");
    }
}

/// Flip the preference, apply it, and persist it.
pub fn toggle(store: &dyn KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = store.set(DARK_MODE_KEY, if next { "true" } else { "false" }) {
        log::warn!("failed to persist dark mode preference: {e}");
    }
    next
}
