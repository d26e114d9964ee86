//! Thin wrappers over the browser APIs that pages call directly.
//!
//! Off-browser builds get only [`BrowserError`]; every call site is itself
//! behind the `csr` feature.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "csr")]
use navigation::Direction;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("{api} unavailable")]
    Unsupported { api: &'static str },
    #[error("{api} rejected: {reason}")]
    Rejected { api: &'static str, reason: String },
}

#[cfg(feature = "csr")]
fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

#[cfg(feature = "csr")]
fn rejected(api: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> BrowserError {
    move |e| BrowserError::Rejected { api, reason: format!("{e:?}") }
}

/// Write `text` to the clipboard, resolving once the browser accepts it.
///
/// # Errors
///
/// [`BrowserError`] when there is no window or the write promise rejects
/// (permissions, insecure context).
#[cfg(feature = "csr")]
pub async fn copy_text(text: &str) -> Result<(), BrowserError> {
    let clipboard = window()?.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(rejected("clipboard"))
}

/// Enter fullscreen on the element with `element_id`, or leave fullscreen if
/// something is already fullscreen. Returns whether fullscreen was requested.
///
/// # Errors
///
/// [`BrowserError`] when the element is missing or the request is refused.
#[cfg(feature = "csr")]
pub fn toggle_fullscreen(element_id: &str) -> Result<bool, BrowserError> {
    let document = window()?.document().ok_or(BrowserError::NoWindow)?;
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        return Ok(false);
    }
    let element = document
        .get_element_by_id(element_id)
        .ok_or(BrowserError::Unsupported { api: "fullscreen target" })?;
    element.request_fullscreen().map_err(rejected("fullscreen"))?;
    Ok(true)
}

/// `history.back()` / `history.forward()`.
///
/// # Errors
///
/// [`BrowserError`] when the History API is unavailable.
#[cfg(feature = "csr")]
pub fn traverse(direction: Direction) -> Result<(), BrowserError> {
    let history = window()?.history().map_err(rejected("history"))?;
    match direction {
        Direction::Back => history.back(),
        Direction::Forward => history.forward(),
    }
    .map_err(rejected("history"))
}

/// Milliseconds since the epoch from the JS clock.
#[cfg(feature = "csr")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
