use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_chrome() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_collapsed);
    assert!(!state.sidebar_open);
    assert!(state.toasts.is_empty());
}

#[test]
fn toggle_sidebar_flips() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_collapsed);
    state.toggle_sidebar();
    assert!(!state.sidebar_collapsed);
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn push_toast_returns_unique_ids() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Success, "Saved");
    let b = state.push_toast(ToastKind::Error, "Failed");
    assert_ne!(a, b);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "Saved");
}

#[test]
fn dismiss_toast_is_idempotent() {
    let mut state = UiState::default();
    let id = state.push_toast(ToastKind::Info, "Hello");
    assert!(state.dismiss_toast(&id));
    assert!(!state.dismiss_toast(&id));
    assert!(state.toasts.is_empty());
}

#[test]
fn toast_kind_tones() {
    assert_eq!(ToastKind::Success.tone(), Tone::Success);
    assert_eq!(ToastKind::Error.tone(), Tone::Danger);
    assert_eq!(ToastKind::default(), ToastKind::Info);
}

#[cfg(not(feature = "csr"))]
#[test]
fn show_toast_pushes_into_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState::default());
        let id = show_toast(ui, ToastKind::Success, "Copied", 10).unwrap();
        assert_eq!(ui.get_untracked().toasts[0].id, id);
    });
}
