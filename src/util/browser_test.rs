use super::*;

#[test]
fn clipboard_rejection_reports_reason() {
    let err = BrowserError::Rejected { api: "clipboard", reason: "NotAllowedError".to_owned() };
    assert_eq!(err.to_string(), "clipboard rejected: NotAllowedError");
}

#[test]
fn missing_window_and_target_messages() {
    assert_eq!(BrowserError::NoWindow.to_string(), "browser window unavailable");
    assert_eq!(BrowserError::Unsupported { api: "fullscreen target" }.to_string(), "fullscreen target unavailable");
}
