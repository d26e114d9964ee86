use super::*;

fn alt() -> Modifiers {
    Modifiers { alt: true, ..Modifiers::default() }
}

#[test]
fn modifiers_default_is_empty() {
    assert!(Modifiers::default().is_empty());
    assert!(!alt().is_empty());
}

#[test]
fn alt_only_rejects_combinations() {
    assert!(alt().alt_only());
    assert!(!Modifiers { alt: true, shift: true, ..Modifiers::default() }.alt_only());
    assert!(!Modifiers::default().alt_only());
}

#[test]
fn alt_arrows_navigate() {
    assert_eq!(resolve("ArrowLeft", alt(), false), Some(Direction::Back));
    assert_eq!(resolve("ArrowRight", alt(), false), Some(Direction::Forward));
}

#[test]
fn plain_arrows_do_nothing() {
    assert_eq!(resolve("ArrowLeft", Modifiers::default(), false), None);
    assert_eq!(resolve("ArrowRight", Modifiers::default(), false), None);
}

#[test]
fn backspace_goes_back_without_modifiers() {
    assert_eq!(resolve("Backspace", Modifiers::default(), false), Some(Direction::Back));
    assert_eq!(resolve("Backspace", Modifiers { ctrl: true, ..Modifiers::default() }, false), None);
}

#[test]
fn editing_suppresses_every_shortcut() {
    assert_eq!(resolve("Backspace", Modifiers::default(), true), None);
    assert_eq!(resolve("ArrowLeft", alt(), true), None);
}

#[test]
fn editable_tags_detected_case_insensitively() {
    assert!(is_editable_tag("INPUT", false));
    assert!(is_editable_tag("textarea", false));
    assert!(is_editable_tag("Select", false));
    assert!(is_editable_tag("DIV", true));
    assert!(!is_editable_tag("BUTTON", false));
}
