//! Keyboard shortcuts for history navigation.

#[cfg(test)]
#[path = "shortcut_test.rs"]
mod shortcut_test;

use crate::Direction;

/// Keyboard modifier keys held during a key press.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifier is held.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.meta)
    }

    /// Only Alt/Option is held.
    #[must_use]
    pub fn alt_only(self) -> bool {
        self.alt && !(self.shift || self.ctrl || self.meta)
    }
}

/// Whether an element with this tag name accepts typed text.
#[must_use]
pub fn is_editable_tag(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || tag_name.eq_ignore_ascii_case("input")
        || tag_name.eq_ignore_ascii_case("textarea")
        || tag_name.eq_ignore_ascii_case("select")
}

/// Resolve a `keydown` to a navigation request.
///
/// `key` is the DOM `KeyboardEvent.key` value. Nothing resolves while focus
/// is in an editable element so typing and caret movement keep working.
#[must_use]
pub fn resolve(key: &str, modifiers: Modifiers, editing: bool) -> Option<Direction> {
    if editing {
        return None;
    }
    match key {
        "ArrowLeft" if modifiers.alt_only() => Some(Direction::Back),
        "ArrowRight" if modifiers.alt_only() => Some(Direction::Forward),
        "Backspace" if modifiers.is_empty() => Some(Direction::Back),
        _ => None,
    }
}
