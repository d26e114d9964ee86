//! In-app back/forward navigation for the report portal.
//!
//! This crate has no browser dependencies. The portal feeds it confirmed
//! route changes, touch/mouse samples and key presses; it answers with
//! [`Direction`] requests that the host forwards to the browser history API.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`history`] | Back/forward stack with pending-move confirmation |
//! | [`gesture`] | Two-finger swipe and middle-mouse drag detection |
//! | [`shortcut`] | Keyboard shortcut resolution (Alt+Arrow, Backspace) |
//! | [`consts`] | Default thresholds and limits |

pub mod consts;
pub mod gesture;
pub mod history;
pub mod shortcut;

/// Which way a navigation request moves through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward older entries (`history.back()`).
    Back,
    /// Toward newer entries (`history.forward()`).
    Forward,
}
