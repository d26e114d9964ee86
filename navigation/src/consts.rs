//! Shared numeric constants for the navigation crate.

// ── Gestures ────────────────────────────────────────────────────

/// Minimum horizontal travel in CSS pixels before a swipe counts.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Two-finger swipes at or above this duration are treated as scrolling.
pub const SWIPE_MAX_DURATION_MS: f64 = 300.0;

/// Number of simultaneous touch points a navigation swipe requires.
pub const SWIPE_TOUCH_POINTS: usize = 2;

// ── History ─────────────────────────────────────────────────────

/// Default number of entries retained in the history stack.
pub const HISTORY_LIMIT: usize = 100;
