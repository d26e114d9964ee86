//! Swipe detection for two-finger touch and middle-mouse drags.
//!
//! The detector is fed raw samples by the host (coordinates in CSS pixels,
//! timestamps in milliseconds) and reports a [`Direction`] when a completed
//! gesture qualifies. Moving right means back, moving left means forward.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::Direction;
use crate::consts::{SWIPE_MAX_DURATION_MS, SWIPE_THRESHOLD_PX, SWIPE_TOUCH_POINTS};

/// A screen-space position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tunables for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal travel that must be exceeded, in pixels.
    pub threshold_px: f64,
    /// Touch gestures must finish in strictly less than this many ms.
    pub max_duration_ms: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self { threshold_px: SWIPE_THRESHOLD_PX, max_duration_ms: SWIPE_MAX_DURATION_MS }
    }
}

/// Mouse button identifier, from the DOM `MouseEvent.button` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

impl MouseButton {
    /// Map a DOM button code; returns `None` for auxiliary buttons.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Where and when a two-finger touch began.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchStart {
    origin: Point,
    started_ms: f64,
}

/// Classify a completed touch gesture.
///
/// Fires only when horizontal travel exceeds the threshold, dominates
/// vertical travel, and the gesture was quick enough not to be a scroll.
#[must_use]
pub fn classify_swipe(start: Point, end: Point, elapsed_ms: f64, config: &SwipeConfig) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() <= config.threshold_px || dx.abs() <= dy.abs() || elapsed_ms >= config.max_duration_ms {
        return None;
    }
    Some(horizontal_direction(dx))
}

fn horizontal_direction(dx: f64) -> Direction {
    if dx > 0.0 { Direction::Back } else { Direction::Forward }
}

/// Stateful recogniser for navigation swipes.
#[derive(Debug, Clone, Default)]
pub struct SwipeDetector {
    config: SwipeConfig,
    touch: Option<TouchStart>,
    drag_start_x: Option<f64>,
}

impl SwipeDetector {
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self { config, touch: None, drag_start_x: None }
    }

    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Whether a two-finger touch is currently being tracked.
    #[must_use]
    pub fn tracking_touch(&self) -> bool {
        self.touch.is_some()
    }

    /// Whether a middle-button drag is currently being tracked.
    #[must_use]
    pub fn tracking_drag(&self) -> bool {
        self.drag_start_x.is_some()
    }

    /// Record a `touchstart`. Only exactly two active points start a
    /// gesture; any other count forgets the tracked one.
    pub fn touch_start(&mut self, points: &[Point], now_ms: f64) {
        self.touch = match points {
            [first, ..] if points.len() == SWIPE_TOUCH_POINTS => {
                Some(TouchStart { origin: *first, started_ms: now_ms })
            }
            _ => None,
        };
    }

    /// Record a `touchend` at `end` and classify the gesture.
    pub fn touch_end(&mut self, end: Point, now_ms: f64) -> Option<Direction> {
        let start = self.touch.take()?;
        classify_swipe(start.origin, end, now_ms - start.started_ms, &self.config)
    }

    /// Record a `mousedown`; only the middle button starts a drag.
    pub fn mouse_down(&mut self, button: MouseButton, x: f64) {
        if button == MouseButton::Middle {
            self.drag_start_x = Some(x);
        }
    }

    /// Record a `mouseup` and classify a middle-button drag by horizontal
    /// travel alone.
    pub fn mouse_up(&mut self, button: MouseButton, x: f64) -> Option<Direction> {
        if button != MouseButton::Middle {
            return None;
        }
        let start_x = self.drag_start_x.take()?;
        let dx = x - start_x;
        if dx.abs() <= self.config.threshold_px {
            return None;
        }
        Some(horizontal_direction(dx))
    }
}
