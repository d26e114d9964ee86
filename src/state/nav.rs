//! Back/forward navigation state: the in-app history stack plus the gesture
//! detector, and whether the next route change came from browser traversal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app feeds every confirmed router location into [`NavState::route_changed`].
//! A `popstate` listener calls [`NavState::mark_traversal`] first, so native
//! back/forward buttons move the index instead of pushing a new entry.
//! Redirects that navigate with `replace` call [`NavState::mark_replace`] so
//! the overwritten browser entry is overwritten in the stack too.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use navigation::Direction;
use navigation::gesture::{SwipeConfig, SwipeDetector};
use navigation::history::{HistoryStack, Observed};

#[derive(Clone, Debug)]
pub struct NavState {
    pub history: HistoryStack,
    pub swipe: SwipeDetector,
    traversing: bool,
    replacing: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(SwipeConfig::default(), navigation::consts::HISTORY_LIMIT)
    }
}

impl NavState {
    #[must_use]
    pub fn new(swipe: SwipeConfig, history_limit: usize) -> Self {
        Self {
            history: HistoryStack::with_limit(history_limit),
            swipe: SwipeDetector::new(swipe),
            traversing: false,
            replacing: false,
        }
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// The next route change was produced by browser traversal.
    pub fn mark_traversal(&mut self) {
        self.traversing = true;
    }

    /// The next route change replaces the current browser entry.
    pub fn mark_replace(&mut self) {
        self.replacing = true;
    }

    /// Record a confirmed location.
    pub fn route_changed(&mut self, path: &str) -> Observed {
        let replacing = std::mem::take(&mut self.replacing);
        let observed = if replacing {
            self.traversing = false;
            self.history.observe_replace(path)
        } else if std::mem::take(&mut self.traversing) {
            self.history.observe_traversal(path)
        } else {
            self.history.observe(path)
        };
        log::debug!("route {path} -> {observed:?} (index {})", self.history.index());
        observed
    }

    /// Ask for a move; `Some` means the caller should drive the browser
    /// history in that direction.
    pub fn request(&mut self, direction: Direction) -> Option<Direction> {
        let requested = self.history.request(direction);
        if requested.is_none() {
            log::debug!("no history entry for {direction:?}");
        }
        requested
    }

    /// Drop a requested move the browser refused.
    pub fn abandon(&mut self) {
        self.history.cancel_pending();
    }
}

/// Request a move and, if the stack accepts it, drive the browser history.
/// A refused browser call drops the pending move again.
pub fn go(nav: RwSignal<NavState>, direction: Direction) {
    let Some(direction) = nav.try_update(|n| n.request(direction)).flatten() else {
        return;
    };
    #[cfg(feature = "csr")]
    if let Err(e) = crate::util::browser::traverse(direction) {
        log::warn!("history {direction:?} failed: {e}");
        nav.update(NavState::abandon);
    }
    #[cfg(not(feature = "csr"))]
    log::debug!("history {direction:?} requires a browser");
}

/// Navigate with `replace`, telling the stack the current entry is being
/// overwritten rather than followed by a new one.
pub fn replace_with<F>(nav: Option<RwSignal<NavState>>, navigate: F, path: &str)
where
    F: Fn(&str, NavigateOptions),
{
    // Replacing with the page already on screen produces no route change to
    // consume the flag.
    if let Some(nav) = nav {
        nav.try_update(|n| {
            if n.history.current() != Some(path) {
                n.mark_replace();
            }
        });
    }
    navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
}
