//! Back/forward stack mirroring the browser session history.
//!
//! The stack never moves on its own request. [`HistoryStack::go_back`] and
//! [`HistoryStack::go_forward`] record a pending move and return the
//! direction the host should hand to the browser; the index changes only when
//! the router reports the resulting location through [`HistoryStack::observe`]
//! or [`HistoryStack::observe_traversal`]. A navigation that never completes
//! therefore leaves the index pointing at the page actually on screen.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::Direction;
use crate::consts::HISTORY_LIMIT;

/// A move requested by the user that the router has not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMove {
    /// Which way the move goes.
    pub direction: Direction,
    /// The path expected once the browser finishes navigating.
    pub target: String,
}

/// What a confirmed location did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observed {
    /// The location equals the current entry.
    Unchanged,
    /// A new entry was appended (forward branch discarded).
    Visited,
    /// The index moved one step in the given direction.
    Moved(Direction),
}

/// Compute the stack after visiting `requested` from `index`.
///
/// Visiting the path already at `index` is a no-op. Otherwise every entry
/// after `index` is dropped and `requested` becomes the new last entry.
#[must_use]
pub fn advance(entries: &[String], index: usize, requested: &str) -> (Vec<String>, usize) {
    if entries.is_empty() {
        return (vec![requested.to_owned()], 0);
    }
    let index = index.min(entries.len() - 1);
    if entries[index] == requested {
        return (entries.to_vec(), index);
    }
    let mut next = entries[..=index].to_vec();
    next.push(requested.to_owned());
    (next, index + 1)
}

/// Bounded history of visited paths plus the current position.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<String>,
    index: usize,
    pending: Option<PendingMove>,
    limit: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl HistoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack retaining at most `limit` entries (minimum 1).
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { entries: Vec::new(), index: 0, pending: None, limit: limit.max(1) }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path at the current index, if anything has been visited.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Request a move to the previous entry.
    ///
    /// Returns `None` when there is nothing behind the current entry. An
    /// unconfirmed earlier move is replaced: the browser may never report a
    /// traversal it declined, and a stale move must not block later input.
    pub fn go_back(&mut self) -> Option<Direction> {
        if !self.can_go_back() {
            return None;
        }
        let target = self.entries[self.index - 1].clone();
        self.pending = Some(PendingMove { direction: Direction::Back, target });
        Some(Direction::Back)
    }

    /// Request a move to the next entry.
    ///
    /// Returns `None` when already at the newest entry. Replaces any
    /// unconfirmed earlier move, like [`HistoryStack::go_back`].
    pub fn go_forward(&mut self) -> Option<Direction> {
        if !self.can_go_forward() {
            return None;
        }
        let target = self.entries[self.index + 1].clone();
        self.pending = Some(PendingMove { direction: Direction::Forward, target });
        Some(Direction::Forward)
    }

    /// Request a move in `direction`.
    pub fn request(&mut self, direction: Direction) -> Option<Direction> {
        match direction {
            Direction::Back => self.go_back(),
            Direction::Forward => self.go_forward(),
        }
    }

    /// Forget an unconfirmed move (e.g. the browser refused to navigate).
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Apply a confirmed location produced by in-app navigation (link click,
    /// redirect) or by a move this stack requested.
    pub fn observe(&mut self, path: &str) -> Observed {
        if let Some(moved) = self.confirm_pending(path) {
            return moved;
        }
        self.visit(path)
    }

    /// Apply a confirmed location produced by browser traversal (the native
    /// back/forward buttons). A neighbour of the current entry is treated as
    /// a step instead of a fresh visit so the stack keeps mirroring the
    /// browser.
    pub fn observe_traversal(&mut self, path: &str) -> Observed {
        if let Some(moved) = self.confirm_pending(path) {
            return moved;
        }
        if self.can_go_back() && self.entries[self.index - 1] == path {
            self.index -= 1;
            return Observed::Moved(Direction::Back);
        }
        if self.can_go_forward() && self.entries[self.index + 1] == path {
            self.index += 1;
            return Observed::Moved(Direction::Forward);
        }
        self.visit(path)
    }

    /// Apply a confirmed location that overwrote the current browser entry
    /// (a redirect navigating with `replace`). The current entry is
    /// rewritten in place so the stack keeps the browser's length.
    pub fn observe_replace(&mut self, path: &str) -> Observed {
        self.pending = None;
        match self.entries.get_mut(self.index) {
            Some(current) if current == path => Observed::Unchanged,
            Some(current) => {
                path.clone_into(current);
                Observed::Visited
            }
            None => self.visit(path),
        }
    }

    fn confirm_pending(&mut self, path: &str) -> Option<Observed> {
        let pending = self.pending.take()?;
        if pending.target != path {
            return None;
        }
        match pending.direction {
            Direction::Back => self.index = self.index.saturating_sub(1),
            Direction::Forward => self.index = (self.index + 1).min(self.entries.len().saturating_sub(1)),
        }
        Some(Observed::Moved(pending.direction))
    }

    fn visit(&mut self, path: &str) -> Observed {
        if self.current() == Some(path) {
            return Observed::Unchanged;
        }
        let (mut entries, mut index) = advance(&self.entries, self.index, path);
        if entries.len() > self.limit {
            let overflow = entries.len() - self.limit;
            entries.drain(..overflow);
            index -= overflow;
        }
        self.entries = entries;
        self.index = index;
        Observed::Visited
    }
}
