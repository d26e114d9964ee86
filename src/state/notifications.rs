//! Notification center: the in-memory feed behind the bell menu and the
//! notifications page.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::data;
use crate::model::{Notification, NotificationKind, Priority};
use crate::state::{new_id, newest_first};
use crate::util::format::now_rfc3339;

/// Which notifications a listing shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationFilter {
    #[must_use]
    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !notification.read,
            Self::Kind(kind) => notification.kind == kind,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    pub items: Vec<Notification>,
}

impl NotificationCenter {
    /// Center preloaded with the mock feed.
    #[must_use]
    pub fn seeded() -> Self {
        Self { items: data::notifications() }
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Returns `false` when `id` is unknown.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
    }

    /// Create an unread notification stamped now and return its id.
    pub fn notify(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        priority: Priority,
    ) -> String {
        let id = new_id("n");
        self.push(Notification {
            id: id.clone(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: now_rfc3339(),
            read: false,
            priority,
        });
        id
    }

    /// Matching notifications, newest first.
    #[must_use]
    pub fn filtered(&self, filter: NotificationFilter) -> Vec<Notification> {
        let mut out: Vec<Notification> = self.items.iter().filter(|n| filter.matches(n)).cloned().collect();
        out.sort_by(|a, b| newest_first(&a.timestamp, &b.timestamp));
        out
    }

    /// The newest `limit` notifications, for the header dropdown.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<Notification> {
        let mut out = self.filtered(NotificationFilter::All);
        out.truncate(limit);
        out
    }
}
