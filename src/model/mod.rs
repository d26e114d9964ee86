//! Domain records shared by state holders, pages and components.
//!
//! DESIGN
//! ======
//! Every role, status and kind is a closed enum. Labels come from exhaustive
//! matches so a new variant fails to compile until each display site knows
//! about it. Timestamps stay RFC 3339 strings, the same shape the session
//! JSON and export payloads carry.

pub mod dashboard;
pub mod notification;
pub mod support;
pub mod team;
pub mod user;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

pub use dashboard::{Dashboard, ReportCategory};
pub use notification::{Notification, NotificationKind, Priority};
pub use support::{MessageAuthor, SupportTicket, TicketCategory, TicketKind, TicketMessage, TicketStatus};
pub use team::{MemberStatus, TeamMember, TeamRole};
pub use user::{Role, User};

/// Shared behaviour of the closed enums rendered in selects and badges.
pub trait Choice: Sized + Copy + PartialEq + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Stable machine value used in form controls and JSON.
    fn value(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// Inverse of [`Choice::value`].
    fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.value() == raw)
    }
}

/// Badge colour bucket for status-like values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "badge--neutral",
            Self::Info => "badge--info",
            Self::Success => "badge--success",
            Self::Warning => "badge--warning",
            Self::Danger => "badge--danger",
        }
    }
}
