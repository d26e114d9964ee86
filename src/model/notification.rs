//! Notification center entries.

use serde::{Deserialize, Serialize};

use super::{Choice, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    System,
    Report,
    Team,
    Support,
}

impl Choice for NotificationKind {
    const ALL: &'static [Self] = &[Self::System, Self::Report, Self::Team, Self::Support];

    fn value(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Report => "report",
            Self::Team => "team",
            Self::Support => "support",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Report => "Reports",
            Self::Team => "Team",
            Self::Support => "Support",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Neutral,
            Self::Medium => Tone::Info,
            Self::High => Tone::Danger,
        }
    }
}

impl Choice for Priority {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn value(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
    pub priority: Priority,
}
