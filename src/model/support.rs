//! Support tickets and their message threads.

use serde::{Deserialize, Serialize};

use super::{Choice, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    Support,
    Feedback,
}

impl Choice for TicketKind {
    const ALL: &'static [Self] = &[Self::Support, Self::Feedback];

    fn value(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Feedback => "feedback",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Support => "Support request",
            Self::Feedback => "Feedback",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Technical,
    Billing,
    Account,
    FeatureRequest,
    Other,
}

impl Choice for TicketCategory {
    const ALL: &'static [Self] =
        &[Self::Technical, Self::Billing, Self::Account, Self::FeatureRequest, Self::Other];

    fn value(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::Account => "account",
            Self::FeatureRequest => "feature_request",
            Self::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Technical => "Technical issue",
            Self::Billing => "Billing",
            Self::Account => "Account",
            Self::FeatureRequest => "Feature request",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Open => Tone::Info,
            Self::InProgress => Tone::Warning,
            Self::Resolved => Tone::Success,
            Self::Closed => Tone::Neutral,
        }
    }

    /// Closed tickets no longer accept replies.
    #[must_use]
    pub fn accepts_replies(self) -> bool {
        self != Self::Closed
    }
}

impl Choice for TicketStatus {
    const ALL: &'static [Self] = &[Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    fn value(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }
}

/// Who wrote a ticket message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageAuthor {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    pub id: String,
    pub author: MessageAuthor,
    pub author_name: String,
    pub body: String,
    pub sent_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: String,
    pub kind: TicketKind,
    pub category: TicketCategory,
    pub status: TicketStatus,
    pub subject: String,
    pub created_at: String,
    pub updated_at: String,
    pub messages: Vec<TicketMessage>,
}

impl SupportTicket {
    /// Body of the most recent message, used as the list preview.
    #[must_use]
    pub fn last_message(&self) -> Option<&TicketMessage> {
        self.messages.last()
    }
}
