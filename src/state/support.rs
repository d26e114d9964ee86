//! Support desk: the user's tickets and their message threads.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

use crate::data;
use crate::model::{MessageAuthor, SupportTicket, TicketCategory, TicketKind, TicketMessage, TicketStatus};
use crate::state::{matches_query, new_id, newest_first};
use crate::util::format::now_rfc3339;
use crate::util::validate::{ValidationError, validate_reply, validate_ticket};

/// Author name shown on messages the signed-in user writes.
pub const USER_AUTHOR_NAME: &str = "You";

/// New-ticket form contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketDraft {
    pub kind: TicketKind,
    pub category: TicketCategory,
    pub subject: String,
    pub message: String,
}

impl Default for TicketDraft {
    fn default() -> Self {
        Self {
            kind: TicketKind::Support,
            category: TicketCategory::Technical,
            subject: String::new(),
            message: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SupportDesk {
    pub tickets: Vec<SupportTicket>,
}

impl SupportDesk {
    #[must_use]
    pub fn seeded() -> Self {
        Self { tickets: data::tickets() }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&SupportTicket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn count_by_status(&self, status: TicketStatus) -> usize {
        self.tickets.iter().filter(|t| t.status == status).count()
    }

    /// Open a ticket whose thread starts with the draft message.
    ///
    /// # Errors
    ///
    /// See [`validate_ticket`].
    pub fn create(&mut self, draft: &TicketDraft) -> Result<SupportTicket, ValidationError> {
        let (subject, body) = validate_ticket(&draft.subject, &draft.message)?;
        let now = now_rfc3339();
        let ticket = SupportTicket {
            id: self.next_ticket_id(),
            kind: draft.kind,
            category: draft.category,
            status: TicketStatus::Open,
            subject,
            created_at: now.clone(),
            updated_at: now.clone(),
            messages: vec![user_message(body, now)],
        };
        log::info!("created ticket {} ({:?})", ticket.id, ticket.category);
        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Append a user reply. Replying to a resolved ticket reopens it as in
    /// progress.
    ///
    /// # Errors
    ///
    /// Blank body, unknown ticket, or [`ValidationError::TicketClosed`].
    pub fn reply(&mut self, ticket_id: &str, body: &str) -> Result<(), ValidationError> {
        let body = validate_reply(body)?;
        let ticket = self.find_mut(ticket_id)?;
        if !ticket.status.accepts_replies() {
            return Err(ValidationError::TicketClosed);
        }
        let now = now_rfc3339();
        ticket.messages.push(user_message(body, now.clone()));
        ticket.updated_at = now;
        if ticket.status == TicketStatus::Resolved {
            ticket.status = TicketStatus::InProgress;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// [`ValidationError::NotFound`] for an unknown id.
    pub fn set_status(&mut self, ticket_id: &str, status: TicketStatus) -> Result<(), ValidationError> {
        let ticket = self.find_mut(ticket_id)?;
        if ticket.status != status {
            ticket.status = status;
            ticket.updated_at = now_rfc3339();
        }
        Ok(())
    }

    /// Tickets matching `status` (all when `None`) whose subject or id
    /// contains `query`, most recently updated first.
    #[must_use]
    pub fn filtered(&self, status: Option<TicketStatus>, query: &str) -> Vec<SupportTicket> {
        let mut out: Vec<SupportTicket> = self
            .tickets
            .iter()
            .filter(|t| status.is_none_or(|s| t.status == s))
            .filter(|t| matches_query(query, &[&t.subject, &t.id]))
            .cloned()
            .collect();
        out.sort_by(|a, b| newest_first(&a.updated_at, &b.updated_at));
        out
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut SupportTicket, ValidationError> {
        self.tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ValidationError::NotFound("Ticket"))
    }

    /// `t-<n>` one past the highest numeric ticket id.
    fn next_ticket_id(&self) -> String {
        let highest = self
            .tickets
            .iter()
            .filter_map(|t| t.id.strip_prefix("t-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(1000);
        format!("t-{}", highest + 1)
    }
}

fn user_message(body: String, sent_at: String) -> TicketMessage {
    TicketMessage {
        id: new_id("m"),
        author: MessageAuthor::User,
        author_name: USER_AUTHOR_NAME.to_owned(),
        body,
        sent_at,
    }
}
