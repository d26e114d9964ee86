use super::*;

fn draft(subject: &str, message: &str) -> TicketDraft {
    TicketDraft {
        subject: subject.to_owned(),
        message: message.to_owned(),
        ..TicketDraft::default()
    }
}

// =============================================================
// create
// =============================================================

#[test]
fn create_opens_ticket_with_first_message() {
    let mut desk = SupportDesk::seeded();
    let ticket = desk.create(&draft(" Login loop ", "I keep getting sent back to login.")).unwrap();
    assert_eq!(ticket.id, "t-1004");
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.subject, "Login loop");
    assert_eq!(ticket.messages.len(), 1);
    assert_eq!(ticket.messages[0].author, MessageAuthor::User);
    assert_eq!(ticket.created_at, ticket.updated_at);
    assert_eq!(desk.tickets.len(), 4);
}

#[test]
fn create_on_empty_desk_starts_numbering() {
    let mut desk = SupportDesk::default();
    assert_eq!(desk.create(&draft("First", "long enough body")).unwrap().id, "t-1001");
}

#[test]
fn create_rejects_invalid_draft() {
    let mut desk = SupportDesk::default();
    assert_eq!(
        desk.create(&draft("Subject", "short")),
        Err(ValidationError::TooShort { field: "Message", min: 10 })
    );
    assert!(desk.tickets.is_empty());
}

// =============================================================
// reply / status
// =============================================================

#[test]
fn reply_appends_and_touches_updated_at() {
    let mut desk = SupportDesk::seeded();
    desk.reply("t-1002", "Any update on this?").unwrap();
    let ticket = desk.find("t-1002").unwrap();
    assert_eq!(ticket.messages.len(), 2);
    assert_eq!(ticket.last_message().unwrap().body, "Any update on this?");
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_ne!(ticket.updated_at, "2024-03-19T14:00:00Z");
}

#[test]
fn reply_reopens_resolved_ticket() {
    let mut desk = SupportDesk::seeded();
    desk.reply("t-1003", "Still wrong on the March invoice.").unwrap();
    assert_eq!(desk.find("t-1003").unwrap().status, TicketStatus::InProgress);
}

#[test]
fn reply_rejected_on_closed_ticket() {
    let mut desk = SupportDesk::seeded();
    desk.set_status("t-1001", TicketStatus::Closed).unwrap();
    assert_eq!(desk.reply("t-1001", "hello?"), Err(ValidationError::TicketClosed));
    assert_eq!(desk.find("t-1001").unwrap().messages.len(), 2);
}

#[test]
fn reply_errors() {
    let mut desk = SupportDesk::seeded();
    assert_eq!(desk.reply("t-1001", "   "), Err(ValidationError::Required("Reply")));
    assert_eq!(desk.reply("t-9999", "hi"), Err(ValidationError::NotFound("Ticket")));
}

#[test]
fn set_status_unknown_ticket() {
    let mut desk = SupportDesk::seeded();
    assert_eq!(desk.set_status("x", TicketStatus::Open), Err(ValidationError::NotFound("Ticket")));
}

// =============================================================
// filtered
// =============================================================

#[test]
fn filtered_sorts_by_recent_activity() {
    let desk = SupportDesk::seeded();
    let ids: Vec<String> = desk.filtered(None, "").into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["t-1002", "t-1001", "t-1003"]);
}

#[test]
fn filtered_by_status_and_query() {
    let desk = SupportDesk::seeded();
    assert_eq!(desk.filtered(Some(TicketStatus::Resolved), "").len(), 1);
    assert_eq!(desk.filtered(None, "EXPORT")[0].id, "t-1001");
    assert_eq!(desk.filtered(None, "t-1003")[0].id, "t-1003");
    assert!(desk.filtered(Some(TicketStatus::Open), "invoice").is_empty());
    assert_eq!(desk.count_by_status(TicketStatus::Open), 1);
}
