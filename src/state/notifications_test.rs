use super::*;

fn ids(list: &[Notification]) -> Vec<&str> {
    list.iter().map(|n| n.id.as_str()).collect()
}

#[test]
fn seeded_center_counts_unread() {
    let center = NotificationCenter::seeded();
    assert_eq!(center.items.len(), 5);
    assert_eq!(center.unread_count(), 3);
}

#[test]
fn mark_as_read_single() {
    let mut center = NotificationCenter::seeded();
    assert!(center.mark_as_read("n-1"));
    assert_eq!(center.unread_count(), 2);
    assert!(!center.mark_as_read("missing"));
}

#[test]
fn mark_all_as_read_zeroes_count() {
    let mut center = NotificationCenter::seeded();
    center.mark_all_as_read();
    assert_eq!(center.unread_count(), 0);
}

#[test]
fn remove_and_clear() {
    let mut center = NotificationCenter::seeded();
    assert!(center.remove("n-2"));
    assert!(!center.remove("n-2"));
    assert_eq!(center.items.len(), 4);
    center.clear_all();
    assert!(center.items.is_empty());
    assert_eq!(center.unread_count(), 0);
}

#[test]
fn filtered_is_newest_first() {
    let center = NotificationCenter::seeded();
    assert_eq!(
        ids(&center.filtered(NotificationFilter::All)),
        vec!["n-1", "n-2", "n-3", "n-4", "n-5"]
    );
}

#[test]
fn filtered_unread_and_kind() {
    let center = NotificationCenter::seeded();
    assert_eq!(ids(&center.filtered(NotificationFilter::Unread)), vec!["n-1", "n-2", "n-3"]);
    assert_eq!(
        ids(&center.filtered(NotificationFilter::Kind(NotificationKind::Report))),
        vec!["n-1", "n-5"]
    );
}

#[test]
fn notify_prepends_unread_entry() {
    let mut center = NotificationCenter::default();
    let id = center.notify(NotificationKind::Support, "Ticket created", "We got it.", Priority::Low);
    assert!(id.starts_with("n-"));
    assert_eq!(center.unread_count(), 1);
    assert_eq!(center.recent(3)[0].id, id);
}

#[test]
fn recent_truncates() {
    let center = NotificationCenter::seeded();
    assert_eq!(ids(&center.recent(2)), vec!["n-1", "n-2"]);
}
