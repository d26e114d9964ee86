use super::*;
use crate::model::{TeamRole, TicketStatus};

#[test]
fn choice_options_follow_variant_order() {
    let options = choice_options::<TeamRole>();
    assert_eq!(
        options,
        vec![
            SelectOption::new("admin", "Admin"),
            SelectOption::new("editor", "Editor"),
            SelectOption::new("viewer", "Viewer"),
        ]
    );
}

#[test]
fn choice_options_with_all_prepends_blank_value() {
    let options = choice_options_with_all::<TicketStatus>("All statuses");
    assert_eq!(options[0], SelectOption::new("", "All statuses"));
    assert_eq!(options[2].value, "in_progress");
    assert_eq!(options.len(), 5);
}
