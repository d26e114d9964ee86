use super::*;

fn assert_values_round_trip<T: Choice + std::fmt::Debug>() {
    for variant in T::ALL {
        assert_eq!(T::from_value(variant.value()), Some(*variant));
        assert!(!variant.label().is_empty());
    }
    assert_eq!(T::from_value("definitely-not-a-variant"), None);
}

// =============================================================
// Choice
// =============================================================

#[test]
fn every_choice_value_parses_back() {
    assert_values_round_trip::<Role>();
    assert_values_round_trip::<ReportCategory>();
    assert_values_round_trip::<TeamRole>();
    assert_values_round_trip::<MemberStatus>();
    assert_values_round_trip::<TicketKind>();
    assert_values_round_trip::<TicketCategory>();
    assert_values_round_trip::<TicketStatus>();
    assert_values_round_trip::<NotificationKind>();
    assert_values_round_trip::<Priority>();
}

#[test]
fn serde_names_match_choice_values() {
    let json = serde_json::to_value(TicketStatus::InProgress).unwrap();
    assert_eq!(json, serde_json::json!(TicketStatus::InProgress.value()));
    let json = serde_json::to_value(TicketCategory::FeatureRequest).unwrap();
    assert_eq!(json, serde_json::json!("feature_request"));
}

#[test]
fn priority_orders_low_to_high() {
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
}

#[test]
fn closed_tickets_reject_replies() {
    assert!(!TicketStatus::Closed.accepts_replies());
    assert!(TicketStatus::Resolved.accepts_replies());
}

#[test]
fn tones_map_to_badge_classes() {
    assert_eq!(MemberStatus::Pending.tone().class(), "badge--warning");
    assert_eq!(Priority::High.tone().class(), "badge--danger");
    assert_eq!(TicketStatus::Resolved.tone(), Tone::Success);
}

// =============================================================
// User
// =============================================================

fn user(role: Role, company: Option<&str>) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Sam Rivera".to_owned(),
        email: "sam@example.com".to_owned(),
        role,
        avatar: None,
        company_name: company.map(str::to_owned),
        created_at: "2024-01-15T09:00:00Z".to_owned(),
    }
}

#[test]
fn user_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(user(Role::Organization, Some("Acme"))).unwrap();
    assert_eq!(json["companyName"], "Acme");
    assert_eq!(json["createdAt"], "2024-01-15T09:00:00Z");
    assert_eq!(json["role"], "organization");
}

#[test]
fn user_deserializes_without_optional_fields() {
    let raw = r#"{"id":"u","name":"N","email":"e@x.io","role":"individual","createdAt":"2024-01-01"}"#;
    let parsed: User = serde_json::from_str(raw).unwrap();
    assert!(parsed.avatar.is_none());
    assert!(parsed.company_name.is_none());
    assert!(!parsed.is_organization());
}

#[test]
fn display_org_prefers_company_for_organizations() {
    assert_eq!(user(Role::Organization, Some("Acme")).display_org(), "Acme");
    assert_eq!(user(Role::Individual, Some("Acme")).display_org(), "Sam Rivera");
    assert_eq!(user(Role::Organization, None).display_org(), "Sam Rivera");
}
