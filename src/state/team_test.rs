use super::*;

#[test]
fn seeded_roster_counts() {
    let roster = TeamRoster::seeded();
    assert_eq!(roster.len(), 5);
    assert_eq!(roster.count_by_status(MemberStatus::Active), 3);
    assert_eq!(roster.count_by_status(MemberStatus::Pending), 1);
    assert_eq!(roster.count_by_status(MemberStatus::Inactive), 1);
}

#[test]
fn invite_adds_pending_member() {
    let mut roster = TeamRoster::seeded();
    let member = roster.invite(" Jane.Doe@Example.com ", TeamRole::Editor).unwrap();
    assert_eq!(member.email, "jane.doe@example.com");
    assert_eq!(member.name, "Jane Doe");
    assert_eq!(member.status, MemberStatus::Pending);
    assert_eq!(member.role, TeamRole::Editor);
    assert!(member.id.starts_with("tm-"));
    assert_eq!(roster.len(), 6);
}

#[test]
fn invite_rejects_duplicates_case_insensitively() {
    let mut roster = TeamRoster::seeded();
    assert_eq!(
        roster.invite("PRIYA@acme-analytics.com", TeamRole::Viewer),
        Err(ValidationError::DuplicateMember("priya@acme-analytics.com".to_owned()))
    );
    assert_eq!(roster.len(), 5);
}

#[test]
fn invite_rejects_bad_email() {
    let mut roster = TeamRoster::default();
    assert_eq!(roster.invite("not-an-email", TeamRole::Viewer), Err(ValidationError::InvalidEmail));
    assert!(roster.is_empty());
}

#[test]
fn remove_member() {
    let mut roster = TeamRoster::seeded();
    assert!(roster.remove("tm-3"));
    assert!(roster.find("tm-3").is_none());
    assert!(!roster.remove("tm-3"));
}

#[test]
fn change_role_updates_member() {
    let mut roster = TeamRoster::seeded();
    roster.change_role("tm-3", TeamRole::Admin).unwrap();
    assert_eq!(roster.find("tm-3").unwrap().role, TeamRole::Admin);
    assert_eq!(roster.change_role("nope", TeamRole::Admin), Err(ValidationError::NotFound("Member")));
}

#[test]
fn filtered_by_query_and_status() {
    let roster = TeamRoster::seeded();
    let names = |list: Vec<TeamMember>| list.into_iter().map(|m| m.name).collect::<Vec<_>>();
    assert_eq!(names(roster.filtered("PRIYA", None)), vec!["Priya Shah"]);
    assert_eq!(names(roster.filtered("", Some(MemberStatus::Pending))), vec!["Hana Kim"]);
    assert_eq!(roster.filtered("acme", Some(MemberStatus::Active)).len(), 3);
    assert!(roster.filtered("zzz", None).is_empty());
}

#[test]
fn name_from_email_variants() {
    assert_eq!(name_from_email("sam@x.io"), "Sam");
    assert_eq!(name_from_email("mary_ann-lee@x.io"), "Mary Ann Lee");
    assert_eq!(name_from_email("..@x.io"), "..");
}
