use super::*;

#[test]
fn stats_over_seed_reports() {
    let reports = data::dashboards();
    let stats = dashboard_stats(&reports, 3, None);
    assert_eq!(stats.total_reports, 6);
    assert_eq!(stats.public_reports, 3);
    assert_eq!(stats.total_views, 1_284 + 642 + 408 + 917 + 1_530 + 356);
    assert_eq!(stats.unread_notifications, 3);
    assert_eq!(stats.team_size, None);
}

#[test]
fn stats_include_team_for_organizations() {
    assert_eq!(dashboard_stats(&[], 0, Some(5)).team_size, Some(5));
}

#[test]
fn recent_reports_newest_first() {
    let ids: Vec<String> = recent_reports(&data::dashboards(), RECENT_REPORT_COUNT)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["feature-adoption", "cash-flow", "churn-analysis", "sales-overview"]);
}

#[test]
fn first_name_takes_leading_word() {
    assert_eq!(first_name("Jordan Lee"), "Jordan");
    assert_eq!(first_name("Cher"), "Cher");
    assert_eq!(first_name(""), "");
}
