//! Static mock records standing in for a backend.
//!
//! Each function returns a fresh owned copy so state holders can mutate their
//! own lists without touching the seed.


use crate::model::{
    Dashboard, MemberStatus, MessageAuthor, Notification, NotificationKind, Priority, ReportCategory, SupportTicket,
    TeamMember, TeamRole, TicketCategory, TicketKind, TicketMessage, TicketStatus,
};

struct DashboardSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: ReportCategory,
    created_at: &'static str,
    updated_at: &'static str,
    is_public: bool,
    views: u32,
}

const DASHBOARDS: &[DashboardSeed] = &[
    DashboardSeed {
        id: "sales-overview",
        title: "Sales Overview",
        description: "Quarterly revenue, pipeline velocity and win rates by region.",
        category: ReportCategory::Sales,
        created_at: "2024-01-08T09:30:00Z",
        updated_at: "2024-03-18T14:05:00Z",
        is_public: true,
        views: 1_284,
    },
    DashboardSeed {
        id: "marketing-funnel",
        title: "Marketing Funnel",
        description: "Campaign reach, conversion by channel and cost per acquisition.",
        category: ReportCategory::Marketing,
        created_at: "2024-01-22T11:00:00Z",
        updated_at: "2024-03-15T08:45:00Z",
        is_public: false,
        views: 642,
    },
    DashboardSeed {
        id: "cash-flow",
        title: "Cash Flow Statement",
        description: "Operating, investing and financing cash movements month over month.",
        category: ReportCategory::Finance,
        created_at: "2024-02-02T16:20:00Z",
        updated_at: "2024-03-20T10:10:00Z",
        is_public: false,
        views: 408,
    },
    DashboardSeed {
        id: "fulfillment-sla",
        title: "Fulfillment SLA",
        description: "Order cycle time, late shipments and warehouse throughput.",
        category: ReportCategory::Operations,
        created_at: "2024-02-11T07:15:00Z",
        updated_at: "2024-03-12T17:30:00Z",
        is_public: true,
        views: 917,
    },
    DashboardSeed {
        id: "feature-adoption",
        title: "Feature Adoption",
        description: "Weekly active usage of new features across customer cohorts.",
        category: ReportCategory::Product,
        created_at: "2024-02-19T13:40:00Z",
        updated_at: "2024-03-21T09:00:00Z",
        is_public: true,
        views: 1_530,
    },
    DashboardSeed {
        id: "churn-analysis",
        title: "Churn Analysis",
        description: "Cancellation reasons, retention curves and at-risk accounts.",
        category: ReportCategory::Sales,
        created_at: "2024-03-01T10:00:00Z",
        updated_at: "2024-03-19T15:25:00Z",
        is_public: false,
        views: 356,
    },
];

/// Read-only report dashboards.
#[must_use]
pub fn dashboards() -> Vec<Dashboard> {
    DASHBOARDS
        .iter()
        .map(|seed| Dashboard {
            id: seed.id.to_owned(),
            title: seed.title.to_owned(),
            description: seed.description.to_owned(),
            thumbnail_url: format!("/assets/thumbnails/{}.png", seed.id),
            category: seed.category,
            created_at: seed.created_at.to_owned(),
            updated_at: seed.updated_at.to_owned(),
            is_public: seed.is_public,
            views: seed.views,
        })
        .collect()
}

/// Look up one dashboard by id.
#[must_use]
pub fn find_dashboard(id: &str) -> Option<Dashboard> {
    dashboards().into_iter().find(|d| d.id == id)
}

/// Initial organization roster.
#[must_use]
pub fn team_members() -> Vec<TeamMember> {
    [
        ("tm-1", "Jordan Lee", "jordan@acme-analytics.com", TeamRole::Admin, MemberStatus::Active, "2023-06-01T09:00:00Z"),
        ("tm-2", "Priya Shah", "priya@acme-analytics.com", TeamRole::Editor, MemberStatus::Active, "2023-09-14T10:30:00Z"),
        ("tm-3", "Marco Rossi", "marco@acme-analytics.com", TeamRole::Viewer, MemberStatus::Active, "2023-11-02T15:45:00Z"),
        ("tm-4", "Hana Kim", "hana@acme-analytics.com", TeamRole::Editor, MemberStatus::Pending, "2024-03-10T08:20:00Z"),
        ("tm-5", "Oliver Grant", "oliver@acme-analytics.com", TeamRole::Viewer, MemberStatus::Inactive, "2023-04-18T12:00:00Z"),
    ]
    .into_iter()
    .map(|(id, name, email, role, status, joined_at)| TeamMember {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role,
        status,
        joined_at: joined_at.to_owned(),
    })
    .collect()
}

/// Initial notification feed.
#[must_use]
pub fn notifications() -> Vec<Notification> {
    [
        ("n-1", NotificationKind::Report, "Report updated", "Feature Adoption was refreshed with last week's data.", "2024-03-21T09:05:00Z", false, Priority::Medium),
        ("n-2", NotificationKind::Team, "Invitation pending", "Hana Kim has not accepted the team invitation yet.", "2024-03-20T16:00:00Z", false, Priority::Low),
        ("n-3", NotificationKind::System, "Scheduled maintenance", "The portal will be read-only on Saturday 02:00-03:00 UTC.", "2024-03-19T12:00:00Z", false, Priority::High),
        ("n-4", NotificationKind::Support, "Ticket answered", "An agent replied to \"Export stuck at 90%\".", "2024-03-18T10:30:00Z", true, Priority::Medium),
        ("n-5", NotificationKind::Report, "New dashboard shared", "Churn Analysis was shared with your workspace.", "2024-03-15T14:10:00Z", true, Priority::Low),
    ]
    .into_iter()
    .map(|(id, kind, title, message, timestamp, read, priority)| Notification {
        id: id.to_owned(),
        kind,
        title: title.to_owned(),
        message: message.to_owned(),
        timestamp: timestamp.to_owned(),
        read,
        priority,
    })
    .collect()
}

fn message(id: &str, author: MessageAuthor, author_name: &str, body: &str, sent_at: &str) -> TicketMessage {
    TicketMessage {
        id: id.to_owned(),
        author,
        author_name: author_name.to_owned(),
        body: body.to_owned(),
        sent_at: sent_at.to_owned(),
    }
}

/// Initial support tickets.
#[must_use]
pub fn tickets() -> Vec<SupportTicket> {
    vec![
        SupportTicket {
            id: "t-1001".to_owned(),
            kind: TicketKind::Support,
            category: TicketCategory::Technical,
            status: TicketStatus::InProgress,
            subject: "Export stuck at 90%".to_owned(),
            created_at: "2024-03-17T09:12:00Z".to_owned(),
            updated_at: "2024-03-18T10:30:00Z".to_owned(),
            messages: vec![
                message(
                    "m-1",
                    MessageAuthor::User,
                    "You",
                    "PDF export of Sales Overview never finishes downloading.",
                    "2024-03-17T09:12:00Z",
                ),
                message(
                    "m-2",
                    MessageAuthor::Agent,
                    "Support team",
                    "Thanks for the report. Could you try the PNG export while we investigate?",
                    "2024-03-18T10:30:00Z",
                ),
            ],
        },
        SupportTicket {
            id: "t-1002".to_owned(),
            kind: TicketKind::Feedback,
            category: TicketCategory::FeatureRequest,
            status: TicketStatus::Open,
            subject: "Dark mode for embedded reports".to_owned(),
            created_at: "2024-03-19T14:00:00Z".to_owned(),
            updated_at: "2024-03-19T14:00:00Z".to_owned(),
            messages: vec![message(
                "m-3",
                MessageAuthor::User,
                "You",
                "It would be great if shared report links respected the dark theme.",
                "2024-03-19T14:00:00Z",
            )],
        },
        SupportTicket {
            id: "t-1003".to_owned(),
            kind: TicketKind::Support,
            category: TicketCategory::Billing,
            status: TicketStatus::Resolved,
            subject: "Invoice shows wrong company name".to_owned(),
            created_at: "2024-03-05T08:00:00Z".to_owned(),
            updated_at: "2024-03-06T11:15:00Z".to_owned(),
            messages: vec![
                message(
                    "m-4",
                    MessageAuthor::User,
                    "You",
                    "Our February invoice still lists the old company name.",
                    "2024-03-05T08:00:00Z",
                ),
                message(
                    "m-5",
                    MessageAuthor::Agent,
                    "Billing team",
                    "Fixed and reissued. You will find the corrected invoice under Billing.",
                    "2024-03-06T11:15:00Z",
                ),
            ],
        },
    ]
}
