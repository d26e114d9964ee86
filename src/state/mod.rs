//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `notifications`, `team`, `support`,
//! `ui`, `nav`) so pages depend on small focused models. Each holder is a
//! plain struct mutated through its own methods; the app wraps it in an
//! `RwSignal` and provides it through context.

pub mod auth;
pub mod nav;
pub mod notifications;
pub mod support;
pub mod team;
pub mod ui;

/// Case-insensitive substring match used by list filters. A blank query
/// matches everything.
#[must_use]
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Newest-first ordering on RFC 3339 timestamps; unparseable values sort last.
#[must_use]
pub fn newest_first(a: &str, b: &str) -> std::cmp::Ordering {
    use crate::util::format::parse_timestamp;
    parse_timestamp(b).cmp(&parse_timestamp(a))
}

/// Fresh random id with a readable prefix, e.g. `toast-3f2a…`.
#[must_use]
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
