//! Display formatting for dates, counts and names.
//!
//! ERROR HANDLING
//! ==============
//! Unparseable timestamps never propagate: they render as [`INVALID_DATE`]
//! and log a warning, so one bad record cannot break a list.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Rendered in place of any timestamp that fails to parse.
pub const INVALID_DATE: &str = "Invalid date";

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (as UTC midnight).
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// Current time as an RFC 3339 string.
#[must_use]
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// `"Mar 18, 2024"`, or [`INVALID_DATE`].
#[must_use]
pub fn format_date(raw: &str) -> String {
    let Some(parsed) = parse_timestamp(raw) else {
        log::warn!("invalid date string: {raw:?}");
        return INVALID_DATE.to_owned();
    };
    match parsed.format(format_description!("[month repr:short] [day padding:none], [year]")) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("failed to format date {raw:?}: {e}");
            INVALID_DATE.to_owned()
        }
    }
}

/// `"Mar 18, 2024 at 2:05 PM"`, or [`INVALID_DATE`].
#[must_use]
pub fn format_date_time(raw: &str) -> String {
    let Some(parsed) = parse_timestamp(raw) else {
        log::warn!("invalid date string: {raw:?}");
        return INVALID_DATE.to_owned();
    };
    match parsed.format(format_description!(
        "[month repr:short] [day padding:none], [year] at [hour repr:12 padding:none]:[minute] [period]"
    )) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("failed to format timestamp {raw:?}: {e}");
            INVALID_DATE.to_owned()
        }
    }
}

/// Relative age such as `"5 minutes ago"`; a week or older (or in the future)
/// falls back to [`format_date`].
#[must_use]
pub fn format_relative(raw: &str, now: OffsetDateTime) -> String {
    let Some(parsed) = parse_timestamp(raw) else {
        log::warn!("invalid date string: {raw:?}");
        return INVALID_DATE.to_owned();
    };
    let elapsed = now - parsed;
    if elapsed.is_negative() || elapsed.whole_days() >= 7 {
        return format_date(raw);
    }
    if elapsed.whole_minutes() < 1 {
        return "just now".to_owned();
    }
    let (count, unit) = if elapsed.whole_hours() < 1 {
        (elapsed.whole_minutes(), "minute")
    } else if elapsed.whole_days() < 1 {
        (elapsed.whole_hours(), "hour")
    } else {
        (elapsed.whole_days(), "day")
    };
    format!("{count} {} ago", pluralize(count, unit, None))
}

/// `singular` when `count` is exactly one, otherwise `plural` (or
/// `singular` + "s").
#[must_use]
pub fn pluralize(count: i64, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        return singular.to_owned();
    }
    plural.map_or_else(|| format!("{singular}s"), str::to_owned)
}

/// `"3 reports"`.
#[must_use]
pub fn count_label(count: usize, singular: &str, plural: Option<&str>) -> String {
    let n = i64::try_from(count).unwrap_or(i64::MAX);
    format!("{count} {}", pluralize(n, singular, plural))
}

/// Thousands-separated integer, e.g. `1,284`.
#[must_use]
pub fn format_number(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Up to two uppercase initials from a display name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Cut `text` to at most `max` characters, ending with an ellipsis when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
