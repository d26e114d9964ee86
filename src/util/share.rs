//! Share links for a report: the canonical URL plus e-mail compose links.
//!
//! `mailto:` needs `%20` for spaces (mail clients show a literal `+`), while
//! the Gmail compose endpoint is an ordinary query string, so the two
//! builders encode differently.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use crate::model::Dashboard;

const GMAIL_COMPOSE_URL: &str = "https://mail.google.com/mail/";

/// Subject and body text for sharing one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    pub url: String,
    pub subject: String,
    pub body: String,
}

impl ShareMessage {
    #[must_use]
    pub fn for_report(base_url: &str, report: &Dashboard) -> Self {
        let url = report_url(base_url, &report.id);
        let subject = format!("Check out this report: {}", report.title);
        let body = format!(
            "I thought you might find this report useful.\n\n{}\n{}\n\n{url}",
            report.title, report.description
        );
        Self { url, subject, body }
    }

    #[must_use]
    pub fn mailto(&self) -> String {
        mailto_url(&self.subject, &self.body)
    }

    #[must_use]
    pub fn gmail(&self) -> String {
        gmail_compose_url(&self.subject, &self.body)
    }
}

/// Absolute link to a report detail page.
#[must_use]
pub fn report_url(base_url: &str, id: &str) -> String {
    let id: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("{}/app/reports/{id}", base_url.trim_end_matches('/'))
}

#[must_use]
pub fn mailto_url(subject: &str, body: &str) -> String {
    format!("mailto:?subject={}&body={}", mail_encode(subject), mail_encode(body))
}

#[must_use]
pub fn gmail_compose_url(subject: &str, body: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("view", "cm")
        .append_pair("fs", "1")
        .append_pair("su", subject)
        .append_pair("body", body)
        .finish();
    format!("{GMAIL_COMPOSE_URL}?{query}")
}

fn mail_encode(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
