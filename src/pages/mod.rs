//! Route-level page components.
//!
//! Pages read context-provided state holders and keep their filtering and
//! summarizing logic in plain functions so it is tested without a DOM.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod profile;
pub mod report_detail;
pub mod reports;
pub mod signup;
pub mod support;
pub mod team;
