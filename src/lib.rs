//! # portal
//!
//! Leptos + WASM report portal: dashboards and reports, a notification
//! center, team management for organization accounts, and a support desk.
//! All records are in-memory mock data; the signed-in user is the only thing
//! persisted, as JSON in `localStorage`.
//!
//! Browser glue sits behind the `csr` feature so the state and utility
//! modules build and test natively. Back/forward gesture handling lives in
//! the `navigation` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod model;
pub mod pages;
pub mod state;
pub mod util;
