//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and shared widgets while reading/writing
//! shared state from Leptos context providers.

pub mod app_shell;
pub mod badge;
pub mod export_menu;
pub mod header;
pub mod modal;
pub mod nav_tracker;
pub mod report_card;
pub mod select;
pub mod share_modal;
pub mod sidebar;
pub mod toast_host;
