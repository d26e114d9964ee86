//! Utility helpers shared across portal UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so formatting, validation and link building stay testable natively.

pub mod auth;
pub mod browser;
pub mod dark_mode;
pub mod export;
pub mod format;
pub mod share;
pub mod storage;
pub mod validate;
