//! Portal configuration with typed defaults and build-time overrides.
//!
//! A WASM bundle has no process environment at runtime, so overrides are
//! captured when the crate is compiled (`option_env!`). Parsing goes through
//! [`PortalConfig::from_lookup`] so tests can feed a plain map.

use navigation::consts::{HISTORY_LIMIT, SWIPE_MAX_DURATION_MS, SWIPE_THRESHOLD_PX};
use navigation::gesture::SwipeConfig;

pub const DEFAULT_APP_NAME: &str = "Insight Portal";
pub const DEFAULT_SESSION_KEY: &str = "portal_session_user";
pub const DEFAULT_TOAST_DISMISS_MS: u64 = 3_000;
pub const DEFAULT_EXPORT_DELAY_MS: u64 = 1_500;
pub const DEFAULT_SHARE_BASE_URL: &str = "https://portal.example.com";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Error returned by [`PortalConfig::from_lookup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric override did not parse or was out of range.
    #[error("invalid value for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    /// The log level override is not one of error/warn/info/debug/trace.
    #[error("unknown log level: {0:?}")]
    InvalidLogLevel(String),
    /// A text override was present but blank.
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    pub app_name: String,
    /// `localStorage` key holding the serialized session user.
    pub session_key: String,
    pub swipe: SwipeConfig,
    pub history_limit: usize,
    pub toast_dismiss_ms: u64,
    pub export_delay_ms: u64,
    /// Origin used when building shareable report links.
    pub share_base_url: String,
    pub log_level: log::Level,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            session_key: DEFAULT_SESSION_KEY.to_owned(),
            swipe: SwipeConfig::default(),
            history_limit: HISTORY_LIMIT,
            toast_dismiss_ms: DEFAULT_TOAST_DISMISS_MS,
            export_delay_ms: DEFAULT_EXPORT_DELAY_MS,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PortalConfig {
    /// Build typed config from a key lookup.
    ///
    /// Optional keys (defaults in parentheses):
    /// - `PORTAL_APP_NAME` (`Insight Portal`)
    /// - `PORTAL_SESSION_KEY` (`portal_session_user`)
    /// - `PORTAL_SWIPE_THRESHOLD_PX` (50)
    /// - `PORTAL_SWIPE_MAX_DURATION_MS` (300)
    /// - `PORTAL_HISTORY_LIMIT` (100)
    /// - `PORTAL_TOAST_DISMISS_MS` (3000)
    /// - `PORTAL_EXPORT_DELAY_MS` (1500)
    /// - `PORTAL_SHARE_BASE_URL` (`https://portal.example.com`)
    /// - `PORTAL_LOG_LEVEL` (`info`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_name = text(&lookup, "PORTAL_APP_NAME", DEFAULT_APP_NAME)?;
        let session_key = text(&lookup, "PORTAL_SESSION_KEY", DEFAULT_SESSION_KEY)?;
        let swipe = SwipeConfig {
            threshold_px: positive_f64(&lookup, "PORTAL_SWIPE_THRESHOLD_PX", SWIPE_THRESHOLD_PX)?,
            max_duration_ms: positive_f64(&lookup, "PORTAL_SWIPE_MAX_DURATION_MS", SWIPE_MAX_DURATION_MS)?,
        };
        let history_limit = number(&lookup, "PORTAL_HISTORY_LIMIT", HISTORY_LIMIT)?;
        let toast_dismiss_ms = number(&lookup, "PORTAL_TOAST_DISMISS_MS", DEFAULT_TOAST_DISMISS_MS)?;
        let export_delay_ms = number(&lookup, "PORTAL_EXPORT_DELAY_MS", DEFAULT_EXPORT_DELAY_MS)?;
        let share_base_url = text(&lookup, "PORTAL_SHARE_BASE_URL", DEFAULT_SHARE_BASE_URL)?
            .trim_end_matches('/')
            .to_owned();
        let log_level = match lookup("PORTAL_LOG_LEVEL") {
            None => DEFAULT_LOG_LEVEL,
            Some(raw) => raw
                .trim()
                .parse::<log::Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(raw))?,
        };

        Ok(Self {
            app_name,
            session_key,
            swipe,
            history_limit,
            toast_dismiss_ms,
            export_delay_ms,
            share_base_url,
            log_level,
        })
    }

    /// Config from overrides baked in at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a baked-in override is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "PORTAL_APP_NAME" => option_env!("PORTAL_APP_NAME"),
        "PORTAL_SESSION_KEY" => option_env!("PORTAL_SESSION_KEY"),
        "PORTAL_SWIPE_THRESHOLD_PX" => option_env!("PORTAL_SWIPE_THRESHOLD_PX"),
        "PORTAL_SWIPE_MAX_DURATION_MS" => option_env!("PORTAL_SWIPE_MAX_DURATION_MS"),
        "PORTAL_HISTORY_LIMIT" => option_env!("PORTAL_HISTORY_LIMIT"),
        "PORTAL_TOAST_DISMISS_MS" => option_env!("PORTAL_TOAST_DISMISS_MS"),
        "PORTAL_EXPORT_DELAY_MS" => option_env!("PORTAL_EXPORT_DELAY_MS"),
        "PORTAL_SHARE_BASE_URL" => option_env!("PORTAL_SHARE_BASE_URL"),
        "PORTAL_LOG_LEVEL" => option_env!("PORTAL_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn text<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default.to_owned()),
        Some(raw) if raw.trim().is_empty() => Err(ConfigError::Empty(key)),
        Some(raw) => Ok(raw.trim().to_owned()),
    }
}

fn number<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}

fn positive_f64<F>(lookup: &F, key: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = number(lookup, key, default)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidNumber { key, value: value.to_string() })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
