//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::time::Duration;

/// Path of the query endpoint, relative to the API base URL
pub const QUERY_PATH: &str = "/api/query";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,
    /// UI behaviour configuration
    pub ui: UiConfig,
}

/// Backend API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend serving `/api/query`
    pub base_url: String,
    /// Optional request timeout (in seconds); `None` keeps the transport default
    pub request_timeout_secs: Option<u64>,
}

/// UI behaviour configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// How long an agent badge stays highlighted (in milliseconds)
    pub badge_highlight_ms: u64,
    /// Whether the reveal and placeholder animations run
    pub animations_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                request_timeout_secs: None,
            },
            ui: UiConfig {
                badge_highlight_ms: 3000,
                animations_enabled: true,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api: ApiConfig {
                base_url: lookup("QUERY_API_URL")
                    .map(|url| url.trim().to_string())
                    .filter(|url| !url.is_empty())
                    .unwrap_or(defaults.api.base_url),
                request_timeout_secs: lookup("QUERY_TIMEOUT_SECS")
                    .and_then(|t| t.trim().parse().ok())
                    .filter(|secs| *secs > 0),
            },
            ui: UiConfig {
                badge_highlight_ms: lookup("BADGE_HIGHLIGHT_MS")
                    .and_then(|ms| ms.trim().parse().ok())
                    .unwrap_or(defaults.ui.badge_highlight_ms),
                animations_enabled: lookup("CONSOLE_ANIMATIONS")
                    .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "off"))
                    .unwrap_or(defaults.ui.animations_enabled),
            },
        }
    }

    /// Full URL of the query endpoint
    pub fn query_url(&self) -> String {
        format!("{}{}", self.api.base_url.trim_end_matches('/'), QUERY_PATH)
    }

    /// Request timeout, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.request_timeout_secs.map(Duration::from_secs)
    }

    /// Badge highlight duration
    pub fn badge_highlight(&self) -> Duration {
        Duration::from_millis(self.ui.badge_highlight_ms)
    }
}
