//! Client configuration.
//!
//! The host constructs a [`Config`] and hands it to the client; there is no
//! config file and no CLI surface. Defaults point at the production backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Production backend address.
pub const DEFAULT_BASE_URL: &str = "https://balanceadorhxh-production.up.railway.app";

/// Connection settings for the directory backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend (scheme + host, no trailing path).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connect timeout in seconds. `None` waits indefinitely.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
    /// Whole-request timeout in seconds. `None` waits indefinitely.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: None,
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// Config pointing at a custom backend (tests, staging).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_seconds.map(Duration::from_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
