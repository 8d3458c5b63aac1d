//! Station source configuration.

use std::env;

/// Default BikePoint endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk/BikePoint";

/// Environment variable overriding the endpoint.
pub const BASE_URL_VAR: &str = "BIKEPOINT_URL";
/// Environment variable holding the TfL application id.
pub const APP_ID_VAR: &str = "TFL_APP_ID";
/// Environment variable holding the TfL application key.
pub const APP_KEY_VAR: &str = "TFL_APP_KEY";

/// Configuration for [`BikePointClient`](super::BikePointClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Endpoint listing all stations; `{base_url}/{id}` fetches one
    pub base_url: String,
    /// TfL application id, sent as `app_id` when non-empty
    pub app_id: String,
    /// TfL application key, sent as `app_key` when non-empty
    pub app_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceConfig {
    /// Anonymous access to the public endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: String::new(),
            app_key: String::new(),
            timeout_secs: 30,
        }
    }

    /// Read `BIKEPOINT_URL`, `TFL_APP_ID` and `TFL_APP_KEY`, falling back to
    /// the defaults for any that are unset or empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Self::new();
        if let Some(url) = var(BASE_URL_VAR) {
            config.base_url = url;
        }
        config.app_id = var(APP_ID_VAR).unwrap_or_default();
        config.app_key = var(APP_KEY_VAR).unwrap_or_default();
        config
    }

    /// Set a custom endpoint (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_credentials(
        mut self,
        app_id: impl Into<String>,
        app_key: impl Into<String>,
    ) -> Self {
        self.app_id = app_id.into();
        self.app_key = app_key.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Credential query parameters; empty values are left out.
    pub fn credential_params(&self) -> Vec<(&'static str, &str)> {
        [
            ("app_id", self.app_id.as_str()),
            ("app_key", self.app_key.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }
}
