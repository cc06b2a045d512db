//! Endpoint configuration, resolved once at startup

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "GREETING_API_URL";

/// Base URL used when the environment provides none
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the widget fetches its greeting from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve from the process environment
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(API_URL_ENV).ok())
    }

    /// Resolve from an optional override; blank values fall back to the default
    pub fn resolve(override_url: Option<String>) -> Self {
        match override_url {
            Some(url) if !url.trim().is_empty() => {
                tracing::debug!("Using API base URL from {}: {}", API_URL_ENV, url);
                Self::new(url)
            }
            _ => {
                tracing::debug!("Using default API base URL {}", DEFAULT_API_URL);
                Self::default()
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the greeting endpoint
    pub fn hello_url(&self) -> String {
        format!("{}/hello", self.base_url)
    }
}
