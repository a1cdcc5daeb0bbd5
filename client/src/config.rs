use std::env;

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "CAMPUS_BITES_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL: runtime environment first, then the value baked
    /// in at compile time (the only option in the browser), then the default.
    pub fn from_env() -> Self {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::debug!("{API_URL_ENV} set at runtime: {url}");
                return Self::new(url);
            }
        }
        if let Some(url) = option_env!("CAMPUS_BITES_API_URL") {
            if !url.trim().is_empty() {
                tracing::debug!("{API_URL_ENV} set at build time: {url}");
                return Self::new(url);
            }
        }
        tracing::info!("{API_URL_ENV} not set, using default: {DEFAULT_API_URL}");
        Self::new(DEFAULT_API_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/dishes`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
