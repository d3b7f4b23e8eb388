//! Public configuration for the bili client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Configuration for the bili client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use bili_api::ApiClientConfig;
/// use std::time::Duration;
///
/// let config = ApiClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the web API (also serves relation and PGC endpoints)
    pub(crate) web_base_url: String,
    /// Base URL for the app HTTP API
    pub(crate) app_base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Page size used when walking the followings list
    pub(crate) followings_page_size: u32,
    /// UTC offset in hours sent with app feed requests
    pub(crate) local_time: i32,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            web_base_url: "https://api.bilibili.com".to_string(),
            app_base_url: "https://app.bilibili.com".to_string(),
            user_agent: concat!("bili-api/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            followings_page_size: 50,
            local_time: 8,
        }
    }
}

impl ApiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the web API.
    ///
    /// Defaults to `https://api.bilibili.com`.
    #[must_use]
    pub fn with_web_base_url(mut self, url: impl Into<String>) -> Self {
        self.web_base_url = url.into();
        self
    }

    /// Set the base URL for the app HTTP API.
    ///
    /// Defaults to `https://app.bilibili.com`.
    #[must_use]
    pub fn with_app_base_url(mut self, url: impl Into<String>) -> Self {
        self.app_base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the page size used when fetching the full followings list.
    ///
    /// Defaults to 50, the largest page the server accepts.
    #[must_use]
    pub const fn with_followings_page_size(mut self, page_size: u32) -> Self {
        self.followings_page_size = page_size;
        self
    }

    /// Set the UTC offset (hours) reported with app feed requests.
    ///
    /// Defaults to 8.
    #[must_use]
    pub const fn with_local_time(mut self, hours: i32) -> Self {
        self.local_time = hours;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiClientConfig::new();
        assert_eq!(config.web_base_url, "https://api.bilibili.com");
        assert_eq!(config.app_base_url, "https://app.bilibili.com");
        assert!(config.user_agent.contains("bili-api"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.followings_page_size, 50);
        assert_eq!(config.local_time, 8);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ApiClientConfig::new()
            .with_web_base_url("http://localhost:8080")
            .with_app_base_url("http://localhost:8081")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_followings_page_size(20)
            .with_local_time(0);

        assert_eq!(config.web_base_url, "http://localhost:8080");
        assert_eq!(config.app_base_url, "http://localhost:8081");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.followings_page_size, 20);
        assert_eq!(config.local_time, 0);
    }
}
