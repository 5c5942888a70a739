//! Client configuration options.

use std::time::Duration;

/// Base URL of the production Trade service.
pub const DEFAULT_BASE_URL: &str = "https://trade-service.wealthsimple.com/";

/// Configuration for the Trade client.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use wstrade_rs::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are joined against. Must end with a
    /// slash for relative joins to resolve under it.
    pub base_url: String,
    /// Request timeout applied by the HTTP client
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("wstrade-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different base URL. Useful for tests against
    /// a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
