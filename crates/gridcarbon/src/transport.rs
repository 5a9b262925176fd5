// Transport configuration for building reqwest::Client instances.
//
// The Carbon Intensity API is public and unauthenticated, so the only
// knobs are the request timeout and the User-Agent header.

use std::time::Duration;

/// Transport configuration for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("gridcarbon/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// The returned client owns a connection pool shared by every request
    /// issued through it; it is safe for concurrent in-flight calls.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;
        Ok(client)
    }
}
