//! Configuration types for the AWX API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AwxConfig`]: The configuration struct holding all client settings
//! - [`AwxConfigBuilder`]: A builder for constructing [`AwxConfig`] instances
//! - [`HostUrl`]: A validated AWX host URL
//! - [`AccessToken`]: A validated access token with masked debug output
//! - [`Credentials`]: Static credentials sent with every request
//!
//! # Example
//!
//! ```rust
//! use awx_api::{AwxConfig, AccessToken, HostUrl};
//!
//! let config = AwxConfig::builder()
//!     .host(HostUrl::new("https://awx.example.com").unwrap())
//!     .credentials(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::{AccessToken, Credentials, HostUrl};

use crate::error::ConfigError;

/// Configuration for the AWX API client.
///
/// # Thread Safety
///
/// `AwxConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use awx_api::{AwxConfig, Credentials, HostUrl};
/// use std::time::Duration;
///
/// let config = AwxConfig::builder()
///     .host(HostUrl::new("https://awx.example.com").unwrap())
///     .credentials(Credentials::basic("admin", "password").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
/// ```
#[derive(Clone, Debug)]
pub struct AwxConfig {
    host: HostUrl,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AwxConfig {
    /// Creates a new builder for constructing an `AwxConfig`.
    #[must_use]
    pub fn builder() -> AwxConfigBuilder {
        AwxConfigBuilder::new()
    }

    /// Returns the host URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify AwxConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AwxConfig>();
};

/// Builder for constructing [`AwxConfig`] instances.
///
/// The only required field is `host`.
///
/// # Defaults
///
/// - `credentials`: `None` (anonymous requests)
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (reqwest default, no timeout)
#[derive(Debug, Default)]
pub struct AwxConfigBuilder {
    host: Option<HostUrl>,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AwxConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AWX host URL (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the credentials used for every request.
    #[must_use]
    pub fn credentials(mut self, credentials: impl Into<Credentials>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout applied by the HTTP client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`AwxConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` is not set.
    pub fn build(self) -> Result<AwxConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        Ok(AwxConfig {
            host,
            credentials: self.credentials,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HostUrl {
        HostUrl::new("https://awx.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_host() {
        let result = AwxConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "host" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = AwxConfig::builder().host(host()).build().unwrap();

        assert_eq!(config.host().as_ref(), "https://awx.example.com");
        assert!(config.credentials().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = AwxConfig::builder()
            .host(host())
            .credentials(AccessToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert!(matches!(config.credentials(), Some(Credentials::Token(_))));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = AwxConfig::builder()
            .host(host())
            .credentials(AccessToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("AwxConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
