//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

use crate::error::ConfigError;

/// A validated AWX access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use awx_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// Static credentials attached to every request.
///
/// The client never negotiates credentials; it only turns them into an
/// `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// `Authorization: Bearer <token>`.
    Token(AccessToken),
    /// `Authorization: Basic <base64(username:password)>`.
    Basic {
        /// The AWX username.
        username: String,
        /// The password. Masked in debug output.
        password: String,
    },
}

impl Credentials {
    /// Creates basic-auth credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn basic(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self::Basic {
            username,
            password: password.into(),
        })
    }

    /// Returns the value for the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::Token(token) => format!("Bearer {}", token.as_ref()),
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                format!("Basic {encoded}")
            }
        }
    }
}

impl From<AccessToken> for Credentials {
    fn from(token: AccessToken) -> Self {
        Self::Token(token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => f.debug_tuple("Token").field(token).finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"*****")
                .finish(),
        }
    }
}

/// A validated AWX host URL.
///
/// The URL must include a scheme and a host. Any trailing slash is removed
/// so endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use awx_api::HostUrl;
///
/// let url = HostUrl::new("https://awx.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://awx.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("awx.example.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_string() {
        let result = AccessToken::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token").unwrap();
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
    }

    #[test]
    fn test_bearer_authorization_header() {
        let credentials = Credentials::from(AccessToken::new("abc123").unwrap());
        assert_eq!(credentials.authorization_header(), "Bearer abc123");
    }

    #[test]
    fn test_basic_authorization_header_is_base64_encoded() {
        let credentials = Credentials::basic("admin", "password").unwrap();
        // base64("admin:password")
        assert_eq!(
            credentials.authorization_header(),
            "Basic YWRtaW46cGFzc3dvcmQ="
        );
    }

    #[test]
    fn test_basic_credentials_reject_empty_username() {
        let result = Credentials::basic("", "password");
        assert!(matches!(result, Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_basic_credentials_mask_password_in_debug() {
        let credentials = Credentials::basic("admin", "hunter2").unwrap();
        let debug_output = format!("{credentials:?}");
        assert!(debug_output.contains("admin"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_host_url_parses_scheme_and_host() {
        let url = HostUrl::new("https://awx.example.com:8043").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("awx.example.com"));
        assert_eq!(url.as_ref(), "https://awx.example.com:8043");
    }

    #[test]
    fn test_host_url_strips_trailing_slash() {
        let url = HostUrl::new("http://localhost:8080/").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_host_url_rejects_missing_scheme() {
        let result = HostUrl::new("awx.example.com");
        assert!(matches!(result, Err(ConfigError::InvalidHostUrl { .. })));
    }

    #[test]
    fn test_host_url_rejects_missing_host() {
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("https://:8043").is_err());
    }
}
