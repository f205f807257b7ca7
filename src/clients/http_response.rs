//! HTTP response types for the AWX API client.
//!
//! This module provides the [`HttpResponse`] type for accessing the status,
//! headers and body of an API response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the AWX API.
///
/// Responses are returned for every status code. The raw body text is kept
/// alongside the best-effort JSON parse so that error bodies that are not
/// JSON (for example HTML proxy error pages) are never lost.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The body parsed as JSON, or `Value::Null` if empty or not JSON.
    pub body: serde_json::Value,
    /// The raw body text.
    pub raw_body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the body as JSON when possible.
    ///
    /// # Example
    ///
    /// ```rust
    /// use awx_api::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), r#"{"id": 1}"#);
    /// assert_eq!(response.body["id"], 1);
    ///
    /// let response = HttpResponse::new(502, HashMap::new(), "<html>Bad Gateway</html>");
    /// assert!(response.body.is_null());
    /// assert_eq!(response.raw_body, "<html>Bad Gateway</html>");
    /// ```
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, raw_body: impl Into<String>) -> Self {
        let raw_body = raw_body.into();
        let body = if raw_body.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&raw_body).unwrap_or(serde_json::Value::Null)
        };

        Self {
            code,
            headers,
            body,
            raw_body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response carries no body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_body.trim().is_empty()
    }

    /// Decodes the raw body into `T`.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.raw_body)
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-API-Request-Id` header value, if present.
    ///
    /// This ID is useful for correlating a failure with the AWX server logs.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-api-request-id")
    }

    /// Returns the `X-API-Product-Version` header value, if present.
    #[must_use]
    pub fn product_version(&self) -> Option<&str> {
        self.header("x-api-product-version")
    }
}
