//! Response classification and resource error types.
//!
//! Every accessor operation funnels its raw [`HttpResponse`] through
//! [`check_response`], which turns a non-2xx status into an [`ApiError`].
//! The accessor then maps that into the matching [`ResourceError`] variant:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **Other non-2xx**: [`ResourceError::Api`]
//! - **2xx with an undecodable body**: [`ResourceError::Decode`]
//! - **No response at all**: [`ResourceError::Transport`]
//! - **Required fields absent on create**: [`ResourceError::MissingFields`]
//!
//! # Example
//!
//! ```rust,ignore
//! use awx_api::rest::ResourceError;
//!
//! match client.teams().get(3, None).await {
//!     Ok(team) => println!("Found: {:?}", team.name),
//!     Err(ResourceError::NotFound { resource, id, .. }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::Api(e)) => println!("AWX said {}: {}", e.code, e.detail),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpResponse, RestError};
use crate::rest::TemplateError;

/// The body of a failed AWX response, parsed best-effort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorDetail {
    /// AWX's usual `{"detail": "..."}` body.
    Message(String),
    /// Field-level messages, e.g. `{"name": ["This field is required."]}`.
    Fields(BTreeMap<String, Vec<String>>),
    /// Anything else, kept verbatim (non-JSON bodies, proxy error pages).
    Raw(String),
}

impl ErrorDetail {
    /// Parses the detail out of a response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        match &response.body {
            Value::Object(map) => {
                if let Some(Value::String(message)) = map.get("detail") {
                    return Self::Message(message.clone());
                }
                if map.is_empty() {
                    return Self::Raw(response.raw_body.clone());
                }
                let fields = map
                    .iter()
                    .map(|(field, messages)| (field.clone(), collect_messages(messages)))
                    .collect();
                Self::Fields(fields)
            }
            _ => Self::Raw(response.raw_body.clone()),
        }
    }
}

fn collect_messages(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Fields(fields) => {
                let mut first = true;
                for (field, messages) in fields {
                    if !first {
                        f.write_str("; ")?;
                    }
                    first = false;
                    write!(f, "{field}: {}", messages.join(", "))?;
                }
                Ok(())
            }
            Self::Raw(body) if body.trim().is_empty() => f.write_str("<empty body>"),
            Self::Raw(body) => f.write_str(body),
        }
    }
}

/// A non-2xx response from the AWX API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("AWX API request failed with status {code}: {detail}")]
pub struct ApiError {
    /// The HTTP status code.
    pub code: u16,
    /// The parsed error body.
    pub detail: ErrorDetail,
    /// The `X-API-Request-Id` header value, if present.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Builds an `ApiError` from a response.
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        Self {
            code: response.code,
            detail: ErrorDetail::from_response(response),
            request_id: response.request_id().map(ToString::to_string),
        }
    }
}

/// Classifies a raw response.
///
/// Returns `Ok(())` for any 2xx status and an [`ApiError`] otherwise. The
/// body is never discarded: if it is not the JSON AWX normally sends, it is
/// kept as [`ErrorDetail::Raw`].
///
/// # Errors
///
/// Returns [`ApiError`] for every status outside 200..=299.
///
/// # Example
///
/// ```rust
/// use awx_api::HttpResponse;
/// use awx_api::rest::{check_response, ErrorDetail};
/// use std::collections::HashMap;
///
/// let ok = HttpResponse::new(201, HashMap::new(), r#"{"id": 1}"#);
/// assert!(check_response(&ok).is_ok());
///
/// let denied = HttpResponse::new(403, HashMap::new(), r#"{"detail": "Forbidden"}"#);
/// let error = check_response(&denied).unwrap_err();
/// assert_eq!(error.code, 403);
/// assert_eq!(error.detail, ErrorDetail::Message("Forbidden".to_string()));
/// ```
pub fn check_response(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_ok() {
        return Ok(());
    }

    let error = ApiError::from_response(response);
    tracing::warn!(
        status = error.code,
        request_id = ?error.request_id,
        product_version = ?response.product_version(),
        detail = %error.detail,
        "AWX API returned an error status"
    );
    Err(error)
}

/// Error type for resource accessor operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Required fields were absent on create. Raised before any request is sent.
    #[error("Mandatory input arguments are absent for {resource}: {}", .fields.join(", "))]
    MissingFields {
        /// The resource name (e.g., "Team").
        resource: &'static str,
        /// Every missing field, in mandatory-set order.
        fields: Vec<String>,
    },

    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource name.
        resource: &'static str,
        /// The identifier that was requested, or the parent id for sub-resources.
        id: String,
        /// The request ID for debugging.
        request_id: Option<String>,
    },

    /// Any other non-2xx response.
    #[error(transparent)]
    Api(ApiError),

    /// A 2xx response body did not match the expected shape.
    #[error("Failed to decode {resource} response (status {code}): {source}")]
    Decode {
        /// The resource name.
        resource: &'static str,
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be sent or no response was obtained.
    #[error(transparent)]
    Transport(#[from] RestError),

    /// An endpoint template was resolved with the wrong number of identifiers.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl ResourceError {
    /// Maps a classified failure into the resource-level variant.
    #[must_use]
    pub fn from_api_error(error: ApiError, resource: &'static str, id: Option<u64>) -> Self {
        if error.code == 404 {
            return Self::NotFound {
                resource,
                id: id.map_or_else(|| "unknown".to_string(), |id| id.to_string()),
                request_id: error.request_id,
            };
        }
        Self::Api(error)
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api(error) => Some(error.code),
            Self::Decode { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. } => request_id.as_deref(),
            Self::Api(error) => error.request_id.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(code: u16, body: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert("x-api-request-id".to_string(), vec!["req-1".to_string()]);
        HttpResponse::new(code, headers, body)
    }

    #[test]
    fn test_check_response_accepts_every_2xx() {
        for code in [200, 201, 202, 204] {
            assert!(check_response(&response(code, "")).is_ok());
        }
    }

    #[test]
    fn test_check_response_parses_detail_message() {
        let error = check_response(&response(403, r#"{"detail": "Forbidden"}"#)).unwrap_err();

        assert_eq!(error.code, 403);
        assert_eq!(error.detail, ErrorDetail::Message("Forbidden".to_string()));
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_check_response_parses_field_errors() {
        let error = check_response(&response(
            400,
            r#"{"name": ["This field is required."], "organization": "Invalid pk"}"#,
        ))
        .unwrap_err();

        let ErrorDetail::Fields(fields) = error.detail else {
            panic!("Expected Fields detail");
        };
        assert_eq!(fields["name"], vec!["This field is required.".to_string()]);
        assert_eq!(fields["organization"], vec!["Invalid pk".to_string()]);
    }

    #[test]
    fn test_check_response_keeps_non_json_body() {
        let error = check_response(&response(502, "<html>Bad Gateway</html>")).unwrap_err();

        assert_eq!(
            error.detail,
            ErrorDetail::Raw("<html>Bad Gateway</html>".to_string())
        );
        assert!(error.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn test_error_detail_display_for_fields() {
        let mut fields = BTreeMap::new();
        fields.insert("identifier".to_string(), vec!["duplicate".to_string()]);
        fields.insert("name".to_string(), vec!["blank".to_string(), "short".to_string()]);

        let detail = ErrorDetail::Fields(fields);
        assert_eq!(detail.to_string(), "identifier: duplicate; name: blank, short");
    }

    #[test]
    fn test_missing_fields_message_lists_all_fields() {
        let error = ResourceError::MissingFields {
            resource: "Team",
            fields: vec!["name".to_string(), "organization".to_string()],
        };

        let message = error.to_string();
        assert!(message.contains("Mandatory input arguments are absent"));
        assert!(message.contains("Team"));
        assert!(message.contains("name, organization"));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_from_api_error_maps_404_to_not_found() {
        let api_error = ApiError::from_response(&response(404, r#"{"detail": "Not found."}"#));

        let error = ResourceError::from_api_error(api_error, "Team", Some(999));

        assert!(matches!(
            &error,
            ResourceError::NotFound { resource: "Team", id, .. } if id == "999"
        ));
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_from_api_error_keeps_other_statuses() {
        let api_error = ApiError::from_response(&response(500, "boom"));

        let error = ResourceError::from_api_error(api_error, "Team", Some(1));

        assert!(matches!(error, ResourceError::Api(ApiError { code: 500, .. })));
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_decode_error_reports_status() {
        let source = serde_json::from_str::<u64>("\"x\"").unwrap_err();
        let error = ResourceError::Decode {
            resource: "Organization",
            code: 200,
            source,
        };

        assert_eq!(error.status(), Some(200));
        assert!(error.to_string().contains("Organization"));
    }
}
