//! Transport-level error types for the AWX API client.
//!
//! - [`RestError::InvalidPath`]: When an API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! A `RestError` always means no usable response was obtained. Responses
//! with error statuses are not `RestError`s.
//!
//! # Example
//!
//! ```rust,ignore
//! use awx_api::clients::rest::{RestClient, RestError};
//!
//! match client.get("/api/v2/ping/", None).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {}", path),
//!     Err(RestError::Http(e)) => println!("HTTP error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for transport operations.
///
/// # Example
///
/// ```rust
/// use awx_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The API path is invalid.
    ///
    /// This error is returned when a path is empty after normalization.
    #[error("Invalid AWX API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}
