//! HTTP client types for AWX API communication.
//!
//! This module provides the HTTP layer used by the resource accessors. It
//! sends requests and parses responses; it never decides whether a status
//! code is a failure.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client (reqwest, rustls)
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`rest::RestClient`]: Higher-level client and [`rest::Transport`] implementation
//! - [`rest::RestError`]: Transport error type
//!
//! # Example
//!
//! ```rust,ignore
//! use awx_api::{AwxConfig, HostUrl};
//! use awx_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = AwxConfig::builder()
//!     .host(HostUrl::new("https://awx.example.com").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/api/v2/teams/")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError, Transport};
