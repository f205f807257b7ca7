//! REST transport for the AWX API.
//!
//! This module provides the [`Transport`] trait, the boundary between the
//! generic resource accessors and the network, and [`RestClient`], its
//! production implementation built on top of
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`RestClient`]: The REST client with `get()`, `post()`, `patch()`, `delete()`
//!   methods and accessor shortcuts (`teams()`, `organizations()`, ...)
//! - [`Transport`]: One request in, one raw response out
//! - [`RestError`]: Error type for transport failures
//!
//! # Path Normalization
//!
//! - Leading slashes are collapsed: `//api/v2/teams/` -> `/api/v2/teams/`
//! - A trailing slash is added when missing: `/api/v2/teams/7` -> `/api/v2/teams/7/`
//!
//! # Retry Behavior
//!
//! None. Each call makes exactly one request.

mod client;
mod errors;
mod transport;

pub use client::RestClient;
pub use errors::RestError;
pub use transport::Transport;
