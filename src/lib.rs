//! # AWX API Rust Client
//!
//! An async Rust client for the AWX / Ansible Automation Platform REST API
//! (`/api/v2/`), providing type-safe configuration, a shared HTTP transport
//! and generic resource accessors.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AwxConfig`] and [`AwxConfigBuilder`]
//! - Static bearer-token or basic credentials with masked `Debug` output
//! - An async HTTP transport ([`RestClient`]) built on `reqwest`
//! - Generic get/list/create/update/delete accessors for organizations, teams,
//!   workflow job templates and workflow job template nodes
//! - Nested list/create accessors for workflow node steps
//! - Required-field validation before create requests
//! - Typed errors that keep the status code, detail and request id
//!
//! ## Quick Start
//!
//! ```rust
//! use awx_api::{AwxConfig, AccessToken, HostUrl};
//!
//! let config = AwxConfig::builder()
//!     .host(HostUrl::new("https://awx.example.com").unwrap())
//!     .credentials(AccessToken::new("your-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use awx_api::{AwxConfig, RestClient};
//! use awx_api::rest::resources::StepKind;
//! use serde_json::json;
//!
//! let client = RestClient::new(&config)?;
//!
//! // Create a team; "name" and "organization" are required
//! let record = json!({"name": "ops", "organization": 1});
//! let team = client.teams().create(record.as_object().unwrap().clone(), None).await?;
//!
//! // List one page of workflow job templates
//! let page = client.workflow_job_templates().list(None).await?;
//! println!("{} templates in total", page.count);
//!
//! // Attach a node that runs when node 7 succeeds
//! let record = json!({"unified_job_template": 5, "identifier": "notify"});
//! let node = client
//!     .workflow_job_template_node_steps(StepKind::Success)
//!     .create(7, record.as_object().unwrap().clone(), None)
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! Every accessor returns [`ResourceError`](rest::ResourceError):
//!
//! ```rust,ignore
//! use awx_api::rest::ResourceError;
//!
//! match client.teams().get(999, None).await {
//!     Err(ResourceError::NotFound { .. }) => println!("no such team"),
//!     Err(ResourceError::Api(e)) => println!("AWX said {}: {}", e.code, e.detail),
//!     Err(e) => println!("{e}"),
//!     Ok(team) => println!("{:?}", team.name),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction, creates validate before I/O
//! - **Thread-safe**: The client is `Send + Sync` and shared by reference
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **One request per call**: No hidden retries or page following

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, AwxConfig, AwxConfigBuilder, Credentials, HostUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RestClient, RestError, Transport,
};

// Re-export resource access types
pub use rest::{ApiError, Page, Resource, ResourceError, ResourceKind, ResourceRecord, SubResource};
