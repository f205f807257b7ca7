//! Resource access layer for the AWX API.
//!
//! This module turns raw transport calls into typed resource operations:
//!
//! - **[`Resource`] / [`SubResource`]**: Generic accessors for top-level and nested collections
//! - **[`ResourceKind`]**: Per-kind metadata (name, endpoints, mandatory create fields)
//! - **[`EndpointTemplate`]**: Endpoint constants with named placeholders
//! - **[`validate_params`]**: Required-field presence checks before creates
//! - **[`Page<T>`]**: The `count`/`next`/`previous`/`results` envelope
//! - **[`check_response`]**: Classifies a response into success or [`ApiError`]
//! - **[`ResourceError`]**: The error type of every accessor operation
//!
//! # Example
//!
//! ```rust,ignore
//! use awx_api::{AwxConfig, HostUrl, AccessToken, RestClient};
//! use awx_api::rest::{ListParams, ResourceError};
//! use serde_json::json;
//!
//! let client = RestClient::new(&config)?;
//!
//! // Get a single team
//! let team = client.teams().get(3, None).await?;
//!
//! // Walk every workflow job template
//! let templates = client.workflow_job_templates();
//! let mut query = Some(ListParams { page_size: Some(100), ..Default::default() }.into_query());
//! while let Some(q) = query {
//!     let page = templates.list(Some(q)).await?;
//!     for template in page.iter() {
//!         println!("{:?}", template.name);
//!     }
//!     query = page.next_page_query();
//! }
//!
//! // Create fails locally if required fields are absent
//! let record = json!({"organization": 1}).as_object().unwrap().clone();
//! match client.teams().create(record, None).await {
//!     Err(ResourceError::MissingFields { fields, .. }) => assert_eq!(fields, ["name"]),
//!     _ => unreachable!(),
//! }
//! ```

mod errors;
mod page;
mod path;
mod resource;
pub mod resources;
mod validation;

pub use errors::{check_response, ApiError, ErrorDetail, ResourceError};
pub use page::{ListParams, Page};
pub use path::{build_path, EndpointTemplate, TemplateError};
pub use resource::{to_record, QueryParams, Resource, ResourceKind, ResourceRecord, SubResource};
pub use validation::{missing_fields, validate_params};
