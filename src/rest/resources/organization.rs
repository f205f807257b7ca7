//! Organization resource.
//!
//! Organizations are the top-level grouping in AWX; teams, inventories and
//! workflow job templates all belong to one.
//!
//! # Example
//!
//! ```rust,ignore
//! use awx_api::rest::to_record;
//! use awx_api::rest::resources::Organization;
//!
//! let orgs = client.organizations();
//! let page = orgs.list(None).await?;
//!
//! let draft = Organization {
//!     name: Some("Engineering".to_string()),
//!     ..Default::default()
//! };
//! let created = orgs.create(to_record(&draft)?, None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{EndpointTemplate, ResourceKind};

/// An AWX organization.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id`, `url`, `created`, `modified`
///
/// ## Writable Fields
/// - `name` (required on create), `description`, `max_hosts`,
///   `default_environment`
///
/// Anything else the server returns (`related`, `summary_fields`, ...) is
/// kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Organization {
    /// The unique identifier of the organization.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// The API URL of this organization.
    #[serde(default, skip_serializing)]
    pub url: Option<String>,

    /// The organization name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Maximum number of hosts allowed in this organization (0 is unlimited).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hosts: Option<u64>,

    /// Default execution environment id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_environment: Option<u64>,

    /// When the organization was created.
    #[serde(default, skip_serializing)]
    pub created: Option<DateTime<Utc>>,

    /// When the organization was last modified.
    #[serde(default, skip_serializing)]
    pub modified: Option<DateTime<Utc>>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceKind for Organization {
    const NAME: &'static str = "Organization";
    const COLLECTION: EndpointTemplate = EndpointTemplate::new("/api/v2/organizations/", &[]);
    const ITEM: EndpointTemplate =
        EndpointTemplate::new("/api/v2/organizations/{id}/", &["id"]);
    const CREATE_FIELDS: &'static [&'static str] = &["name"];
}
