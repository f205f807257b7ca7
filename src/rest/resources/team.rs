//! Team resource.
//!
//! A team is a named group of users inside one organization.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let teams = client.teams();
//! let record = json!({"name": "ops", "organization": 1});
//! let team = teams.create(record.as_object().unwrap().clone(), None).await?;
//!
//! // Missing "organization" fails before any request is sent
//! let record = json!({"name": "ops"});
//! assert!(teams.create(record.as_object().unwrap().clone(), None).await.is_err());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{EndpointTemplate, ResourceKind};

/// An AWX team.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Team {
    /// The unique identifier of the team.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// The API URL of this team.
    #[serde(default, skip_serializing)]
    pub url: Option<String>,

    /// The team name, unique within its organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Id of the owning organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<u64>,

    /// When the team was created.
    #[serde(default, skip_serializing)]
    pub created: Option<DateTime<Utc>>,

    /// When the team was last modified.
    #[serde(default, skip_serializing)]
    pub modified: Option<DateTime<Utc>>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceKind for Team {
    const NAME: &'static str = "Team";
    const COLLECTION: EndpointTemplate = EndpointTemplate::new("/api/v2/teams/", &[]);
    const ITEM: EndpointTemplate = EndpointTemplate::new("/api/v2/teams/{id}/", &["id"]);
    const CREATE_FIELDS: &'static [&'static str] = &["name", "organization"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_deserialization() {
        let team: Team = serde_json::from_value(json!({
            "id": 3,
            "url": "/api/v2/teams/3/",
            "name": "ops",
            "description": "on call",
            "organization": 1,
            "created": "2024-02-01T12:00:00Z",
            "related": {"users": "/api/v2/teams/3/users/"}
        }))
        .unwrap();

        assert_eq!(team.id, Some(3));
        assert_eq!(team.organization, Some(1));
        assert_eq!(team.description.as_deref(), Some("on call"));
        assert!(team.modified.is_none());
        assert!(team.extra.contains_key("related"));
    }

    #[test]
    fn test_team_create_fields_require_organization() {
        assert_eq!(Team::CREATE_FIELDS, &["name", "organization"]);
    }

    #[test]
    fn test_team_endpoints() {
        assert_eq!(Team::COLLECTION.resolve(&[]).unwrap(), "/api/v2/teams/");
        assert_eq!(Team::ITEM.resolve(&[3]).unwrap(), "/api/v2/teams/3/");
    }
}
