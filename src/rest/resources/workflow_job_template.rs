//! Workflow job template resource.
//!
//! A workflow job template is a graph of nodes, each of which launches a
//! job template, project update, inventory update or nested workflow. The
//! graph itself is edited through
//! [`WorkflowJobTemplateNode`](super::WorkflowJobTemplateNode) and the node
//! step accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{EndpointTemplate, ResourceKind};

/// An AWX workflow job template.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WorkflowJobTemplate {
    /// The unique identifier of the workflow job template.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// The API URL of this workflow job template.
    #[serde(default, skip_serializing)]
    pub url: Option<String>,

    /// The template name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Id of the owning organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<u64>,

    /// Inventory applied to every node that prompts for one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<u64>,

    /// Extra variables, as YAML or JSON text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_vars: Option<String>,

    /// Host limit pattern passed to the nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,

    /// Branch override passed to project-backed nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm_branch: Option<String>,

    /// Whether a survey is attached and enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_enabled: Option<bool>,

    /// Whether more than one job from this template may run at once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_simultaneous: Option<bool>,

    /// Whether launch prompts for extra variables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask_variables_on_launch: Option<bool>,

    /// Whether launch prompts for an inventory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask_inventory_on_launch: Option<bool>,

    /// Status of the last run (e.g. "successful", "never updated").
    #[serde(default, skip_serializing)]
    pub status: Option<String>,

    /// When the template was created.
    #[serde(default, skip_serializing)]
    pub created: Option<DateTime<Utc>>,

    /// When the template was last modified.
    #[serde(default, skip_serializing)]
    pub modified: Option<DateTime<Utc>>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceKind for WorkflowJobTemplate {
    const NAME: &'static str = "WorkflowJobTemplate";
    const COLLECTION: EndpointTemplate =
        EndpointTemplate::new("/api/v2/workflow_job_templates/", &[]);
    const ITEM: EndpointTemplate =
        EndpointTemplate::new("/api/v2/workflow_job_templates/{id}/", &["id"]);
    const CREATE_FIELDS: &'static [&'static str] = &["name"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workflow_job_template_deserialization() {
        let template: WorkflowJobTemplate = serde_json::from_value(json!({
            "id": 10,
            "name": "deploy",
            "organization": 1,
            "inventory": null,
            "extra_vars": "---\nenv: prod",
            "survey_enabled": false,
            "allow_simultaneous": true,
            "status": "never updated",
            "last_job_run": null
        }))
        .unwrap();

        assert_eq!(template.id, Some(10));
        assert_eq!(template.inventory, None);
        assert_eq!(template.allow_simultaneous, Some(true));
        assert_eq!(template.status.as_deref(), Some("never updated"));
        assert!(template.extra.contains_key("last_job_run"));
    }

    #[test]
    fn test_workflow_job_template_serialization_skips_status() {
        let template = WorkflowJobTemplate {
            name: Some("deploy".to_string()),
            status: Some("successful".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(value, json!({"name": "deploy"}));
    }

    #[test]
    fn test_workflow_job_template_endpoints() {
        assert_eq!(
            WorkflowJobTemplate::ITEM.resolve(&[10]).unwrap(),
            "/api/v2/workflow_job_templates/10/"
        );
        assert_eq!(WorkflowJobTemplate::CREATE_FIELDS, &["name"]);
    }
}
