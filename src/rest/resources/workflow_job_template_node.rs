//! Workflow job template node resource and node steps.
//!
//! Nodes are the vertices of a workflow graph. Edges are expressed as
//! "steps": each node has three child collections holding the nodes that
//! run after it succeeds, fails, or always.
//!
//! ```text
//! /api/v2/workflow_job_template_nodes/{parent_id}/success_nodes/
//! /api/v2/workflow_job_template_nodes/{parent_id}/failure_nodes/
//! /api/v2/workflow_job_template_nodes/{parent_id}/always_nodes/
//! ```
//!
//! Creating a step creates a new node and links it under the parent in one
//! call, so the step create only requires `unified_job_template` and
//! `identifier`; the workflow is inherited from the parent.
//!
//! # Example
//!
//! ```rust,ignore
//! use awx_api::rest::resources::StepKind;
//! use serde_json::json;
//!
//! let on_success = client.workflow_job_template_node_steps(StepKind::Success);
//! let record = json!({"unified_job_template": 5, "identifier": "notify"});
//! let node = on_success.create(7, record.as_object().unwrap().clone(), None).await?;
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::Transport;
use crate::rest::{EndpointTemplate, ResourceKind, SubResource};

/// Fields required when creating a node through a step collection.
pub const STEP_CREATE_FIELDS: &[&str] = &["unified_job_template", "identifier"];

/// A node in a workflow job template graph.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WorkflowJobTemplateNode {
    /// The unique identifier of the node.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// The API URL of this node.
    #[serde(default, skip_serializing)]
    pub url: Option<String>,

    /// Id of the workflow job template this node belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_job_template: Option<u64>,

    /// Id of the template (job, project, inventory source or workflow) this node runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unified_job_template: Option<u64>,

    /// Identifier unique within the workflow, stable across edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    /// Ids of nodes run when this node succeeds.
    #[serde(default, skip_serializing)]
    pub success_nodes: Vec<u64>,

    /// Ids of nodes run when this node fails.
    #[serde(default, skip_serializing)]
    pub failure_nodes: Vec<u64>,

    /// Ids of nodes run regardless of the outcome.
    #[serde(default, skip_serializing)]
    pub always_nodes: Vec<u64>,

    /// If true, this node runs only once every parent has finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_parents_must_converge: Option<bool>,

    /// Extra variables supplied to the launched job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Value>,

    /// Inventory override for the launched job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<u64>,

    /// Host limit override for the launched job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,

    /// When the node was created.
    #[serde(default, skip_serializing)]
    pub created: Option<DateTime<Utc>>,

    /// When the node was last modified.
    #[serde(default, skip_serializing)]
    pub modified: Option<DateTime<Utc>>,

    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceKind for WorkflowJobTemplateNode {
    const NAME: &'static str = "WorkflowJobTemplateNode";
    const COLLECTION: EndpointTemplate =
        EndpointTemplate::new("/api/v2/workflow_job_template_nodes/", &[]);
    const ITEM: EndpointTemplate =
        EndpointTemplate::new("/api/v2/workflow_job_template_nodes/{id}/", &["id"]);
    const CREATE_FIELDS: &'static [&'static str] =
        &["workflow_job_template", "unified_job_template", "identifier"];
}

/// Which outcome of the parent node a step is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Runs after the parent succeeds (`success_nodes/`).
    Success,
    /// Runs after the parent fails (`failure_nodes/`).
    Failure,
    /// Runs whatever the parent's outcome (`always_nodes/`).
    Always,
}

impl StepKind {
    const SUCCESS: EndpointTemplate = EndpointTemplate::new(
        "/api/v2/workflow_job_template_nodes/{parent_id}/success_nodes/",
        &["parent_id"],
    );
    const FAILURE: EndpointTemplate = EndpointTemplate::new(
        "/api/v2/workflow_job_template_nodes/{parent_id}/failure_nodes/",
        &["parent_id"],
    );
    const ALWAYS: EndpointTemplate = EndpointTemplate::new(
        "/api/v2/workflow_job_template_nodes/{parent_id}/always_nodes/",
        &["parent_id"],
    );

    /// All step kinds.
    pub const ALL: [Self; 3] = [Self::Success, Self::Failure, Self::Always];

    /// The endpoint template for this step collection.
    #[must_use]
    pub const fn template(self) -> EndpointTemplate {
        match self {
            Self::Success => Self::SUCCESS,
            Self::Failure => Self::FAILURE,
            Self::Always => Self::ALWAYS,
        }
    }

    /// The display name used in errors.
    #[must_use]
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Success => "WorkflowJobTemplateNodeSuccessStep",
            Self::Failure => "WorkflowJobTemplateNodeFailureStep",
            Self::Always => "WorkflowJobTemplateNodeAlwaysStep",
        }
    }

    /// The relation name AWX uses for this step collection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success_nodes",
            Self::Failure => "failure_nodes",
            Self::Always => "always_nodes",
        }
    }

    /// Builds the nested accessor for this step collection.
    #[must_use]
    pub const fn accessor<T: Transport>(
        self,
        transport: &T,
    ) -> SubResource<'_, WorkflowJobTemplateNode, T> {
        SubResource::new(
            transport,
            self.resource_name(),
            self.template(),
            STEP_CREATE_FIELDS,
        )
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_deserialization_with_edges() {
        let node: WorkflowJobTemplateNode = serde_json::from_value(json!({
            "id": 7,
            "workflow_job_template": 10,
            "unified_job_template": 5,
            "identifier": "start",
            "success_nodes": [8, 9],
            "failure_nodes": [],
            "always_nodes": [11],
            "all_parents_must_converge": false,
            "extra_data": {"env": "prod"},
            "summary_fields": {}
        }))
        .unwrap();

        assert_eq!(node.id, Some(7));
        assert_eq!(node.success_nodes, vec![8, 9]);
        assert!(node.failure_nodes.is_empty());
        assert_eq!(node.always_nodes, vec![11]);
        assert_eq!(node.extra_data, Some(json!({"env": "prod"})));
        assert!(node.extra.contains_key("summary_fields"));
    }

    #[test]
    fn test_node_serialization_omits_edges() {
        let node = WorkflowJobTemplateNode {
            unified_job_template: Some(5),
            identifier: Some("notify".to_string()),
            success_nodes: vec![1],
            ..Default::default()
        };

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({"unified_job_template": 5, "identifier": "notify"})
        );
    }

    #[test]
    fn test_node_create_fields() {
        assert_eq!(
            WorkflowJobTemplateNode::CREATE_FIELDS,
            &["workflow_job_template", "unified_job_template", "identifier"]
        );
        assert_eq!(STEP_CREATE_FIELDS, &["unified_job_template", "identifier"]);
    }

    #[test]
    fn test_step_templates_resolve_under_parent() {
        assert_eq!(
            StepKind::Success.template().resolve(&[7]).unwrap(),
            "/api/v2/workflow_job_template_nodes/7/success_nodes/"
        );
        assert_eq!(
            StepKind::Failure.template().resolve(&[7]).unwrap(),
            "/api/v2/workflow_job_template_nodes/7/failure_nodes/"
        );
        assert_eq!(
            StepKind::Always.template().resolve(&[7]).unwrap(),
            "/api/v2/workflow_job_template_nodes/7/always_nodes/"
        );
    }

    #[test]
    fn test_step_kind_display_and_names_are_distinct() {
        let names: Vec<_> = StepKind::ALL.iter().map(|s| s.resource_name()).collect();
        assert_eq!(names.len(), 3);
        assert_ne!(names[0], names[1]);
        assert_ne!(names[1], names[2]);
        assert_eq!(StepKind::Always.to_string(), "always_nodes");
    }
}
