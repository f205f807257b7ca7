//! AWX resource kinds.
//!
//! Each kind is an entity struct implementing
//! [`ResourceKind`](crate::rest::ResourceKind), which supplies the
//! endpoints and mandatory create fields used by the generic accessors.
//!
//! | Kind | Collection | Create requires |
//! |---|---|---|
//! | [`Organization`] | `/api/v2/organizations/` | `name` |
//! | [`Team`] | `/api/v2/teams/` | `name`, `organization` |
//! | [`WorkflowJobTemplate`] | `/api/v2/workflow_job_templates/` | `name` |
//! | [`WorkflowJobTemplateNode`] | `/api/v2/workflow_job_template_nodes/` | `workflow_job_template`, `unified_job_template`, `identifier` |
//! | node steps ([`StepKind`]) | `/api/v2/workflow_job_template_nodes/{parent_id}/{success,failure,always}_nodes/` | `unified_job_template`, `identifier` |
//!
//! # Example
//!
//! ```rust,ignore
//! use awx_api::rest::Resource;
//! use awx_api::rest::resources::{StepKind, Team};
//!
//! // Through the client shortcuts
//! let team = client.teams().get(3, None).await?;
//!
//! // Or explicitly
//! let teams = Resource::<Team>::new(&client);
//! let page = teams.list(None).await?;
//!
//! // Nested node steps
//! let failures = client.workflow_job_template_node_steps(StepKind::Failure);
//! let page = failures.list(7, None).await?;
//! ```

mod organization;
mod team;
mod workflow_job_template;
mod workflow_job_template_node;

pub use organization::Organization;
pub use team::Team;
pub use workflow_job_template::WorkflowJobTemplate;
pub use workflow_job_template_node::{StepKind, WorkflowJobTemplateNode, STEP_CREATE_FIELDS};
