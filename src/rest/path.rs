//! Endpoint templating for AWX resources.
//!
//! Every resource kind declares its endpoints as [`EndpointTemplate`]
//! constants. A template is a path with named `{placeholder}` segments plus
//! the ordered list of those names. Resolving a template substitutes
//! identifiers positionally.
//!
//! # Example
//!
//! ```rust
//! use awx_api::rest::EndpointTemplate;
//!
//! const TEAM: EndpointTemplate = EndpointTemplate::new("/api/v2/teams/{id}/", &["id"]);
//! const SUCCESS_NODES: EndpointTemplate = EndpointTemplate::new(
//!     "/api/v2/workflow_job_template_nodes/{parent_id}/success_nodes/",
//!     &["parent_id"],
//! );
//!
//! assert_eq!(TEAM.resolve(&[3]).unwrap(), "/api/v2/teams/3/");
//! assert_eq!(
//!     SUCCESS_NODES.resolve(&[7]).unwrap(),
//!     "/api/v2/workflow_job_template_nodes/7/success_nodes/"
//! );
//! assert!(TEAM.resolve(&[]).is_err());
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use thiserror::Error;

/// Error returned when a template is resolved with the wrong identifiers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// The number of identifiers does not match the number of placeholders.
    #[error("Endpoint {template} expects {expected} identifier(s), got {got}")]
    Arity {
        /// The template being resolved.
        template: &'static str,
        /// Number of placeholders in the template.
        expected: usize,
        /// Number of identifiers supplied.
        got: usize,
    },
}

/// A resource endpoint with named placeholders.
///
/// This is a `const`-constructible value so resource kinds can declare their
/// endpoints as associated constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointTemplate {
    /// The path with `{name}` placeholders.
    pub template: &'static str,
    /// Placeholder names in substitution order.
    pub ids: &'static [&'static str],
}

impl EndpointTemplate {
    /// Creates a new template.
    #[must_use]
    pub const fn new(template: &'static str, ids: &'static [&'static str]) -> Self {
        Self { template, ids }
    }

    /// Returns the number of identifiers this template needs.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.ids.len()
    }

    /// Resolves the template, substituting `ids` positionally.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Arity`] if `ids.len()` differs from the number
    /// of placeholders.
    pub fn resolve(&self, ids: &[u64]) -> Result<String, TemplateError> {
        if ids.len() != self.arity() {
            return Err(TemplateError::Arity {
                template: self.template,
                expected: self.arity(),
                got: ids.len(),
            });
        }

        let values: HashMap<&str, u64> = self.ids.iter().copied().zip(ids.iter().copied()).collect();
        Ok(build_path(self.template, &values))
    }
}

impl Display for EndpointTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.template)
    }
}

/// Builds a URL from a template by interpolating IDs.
///
/// Replaces `{id_name}` placeholders in the template with values from
/// the provided map. Placeholders without a value are left untouched.
///
/// # Example
///
/// ```rust
/// use awx_api::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("parent_id", 7);
///
/// let url = build_path("/api/v2/workflow_job_template_nodes/{parent_id}/always_nodes/", &ids);
/// assert_eq!(url, "/api/v2/workflow_job_template_nodes/7/always_nodes/");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EndpointTemplate>();
    assert_send_sync::<TemplateError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: EndpointTemplate = EndpointTemplate::new("/api/v2/teams/", &[]);
    const ITEM: EndpointTemplate = EndpointTemplate::new("/api/v2/teams/{id}/", &["id"]);
    const STEPS: EndpointTemplate = EndpointTemplate::new(
        "/api/v2/workflow_job_template_nodes/{parent_id}/failure_nodes/",
        &["parent_id"],
    );

    #[test]
    fn test_collection_template_resolves_without_ids() {
        assert_eq!(COLLECTION.resolve(&[]).unwrap(), "/api/v2/teams/");
    }

    #[test]
    fn test_item_template_keeps_trailing_slash() {
        assert_eq!(ITEM.resolve(&[42]).unwrap(), "/api/v2/teams/42/");
    }

    #[test]
    fn test_parent_template_substitutes_parent_id() {
        assert_eq!(
            STEPS.resolve(&[7]).unwrap(),
            "/api/v2/workflow_job_template_nodes/7/failure_nodes/"
        );
    }

    #[test]
    fn test_resolve_rejects_too_few_ids() {
        let error = ITEM.resolve(&[]).unwrap_err();
        assert_eq!(
            error,
            TemplateError::Arity {
                template: "/api/v2/teams/{id}/",
                expected: 1,
                got: 0,
            }
        );
    }

    #[test]
    fn test_resolve_rejects_too_many_ids() {
        let error = COLLECTION.resolve(&[1]).unwrap_err();
        assert!(matches!(error, TemplateError::Arity { expected: 0, got: 1, .. }));
        assert!(error.to_string().contains("/api/v2/teams/"));
    }

    #[test]
    fn test_build_path_with_multiple_ids() {
        let mut ids = HashMap::new();
        ids.insert("parent_id", "7");
        ids.insert("id", "42");

        let result = build_path("/nodes/{parent_id}/steps/{id}/", &ids);
        assert_eq!(result, "/nodes/7/steps/42/");
    }

    #[test]
    fn test_build_path_leaves_unknown_placeholders() {
        let ids: HashMap<&str, u64> = HashMap::new();
        assert_eq!(build_path("/teams/{id}/", &ids), "/teams/{id}/");
    }

    #[test]
    fn test_display_shows_template() {
        assert_eq!(ITEM.to_string(), "/api/v2/teams/{id}/");
    }
}
