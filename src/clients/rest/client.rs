//! REST client implementation for the AWX API.
//!
//! This module provides the [`RestClient`] type, the production
//! [`Transport`] used by resource accessors.

use std::collections::HashMap;
use std::future::Future;

use crate::clients::rest::{RestError, Transport};
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::AwxConfig;
use crate::rest::resources::{
    Organization, StepKind, Team, WorkflowJobTemplate, WorkflowJobTemplateNode,
};
use crate::rest::{Resource, SubResource};

/// REST API client for the AWX API.
///
/// Provides convenient methods (`get`, `post`, `patch`, `delete`) for making
/// requests with automatic path normalization, and accessor shortcuts for
/// each supported resource kind.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Accessors borrow it, so one client can
/// serve any number of accessors and tasks.
///
/// # Example
///
/// ```rust,ignore
/// use awx_api::{AwxConfig, AccessToken, HostUrl, RestClient};
///
/// let config = AwxConfig::builder()
///     .host(HostUrl::new("https://awx.example.com").unwrap())
///     .credentials(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config)?;
///
/// let team = client.teams().get(3, None).await?;
/// let page = client.workflow_job_templates().list(None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AwxConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Accessor for `/api/v2/organizations/`.
    #[must_use]
    pub const fn organizations(&self) -> Resource<'_, Organization, Self> {
        Resource::new(self)
    }

    /// Accessor for `/api/v2/teams/`.
    #[must_use]
    pub const fn teams(&self) -> Resource<'_, Team, Self> {
        Resource::new(self)
    }

    /// Accessor for `/api/v2/workflow_job_templates/`.
    #[must_use]
    pub const fn workflow_job_templates(&self) -> Resource<'_, WorkflowJobTemplate, Self> {
        Resource::new(self)
    }

    /// Accessor for `/api/v2/workflow_job_template_nodes/`.
    #[must_use]
    pub const fn workflow_job_template_nodes(
        &self,
    ) -> Resource<'_, WorkflowJobTemplateNode, Self> {
        Resource::new(self)
    }

    /// Accessor for the success/failure/always steps under a workflow node.
    #[must_use]
    pub const fn workflow_job_template_node_steps(
        &self,
        step: StepKind,
    ) -> SubResource<'_, WorkflowJobTemplateNode, Self> {
        step.accessor(self)
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PATCH request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Patch, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.send_request(request).await
    }

    async fn send_request(&self, mut request: HttpRequest) -> Result<HttpResponse, RestError> {
        request.path = normalize_path(&request.path)?;
        self.http_client.request(request).await.map_err(Into::into)
    }
}

impl Transport for RestClient {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, RestError>> + Send {
        self.send_request(request)
    }
}

/// Normalizes an AWX API path.
///
/// This function:
/// 1. Collapses leading `/` characters into exactly one
/// 2. Appends a trailing `/` if missing (AWX redirects paths without one)
/// 3. Returns an error for empty paths
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("api/v2/teams")?, "/api/v2/teams/");
/// assert_eq!(normalize_path("/api/v2/teams/")?, "/api/v2/teams/");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    if trimmed.ends_with('/') {
        Ok(format!("/{trimmed}"))
    } else {
        Ok(format!("/{trimmed}/"))
    }
}
