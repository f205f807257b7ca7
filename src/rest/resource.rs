//! Generic resource accessors.
//!
//! Every AWX resource kind is reached through the same two accessor types:
//!
//! - [`Resource`]: get/list/create/update/delete on a top-level collection
//! - [`SubResource`]: list/create on a collection nested under a parent
//!
//! What varies between kinds is metadata, supplied by implementing
//! [`ResourceKind`]: a display name, the collection and item endpoint
//! templates, and the fields a create request must carry.
//!
//! # Implementing a Resource Kind
//!
//! ```rust,ignore
//! use awx_api::rest::{EndpointTemplate, ResourceKind};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! pub struct Inventory {
//!     pub id: Option<u64>,
//!     pub name: Option<String>,
//! }
//!
//! impl ResourceKind for Inventory {
//!     const NAME: &'static str = "Inventory";
//!     const COLLECTION: EndpointTemplate = EndpointTemplate::new("/api/v2/inventories/", &[]);
//!     const ITEM: EndpointTemplate = EndpointTemplate::new("/api/v2/inventories/{id}/", &["id"]);
//!     const CREATE_FIELDS: &'static [&'static str] = &["name", "organization"];
//! }
//!
//! let inventories = Resource::<Inventory>::new(&client);
//! let page = inventories.list(None).await?;
//! ```
//!
//! # Request Flow
//!
//! 1. `create` validates the record against the mandatory field set and
//!    fails with [`ResourceError::MissingFields`] before any I/O
//! 2. The endpoint template is resolved with the given identifiers
//! 3. Exactly one request is sent through the [`Transport`]
//! 4. The response is classified by [`check_response`]
//! 5. A 2xx body is decoded into the entity or [`Page`]

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::clients::{
    DataType, HttpError, HttpMethod, HttpRequest, HttpResponse, RestClient, RestError, Transport,
};
use crate::rest::{check_response, validate_params, EndpointTemplate, Page, ResourceError};

/// A loosely-typed write payload: wire field name to value.
pub type ResourceRecord = Map<String, Value>;

/// Query parameters appended to a request URL.
pub type QueryParams = HashMap<String, String>;

/// Metadata describing one AWX resource kind.
///
/// The implementing type is also the entity the accessor decodes. It must
/// implement `Default` so that a DELETE answered with an empty body can
/// still return a value.
pub trait ResourceKind: DeserializeOwned + Default + Send + 'static {
    /// The singular display name used in errors (e.g., "Team").
    const NAME: &'static str;

    /// The collection endpoint, used by `list` and `create`.
    const COLLECTION: EndpointTemplate;

    /// The item endpoint with a single `{id}` placeholder.
    const ITEM: EndpointTemplate;

    /// Fields that must be present in a create record.
    const CREATE_FIELDS: &'static [&'static str];
}

/// Accessor for a top-level AWX collection.
///
/// Borrows the transport, so it is cheap to create per call site.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
///
/// let teams = client.teams();
/// let record = json!({"name": "ops", "organization": 1});
/// let team = teams.create(record.as_object().unwrap().clone(), None).await?;
/// let team = teams.update(team.id.unwrap(), json!({"description": "on call"})
///     .as_object().unwrap().clone(), None).await?;
/// teams.delete(team.id.unwrap()).await?;
/// ```
pub struct Resource<'c, K, T = RestClient> {
    transport: &'c T,
    _kind: PhantomData<fn() -> K>,
}

impl<'c, K, T> Resource<'c, K, T> {
    /// Creates an accessor that sends requests through `transport`.
    #[must_use]
    pub const fn new(transport: &'c T) -> Self {
        Self {
            transport,
            _kind: PhantomData,
        }
    }
}

impl<K: ResourceKind, T> fmt::Debug for Resource<'_, K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("kind", &K::NAME)
            .field("collection", &K::COLLECTION.template)
            .finish()
    }
}

impl<K: ResourceKind, T: Transport> Resource<'_, K, T> {
    /// Fetches one entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404, [`ResourceError::Api`] on
    /// any other non-2xx status, [`ResourceError::Decode`] if the body does
    /// not match the entity, and [`ResourceError::Transport`] if no response
    /// was obtained.
    pub async fn get(&self, id: u64, query: Option<QueryParams>) -> Result<K, ResourceError> {
        let path = K::ITEM.resolve(&[id])?;
        let response = send(self.transport, HttpMethod::Get, path, None, query).await?;
        decode(&response, K::NAME, Some(id))
    }

    /// Lists one page of the collection.
    ///
    /// `query` carries filters and paging parameters; use
    /// [`Page::next_page_query`] to obtain the parameters for the next page.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), with `Decode` raised when the pagination
    /// envelope is malformed.
    pub async fn list(&self, query: Option<QueryParams>) -> Result<Page<K>, ResourceError> {
        let path = K::COLLECTION.resolve(&[])?;
        let response = send(self.transport, HttpMethod::Get, path, None, query).await?;
        decode(&response, K::NAME, None)
    }

    /// Creates an entity after checking the mandatory field set.
    ///
    /// Extra fields in `record` are forwarded unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingFields`] listing every absent required
    /// field; no request is sent in that case. Otherwise as [`get`](Self::get).
    pub async fn create(
        &self,
        record: ResourceRecord,
        query: Option<QueryParams>,
    ) -> Result<K, ResourceError> {
        ensure_fields(&record, K::CREATE_FIELDS, K::NAME)?;
        let path = K::COLLECTION.resolve(&[])?;
        tracing::debug!(
            resource = K::NAME,
            fields = ?record.keys().collect::<Vec<_>>(),
            "Creating AWX resource"
        );
        let response = send(
            self.transport,
            HttpMethod::Post,
            path,
            Some(Value::Object(record)),
            query,
        )
        .await?;
        decode(&response, K::NAME, None)
    }

    /// Partially updates an entity with PATCH.
    ///
    /// No field validation is performed; the server judges the payload.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn update(
        &self,
        id: u64,
        record: ResourceRecord,
        query: Option<QueryParams>,
    ) -> Result<K, ResourceError> {
        let path = K::ITEM.resolve(&[id])?;
        tracing::debug!(
            resource = K::NAME,
            id,
            fields = ?record.keys().collect::<Vec<_>>(),
            "Updating AWX resource"
        );
        let response = send(
            self.transport,
            HttpMethod::Patch,
            path,
            Some(Value::Object(record)),
            query,
        )
        .await?;
        decode(&response, K::NAME, Some(id))
    }

    /// Deletes an entity.
    ///
    /// AWX normally answers 204 with no body, in which case `K::default()`
    /// is returned. A body, if present, is decoded.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn delete(&self, id: u64) -> Result<K, ResourceError> {
        let path = K::ITEM.resolve(&[id])?;
        let response = send(self.transport, HttpMethod::Delete, path, None, None).await?;
        classify(&response, K::NAME, Some(id))?;
        if response.is_empty() {
            return Ok(K::default());
        }
        decode(&response, K::NAME, Some(id))
    }
}

/// Accessor for a collection nested under a parent entity.
///
/// The template's single placeholder is filled with the parent id, e.g.
/// `/api/v2/workflow_job_template_nodes/{parent_id}/success_nodes/`.
pub struct SubResource<'c, E, T = RestClient> {
    transport: &'c T,
    name: &'static str,
    template: EndpointTemplate,
    create_fields: &'static [&'static str],
    _entity: PhantomData<fn() -> E>,
}

impl<'c, E, T> SubResource<'c, E, T> {
    /// Creates a nested accessor.
    #[must_use]
    pub const fn new(
        transport: &'c T,
        name: &'static str,
        template: EndpointTemplate,
        create_fields: &'static [&'static str],
    ) -> Self {
        Self {
            transport,
            name,
            template,
            create_fields,
            _entity: PhantomData,
        }
    }

    /// The display name used in errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The endpoint template this accessor resolves.
    #[must_use]
    pub const fn template(&self) -> EndpointTemplate {
        self.template
    }

    /// Fields that must be present in a create record.
    #[must_use]
    pub const fn create_fields(&self) -> &'static [&'static str] {
        self.create_fields
    }
}

impl<E, T> fmt::Debug for SubResource<'_, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubResource")
            .field("name", &self.name)
            .field("template", &self.template.template)
            .field("create_fields", &self.create_fields)
            .finish()
    }
}

impl<E: DeserializeOwned + Send, T: Transport> SubResource<'_, E, T> {
    /// Lists one page of the nested collection under `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the parent does not exist, and
    /// otherwise the same errors as [`Resource::list`].
    pub async fn list(
        &self,
        parent_id: u64,
        query: Option<QueryParams>,
    ) -> Result<Page<E>, ResourceError> {
        let path = self.template.resolve(&[parent_id])?;
        let response = send(self.transport, HttpMethod::Get, path, None, query).await?;
        decode(&response, self.name, Some(parent_id))
    }

    /// Creates an entity under `parent_id` after checking the mandatory fields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingFields`] before any request if required
    /// fields are absent, and otherwise the same errors as [`Resource::create`].
    pub async fn create(
        &self,
        parent_id: u64,
        record: ResourceRecord,
        query: Option<QueryParams>,
    ) -> Result<E, ResourceError> {
        ensure_fields(&record, self.create_fields, self.name)?;
        let path = self.template.resolve(&[parent_id])?;
        tracing::debug!(
            resource = self.name,
            parent_id,
            fields = ?record.keys().collect::<Vec<_>>(),
            "Creating nested AWX resource"
        );
        let response = send(
            self.transport,
            HttpMethod::Post,
            path,
            Some(Value::Object(record)),
            query,
        )
        .await?;
        decode(&response, self.name, Some(parent_id))
    }
}

/// Serializes a typed value (usually an entity struct) into a write record.
///
/// Fields the entity marks as read-only or leaves as `None` are omitted, so
/// a partially filled struct yields exactly the fields that were set.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if `value` does not serialize to a JSON object.
///
/// # Example
///
/// ```rust
/// use awx_api::rest::to_record;
/// use awx_api::rest::resources::Team;
///
/// let team = Team {
///     name: Some("ops".to_string()),
///     organization: Some(1),
///     ..Default::default()
/// };
///
/// let record = to_record(&team).unwrap();
/// assert_eq!(record.len(), 2);
/// assert_eq!(record["organization"], 1);
/// ```
pub fn to_record<S: Serialize>(value: &S) -> Result<ResourceRecord, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "expected a JSON object for a resource record, got {other}"
        ))),
    }
}

fn ensure_fields(
    record: &ResourceRecord,
    required: &[&str],
    resource: &'static str,
) -> Result<(), ResourceError> {
    validate_params(record, required).map_err(|fields| {
        tracing::debug!(resource, missing = ?fields, "Rejecting create with missing fields");
        ResourceError::MissingFields { resource, fields }
    })
}

async fn send<T: Transport>(
    transport: &T,
    method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: Option<QueryParams>,
) -> Result<HttpResponse, ResourceError> {
    let mut builder = HttpRequest::builder(method, path);

    if let Some(body) = body {
        builder = builder.body(body).body_type(DataType::Json);
    }

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        builder = builder.query(query);
    }

    let request = builder
        .build()
        .map_err(|e| RestError::Http(HttpError::InvalidRequest(e)))?;

    Ok(transport.send(request).await?)
}

fn classify(
    response: &HttpResponse,
    resource: &'static str,
    id: Option<u64>,
) -> Result<(), ResourceError> {
    check_response(response).map_err(|error| ResourceError::from_api_error(error, resource, id))
}

fn decode<E: DeserializeOwned>(
    response: &HttpResponse,
    resource: &'static str,
    id: Option<u64>,
) -> Result<E, ResourceError> {
    classify(response, resource, id)?;
    response.json().map_err(|source| ResourceError::Decode {
        resource,
        code: response.code,
        source,
    })
}
