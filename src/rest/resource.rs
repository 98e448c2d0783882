//! Generic resource protocol for the Tassi API.
//!
//! This module defines the [`Resource`] capability trait and the generic
//! CRUD operations built on top of the dispatcher and the object mapper.
//! A resource type declares its singular name and how to wrap a mapped
//! object; path derivation, identifier handling and the request→map
//! pipeline are shared.
//!
//! Concrete resources ([`Package`](crate::rest::resources::Package) and
//! friends) are thin declarations selecting which of these operations they
//! expose.
//!
//! # Envelope Unwrapping
//!
//! Single-resource endpoints may wrap the object under a key equal to the
//! resource's singular name (`{"package": {...}}`) or return it bare.
//! [`retrieve`], [`create`] and [`update`] unwrap the inner value when the
//! payload contains such a key with a mapping value, and fall back to the
//! whole payload otherwise. [`list`] and sub-resource calls never unwrap:
//! the caller navigates named collection fields (`.packages`, `.meta`).
//!
//! # Example
//!
//! ```rust,ignore
//! use tassi_api::rest::{resource, Resource};
//!
//! // Any type implementing `Resource` gets the full protocol:
//! let package: Package = resource::retrieve(&client, Some(4.into())).await?;
//! let listing = resource::list::<Package>(&client, None).await?;
//! ```

use serde_json::{Map, Value};
use std::fmt;

use crate::clients::{HttpClient, ResponseEnvelope};
use crate::error::ApiError;
use crate::rest::object::{Object, ObjectValue};

/// An opaque server-assigned resource identifier.
///
/// The API assigns identifiers as integers or strings; both render into
/// URL segments the same way.
///
/// # Example
///
/// ```rust
/// use tassi_api::ResourceId;
///
/// assert_eq!(ResourceId::from(4_u64).to_string(), "4");
/// assert_eq!(ResourceId::from("pkg_123").to_string(), "pkg_123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// A numeric identifier.
    Int(u64),
    /// A string identifier.
    Str(String),
}

impl ResourceId {
    /// Reads an identifier back from a mapped attribute value.
    ///
    /// Numbers and strings qualify; any other shape means the attribute is
    /// not a usable identifier.
    #[must_use]
    pub fn from_value(value: &ObjectValue) -> Option<Self> {
        match value {
            ObjectValue::Number(n) => Some(
                n.as_u64()
                    .map_or_else(|| Self::Str(n.to_string()), Self::Int),
            ),
            ObjectValue::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

/// Pluralizes a lowercase singular resource name into its URL segment.
///
/// English rules: consonant + "y" becomes "ies", sibilant endings take
/// "es", everything else appends "s".
///
/// # Example
///
/// ```rust
/// use tassi_api::rest::pluralize;
///
/// assert_eq!(pluralize("package"), "packages");
/// assert_eq!(pluralize("marketplace"), "marketplaces");
/// assert_eq!(pluralize("delivery"), "deliveries");
/// assert_eq!(pluralize("address"), "addresses");
/// ```
#[must_use]
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        let after_vowel = stem
            .chars()
            .last()
            .map_or(false, |c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if !after_vowel {
            return format!("{stem}ies");
        }
    }

    if name.ends_with('s')
        || name.ends_with('x')
        || name.ends_with('z')
        || name.ends_with("ch")
        || name.ends_with("sh")
    {
        return format!("{name}es");
    }

    format!("{name}s")
}

/// A type addressable through the generic resource protocol.
///
/// Implementors declare the singular resource name and how to wrap a mapped
/// [`Object`]; every path and identifier rule is derived from that.
///
/// # State
///
/// An instance without an identifier is transient (in-memory attributes
/// only). [`create`] and [`retrieve`] produce persisted instances carrying
/// the server-assigned identifier. [`delete`] leaves local attributes
/// untouched, so a deleted instance still reads as persisted locally.
pub trait Resource: Sized {
    /// The singular lowercase resource name.
    ///
    /// Doubles as the envelope key in single-resource responses and as the
    /// base of the pluralized collection path.
    const NAME: &'static str;

    /// Wraps a mapped response object in the resource type.
    fn from_object(object: Object) -> Self;

    /// The mapped attribute state backing this instance.
    fn object(&self) -> &Object;

    /// Mutable access to the attribute state.
    fn object_mut(&mut self) -> &mut Object;

    /// The collection path, e.g. `/packages`.
    #[must_use]
    fn collection_path() -> String {
        format!("/{}", pluralize(Self::NAME))
    }

    /// The instance path for `id`, e.g. `/packages/4`.
    #[must_use]
    fn instance_path(id: &ResourceId) -> String {
        format!("{}/{id}", Self::collection_path())
    }

    /// The server-assigned identifier, read from the `id` attribute.
    ///
    /// `None` means the instance has not been persisted yet.
    fn id(&self) -> Option<ResourceId> {
        self.object().get("id").and_then(ResourceId::from_value)
    }

    /// The URL of this instance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the instance carries no
    /// identifier.
    fn instance_url(&self) -> Result<String, ApiError> {
        self.id()
            .map(|id| Self::instance_path(&id))
            .ok_or_else(|| missing_id_error::<Self>())
    }
}

/// Builds the invalid-request error for a missing identifier.
fn missing_id_error<R: Resource>() -> ApiError {
    ApiError::invalid_request(format!(
        "Could not determine which URL to request: {} instance has an invalid id: none",
        R::NAME
    ))
}

/// Rejects parameters that are present but not a JSON mapping, before any
/// network call is made.
fn validate_params(params: Option<&Value>) -> Result<(), ApiError> {
    match params {
        None | Some(Value::Object(_)) => Ok(()),
        Some(_) => Err(ApiError::invalid_request(
            "You must pass a JSON object of parameters to Tassi API calls.",
        )),
    }
}

/// Extracts the enveloped object body, when the payload wraps it under the
/// resource's singular name.
fn envelope_body(name: &str, payload: &Map<String, Value>) -> Option<Map<String, Value>> {
    match payload.get(name) {
        Some(Value::Object(inner)) => Some(inner.clone()),
        _ => None,
    }
}

/// Maps a single-resource response into the resource type, applying the
/// envelope-unwrap rule.
fn into_resource<R: Resource>(response: ResponseEnvelope) -> R {
    let payload = response.into_payload();
    let body = envelope_body(R::NAME, &payload).unwrap_or(payload);
    R::from_object(Object::from_json_map(body))
}

/// Retrieves a single resource by identifier.
///
/// Issues GET to the instance path and applies the envelope-unwrap rule.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for a `None` id, before any network
/// call; otherwise any dispatcher error.
pub async fn retrieve<R: Resource>(
    client: &HttpClient,
    id: Option<ResourceId>,
) -> Result<R, ApiError> {
    let id = id.ok_or_else(|| missing_id_error::<R>())?;
    let response = client.get(&R::instance_path(&id), None).await?;
    Ok(into_resource::<R>(response))
}

/// Lists resources, returning the whole mapped payload.
///
/// No envelope unwrapping happens here: the caller navigates the named
/// collection field (e.g. `.packages`) and any metadata (e.g. `.meta`).
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for non-mapping params, before any
/// network call; otherwise any dispatcher error.
pub async fn list<R: Resource>(
    client: &HttpClient,
    params: Option<Value>,
) -> Result<Object, ApiError> {
    validate_params(params.as_ref())?;
    let response = client.get(&R::collection_path(), params).await?;
    Ok(Object::from_json_map(response.into_payload()))
}

/// Creates a resource from the given parameters.
///
/// Issues POST to the collection path and applies the envelope-unwrap rule.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for non-mapping params, before any
/// network call; otherwise any dispatcher error.
pub async fn create<R: Resource>(
    client: &HttpClient,
    params: Option<Value>,
) -> Result<R, ApiError> {
    validate_params(params.as_ref())?;
    let response = client.post(&R::collection_path(), params).await?;
    Ok(into_resource::<R>(response))
}

/// Updates the resource identified by `id` with the given parameters.
///
/// Issues PUT to the instance path and applies the envelope-unwrap rule.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for non-mapping params or a `None`
/// id, before any network call; otherwise any dispatcher error.
pub async fn update<R: Resource>(
    client: &HttpClient,
    id: Option<ResourceId>,
    params: Option<Value>,
) -> Result<R, ApiError> {
    validate_params(params.as_ref())?;
    let id = id.ok_or_else(|| missing_id_error::<R>())?;
    let response = client.put(&R::instance_path(&id), params).await?;
    Ok(into_resource::<R>(response))
}

/// Deletes the resource at its own instance URL.
///
/// Returns the same instance: server-side deletion does not clear local
/// attributes, so the identifier and attribute state remain readable.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] when the instance carries no
/// identifier; otherwise any dispatcher error.
pub async fn delete<R: Resource>(client: &HttpClient, instance: R) -> Result<R, ApiError> {
    let url = instance.instance_url()?;
    client.delete(&url, None).await?;
    Ok(instance)
}

/// Persists the instance's current attribute state.
///
/// Serializes every attribute except the identifier; updates when an
/// identifier is present, creates otherwise.
///
/// # Errors
///
/// Any dispatcher error from the underlying create/update call.
pub async fn save<R: Resource>(client: &HttpClient, instance: &R) -> Result<R, ApiError> {
    let params = instance.object().serialize_params();
    match instance.id() {
        Some(id) => update(client, Some(id), Some(params)).await,
        None => create(client, Some(params)).await,
    }
}

/// Fetches a custom sub-resource under the instance path.
///
/// Issues GET to `{instance}/{segment}` and returns the whole mapped
/// payload; sub-resource endpoints are not single-resource envelopes.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] for non-mapping params or a missing
/// identifier, before any network call; otherwise any dispatcher error.
pub async fn fetch_subresource<R: Resource>(
    client: &HttpClient,
    instance: &R,
    segment: &str,
    params: Option<Value>,
) -> Result<Object, ApiError> {
    validate_params(params.as_ref())?;
    let url = format!("{}/{segment}", instance.instance_url()?);
    let response = client.get(&url, params).await?;
    Ok(Object::from_json_map(response.into_payload()))
}
