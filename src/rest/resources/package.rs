//! Package resource.
//!
//! Packages are retrieved, listed and updated against `/packages`, with two
//! custom sub-paths: tracking events and shipping labels.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::clients::HttpClient;
use crate::error::ApiError;
use crate::rest::object::Object;
use crate::rest::resource::{self as resource, Resource, ResourceId};

/// A package moving through the Tassi network.
///
/// Attributes are dynamic: the instance exposes exactly the fields the API
/// returned (`id`, `tracking_number`, `status`, `weight`, ...), navigable
/// through the [`Object`] accessors via `Deref`.
///
/// # Example
///
/// ```rust,ignore
/// use tassi_api::Package;
///
/// let package = Package::retrieve(&client, Some(4_u64.into())).await?;
/// assert_eq!(package.get_str("status"), Some("in_transit"));
///
/// let tracking = package.track(&client).await?;
/// println!("{:?}", tracking.get_array("events"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Package {
    object: Object,
}

impl Resource for Package {
    const NAME: &'static str = "package";

    fn from_object(object: Object) -> Self {
        Self { object }
    }

    fn object(&self) -> &Object {
        &self.object
    }

    fn object_mut(&mut self) -> &mut Object {
        &mut self.object
    }
}

impl Package {
    /// Creates an empty, not-yet-persisted package.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a package by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for a `None` id before any
    /// network call; otherwise any dispatcher error.
    pub async fn retrieve(client: &HttpClient, id: Option<ResourceId>) -> Result<Self, ApiError> {
        resource::retrieve(client, id).await
    }

    /// Lists packages, returning the whole mapped payload.
    ///
    /// The result exposes the `packages` collection and any `meta` field
    /// exactly as returned by the API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for non-mapping params before
    /// any network call; otherwise any dispatcher error.
    pub async fn list(client: &HttpClient, params: Option<Value>) -> Result<Object, ApiError> {
        resource::list::<Self>(client, params).await
    }

    /// Updates a package by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for non-mapping params or a
    /// `None` id before any network call; otherwise any dispatcher error.
    pub async fn update(
        client: &HttpClient,
        id: Option<ResourceId>,
        params: Option<Value>,
    ) -> Result<Self, ApiError> {
        resource::update(client, id, params).await
    }

    /// Persists the current attribute state.
    ///
    /// Updates when the instance carries an identifier, creates otherwise.
    ///
    /// # Errors
    ///
    /// Any dispatcher error from the underlying create/update call.
    pub async fn save(&self, client: &HttpClient) -> Result<Self, ApiError> {
        resource::save(client, self).await
    }

    /// Fetches tracking information for this package.
    ///
    /// Issues GET to `/packages/{id}/track` and returns the whole mapped
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the instance carries no
    /// identifier; otherwise any dispatcher error.
    pub async fn track(&self, client: &HttpClient) -> Result<Object, ApiError> {
        resource::fetch_subresource(client, self, "track", None).await
    }

    /// Fetches a shipping label attached to this package.
    ///
    /// Issues GET to `/packages/{id}/shipping_labels/{label_id}` and
    /// returns the whole mapped payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the instance carries no
    /// identifier; otherwise any dispatcher error.
    pub async fn shipping_label(
        &self,
        client: &HttpClient,
        label_id: ResourceId,
    ) -> Result<Object, ApiError> {
        resource::fetch_subresource(client, self, &format!("shipping_labels/{label_id}"), None)
            .await
    }
}

impl Deref for Package {
    type Target = Object;

    fn deref(&self) -> &Object {
        &self.object
    }
}

impl DerefMut for Package {
    fn deref_mut(&mut self) -> &mut Object {
        &mut self.object
    }
}
