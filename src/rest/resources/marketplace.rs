//! Marketplace resource.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::clients::HttpClient;
use crate::error::ApiError;
use crate::rest::object::Object;
use crate::rest::resource::{self as resource, Resource, ResourceId};

/// A marketplace selling through the Tassi network.
///
/// Besides the standard retrieve/update operations, marketplaces expose
/// their wallet movement history as a custom sub-path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Marketplace {
    object: Object,
}

impl Resource for Marketplace {
    const NAME: &'static str = "marketplace";

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

impl Marketplace {
    /// Creates an empty, not-yet-persisted marketplace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a marketplace by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for a `None` id before any
    /// network call; otherwise any dispatcher error.
    pub async fn retrieve(client: &HttpClient, id: Option<ResourceId>) -> Result<Self, ApiError> {
        resource::retrieve(client, id).await
    }

    /// Updates a marketplace by identifier.
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

    /// Fetches the wallet movement history for this marketplace.
    ///
    /// Issues GET to `/marketplaces/{id}/wallet_history` and returns the
    /// whole mapped payload (`wallet_movements` plus `meta` pagination).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for non-mapping params or a
    /// missing identifier before any network call; otherwise any dispatcher
    /// error.
    pub async fn wallet_history(
        &self,
        client: &HttpClient,
        params: Option<Value>,
    ) -> Result<Object, ApiError> {
        resource::fetch_subresource(client, self, "wallet_history", params).await
    }
}

impl Deref for Marketplace {
    type Target = Object;

    fn deref(&self) -> &Object {
        &self.object
    }
}

impl DerefMut for Marketplace {
    fn deref_mut(&mut self) -> &mut Object {
        &mut self.object
    }
}
