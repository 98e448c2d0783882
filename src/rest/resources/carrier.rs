//! Carrier resource.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::clients::HttpClient;
use crate::error::ApiError;
use crate::rest::object::Object;
use crate::rest::resource::{self as resource, Resource, ResourceId};

/// A transport carrier registered with the Tassi network.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Carrier {
    object: Object,
}

impl Resource for Carrier {
    const NAME: &'static str = "carrier";

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

impl Carrier {
    /// Creates an empty, not-yet-persisted carrier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a carrier by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for a `None` id before any
    /// network call; otherwise any dispatcher error.
    pub async fn retrieve(client: &HttpClient, id: Option<ResourceId>) -> Result<Self, ApiError> {
        resource::retrieve(client, id).await
    }

    /// Updates a carrier by identifier.
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
}

impl Deref for Carrier {
    type Target = Object;

    fn deref(&self) -> &Object {
        &self.object
    }
}

impl DerefMut for Carrier {
    fn deref_mut(&mut self) -> &mut Object {
        &mut self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Carrier::collection_path(), "/carriers");
        assert_eq!(Carrier::instance_path(&"car_9".into()), "/carriers/car_9");
    }
}
