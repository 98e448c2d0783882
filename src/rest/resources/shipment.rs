//! Shipment resource.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::clients::HttpClient;
use crate::error::ApiError;
use crate::rest::object::Object;
use crate::rest::resource::{self as resource, Resource};

/// A shipment order placed with the Tassi network.
///
/// Shipments are write-only from the client's perspective: the API exposes
/// creation at `/shipments`, and the created packages are then tracked
/// through the [`Package`](crate::rest::resources::Package) resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shipment {
    object: Object,
}

impl Resource for Shipment {
    const NAME: &'static str = "shipment";

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

impl Shipment {
    /// Creates an empty, not-yet-persisted shipment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shipment from the given parameters.
    ///
    /// Issues POST to `/shipments`; the response envelope is unwrapped when
    /// the payload is keyed by `shipment`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for non-mapping params before
    /// any network call; otherwise any dispatcher error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde_json::json;
    /// use tassi_api::Shipment;
    ///
    /// let shipment = Shipment::create(&client, Some(json!({
    ///     "shipment": {
    ///         "marketplace_id": "123",
    ///         "customer": {"first_name": "John", "last_name": "Doe"},
    ///         "package": {"weight": "2.5", "currency": "XOF"}
    ///     }
    /// }))).await?;
    /// ```
    pub async fn create(client: &HttpClient, params: Option<Value>) -> Result<Self, ApiError> {
        resource::create(client, params).await
    }
}

impl Deref for Shipment {
    type Target = Object;

    fn deref(&self) -> &Object {
        &self.object
    }
}

impl DerefMut for Shipment {
    fn deref_mut(&mut self) -> &mut Object {
        &mut self.object
    }
}
