//! Response envelope types for the Tassi API SDK.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Environment;

/// Context metadata attached to every successful response.
///
/// Currently carries only the environment the request was issued against;
/// an extension point for future response metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResponseContext {
    /// The environment the dispatching client was configured for.
    pub environment: Environment,
}

/// A decoded response from the Tassi API.
///
/// The payload is always a JSON mapping: the dispatcher rejects non-mapping
/// bodies, and an empty body decodes to an empty mapping. Envelopes are
/// ephemeral, scoped to a single call.
///
/// # Example
///
/// ```rust
/// use serde_json::Map;
/// use tassi_api::clients::{ResponseContext, ResponseEnvelope};
/// use tassi_api::Environment;
///
/// let envelope = ResponseEnvelope::new(
///     Map::new(),
///     ResponseContext { environment: Environment::Sandbox },
/// );
/// assert!(envelope.payload.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseEnvelope {
    /// The decoded JSON payload.
    pub payload: Map<String, Value>,
    /// Response metadata.
    pub context: ResponseContext,
}

impl ResponseEnvelope {
    /// Creates a new response envelope.
    #[must_use]
    pub const fn new(payload: Map<String, Value>, context: ResponseContext) -> Self {
        Self { payload, context }
    }

    /// Consumes the envelope and returns the payload.
    #[must_use]
    pub fn into_payload(self) -> Map<String, Value> {
        self.payload
    }
}
