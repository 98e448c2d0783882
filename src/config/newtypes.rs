//! Newtype wrappers for configuration values.

use std::fmt;

/// A Tassi API credential.
///
/// The key is opaque to the SDK: any string is accepted and the server is
/// the sole authority on validity. The newtype exists for type safety and
/// to mask the value in debug output so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use tassi_api::ApiKey;
///
/// let key = ApiKey::new("sk_test_123");
/// assert_eq!(key.as_str(), "sk_test_123");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a credential string.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw credential for header construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(*****)")
    }
}
