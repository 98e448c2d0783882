//! Configuration types for the Tassi API SDK.
//!
//! Configuration is instance-based: a [`TassiConfig`] is built once and
//! handed to [`HttpClient::new`](crate::clients::HttpClient::new). There is
//! no process-wide mutable state; two clients built from different configs
//! are fully independent, and mutating a config value after a client was
//! built does not affect that client.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tassi_api::{ApiKey, Environment, TassiConfig};
//!
//! let config = TassiConfig::builder(ApiKey::new("sk_test_123"))
//!     .environment(Environment::Live)
//!     .timeout(Duration::from_secs(10))
//!     .build();
//!
//! assert_eq!(config.environment(), Environment::Live);
//! ```

mod newtypes;

pub use newtypes::ApiKey;

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base endpoint for the sandbox environment.
pub const SANDBOX_BASE: &str = "https://tassi-api.exanora.com";

/// Base endpoint for the live environment.
///
/// Currently identical to [`SANDBOX_BASE`]; kept as a separate constant so
/// the two can diverge without an API change.
pub const LIVE_BASE: &str = "https://tassi-api.exanora.com";

/// Default per-client request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The API environment a client targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// The test environment. This is the default.
    #[default]
    Sandbox,
    /// The production environment.
    Live,
}

impl Environment {
    /// Returns the base endpoint this environment resolves to.
    #[must_use]
    pub const fn base_endpoint(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_BASE,
            Self::Live => LIVE_BASE,
        }
    }

    /// Returns the environment tag as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the Tassi API SDK.
///
/// Holds the credential, an optional base-URL override, the environment
/// flag, the TLS-verification flag and the request timeout.
///
/// # Thread Safety
///
/// `TassiConfig` is `Clone`, `Send` and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use tassi_api::{ApiKey, TassiConfig};
///
/// let config = TassiConfig::new(ApiKey::new("sk_test_123"));
/// assert_eq!(config.effective_base_url(), "https://tassi-api.exanora.com");
/// assert!(config.verify_tls());
/// ```
#[derive(Clone, Debug)]
pub struct TassiConfig {
    api_key: ApiKey,
    api_base: Option<String>,
    environment: Environment,
    verify_tls: bool,
    timeout: Duration,
}

impl TassiConfig {
    /// Creates a configuration with default settings for the given key.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self::builder(api_key).build()
    }

    /// Creates a builder for constructing a `TassiConfig`.
    #[must_use]
    pub fn builder(api_key: ApiKey) -> TassiConfigBuilder {
        TassiConfigBuilder {
            api_key,
            api_base: None,
            environment: Environment::default(),
            verify_tls: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Returns the API credential.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the explicit base-URL override, if set.
    #[must_use]
    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }

    /// Returns the configured environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves the effective base URL: the explicit override takes
    /// precedence, otherwise the environment selects the endpoint.
    #[must_use]
    pub fn effective_base_url(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or_else(|| self.environment.base_endpoint())
    }
}

// Verify TassiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TassiConfig>();
};

/// Builder for [`TassiConfig`] instances.
///
/// The credential is the only required value and is taken up front;
/// everything else has a default, so `build()` is infallible.
///
/// # Defaults
///
/// - `api_base`: `None` (environment endpoint is used)
/// - `environment`: [`Environment::Sandbox`]
/// - `verify_tls`: `true`
/// - `timeout`: 30 seconds
#[derive(Debug)]
pub struct TassiConfigBuilder {
    api_key: ApiKey,
    api_base: Option<String>,
    environment: Environment,
    verify_tls: bool,
    timeout: Duration,
}

impl TassiConfigBuilder {
    /// Overrides the base URL, bypassing environment selection.
    ///
    /// Useful for proxies and for pointing tests at a mock server.
    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Selects the environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Enables or disables TLS certificate verification.
    #[must_use]
    pub const fn verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Sets the per-request timeout handed to the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the [`TassiConfig`].
    #[must_use]
    pub fn build(self) -> TassiConfig {
        TassiConfig {
            api_key: self.api_key,
            api_base: self.api_base,
            environment: self.environment,
            verify_tls: self.verify_tls,
            timeout: self.timeout,
        }
    }
}
