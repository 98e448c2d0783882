//! Error types for the Tassi API SDK.
//!
//! All failures surface through a single closed [`ApiError`] enum. Errors are
//! never retried or swallowed internally: a failed call returns the error to
//! the direct caller and never yields a partially mapped object.
//!
//! # Error Classification
//!
//! Non-2xx HTTP statuses are classified through a data-driven table:
//!
//! - **401**: [`ApiError::Authentication`] - invalid or expired credential
//! - **404**: [`ApiError::NotFound`] - the requested resource does not exist
//! - **422**: [`ApiError::Validation`] - the server rejected the payload
//! - **Any other non-2xx**: [`ApiError::Connection`] - carries the status and
//!   raw request/response diagnostics
//!
//! Transport-level failures (connection refused, timeout, DNS) and response
//! bodies that cannot be decoded as JSON also map to
//! [`ApiError::Connection`], since neither can be recovered from without a
//! retry.
//!
//! # Example
//!
//! ```rust,ignore
//! use tassi_api::{ApiError, Package};
//!
//! match Package::retrieve(&client, Some(4.into())).await {
//!     Ok(package) => println!("status: {:?}", package.get_str("status")),
//!     Err(ApiError::NotFound { status, .. }) => println!("gone ({status})"),
//!     Err(ApiError::Authentication { .. }) => println!("check the API key"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// The semantic kind a non-2xx HTTP status maps to.
///
/// Used by [`classify_status`] and kept separate from [`ApiError`] so the
/// status table can be tested without constructing full errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The credential was rejected.
    Authentication,
    /// The requested resource does not exist.
    NotFound,
    /// The server rejected the payload semantics.
    Validation,
    /// Any other failure, classified no further.
    Connection,
}

/// Status codes with a distinguished classification. Everything else falls
/// through to [`ErrorKind::Connection`].
const STATUS_KINDS: &[(u16, ErrorKind)] = &[
    (401, ErrorKind::Authentication),
    (404, ErrorKind::NotFound),
    (422, ErrorKind::Validation),
];

/// Maps an HTTP status code to its error kind.
///
/// # Example
///
/// ```rust
/// use tassi_api::error::{classify_status, ErrorKind};
///
/// assert_eq!(classify_status(401), ErrorKind::Authentication);
/// assert_eq!(classify_status(404), ErrorKind::NotFound);
/// assert_eq!(classify_status(422), ErrorKind::Validation);
/// assert_eq!(classify_status(500), ErrorKind::Connection);
/// ```
#[must_use]
pub fn classify_status(status: u16) -> ErrorKind {
    STATUS_KINDS
        .iter()
        .find(|(code, _)| *code == status)
        .map_or(ErrorKind::Connection, |(_, kind)| *kind)
}

/// Diagnostic references to the request and response behind an
/// [`ApiError::Connection`], kept for logging rather than programmatic use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDiagnostics {
    /// The HTTP method of the originating request.
    pub method: String,
    /// The full URL the request was dispatched to.
    pub url: String,
    /// The raw response body, when a response was received at all.
    pub response_body: Option<String>,
}

/// Unified error type for all Tassi API operations.
///
/// # Example
///
/// ```rust
/// use tassi_api::ApiError;
///
/// let error = ApiError::NotFound {
///     message: "Resource not found".to_string(),
///     status: 404,
/// };
/// assert_eq!(error.status(), Some(404));
/// assert!(error.to_string().contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller supplied a malformed argument (a missing identifier where
    /// one is required, or non-mapping parameters). Raised before any
    /// network call.
    #[error("{message}")]
    InvalidRequest {
        /// Human-readable description naming the resource and bad argument.
        message: String,
    },

    /// The API rejected the credential (HTTP 401).
    #[error("{message}")]
    Authentication {
        /// Human-readable description.
        message: String,
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// Human-readable description.
        message: String,
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The server rejected the payload semantics (HTTP 422).
    #[error("{message}")]
    Validation {
        /// Human-readable description including the raw response text.
        message: String,
        /// The HTTP status code of the response.
        status: u16,
    },

    /// A transport-level failure, an undecodable response body, or a
    /// non-2xx status with no finer classification.
    #[error("{message}")]
    Connection {
        /// Human-readable description.
        message: String,
        /// The HTTP status code, when a response was received at all.
        status: Option<u16>,
        /// References to the originating request/response for diagnostics.
        diagnostics: Option<Box<RequestDiagnostics>>,
    },
}

impl ApiError {
    /// Returns the HTTP status code attached to this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidRequest { .. } => None,
            Self::Authentication { status, .. }
            | Self::NotFound { status, .. }
            | Self::Validation { status, .. } => Some(*status),
            Self::Connection { status, .. } => *status,
        }
    }

    /// Shorthand for an invalid-request error.
    pub(crate) fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Builds the classified error for a non-2xx HTTP response.
    #[must_use]
    pub fn from_response(status: u16, method: &str, url: &str, body: String) -> Self {
        match classify_status(status) {
            ErrorKind::Authentication => Self::Authentication {
                message: "Invalid or expired API key".to_string(),
                status,
            },
            ErrorKind::NotFound => Self::NotFound {
                message: "Resource not found".to_string(),
                status,
            },
            ErrorKind::Validation => Self::Validation {
                message: format!("Validation failed: {body}"),
                status,
            },
            ErrorKind::Connection => Self::Connection {
                message: format!("Request failed with status {status}"),
                status: Some(status),
                diagnostics: Some(Box::new(RequestDiagnostics {
                    method: method.to_string(),
                    url: url.to_string(),
                    response_body: Some(body),
                })),
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        let status = error.status().map(|s| s.as_u16());
        Self::Connection {
            message: format!("Request error: {error}"),
            status,
            diagnostics: None,
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
