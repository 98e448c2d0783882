//! # Tassi API Rust SDK
//!
//! A Rust SDK for the Tassi shipping and logistics API, providing
//! object-oriented access to shipments, packages, carriers and
//! marketplaces.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Instance-based configuration via [`TassiConfig`] and
//!   [`TassiConfigBuilder`] (no global state)
//! - An async HTTP dispatcher ([`HttpClient`]) with bearer-token
//!   authentication and uniform status classification
//! - Dynamic response mapping ([`Object`] / [`ObjectValue`]): responses
//!   expose exactly the fields the API returned, with no fixed schema
//! - A generic resource protocol ([`rest::Resource`]) with derived paths
//!   and envelope unwrapping
//! - A typed error hierarchy ([`ApiError`]) distinguishing invalid
//!   requests, authentication, not-found, validation and connection errors
//!
//! ## Quick Start
//!
//! ```rust
//! use tassi_api::{ApiKey, Environment, HttpClient, TassiConfig};
//!
//! // Configure once, then inject into the client.
//! let config = TassiConfig::builder(ApiKey::new("sk_test_123"))
//!     .environment(Environment::Sandbox)
//!     .build();
//!
//! let client = HttpClient::new(config);
//! assert_eq!(client.base_url(), "https://tassi-api.exanora.com");
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use serde_json::json;
//! use tassi_api::{ApiKey, HttpClient, Package, Shipment, TassiConfig};
//!
//! let client = HttpClient::new(TassiConfig::new(ApiKey::new("sk_test_123")));
//!
//! // Create a shipment.
//! let shipment = Shipment::create(&client, Some(json!({
//!     "shipment": {
//!         "marketplace_id": "123",
//!         "customer": {"first_name": "John", "last_name": "Doe"},
//!         "package": {"weight": "2.5", "currency": "XOF"}
//!     }
//! }))).await?;
//!
//! // Retrieve and inspect a package; unknown fields survive.
//! let package = Package::retrieve(&client, Some(4_u64.into())).await?;
//! println!("status: {:?}", package.get_str("status"));
//!
//! // List packages; the whole payload is returned, no unwrapping.
//! let listing = Package::list(&client, Some(json!({"page": 2}))).await?;
//! for package in listing.get_array("packages").unwrap_or_default() {
//!     println!("{:?}", package.as_object().unwrap().get_str("tracking_number"));
//! }
//!
//! // Follow a custom sub-path.
//! let tracking = package.track(&client).await?;
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use tassi_api::{ApiError, Package};
//!
//! match Package::retrieve(&client, Some(4_u64.into())).await {
//!     Ok(package) => println!("found {:?}", package.id()),
//!     Err(ApiError::NotFound { .. }) => println!("no such package"),
//!     Err(ApiError::Authentication { .. }) => println!("check the API key"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed
//!   explicitly to the client
//! - **Structural mapping**: Responses are mapped by shape, never by
//!   schema; extra fields survive and missing fields read as `None`
//! - **Fail-fast argument checks**: Malformed arguments error before any
//!   network call
//! - **No hidden retries**: Every failure surfaces immediately to the
//!   caller
//! - **Thread-safe**: Client, config and errors are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, Environment, TassiConfig, TassiConfigBuilder};
pub use error::ApiError;

// Re-export HTTP dispatch types
pub use clients::{
    ApiRequest, ApiRequestBuilder, HttpClient, HttpMethod, ResponseContext, ResponseEnvelope,
};

// Re-export resource types
pub use rest::resources::{Carrier, Marketplace, Package, Shipment};
pub use rest::{Object, ObjectValue, Resource, ResourceId};
