//! REST resource infrastructure for the Tassi API.
//!
//! This module provides:
//!
//! - **[`Object`] / [`ObjectValue`]**: the dynamic object graph mapped from
//!   JSON responses
//! - **[`Resource`] trait + [`resource`] operations**: the generic CRUD
//!   protocol (retrieve/list/create/update/delete/save) with derived path
//!   handling and envelope unwrapping
//! - **[`resources`]**: the concrete Tassi resources (Package, Shipment,
//!   Carrier, Marketplace)
//!
//! # Example
//!
//! ```rust,ignore
//! use tassi_api::{ApiKey, HttpClient, Package, TassiConfig};
//!
//! let client = HttpClient::new(TassiConfig::new(ApiKey::new("sk_test_123")));
//!
//! // Retrieve one package; the response envelope is unwrapped.
//! let package = Package::retrieve(&client, Some(4_u64.into())).await?;
//! println!("{:?}", package.get_str("status"));
//!
//! // List packages; the whole payload is returned.
//! let listing = Package::list(&client, None).await?;
//! println!("{} packages", listing.get_array("packages").unwrap().len());
//! ```

pub mod object;
pub mod resource;
pub mod resources;

pub use object::{Object, ObjectValue};
pub use resource::{pluralize, Resource, ResourceId};
