//! HTTP dispatch layer for the Tassi API SDK.
//!
//! This module provides the request/response types and the [`HttpClient`]
//! dispatcher that every resource operation is built on:
//!
//! - [`ApiRequest`] / [`ApiRequestBuilder`]: a per-call request envelope
//! - [`ResponseEnvelope`] / [`ResponseContext`]: the decoded response
//! - [`HttpClient`]: base-URL resolution, header merging, dispatch and
//!   status classification

mod http_client;
mod http_request;
mod http_response;

pub use http_client::{HttpClient, SDK_VERSION, SOURCE_TAG};
pub use http_request::{ApiRequest, ApiRequestBuilder, HttpMethod};
pub use http_response::{ResponseContext, ResponseEnvelope};
