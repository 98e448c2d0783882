//! HTTP request types for the Tassi API SDK.
//!
//! This module provides the [`ApiRequest`] type and its builder for
//! constructing requests to the Tassi API.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::ApiError;

/// HTTP methods supported by the Tassi API.
///
/// The method determines transport semantics: GET, HEAD and DELETE carry
/// request parameters in the query string, every other method carries them
/// as a JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP HEAD method.
    Head,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name in wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` when this method sends parameters as a query string
    /// rather than a JSON request body.
    #[must_use]
    pub const fn sends_params_as_query(self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Delete)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request to be dispatched to the Tassi API.
///
/// Requests are constructed per call and never persisted. Use
/// [`ApiRequest::builder`] for the builder pattern.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tassi_api::clients::{ApiRequest, HttpMethod};
///
/// let request = ApiRequest::builder(HttpMethod::Get, "/packages")
///     .params(json!({"page": 2}))
///     .header("X-Request-Tag", "example")
///     .build();
///
/// assert_eq!(request.path, "/packages");
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path relative to the base URL, with a leading `/`.
    pub path: String,
    /// Request parameters; query string or JSON body depending on method.
    pub params: Option<Value>,
    /// Additional headers merged over the client defaults (caller wins).
    pub extra_headers: Option<HashMap<String, String>>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder {
            method,
            path: path.into(),
            params: None,
            extra_headers: None,
        }
    }

    /// Validates the request before dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when `params` is present but is
    /// not a JSON object; the API only accepts mappings as parameters.
    pub fn verify(&self) -> Result<(), ApiError> {
        match &self.params {
            None | Some(Value::Object(_)) => Ok(()),
            Some(_) => Err(ApiError::invalid_request(
                "You must pass a JSON object of parameters to Tassi API calls.",
            )),
        }
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    path: String,
    params: Option<Value>,
    extra_headers: Option<HashMap<String, String>>,
}

impl ApiRequestBuilder {
    /// Sets the request parameters.
    #[must_use]
    pub fn params(mut self, params: impl Into<Value>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Builds the [`ApiRequest`].
    ///
    /// Validation happens at dispatch time, not here, so that a malformed
    /// request still reaches [`ApiRequest::verify`] and fails with a typed
    /// error instead of a panic.
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            path: self.path,
            params: self.params,
            extra_headers: self.extra_headers,
        }
    }
}

/// Serializes a parameter mapping into query pairs, in key order.
///
/// Nulls are skipped, scalars are stringified, arrays become
/// comma-separated values and nested objects are JSON-encoded.
pub(crate) fn params_to_query(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut query = Vec::with_capacity(params.len());

    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::String(s) => query.push((key.clone(), s.clone())),
            Value::Number(n) => query.push((key.clone(), n.to_string())),
            Value::Bool(b) => query.push((key.clone(), b.to_string())),
            Value::Array(items) => {
                let values: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    query.push((key.clone(), values.join(",")));
                }
            }
            Value::Object(_) => query.push((key.clone(), value.to_string())),
        }
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Head.to_string(), "HEAD");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_query_methods() {
        assert!(HttpMethod::Get.sends_params_as_query());
        assert!(HttpMethod::Head.sends_params_as_query());
        assert!(HttpMethod::Delete.sends_params_as_query());
        assert!(!HttpMethod::Post.sends_params_as_query());
        assert!(!HttpMethod::Put.sends_params_as_query());
    }

    #[test]
    fn test_builder_defaults() {
        let request = ApiRequest::builder(HttpMethod::Get, "/packages").build();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/packages");
        assert!(request.params.is_none());
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_builder_with_params_and_headers() {
        let request = ApiRequest::builder(HttpMethod::Post, "/shipments")
            .params(json!({"shipment": {"marketplace_id": "123"}}))
            .header("X-Custom", "value")
            .build();

        assert!(request.params.is_some());
        let headers = request.extra_headers.unwrap();
        assert_eq!(headers.get("X-Custom"), Some(&"value".to_string()));
    }

    #[test]
    fn test_verify_accepts_object_params() {
        let request = ApiRequest::builder(HttpMethod::Get, "/packages")
            .params(json!({"page": 1}))
            .build();
        assert!(request.verify().is_ok());
    }

    #[test]
    fn test_verify_accepts_missing_params() {
        let request = ApiRequest::builder(HttpMethod::Get, "/packages").build();
        assert!(request.verify().is_ok());
    }

    #[test]
    fn test_verify_rejects_non_mapping_params() {
        for params in [json!([1, 2, 3]), json!("text"), json!(42), json!(true)] {
            let request = ApiRequest::builder(HttpMethod::Get, "/packages")
                .params(params)
                .build();
            assert!(matches!(
                request.verify(),
                Err(ApiError::InvalidRequest { .. })
            ));
        }
    }

    #[test]
    fn test_params_to_query_handles_scalars() {
        let params = json!({"page": 2, "status": "in_transit", "insured": true});
        let query = params_to_query(params.as_object().unwrap());

        assert!(query.contains(&("page".to_string(), "2".to_string())));
        assert!(query.contains(&("status".to_string(), "in_transit".to_string())));
        assert!(query.contains(&("insured".to_string(), "true".to_string())));
    }

    #[test]
    fn test_params_to_query_skips_nulls() {
        let params = json!({"page": 1, "cursor": null});
        let query = params_to_query(params.as_object().unwrap());
        assert_eq!(query, vec![("page".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_params_to_query_joins_arrays() {
        let params = json!({"ids": [1, 2, 3]});
        let query = params_to_query(params.as_object().unwrap());
        assert_eq!(query, vec![("ids".to_string(), "1,2,3".to_string())]);
    }

    #[test]
    fn test_params_to_query_encodes_nested_objects_as_json() {
        let params = json!({"filter": {"status": "delivered"}});
        let query = params_to_query(params.as_object().unwrap());
        assert_eq!(
            query,
            vec![("filter".to_string(), r#"{"status":"delivered"}"#.to_string())]
        );
    }
}
