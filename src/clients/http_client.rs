//! HTTP dispatcher for Tassi API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Tassi API. The client resolves the effective base URL
//! from its configuration, attaches the default header set, dispatches the
//! call and normalizes the outcome into a [`ResponseEnvelope`] or a typed
//! [`ApiError`].

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::http_request::{params_to_query, ApiRequest, HttpMethod};
use crate::clients::http_response::{ResponseContext, ResponseEnvelope};
use crate::config::TassiConfig;
use crate::error::{ApiError, RequestDiagnostics};

/// SDK version from Cargo.toml, sent as the `X-Version` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client source tag sent as the `X-Source` header.
pub const SOURCE_TAG: &str = "Tassi RustLib";

/// HTTP client for making requests to the Tassi API.
///
/// The client handles:
/// - Base URL resolution (explicit override, else environment endpoint)
/// - Default headers including version/source tags and bearer auth
/// - Method-dependent parameter placement (query string vs. JSON body)
/// - Status classification into the [`ApiError`] taxonomy
///
/// The client is stateless beyond the injected configuration: it performs
/// no retries and holds no caches. Each call issues exactly one HTTP round
/// trip and returns only after the response is fully read and decoded.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use tassi_api::{ApiKey, HttpClient, TassiConfig};
///
/// let client = HttpClient::new(TassiConfig::new(ApiKey::new("sk_test_123")));
/// let response = client.get("/packages", None).await?;
/// println!("{:?}", response.payload.get("packages"));
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The injected configuration, fixed for the client's lifetime.
    config: TassiConfig,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// The configuration is captured at construction; later changes to a
    /// cloned config value do not affect this client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: TassiConfig) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("X-Version".to_string(), SDK_VERSION.to_string());
        default_headers.insert("X-Source".to_string(), SOURCE_TAG.to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_str()),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(!config.verify_tls())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            default_headers,
        }
    }

    /// Returns the effective base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.effective_base_url()
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &TassiConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Dispatches a request to the Tassi API.
    ///
    /// GET, HEAD and DELETE requests send `params` as a query string; all
    /// other methods send `params` as a JSON body. Caller-supplied headers
    /// override the client defaults on key collision.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] when the request fails
    /// validation (non-mapping params), the classified error for a non-2xx
    /// status, and [`ApiError::Connection`] for transport failures and
    /// bodies that are not JSON mappings.
    pub async fn request(&self, request: ApiRequest) -> Result<ResponseEnvelope, ApiError> {
        request.verify()?;

        let url = format!("{}{}", self.base_url(), request.path);

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Head => self.client.head(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            builder = builder.header(key, value);
        }

        if request.method.sends_params_as_query() {
            if let Some(map) = request.params.as_ref().and_then(Value::as_object) {
                if !map.is_empty() {
                    builder = builder.query(&params_to_query(map));
                }
            }
        } else {
            // POST/PUT always carry a JSON body, an empty object when the
            // caller passed no parameters.
            let body = request.params.clone().unwrap_or(Value::Object(Map::new()));
            builder = builder.json(&body);
        }

        tracing::debug!(method = %request.method, url = %url, "dispatching request");

        let response = builder.send().await.map_err(|error| {
            let status = error.status().map(|s| s.as_u16());
            ApiError::Connection {
                message: format!("Request error: {error}"),
                status,
                diagnostics: Some(Box::new(RequestDiagnostics {
                    method: request.method.to_string(),
                    url: url.clone(),
                    response_body: None,
                })),
            }
        })?;

        let status = response.status().as_u16();
        let body_text = response.text().await.unwrap_or_default();

        if !(200..300).contains(&status) {
            tracing::warn!(status, url = %url, "request failed");
            return Err(ApiError::from_response(
                status,
                request.method.as_str(),
                &url,
                body_text,
            ));
        }

        let payload = decode_payload(&body_text, status, request.method, &url)?;

        Ok(ResponseEnvelope::new(
            payload,
            ResponseContext {
                environment: self.config.environment(),
            },
        ))
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(
        &self,
        path: &str,
        params: Option<Value>,
    ) -> Result<ResponseEnvelope, ApiError> {
        self.make_request(HttpMethod::Get, path, params).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(
        &self,
        path: &str,
        params: Option<Value>,
    ) -> Result<ResponseEnvelope, ApiError> {
        self.make_request(HttpMethod::Post, path, params).await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put(
        &self,
        path: &str,
        params: Option<Value>,
    ) -> Result<ResponseEnvelope, ApiError> {
        self.make_request(HttpMethod::Put, path, params).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(
        &self,
        path: &str,
        params: Option<Value>,
    ) -> Result<ResponseEnvelope, ApiError> {
        self.make_request(HttpMethod::Delete, path, params).await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Option<Value>,
    ) -> Result<ResponseEnvelope, ApiError> {
        let mut builder = ApiRequest::builder(method, path);
        if let Some(params) = params {
            builder = builder.params(params);
        }
        self.request(builder.build()).await
    }
}

/// Decodes a response body into the payload mapping.
///
/// An empty body decodes to an empty mapping. Undecodable bodies and
/// non-mapping top-level values are connection errors: the caller cannot
/// recover from either without a retry.
fn decode_payload(
    body: &str,
    status: u16,
    method: HttpMethod,
    url: &str,
) -> Result<Map<String, Value>, ApiError> {
    if body.is_empty() {
        return Ok(Map::new());
    }

    let diagnostics = || {
        Some(Box::new(RequestDiagnostics {
            method: method.to_string(),
            url: url.to_string(),
            response_body: Some(body.to_string()),
        }))
    };

    let value: Value = serde_json::from_str(body).map_err(|error| ApiError::Connection {
        message: format!("Failed to decode response body as JSON: {error}"),
        status: Some(status),
        diagnostics: diagnostics(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::Connection {
            message: "Expected a JSON object in the response body".to_string(),
            status: Some(status),
            diagnostics: diagnostics(),
        }),
    }
}
