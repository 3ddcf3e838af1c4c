//! Typed REST client for Cognitive Services endpoints.
//!
//! [`ApiClient`] owns a single long-lived HTTP client per service endpoint.
//! It attaches the credential header, serializes request bodies as camelCase
//! JSON (DTOs in this crate carry `#[serde(rename_all = "camelCase")]`), and
//! deserializes responses into typed values.
//!
//! Failure semantics:
//!
//! - 2xx with a non-empty body deserializes into `Ok(Some(T))`
//! - 2xx with an empty body is `Ok(None)`, never a decode error
//! - any other status is [`ApiError::Status`] carrying the error body the
//!   service returned
//! - transport and decode failures map to [`ApiError::Network`] and
//!   [`ApiError::Decode`]
//!
//! [`ApiClient::request_or_default`] collapses every failure into the type's
//! default value, for callers that treat "no data" as the only failure
//! signal.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::ApiError;

pub use crate::core::providers::azure::Credentials;

const JSON_CONTENT_TYPE: &str = "application/json";

/// A typed HTTP client bound to one service endpoint and one credential.
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoint: String,
    credentials: Credentials,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given endpoint.
    ///
    /// `endpoint` is the service base URL without a trailing slash; paths
    /// passed to the request methods are appended to it verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(
        endpoint: impl Into<String>,
        credentials: Credentials,
        config: &ClientConfig,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| {
                ApiError::Configuration(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            credentials,
            http,
        })
    }

    /// The endpoint this client is bound to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Start a request against a path below the endpoint, with the
    /// credential header attached.
    ///
    /// Escape hatch for service wrappers that need non-JSON payloads or
    /// response headers; pair with [`dispatch`](Self::dispatch).
    pub fn builder(&self, method: Method, path_and_query: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.endpoint, path_and_query);
        self.credentials.apply(self.http.request(method, url))
    }

    /// Start a request against an absolute URL, with the credential header
    /// attached. Used for operation status URLs returned by the service.
    pub fn builder_for_url(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.credentials.apply(self.http.request(method, url))
    }

    /// Send a prepared request and enforce the status contract.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] on transport failure; [`ApiError::Status`] with
    /// the error body (logged) on a non-success status.
    pub async fn dispatch(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "service returned an error status");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Perform a request with an optional JSON body and a typed response.
    ///
    /// Returns `Ok(None)` when the service answers 2xx with an empty body.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%method, path = path_and_query, "dispatching request");

        let mut builder = self.builder(method, path_and_query);
        if let Some(body) = body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE)
                .json(body);
        }

        let response = self.dispatch(builder).await?;
        Self::read_json(response).await
    }

    /// GET a typed response from a path below the endpoint.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<Option<T>, ApiError> {
        self.request::<(), T>(Method::GET, path_and_query, None).await
    }

    /// GET a typed response with URL-encoded query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>, ApiError> {
        debug!(path, "dispatching GET request");
        let builder = self.builder(Method::GET, path).query(query);
        let response = self.dispatch(builder).await?;
        Self::read_json(response).await
    }

    /// GET a typed response from an absolute URL.
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, ApiError> {
        debug!(url, "dispatching GET request");
        let response = self.dispatch(self.builder_for_url(Method::GET, url)).await?;
        Self::read_json(response).await
    }

    /// POST a JSON body and read a typed response.
    pub async fn post<B, T>(&self, path_and_query: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path_and_query, Some(body)).await
    }

    /// POST a raw byte payload (audio, SSML) and read a typed JSON response.
    pub async fn post_bytes<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        content_type: &str,
        body: bytes::Bytes,
    ) -> Result<Option<T>, ApiError> {
        debug!(path = path_and_query, content_type, "dispatching POST request");
        let builder = self
            .builder(Method::POST, path_and_query)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body);
        let response = self.dispatch(builder).await?;
        Self::read_json(response).await
    }

    /// DELETE a resource, discarding any response body.
    pub async fn delete(&self, path_and_query: &str) -> Result<(), ApiError> {
        self.dispatch(self.builder(Method::DELETE, path_and_query))
            .await?;
        Ok(())
    }

    /// Perform a request and collapse every failure into the default value.
    ///
    /// Transport errors and non-success statuses become `T::default()` with a
    /// warn log line. Prefer [`request`](Self::request) when the caller can
    /// act on the error.
    pub async fn request_or_default<B, T>(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<&B>,
    ) -> T
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        match self.request(method, path_and_query, body).await {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                warn!(path = path_and_query, error = %err, "request failed, returning default");
                T::default()
            }
        }
    }

    /// Deserialize a response body, mapping an empty body to `Ok(None)`.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>, ApiError> {
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}
