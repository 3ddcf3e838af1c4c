//! Error types for Cognitive Services API operations.

/// Error type for all Cognitive Services API operations.
///
/// Failures are surfaced as explicit variants; callers that prefer a default
/// value over an error can use
/// [`ApiClient::request_or_default`](crate::core::client::ApiClient::request_or_default).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid or missing configuration (empty key, bad env var, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure (connect error, timeout, DNS failure)
    #[error("Request failed: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    ///
    /// `body` carries the error payload the service returned, when any.
    #[error("Service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Token acquisition or renewal failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A long-running operation was still running after the configured
    /// number of status checks
    #[error("Operation still running after {0} status checks")]
    OperationTimedOut(u32),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
