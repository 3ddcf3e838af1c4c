//! Credential header constants and request credential application.

/// Header name for subscription key authentication.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Header name for API key authentication (Recommendations API).
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header name for bearer token authentication.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Build the `Authorization` header value for a bearer token.
#[inline]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Static API credentials attached to every request a client sends.
///
/// The two variants differ only in the header name they use; the key value is
/// sent as-is in both cases. Bearer tokens are handled separately by
/// [`TokenAuthenticator`](super::TokenAuthenticator) because they change over
/// the lifetime of the process.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Sent as `Ocp-Apim-Subscription-Key` (most Cognitive Services APIs)
    SubscriptionKey(String),
    /// Sent as `x-api-key` (Recommendations API)
    ApiKey(String),
}

impl Credentials {
    /// Attach the credential header to a request builder.
    pub fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::SubscriptionKey(key) => builder.header(SUBSCRIPTION_KEY_HEADER, key.as_str()),
            Credentials::ApiKey(key) => builder.header(API_KEY_HEADER, key.as_str()),
        }
    }

    /// The header name this credential uses.
    pub fn header_name(&self) -> &'static str {
        match self {
            Credentials::SubscriptionKey(_) => SUBSCRIPTION_KEY_HEADER,
            Credentials::ApiKey(_) => API_KEY_HEADER,
        }
    }
}
