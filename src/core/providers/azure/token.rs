//! Bearer token acquisition and background renewal.
//!
//! Some Cognitive Services endpoints (speech synthesis in particular) accept
//! only bearer tokens, which are obtained by POSTing the subscription key to
//! the regional token endpoint and expire after 10 minutes.
//!
//! [`TokenAuthenticator`] fetches a token once up front, then renews it on a
//! fixed interval from a background task. A failed renewal is logged and the
//! next one is scheduled anyway, so a transient outage never permanently
//! stops renewal. The current token is published through a
//! [`tokio::sync::watch`] channel; readers always see the latest value
//! without any shared-mutation hazards.
//!
//! # Example
//!
//! ```rust,no_run
//! use oxford::config::ClientConfig;
//! use oxford::{TokenAuthenticator, TokenProvider};
//!
//! # async fn example() -> Result<(), oxford::ApiError> {
//! let config = ClientConfig::new("subscription-key");
//! let authenticator = TokenAuthenticator::connect(&config).await?;
//! let token = authenticator.token().await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::ApiError;

use super::auth::SUBSCRIPTION_KEY_HEADER;

/// Provides bearer tokens for services requiring token authentication.
///
/// Abstracting the source behind a trait lets tests substitute a fixed token
/// for the live authenticator.
#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a currently valid access token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthenticationFailed`] when no token is available.
    async fn token(&self) -> Result<String, ApiError>;
}

/// Fetches a bearer token and keeps it fresh for the life of the process.
///
/// Dropping the authenticator stops the renewal task.
pub struct TokenAuthenticator {
    current: watch::Receiver<Option<String>>,
    handle: tokio::task::JoinHandle<()>,
}

impl std::fmt::Debug for TokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthenticator")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl TokenAuthenticator {
    /// Fetch an initial token from the region's token endpoint and start the
    /// renewal task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthenticationFailed`] when the initial fetch
    /// fails; renewal failures after that are logged and retried on the next
    /// interval.
    pub async fn connect(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::connect_to(
            config.region.token_endpoint(),
            config.subscription_key.clone(),
            config.token_refresh_interval,
        )
        .await
    }

    /// Like [`connect`](Self::connect), but against an explicit token
    /// endpoint URL. Used for sovereign clouds and tests.
    pub async fn connect_to(
        token_url: impl Into<String>,
        subscription_key: impl Into<String>,
        refresh_interval: Duration,
    ) -> Result<Self, ApiError> {
        let token_url = token_url.into();
        let subscription_key = subscription_key.into();
        let http = reqwest::Client::new();

        let initial = fetch_token(&http, &token_url, &subscription_key).await?;
        debug!("acquired initial access token");

        let (tx, rx) = watch::channel(Some(initial));
        let handle = tokio::spawn(renewal_loop(
            http,
            token_url,
            subscription_key,
            refresh_interval,
            tx,
        ));

        Ok(Self {
            current: rx,
            handle,
        })
    }

    /// The most recently fetched token, if any.
    ///
    /// The value changes asynchronously as the background task renews it, so
    /// callers should read it per request rather than caching it.
    pub fn current_token(&self) -> Option<String> {
        self.current.borrow().clone()
    }
}

impl Drop for TokenAuthenticator {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[async_trait::async_trait]
impl TokenProvider for TokenAuthenticator {
    async fn token(&self) -> Result<String, ApiError> {
        self.current_token()
            .ok_or_else(|| ApiError::AuthenticationFailed("no access token available".to_string()))
    }
}

/// Renew the token every `interval`, forever.
///
/// A failed attempt only logs; the next attempt is scheduled regardless, so
/// one outage does not stop future renewals.
async fn renewal_loop(
    http: reqwest::Client,
    token_url: String,
    subscription_key: String,
    interval: Duration,
    tx: watch::Sender<Option<String>>,
) {
    loop {
        tokio::time::sleep(interval).await;

        match fetch_token(&http, &token_url, &subscription_key).await {
            Ok(token) => {
                debug!("renewed access token");
                if tx.send(Some(token)).is_err() {
                    // Authenticator dropped; nobody is reading anymore.
                    break;
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to renew access token, will retry on next interval");
            }
        }
    }
}

/// Exchange the subscription key for an access token.
///
/// The token endpoint takes a POST with no body and returns the raw token
/// text on success.
async fn fetch_token(
    http: &reqwest::Client,
    token_url: &str,
    subscription_key: &str,
) -> Result<String, ApiError> {
    let response = http
        .post(token_url)
        .header(SUBSCRIPTION_KEY_HEADER, subscription_key)
        .send()
        .await
        .map_err(|err| ApiError::AuthenticationFailed(format!("token request failed: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::AuthenticationFailed(format!(
            "token endpoint returned status {}: {body}",
            status.as_u16()
        )));
    }

    let token = response
        .text()
        .await
        .map_err(|err| ApiError::AuthenticationFailed(format!("failed to read token: {err}")))?;

    if token.trim().is_empty() {
        return Err(ApiError::AuthenticationFailed(
            "token endpoint returned an empty body".to_string(),
        ));
    }

    Ok(token)
}

/// Fixed token provider for tests.
#[cfg(test)]
pub struct StaticTokenProvider(pub String);

#[cfg(test)]
#[async_trait::async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, ApiError> {
        Ok(self.0.clone())
    }
}
