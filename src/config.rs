//! Client configuration.
//!
//! Configuration is a plain value passed to client constructors rather than a
//! global settings object. It can be built in code or loaded from environment
//! variables; environment values always win over defaults.
//!
//! # Example
//!
//! ```rust
//! use oxford::config::ClientConfig;
//! use oxford::AzureRegion;
//!
//! let config = ClientConfig::new("my-subscription-key").with_region(AzureRegion::WestEurope);
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use crate::core::providers::azure::AzureRegion;
use crate::errors::ApiError;

/// Environment variable holding the subscription key.
pub const ENV_SUBSCRIPTION_KEY: &str = "OXFORD_SUBSCRIPTION_KEY";

/// Environment variable holding the Azure region identifier.
pub const ENV_REGION: &str = "OXFORD_REGION";

/// Environment variable overriding the request timeout, in seconds.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "OXFORD_REQUEST_TIMEOUT_SECS";

/// Shared configuration for all service clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Azure region used to build regional endpoints
    pub region: AzureRegion,
    /// Subscription key sent as the `Ocp-Apim-Subscription-Key` header
    pub subscription_key: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Overall per-request timeout
    pub request_timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Interval between long-running operation status checks
    pub poll_interval: Duration,
    /// Maximum number of status checks before a poll gives up
    pub poll_max_attempts: u32,
    /// Interval between bearer token renewals
    pub token_refresh_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: AzureRegion::default(),
            subscription_key: String::new(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("oxford/", env!("CARGO_PKG_VERSION")).to_string(),
            poll_interval: Duration::from_secs(1),
            poll_max_attempts: 120,
            // Tokens are valid for 10 minutes; renew one minute early.
            token_refresh_interval: Duration::from_secs(9 * 60),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with the given subscription key and defaults
    /// for everything else.
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            ..Self::default()
        }
    }

    /// Set the Azure region.
    pub fn with_region(mut self, region: AzureRegion) -> Self {
        self.region = region;
        self
    }

    /// Set the interval between operation status checks.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the maximum number of operation status checks.
    pub fn with_poll_max_attempts(mut self, attempts: u32) -> Self {
        self.poll_max_attempts = attempts;
        self
    }

    /// Set the bearer token renewal interval.
    pub fn with_token_refresh_interval(mut self, interval: Duration) -> Self {
        self.token_refresh_interval = interval;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `OXFORD_SUBSCRIPTION_KEY` is required. `OXFORD_REGION` and
    /// `OXFORD_REQUEST_TIMEOUT_SECS` override the defaults when set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the key is missing or an
    /// override fails to parse.
    pub fn from_env() -> Result<Self, ApiError> {
        let subscription_key = std::env::var(ENV_SUBSCRIPTION_KEY).map_err(|_| {
            ApiError::Configuration(format!("{ENV_SUBSCRIPTION_KEY} is not set"))
        })?;

        let mut config = Self::new(subscription_key);

        if let Ok(raw) = std::env::var(ENV_REGION) {
            // Parsing never fails; unknown identifiers become Custom regions.
            if let Ok(region) = raw.parse::<AzureRegion>() {
                config.region = region;
            }
        }

        if let Ok(raw) = std::env::var(ENV_REQUEST_TIMEOUT_SECS) {
            let secs: u64 = raw.parse().map_err(|_| {
                ApiError::Configuration(format!(
                    "{ENV_REQUEST_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.subscription_key.trim().is_empty() {
            return Err(ApiError::Configuration(
                "subscription key must not be empty".to_string(),
            ));
        }
        if self.poll_max_attempts == 0 {
            return Err(ApiError::Configuration(
                "poll_max_attempts must be greater than 0".to_string(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(ApiError::Configuration(
                "poll_interval must be greater than zero".to_string(),
            ));
        }
        if self.token_refresh_interval.is_zero() {
            return Err(ApiError::Configuration(
                "token_refresh_interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
