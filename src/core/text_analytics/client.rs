use crate::config::ClientConfig;
use crate::core::client::{ApiClient, Credentials};
use crate::errors::ApiError;

use super::messages::{DocumentBatch, KeyPhrasesResponse, LanguageResponse, SentimentResponse};

/// Client for the Text Analytics API.
///
/// # Example
///
/// ```rust,no_run
/// use oxford::config::ClientConfig;
/// use oxford::core::text_analytics::{DocumentBatch, DocumentInput, TextAnalyticsClient};
///
/// # async fn example() -> Result<(), oxford::ApiError> {
/// let config = ClientConfig::new("subscription-key");
/// let client = TextAnalyticsClient::new(&config)?;
///
/// let batch = DocumentBatch::from(vec![
///     DocumentInput::new("1", "What a wonderful trip!").with_language("en"),
/// ]);
/// let sentiment = client.sentiment(&batch).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TextAnalyticsClient {
    api: ApiClient,
}

impl TextAnalyticsClient {
    /// Create a client against the configured region's endpoint.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_endpoint(config.region.text_analytics_url(), config)
    }

    /// Create a client against an explicit base URL. Used for sovereign
    /// clouds and tests.
    pub fn with_endpoint(endpoint: impl Into<String>, config: &ClientConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(
            endpoint,
            Credentials::SubscriptionKey(config.subscription_key.clone()),
            config,
        )?;
        Ok(Self { api })
    }

    /// Score the sentiment of each document in the batch.
    ///
    /// An empty response body yields an empty result set.
    pub async fn sentiment(&self, batch: &DocumentBatch) -> Result<SentimentResponse, ApiError> {
        Ok(self.api.post("/sentiment", batch).await?.unwrap_or_default())
    }

    /// Extract key phrases from each document in the batch.
    pub async fn key_phrases(&self, batch: &DocumentBatch) -> Result<KeyPhrasesResponse, ApiError> {
        Ok(self.api.post("/keyPhrases", batch).await?.unwrap_or_default())
    }

    /// Detect the language of each document in the batch.
    pub async fn detect_language(&self, batch: &DocumentBatch) -> Result<LanguageResponse, ApiError> {
        Ok(self.api.post("/languages", batch).await?.unwrap_or_default())
    }
}
