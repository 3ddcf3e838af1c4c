use crate::config::ClientConfig;
use crate::core::client::{ApiClient, Credentials};
use crate::errors::ApiError;

use super::messages::{AutosuggestResponse, NewsSearchResponse, WebSearchResponse};

/// Global Bing Search API endpoint; the service is not regional.
pub const BING_API_ENDPOINT: &str = "https://api.cognitive.microsoft.com/bing/v7.0";

/// Safe search filtering level, passed on every search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafeSearch {
    Off,
    #[default]
    Moderate,
    Strict,
}

impl SafeSearch {
    /// The query parameter value for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Moderate => "Moderate",
            Self::Strict => "Strict",
        }
    }
}

/// Client for the Bing Web Search, News Search, and Autosuggest APIs.
#[derive(Debug, Clone)]
pub struct BingSearchClient {
    api: ApiClient,
    safe_search: SafeSearch,
    market: String,
}

impl BingSearchClient {
    /// Create a client against the global endpoint.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_endpoint(BING_API_ENDPOINT, config)
    }

    /// Create a client against an explicit base URL. Used for tests.
    pub fn with_endpoint(endpoint: impl Into<String>, config: &ClientConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(
            endpoint,
            Credentials::SubscriptionKey(config.subscription_key.clone()),
            config,
        )?;
        Ok(Self {
            api,
            safe_search: SafeSearch::default(),
            market: "en-US".to_string(),
        })
    }

    /// Set the safe search level for subsequent requests.
    pub fn with_safe_search(mut self, safe_search: SafeSearch) -> Self {
        self.safe_search = safe_search;
        self
    }

    /// Set the market (for example `en-US`) for subsequent requests.
    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    /// Search the web, returning up to `count` results.
    pub async fn web_search(&self, query: &str, count: u32) -> Result<WebSearchResponse, ApiError> {
        let count = count.to_string();
        let response = self
            .api
            .get_with_query(
                "/search",
                &[
                    ("q", query),
                    ("count", &count),
                    ("mkt", &self.market),
                    ("safeSearch", self.safe_search.as_str()),
                ],
            )
            .await?;
        Ok(response.unwrap_or_default())
    }

    /// Search news, returning up to `count` articles.
    pub async fn news_search(&self, query: &str, count: u32) -> Result<NewsSearchResponse, ApiError> {
        let count = count.to_string();
        let response = self
            .api
            .get_with_query(
                "/news/search",
                &[
                    ("q", query),
                    ("count", &count),
                    ("mkt", &self.market),
                    ("safeSearch", self.safe_search.as_str()),
                ],
            )
            .await?;
        Ok(response.unwrap_or_default())
    }

    /// Get query suggestions for a partial query.
    pub async fn autosuggest(&self, query: &str) -> Result<AutosuggestResponse, ApiError> {
        let response = self
            .api
            .get_with_query("/Suggestions", &[("q", query), ("mkt", &self.market)])
            .await?;
        Ok(response.unwrap_or_default())
    }
}
