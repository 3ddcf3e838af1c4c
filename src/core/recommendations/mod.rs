//! Recommendations API client.
//!
//! Unlike the other Cognitive Services, this API authenticates with an
//! `x-api-key` header and has no fixed global endpoint; the caller supplies
//! the base URL of their deployment.

use serde::Deserialize;

use crate::config::ClientConfig;
use crate::core::client::{ApiClient, Credentials};
use crate::errors::ApiError;

/// A trained recommendation model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationModel {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub model_status: Option<String>,
}

/// One recommended item with its relevance score.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedItem {
    pub recommended_item_id: String,
    #[serde(default)]
    pub score: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelList {
    #[serde(default)]
    models: Vec<RecommendationModel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendedItemSet {
    #[serde(default)]
    recommended_items: Vec<RecommendedItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecommendations {
    #[serde(default)]
    recommended_item_set_info: Vec<RecommendedItemSet>,
}

/// Client for the Recommendations API.
#[derive(Debug, Clone)]
pub struct RecommendationsClient {
    api: ApiClient,
}

impl RecommendationsClient {
    /// Create a client against a deployment's base URL with its API key.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self, ApiError> {
        let api = ApiClient::new(endpoint, Credentials::ApiKey(api_key.into()), config)?;
        Ok(Self { api })
    }

    /// List every model in the deployment.
    pub async fn models(&self) -> Result<Vec<RecommendationModel>, ApiError> {
        let list: ModelList = self.api.get("/models").await?.unwrap_or_default();
        Ok(list.models)
    }

    /// Get up to `count` item-to-item recommendations for the seed items.
    pub async fn item_recommendations(
        &self,
        model_id: &str,
        item_ids: &[String],
        count: u32,
    ) -> Result<Vec<RecommendedItem>, ApiError> {
        let items = item_ids.join(",");
        let count = count.to_string();
        let response: Option<ItemRecommendations> = self
            .api
            .get_with_query(
                &format!("/models/{model_id}/recommend/item"),
                &[("itemIds", items.as_str()), ("numberOfResults", &count)],
            )
            .await?;

        Ok(response
            .unwrap_or_default()
            .recommended_item_set_info
            .into_iter()
            .flat_map(|set| set.recommended_items)
            .collect())
    }
}
