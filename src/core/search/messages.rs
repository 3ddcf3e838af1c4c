//! Response types for the Bing Search APIs.
//!
//! Trimmed to the fields consumers actually read; the services return far
//! more, and unknown fields are ignored on deserialization.

use serde::Deserialize;

/// Response of a web search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSearchResponse {
    #[serde(rename = "_type", default)]
    pub response_type: Option<String>,
    #[serde(default)]
    pub web_pages: Option<WebPages>,
}

/// The `webPages` answer within a web search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPages {
    #[serde(default)]
    pub total_estimated_matches: Option<u64>,
    #[serde(default)]
    pub value: Vec<WebPage>,
}

/// One web search hit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Response of a news search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSearchResponse {
    #[serde(default)]
    pub total_estimated_matches: Option<u64>,
    #[serde(default)]
    pub value: Vec<NewsArticle>,
}

/// One news article.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub headline: Option<bool>,
}

/// Response of an autosuggest request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutosuggestResponse {
    #[serde(default)]
    pub query_context: Option<QueryContext>,
    #[serde(default)]
    pub suggestion_groups: Vec<SuggestionGroup>,
}

/// Echo of the query the suggestions answer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryContext {
    pub original_query: String,
}

/// A named group of suggestions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionGroup {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub search_suggestions: Vec<SearchSuggestion>,
}

/// One suggested query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestion {
    pub query: String,
    #[serde(default)]
    pub display_text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub search_kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_search_response_parses() {
        let json = r#"{
            "_type": "SearchResponse",
            "webPages": {
                "totalEstimatedMatches": 12400,
                "value": [{
                    "id": "https://api.bing.microsoft.com/#WebPages.0",
                    "name": "Example Domain",
                    "url": "https://example.com/",
                    "displayUrl": "example.com",
                    "snippet": "This domain is for use in examples."
                }]
            }
        }"#;
        let response: WebSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.response_type.as_deref(), Some("SearchResponse"));
        let pages = response.web_pages.unwrap();
        assert_eq!(pages.total_estimated_matches, Some(12400));
        assert_eq!(pages.value[0].name, "Example Domain");
        assert_eq!(pages.value[0].display_url.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_web_search_without_answers() {
        let response: WebSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.web_pages.is_none());
    }

    #[test]
    fn test_news_response_parses() {
        let json = r#"{
            "value": [{
                "name": "Headline of the day",
                "url": "https://news.example.com/1",
                "description": "Something happened.",
                "datePublished": "2018-05-01T12:00:00Z",
                "headline": true
            }]
        }"#;
        let response: NewsSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.value[0].name, "Headline of the day");
        assert_eq!(response.value[0].headline, Some(true));
    }

    #[test]
    fn test_autosuggest_response_parses() {
        let json = r#"{
            "queryContext": { "originalQuery": "rust lan" },
            "suggestionGroups": [{
                "name": "Web",
                "searchSuggestions": [
                    { "query": "rust language", "displayText": "rust language" },
                    { "query": "rust lang book" }
                ]
            }]
        }"#;
        let response: AutosuggestResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.query_context.unwrap().original_query, "rust lan");
        let suggestions = &response.suggestion_groups[0].search_suggestions;
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[1].query, "rust lang book");
        assert!(suggestions[1].display_text.is_none());
    }
}
