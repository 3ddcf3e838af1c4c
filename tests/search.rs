//! End-to-end tests for the Bing Search client.

mod common;

use oxford::core::search::{BingSearchClient, SafeSearch};
use oxford::ClientConfig;

use common::{json_response, StubServer};

fn client_for(server: &StubServer) -> BingSearchClient {
    let config = ClientConfig::new("integration-test-key");
    BingSearchClient::with_endpoint(server.url(), &config).unwrap()
}

#[tokio::test]
async fn web_search_builds_query_and_parses_pages() {
    let server = StubServer::spawn(vec![json_response(
        200,
        r#"{
            "_type": "SearchResponse",
            "webPages": {
                "totalEstimatedMatches": 2,
                "value": [
                    {
                        "id": "1",
                        "name": "Rust Programming Language",
                        "url": "https://www.rust-lang.org/",
                        "displayUrl": "rust-lang.org",
                        "snippet": "A language empowering everyone."
                    }
                ]
            }
        }"#,
    )])
    .await;
    let client = client_for(&server).with_safe_search(SafeSearch::Strict);

    let response = client.web_search("rust language", 10).await.unwrap();
    let pages = response.web_pages.unwrap();
    assert_eq!(pages.total_estimated_matches, Some(2));
    assert_eq!(pages.value[0].name, "Rust Programming Language");

    let requests = server.requests().await;
    assert!(requests[0].starts_with("GET /search?"));
    assert!(requests[0].contains("q=rust+language") || requests[0].contains("q=rust%20language"));
    assert!(requests[0].contains("count=10"));
    assert!(requests[0].contains("safeSearch=Strict"));
}

#[tokio::test]
async fn autosuggest_parses_suggestion_groups() {
    let server = StubServer::spawn(vec![json_response(
        200,
        r#"{
            "queryContext": {"originalQuery": "rus"},
            "suggestionGroups": [{
                "name": "Web",
                "searchSuggestions": [{
                    "query": "rust",
                    "displayText": "rust",
                    "url": "https://www.bing.com/search?q=rust",
                    "searchKind": "WebSearch"
                }]
            }]
        }"#,
    )])
    .await;
    let client = client_for(&server);

    let response = client.autosuggest("rus").await.unwrap();
    assert_eq!(response.suggestion_groups[0].search_suggestions[0].query, "rust");
}
