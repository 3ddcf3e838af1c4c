//! Bing Search API client.
//!
//! Unlike the other services, Bing Search is served from a single global
//! endpoint rather than a regional one. All operations are GETs with the
//! query carried in URL parameters; the subscription key travels in the
//! usual `Ocp-Apim-Subscription-Key` header.

mod client;
mod messages;

pub use client::{BingSearchClient, SafeSearch, BING_API_ENDPOINT};
pub use messages::{
    AutosuggestResponse, NewsArticle, NewsSearchResponse, QueryContext, SearchSuggestion,
    SuggestionGroup, WebPage, WebPages, WebSearchResponse,
};
