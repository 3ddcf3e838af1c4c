//! Text Analytics API client.
//!
//! Wraps the sentiment, key phrase, and language detection operations. All
//! three take the same batched document input and return per-document results
//! alongside per-document errors.

mod client;
mod messages;

pub use client::TextAnalyticsClient;
pub use messages::{
    DetectedLanguage, DocumentBatch, DocumentError, DocumentInput, KeyPhrasesDocument,
    KeyPhrasesResponse, LanguageDocument, LanguageResponse, SentimentResponse, SentimentScore,
};
