//! Request and response types for the Text Analytics API.
//!
//! Passive records mirroring the service's JSON schema. Field names
//! serialize as camelCase to match the documented wire format.

use serde::{Deserialize, Serialize};

/// One document submitted for analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInput {
    /// ISO 639-1 language hint; omitted when not set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Caller-chosen identifier echoed back in results
    pub id: String,
    /// The text to analyze
    pub text: String,
}

impl DocumentInput {
    /// Create a document without a language hint.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: None,
            id: id.into(),
            text: text.into(),
        }
    }

    /// Set the language hint.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// A batch of documents; every operation takes one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentBatch {
    pub documents: Vec<DocumentInput>,
}

impl From<Vec<DocumentInput>> for DocumentBatch {
    fn from(documents: Vec<DocumentInput>) -> Self {
        Self { documents }
    }
}

/// Per-document failure reported inside an otherwise successful response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentError {
    #[serde(default)]
    pub id: Option<String>,
    pub message: String,
}

/// Sentiment score for one document, in `[0, 1]` where higher is more
/// positive.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScore {
    pub id: String,
    pub score: f64,
}

/// Response of the sentiment operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResponse {
    #[serde(default)]
    pub documents: Vec<SentimentScore>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
}

/// One language candidate detected for a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLanguage {
    pub name: String,
    pub iso6391_name: String,
    pub score: f64,
}

/// Detected languages for one document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDocument {
    pub id: String,
    #[serde(default)]
    pub detected_languages: Vec<DetectedLanguage>,
}

/// Response of the language detection operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageResponse {
    #[serde(default)]
    pub documents: Vec<LanguageDocument>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
}

/// Key phrases extracted from one document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPhrasesDocument {
    pub id: String,
    #[serde(default)]
    pub key_phrases: Vec<String>,
}

/// Response of the key phrase operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPhrasesResponse {
    #[serde(default)]
    pub documents: Vec<KeyPhrasesDocument>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
}
