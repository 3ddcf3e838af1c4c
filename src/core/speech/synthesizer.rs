use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::config::ClientConfig;
use crate::core::providers::azure::{bearer_header, TokenProvider, AUTHORIZATION_HEADER};
use crate::errors::ApiError;

use super::config::{OutputFormat, VoiceSelection};

const SSML_CONTENT_TYPE: &str = "application/ssml+xml";
const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";

/// Client for the speech synthesis (text-to-speech) endpoint.
pub struct SpeechSynthesizer {
    endpoint: String,
    tokens: Arc<dyn TokenProvider>,
    voice: VoiceSelection,
    output_format: OutputFormat,
    http: reqwest::Client,
}

impl std::fmt::Debug for SpeechSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechSynthesizer")
            .field("endpoint", &self.endpoint)
            .field("voice", &self.voice)
            .field("output_format", &self.output_format)
            .finish()
    }
}

impl SpeechSynthesizer {
    /// Create a synthesizer against the configured region's synthesis
    /// endpoint.
    pub fn new(
        config: &ClientConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        Self::with_endpoint(config.region.speech_synthesis_url(), config, tokens)
    }

    /// Create a synthesizer against an explicit URL. Used for tests.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        config: &ClientConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| {
                ApiError::Configuration(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            endpoint: endpoint.into(),
            tokens,
            voice: VoiceSelection::default(),
            output_format: OutputFormat::default(),
            http,
        })
    }

    /// Set the voice used for subsequent synthesis requests.
    pub fn with_voice(mut self, voice: VoiceSelection) -> Self {
        self.voice = voice;
        self
    }

    /// Set the audio output format for subsequent synthesis requests.
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Synthesize `text` into audio in the configured output format.
    ///
    /// # Errors
    ///
    /// [`ApiError::AuthenticationFailed`] when no bearer token is available,
    /// [`ApiError::Network`] on transport failure, and [`ApiError::Status`]
    /// when the service rejects the request.
    pub async fn synthesize(&self, text: &str) -> Result<Bytes, ApiError> {
        let token = self.tokens.token().await?;
        let ssml = build_ssml(&self.voice, text);
        debug!(voice = %self.voice.name, bytes = ssml.len(), "dispatching synthesis request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION_HEADER, bearer_header(&token))
            .header(CONTENT_TYPE, SSML_CONTENT_TYPE)
            .header(OUTPUT_FORMAT_HEADER, self.output_format.as_str())
            .body(ssml)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .bytes()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
}

/// Wrap `text` in the SSML envelope the synthesis endpoint expects.
fn build_ssml(voice: &VoiceSelection, text: &str) -> String {
    format!(
        "<speak version='1.0' xml:lang='{lang}'><voice xml:lang='{lang}' xml:gender='{gender}' name='{name}'>{text}</voice></speak>",
        lang = voice.language,
        gender = voice.gender.as_str(),
        name = voice.name,
        text = escape_xml(text),
    )
}

/// Escape the characters with special meaning in XML character data.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::speech::config::VoiceGender;

    #[test]
    fn test_build_ssml_envelope() {
        let voice = VoiceSelection::new("en-GB", VoiceGender::Male, "TestVoice");
        let ssml = build_ssml(&voice, "Hello world");
        assert_eq!(
            ssml,
            "<speak version='1.0' xml:lang='en-GB'>\
             <voice xml:lang='en-GB' xml:gender='Male' name='TestVoice'>\
             Hello world</voice></speak>"
        );
    }

    #[test]
    fn test_build_ssml_escapes_markup() {
        let ssml = build_ssml(&VoiceSelection::default(), "a < b && b > c");
        assert!(ssml.contains("a &lt; b &amp;&amp; b &gt; c"));
    }

    #[test]
    fn test_escape_xml_passthrough() {
        assert_eq!(escape_xml("plain text"), "plain text");
    }
}
