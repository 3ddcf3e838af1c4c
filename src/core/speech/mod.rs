//! Speech synthesis (text-to-speech) client.
//!
//! The synthesis endpoint accepts only bearer tokens, so the synthesizer
//! takes a [`TokenProvider`](crate::TokenProvider) (normally a
//! [`TokenAuthenticator`](crate::TokenAuthenticator)) and reads a fresh
//! token for every request. The text is wrapped in an SSML envelope and
//! POSTed with `Content-Type: application/ssml+xml`; the response body is
//! the synthesized audio in the requested output format.

mod config;
mod synthesizer;

pub use config::{OutputFormat, VoiceGender, VoiceSelection};
pub use synthesizer::SpeechSynthesizer;
