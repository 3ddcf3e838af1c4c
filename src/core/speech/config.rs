//! Voice and output format selection for speech synthesis.

/// Gender attribute of the synthesis voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceGender {
    #[default]
    Female,
    Male,
}

impl VoiceGender {
    /// The SSML attribute value for this gender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

/// Audio output format requested via the `X-Microsoft-OutputFormat` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Riff16Khz16BitMonoPcm,
    Raw16Khz16BitMonoPcm,
    Audio16Khz128KBitRateMonoMp3,
    Audio16Khz64KBitRateMonoMp3,
    Audio16Khz32KBitRateMonoMp3,
}

impl OutputFormat {
    /// The header value for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Riff16Khz16BitMonoPcm => "riff-16khz-16bit-mono-pcm",
            Self::Raw16Khz16BitMonoPcm => "raw-16khz-16bit-mono-pcm",
            Self::Audio16Khz128KBitRateMonoMp3 => "audio-16khz-128kbitrate-mono-mp3",
            Self::Audio16Khz64KBitRateMonoMp3 => "audio-16khz-64kbitrate-mono-mp3",
            Self::Audio16Khz32KBitRateMonoMp3 => "audio-16khz-32kbitrate-mono-mp3",
        }
    }
}

/// Voice used to render the SSML envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSelection {
    /// BCP-47 language tag, for example `en-US`
    pub language: String,
    pub gender: VoiceGender,
    /// Full service voice name
    pub name: String,
}

impl VoiceSelection {
    pub fn new(
        language: impl Into<String>,
        gender: VoiceGender,
        name: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            gender,
            name: name.into(),
        }
    }
}

impl Default for VoiceSelection {
    fn default() -> Self {
        Self::new(
            "en-US",
            VoiceGender::Female,
            "Microsoft Server Speech Text to Speech Voice (en-US, ZiraRUS)",
        )
    }
}
