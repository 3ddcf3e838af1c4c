use bytes::Bytes;
use tracing::debug;

use crate::config::ClientConfig;
use crate::core::client::{ApiClient, Credentials};
use crate::errors::ApiError;

use super::messages::{
    CreateProfileRequest, CreateVerificationProfileResponse, VerificationEnrollment,
    VerificationPhrase, VerificationProfile, VerificationResult, DEFAULT_LOCALE,
};

const AUDIO_CONTENT_TYPE: &str = "application/octet-stream";

/// Client for the Speaker Recognition verification API.
///
/// Verification matches one audio sample against one profile. A profile is
/// enrolled by recording one of the service's fixed verification phrases
/// (see [`phrases`](Self::phrases)) three times; enrollment and verification
/// answer synchronously, unlike the identification API's accept-then-poll
/// operations.
#[derive(Debug, Clone)]
pub struct SpeakerVerificationClient {
    api: ApiClient,
}

impl SpeakerVerificationClient {
    /// Create a client against the configured region's endpoint.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_endpoint(config.region.speaker_recognition_url(), config)
    }

    /// Create a client against an explicit base URL. Used for tests.
    pub fn with_endpoint(endpoint: impl Into<String>, config: &ClientConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(
            endpoint,
            Credentials::SubscriptionKey(config.subscription_key.clone()),
            config,
        )?;
        Ok(Self { api })
    }

    /// Create a new verification profile in the default locale (`en-US`).
    pub async fn create_profile(&self) -> Result<CreateVerificationProfileResponse, ApiError> {
        self.create_profile_with_locale(DEFAULT_LOCALE).await
    }

    /// Create a new verification profile in the given locale.
    pub async fn create_profile_with_locale(
        &self,
        locale: &str,
    ) -> Result<CreateVerificationProfileResponse, ApiError> {
        let request = CreateProfileRequest {
            locale: locale.to_string(),
        };
        self.api
            .post("/verificationProfiles", &request)
            .await?
            .ok_or_else(|| ApiError::Decode("create profile response was empty".to_string()))
    }

    /// List every verification profile on the subscription.
    pub async fn list_profiles(&self) -> Result<Vec<VerificationProfile>, ApiError> {
        Ok(self
            .api
            .get("/verificationProfiles")
            .await?
            .unwrap_or_default())
    }

    /// Fetch a single profile.
    pub async fn get_profile(&self, profile_id: &str) -> Result<VerificationProfile, ApiError> {
        self.api
            .get(&format!("/verificationProfiles/{profile_id}"))
            .await?
            .ok_or_else(|| {
                ApiError::Decode(format!("no speaker profile found for ID {profile_id}"))
            })
    }

    /// Delete a profile and all of its enrollments.
    pub async fn delete_profile(&self, profile_id: &str) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/verificationProfiles/{profile_id}"))
            .await
    }

    /// Discard a profile's enrollments, keeping the profile itself.
    pub async fn reset_enrollments(&self, profile_id: &str) -> Result<(), ApiError> {
        let path = format!("/verificationProfiles/{profile_id}/reset");
        self.api
            .dispatch(self.api.builder(reqwest::Method::POST, &path))
            .await?;
        Ok(())
    }

    /// List the phrases a speaker may record for enrollment, in the default
    /// locale.
    pub async fn phrases(&self) -> Result<Vec<String>, ApiError> {
        self.phrases_for_locale(DEFAULT_LOCALE).await
    }

    /// List the enrollment phrases for the given locale.
    pub async fn phrases_for_locale(&self, locale: &str) -> Result<Vec<String>, ApiError> {
        let phrases: Vec<VerificationPhrase> = self
            .api
            .get_with_query("/verificationPhrases", &[("locale", locale)])
            .await?
            .unwrap_or_default();
        Ok(phrases.into_iter().map(|p| p.phrase).collect())
    }

    /// Enroll a recorded phrase for a profile.
    ///
    /// The profile is usable once [`VerificationEnrollment::remaining_enrollments`]
    /// reaches zero.
    pub async fn enroll(
        &self,
        profile_id: &str,
        audio: Bytes,
    ) -> Result<VerificationEnrollment, ApiError> {
        let path = format!("/verificationProfiles/{profile_id}/enroll");
        let enrollment: VerificationEnrollment = self
            .api
            .post_bytes(&path, AUDIO_CONTENT_TYPE, audio)
            .await?
            .ok_or_else(|| ApiError::Decode("enrollment response was empty".to_string()))?;
        debug!(
            profile_id,
            status = %enrollment.enrollment_status,
            remaining = enrollment.remaining_enrollments,
            "verification enrollment recorded"
        );
        Ok(enrollment)
    }

    /// Verify that the speaker in an audio sample matches a profile.
    pub async fn verify(
        &self,
        profile_id: &str,
        audio: Bytes,
    ) -> Result<VerificationResult, ApiError> {
        let path = format!("/verify?verificationProfileId={profile_id}");
        let result: VerificationResult = self
            .api
            .post_bytes(&path, AUDIO_CONTENT_TYPE, audio)
            .await?
            .ok_or_else(|| ApiError::Decode("verification response was empty".to_string()))?;
        debug!(profile_id, result = %result.result, "speaker verification completed");
        Ok(result)
    }
}
