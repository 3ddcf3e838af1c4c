use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tokio::sync::mpsc;
use tracing::debug;

use crate::config::ClientConfig;
use crate::core::client::{ApiClient, Credentials};
use crate::core::operations::{
    operation_location, OperationLocation, OperationPoller, OperationUpdate,
};
use crate::errors::ApiError;

use super::messages::{
    CreateProfileRequest, CreateProfileResponse, EnrollmentResult, IdentificationResult, Profile,
    DEFAULT_LOCALE,
};

const AUDIO_CONTENT_TYPE: &str = "application/octet-stream";

/// Client for the Speaker Recognition identification API.
///
/// Enrollment and identification return an [`OperationLocation`]; use
/// [`track_enrollment`](Self::track_enrollment) and
/// [`track_identification`](Self::track_identification) to follow them to
/// completion, optionally receiving every intermediate status on a channel.
#[derive(Debug, Clone)]
pub struct SpeakerIdentificationClient {
    api: ApiClient,
    poller: OperationPoller,
}

impl SpeakerIdentificationClient {
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
        Ok(Self {
            api,
            poller: OperationPoller::from_config(config),
        })
    }

    /// Create a new speaker profile in the default locale (`en-US`).
    pub async fn create_profile(&self) -> Result<CreateProfileResponse, ApiError> {
        self.create_profile_with_locale(DEFAULT_LOCALE).await
    }

    /// Create a new speaker profile in the given locale.
    pub async fn create_profile_with_locale(
        &self,
        locale: &str,
    ) -> Result<CreateProfileResponse, ApiError> {
        let request = CreateProfileRequest {
            locale: locale.to_string(),
        };
        self.api
            .post("/identificationProfiles", &request)
            .await?
            .ok_or_else(|| ApiError::Decode("create profile response was empty".to_string()))
    }

    /// List every speaker profile on the subscription.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        Ok(self
            .api
            .get("/identificationProfiles")
            .await?
            .unwrap_or_default())
    }

    /// Fetch a single profile.
    pub async fn get_profile(&self, profile_id: &str) -> Result<Profile, ApiError> {
        self.api
            .get(&format!("/identificationProfiles/{profile_id}"))
            .await?
            .ok_or_else(|| {
                ApiError::Decode(format!("no speaker profile found for ID {profile_id}"))
            })
    }

    /// Delete a profile and all of its enrollments.
    pub async fn delete_profile(&self, profile_id: &str) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/identificationProfiles/{profile_id}"))
            .await
    }

    /// Discard a profile's enrollments, keeping the profile itself.
    pub async fn reset_enrollments(&self, profile_id: &str) -> Result<(), ApiError> {
        let path = format!("/identificationProfiles/{profile_id}/reset");
        self.api
            .dispatch(self.api.builder(Method::POST, &path))
            .await?;
        Ok(())
    }

    /// Enroll an audio sample for a profile.
    ///
    /// `short_audio` relaxes the minimum speech length requirement. Returns
    /// the handle of the enrollment operation the service started.
    pub async fn enroll(
        &self,
        profile_id: &str,
        audio: Bytes,
        short_audio: bool,
    ) -> Result<OperationLocation, ApiError> {
        let path =
            format!("/identificationProfiles/{profile_id}/enroll?shortAudio={short_audio}");
        let response = self
            .api
            .dispatch(
                self.api
                    .builder(Method::POST, &path)
                    .header(CONTENT_TYPE, AUDIO_CONTENT_TYPE)
                    .body(audio),
            )
            .await?;
        let location = operation_location(&response)?;
        debug!(profile_id, location = %location, "enrollment started");
        Ok(location)
    }

    /// Identify the speaker in an audio sample among candidate profiles.
    ///
    /// Returns the handle of the identification operation the service
    /// started.
    pub async fn identify(
        &self,
        audio: Bytes,
        candidate_profile_ids: &[String],
        short_audio: bool,
    ) -> Result<OperationLocation, ApiError> {
        let candidates = candidate_profile_ids.join(",");
        let path =
            format!("/identify?identificationProfileIds={candidates}&shortAudio={short_audio}");
        let response = self
            .api
            .dispatch(
                self.api
                    .builder(Method::POST, &path)
                    .header(CONTENT_TYPE, AUDIO_CONTENT_TYPE)
                    .body(audio),
            )
            .await?;
        let location = operation_location(&response)?;
        debug!(location = %location, "identification started");
        Ok(location)
    }

    /// Follow an enrollment operation to completion.
    ///
    /// Every observed status, including the terminal one, is forwarded to
    /// `updates` when a channel is supplied.
    pub async fn track_enrollment(
        &self,
        location: &OperationLocation,
        updates: Option<&mpsc::Sender<OperationUpdate<EnrollmentResult>>>,
    ) -> Result<OperationUpdate<EnrollmentResult>, ApiError> {
        self.poller.poll(&self.api, location, updates).await
    }

    /// Follow an identification operation to completion.
    pub async fn track_identification(
        &self,
        location: &OperationLocation,
        updates: Option<&mpsc::Sender<OperationUpdate<IdentificationResult>>>,
    ) -> Result<OperationUpdate<IdentificationResult>, ApiError> {
        self.poller.poll(&self.api, location, updates).await
    }
}
