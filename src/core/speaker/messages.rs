//! Request and response types for the Speaker Recognition API.

use serde::{Deserialize, Serialize};

/// Locale used when none is given at profile creation.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Body of a create-profile request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProfileRequest {
    pub locale: String,
}

/// Response of a create-profile request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileResponse {
    /// Identifier of the newly created profile
    pub identification_profile_id: String,
}

/// A speaker profile as returned by the profile endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub identification_profile_id: String,
    pub locale: String,
    /// Seconds of speech enrolled so far
    #[serde(default)]
    pub enrollment_speech_time: f64,
    /// Seconds of speech still required before the profile is usable
    #[serde(default)]
    pub remaining_enrollment_speech_time: f64,
    /// `Enrolling`, `Training`, or `Enrolled`
    #[serde(default)]
    pub enrollment_status: Option<String>,
    #[serde(default)]
    pub created_date_time: Option<String>,
    #[serde(default)]
    pub last_action_date_time: Option<String>,
}

/// Result payload of a finished enrollment operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResult {
    /// `Enrolling`, `Training`, or `Enrolled`
    #[serde(default)]
    pub enrollment_status: Option<String>,
    #[serde(default)]
    pub remaining_enrollment_speech_time: Option<f64>,
    #[serde(default)]
    pub speech_time: Option<f64>,
}

/// Result payload of a finished identification operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationResult {
    /// Identifier of the matched profile; the all-zero GUID means no match
    pub identified_profile_id: String,
    /// `High`, `Normal`, or `Low`
    #[serde(default)]
    pub confidence: Option<String>,
}

/// Response of a create-verification-profile request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerificationProfileResponse {
    /// Identifier of the newly created profile
    pub verification_profile_id: String,
}

/// A verification profile as returned by the profile endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationProfile {
    pub verification_profile_id: String,
    pub locale: String,
    /// Number of enrollments completed so far
    #[serde(default)]
    pub enrollments_count: u32,
    /// Enrollments still required before the profile is usable
    #[serde(default)]
    pub remaining_enrollments_count: u32,
    /// `Enrolling`, `Training`, or `Enrolled`
    #[serde(default)]
    pub enrollment_status: Option<String>,
    #[serde(default)]
    pub created_date_time: Option<String>,
    #[serde(default)]
    pub last_action_date_time: Option<String>,
}

/// One phrase a speaker may record for verification enrollment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPhrase {
    pub phrase: String,
}

/// Response of a verification enrollment. Unlike identification, verification
/// enrollment is synchronous.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationEnrollment {
    /// `Enrolling`, `Training`, or `Enrolled`
    pub enrollment_status: String,
    #[serde(default)]
    pub enrollments_count: u32,
    #[serde(default)]
    pub remaining_enrollments: u32,
    /// The phrase recognized in the enrollment audio
    #[serde(default)]
    pub phrase: Option<String>,
}

/// Result of verifying a speaker against a profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// `Accept` or `Reject`
    pub result: String,
    /// `High`, `Normal`, or `Low`
    #[serde(default)]
    pub confidence: Option<String>,
    /// The phrase recognized in the verification audio
    #[serde(default)]
    pub phrase: Option<String>,
}

impl VerificationResult {
    /// Whether the service accepted the speaker as matching the profile.
    pub fn is_accepted(&self) -> bool {
        self.result.eq_ignore_ascii_case("accept")
    }
}
