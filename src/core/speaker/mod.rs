//! Speaker Recognition API clients.
//!
//! Two services share the `spid/v1.0` endpoint family:
//!
//! - **Identification** finds who is speaking among a set of enrolled
//!   profiles. Enrollment and identification are long-running: the service
//!   answers `202 Accepted` with an `Operation-Location` header, and the
//!   caller polls that URL until the operation finishes (see
//!   [`crate::core::operations`]).
//! - **Verification** checks whether one audio sample matches one profile.
//!   Speakers enroll by recording a fixed phrase three times; enrollment and
//!   verification answer synchronously.

mod client;
mod messages;
mod verification;

pub use client::SpeakerIdentificationClient;
pub use messages::{
    CreateProfileResponse, CreateVerificationProfileResponse, EnrollmentResult,
    IdentificationResult, Profile, VerificationEnrollment, VerificationPhrase,
    VerificationProfile, VerificationResult, DEFAULT_LOCALE,
};
pub use verification::SpeakerVerificationClient;
