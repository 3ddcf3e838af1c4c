//! Microsoft Azure Cognitive Services provider infrastructure.
//!
//! Shared infrastructure for the Cognitive Services REST APIs:
//!
//! - **region**: regional endpoint configuration for every service this
//!   crate wraps
//! - **auth**: credential header constants and the [`Credentials`] type
//! - **token**: bearer token acquisition with background renewal
//!
//! # Authentication
//!
//! Cognitive Services supports two authentication methods:
//!
//! 1. **Subscription key**: the key is sent as-is in the
//!    `Ocp-Apim-Subscription-Key` header (the Recommendations API uses
//!    `x-api-key` instead). Simplest for server-side use.
//! 2. **Bearer token**: the subscription key is exchanged for a short-lived
//!    access token (valid for 10 minutes) at the regional token endpoint and
//!    sent as `Authorization: Bearer {token}`. [`TokenAuthenticator`] keeps
//!    such a token fresh for the lifetime of the process.

pub mod auth;
pub mod region;
pub mod token;

pub use auth::{
    bearer_header, Credentials, API_KEY_HEADER, AUTHORIZATION_HEADER, SUBSCRIPTION_KEY_HEADER,
};
pub use region::AzureRegion;
pub use token::{TokenAuthenticator, TokenProvider};
