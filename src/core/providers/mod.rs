//! Provider infrastructure for external cloud services.
//!
//! Generic infrastructure shared by every service wrapper in this crate:
//! regional endpoint configuration and authentication. Kept separate from the
//! service modules so new services can reuse it without duplication.

pub mod azure;

pub use azure::{
    bearer_header, AzureRegion, Credentials, TokenAuthenticator, TokenProvider,
    API_KEY_HEADER, AUTHORIZATION_HEADER, SUBSCRIPTION_KEY_HEADER,
};
