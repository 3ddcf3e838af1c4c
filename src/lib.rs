//! Typed async clients for Microsoft Cognitive Services REST APIs.
//!
//! `oxford` wraps the Cognitive Services ("Project Oxford") cloud endpoints in
//! small typed clients. The crate is organized around three pieces of shared
//! infrastructure plus one module per service:
//!
//! - [`core::client`]: a typed REST client that attaches credential headers,
//!   serializes camelCase JSON bodies, and deserializes typed responses.
//! - [`core::operations`]: a poller for long-running server-side operations
//!   (speaker enrollment, identification) that reports progress over a channel.
//! - [`core::providers::azure`]: region endpoint configuration and
//!   authentication, including a background bearer-token refresher.
//!
//! Service wrappers live under [`core`]: Text Analytics, Bing Search, Speaker
//! Recognition, speech synthesis, and Recommendations.
//!
//! # Example
//!
//! ```rust,no_run
//! use oxford::config::ClientConfig;
//! use oxford::core::text_analytics::{DocumentBatch, DocumentInput, TextAnalyticsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), oxford::ApiError> {
//!     let config = ClientConfig::new("your-subscription-key");
//!     let client = TextAnalyticsClient::new(&config)?;
//!
//!     let batch = DocumentBatch::from(vec![DocumentInput::new("1", "I love this!")]);
//!     let response = client.sentiment(&batch).await?;
//!
//!     for document in response.documents {
//!         println!("{}: {:.2}", document.id, document.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod errors;

pub use config::ClientConfig;
pub use core::client::{ApiClient, Credentials};
pub use core::operations::{OperationLocation, OperationPoller, OperationStatus, OperationUpdate};
pub use core::providers::azure::{AzureRegion, TokenAuthenticator, TokenProvider};
pub use errors::{ApiError, ApiResult};
