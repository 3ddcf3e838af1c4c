//! Long-running operation tracking.
//!
//! Some Cognitive Services calls (speaker enrollment, identification) return
//! `202 Accepted` with an `Operation-Location` header instead of a result.
//! The caller polls that URL until the operation reaches a terminal status.
//!
//! [`OperationPoller`] drives that loop: it checks the status on a fixed
//! interval, forwards every observed status to an optional [`mpsc`] channel,
//! and returns the first non-running report it sees. The loop is bounded by a
//! maximum attempt count so a misbehaving server cannot hang the caller
//! forever.

use std::time::Duration;

use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::debug;

use crate::config::ClientConfig;
use crate::core::client::ApiClient;
use crate::errors::ApiError;

/// Opaque handle to a server-side asynchronous operation.
///
/// Wraps the absolute status URL from the `Operation-Location` response
/// header. Owned by the caller until polling completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationLocation(String);

impl OperationLocation {
    /// Wrap a status URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The status URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OperationLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the operation handle from a `202 Accepted` response.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the header is missing or not valid text.
pub fn operation_location(response: &reqwest::Response) -> Result<OperationLocation, ApiError> {
    let value = response
        .headers()
        .get("Operation-Location")
        .ok_or_else(|| ApiError::Decode("response is missing the Operation-Location header".to_string()))?;
    let url = value
        .to_str()
        .map_err(|err| ApiError::Decode(format!("invalid Operation-Location header: {err}")))?;
    Ok(OperationLocation::new(url))
}

/// Status of a server-side operation, matching the wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    /// Queued, not yet picked up
    NotStarted,
    /// In progress; the only status that keeps the poll loop going
    Running,
    /// Finished successfully; the result payload is attached
    Succeeded,
    /// Finished with an error; the message field explains why
    Failed,
}

impl OperationStatus {
    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "notstarted",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed state of an operation, intermediate or final.
///
/// `T` is the operation's result payload type; it is attached once the
/// operation succeeds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct OperationUpdate<T> {
    /// Current status
    pub status: OperationStatus,
    /// Service-provided detail, usually set on failure
    #[serde(default)]
    pub message: Option<String>,
    /// Result payload, present once the operation succeeded
    #[serde(default)]
    pub processing_result: Option<T>,
}

/// Polls an operation's status URL to completion.
#[derive(Debug, Clone)]
pub struct OperationPoller {
    interval: Duration,
    max_attempts: u32,
}

impl OperationPoller {
    /// Create a poller with an explicit interval and attempt bound.
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Create a poller from the shared client configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.poll_interval, config.poll_max_attempts)
    }

    /// Poll `location` until the first non-running status.
    ///
    /// Every observed status, including the terminal one, is forwarded to
    /// `updates` when a channel is supplied; a closed channel does not stop
    /// the poll. The terminal report is also returned, exactly once.
    ///
    /// # Errors
    ///
    /// [`ApiError::OperationTimedOut`] when the operation is still running
    /// after `max_attempts` checks; [`ApiError::Decode`] when a status
    /// response has no body; any [`ApiClient`] error from the status request
    /// itself.
    pub async fn poll<T>(
        &self,
        client: &ApiClient,
        location: &OperationLocation,
        updates: Option<&mpsc::Sender<OperationUpdate<T>>>,
    ) -> Result<OperationUpdate<T>, ApiError>
    where
        T: serde::de::DeserializeOwned + Clone + Send,
    {
        for attempt in 1..=self.max_attempts {
            let report: OperationUpdate<T> = client
                .get_url(location.as_str())
                .await?
                .ok_or_else(|| ApiError::Decode("operation status response was empty".to_string()))?;

            if report.status != OperationStatus::Running {
                debug!(status = %report.status, attempt, "operation reached a terminal status");
                if let Some(tx) = updates {
                    let _ = tx.send(report.clone()).await;
                }
                return Ok(report);
            }

            debug!(attempt, "operation still running");
            if let Some(tx) = updates {
                let _ = tx.send(report).await;
            }
            tokio::time::sleep(self.interval).await;
        }

        Err(ApiError::OperationTimedOut(self.max_attempts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        let cases = vec![
            ("\"notstarted\"", OperationStatus::NotStarted),
            ("\"running\"", OperationStatus::Running),
            ("\"succeeded\"", OperationStatus::Succeeded),
            ("\"failed\"", OperationStatus::Failed),
        ];
        for (wire, expected) in cases {
            let parsed: OperationStatus = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, expected);
            assert_eq!(serde_json::to_string(&expected).unwrap(), wire);
        }
    }

    #[test]
    fn test_update_deserializes_result_payload() {
        #[derive(Debug, Clone, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Payload {
            identified_profile_id: String,
        }

        let json = r#"{
            "status": "succeeded",
            "createdDateTime": "2017-01-01T00:00:00Z",
            "processingResult": { "identifiedProfileId": "abc-123" }
        }"#;
        let update: OperationUpdate<Payload> = serde_json::from_str(json).unwrap();
        assert_eq!(update.status, OperationStatus::Succeeded);
        assert!(update.message.is_none());
        assert_eq!(update.processing_result.unwrap().identified_profile_id, "abc-123");
    }

    #[test]
    fn test_update_without_result() {
        let json = r#"{ "status": "running" }"#;
        let update: OperationUpdate<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(update.status, OperationStatus::Running);
        assert!(update.processing_result.is_none());
    }

    #[test]
    fn test_failed_update_carries_message() {
        let json = r#"{ "status": "failed", "message": "audio too short" }"#;
        let update: OperationUpdate<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(update.status, OperationStatus::Failed);
        assert_eq!(update.message.as_deref(), Some("audio too short"));
    }

    #[test]
    fn test_operation_location_display() {
        let location = OperationLocation::new("https://example.test/operations/1");
        assert_eq!(location.to_string(), "https://example.test/operations/1");
        assert_eq!(location.as_str(), "https://example.test/operations/1");
    }
}
