//! End-to-end tests for the Speaker Recognition client, including the
//! accept-then-poll flow for enrollment and identification.

mod common;

use std::time::Duration;

use bytes::Bytes;
use oxford::core::speaker::SpeakerIdentificationClient;
use oxford::{ClientConfig, OperationStatus};

use common::{empty_response, json_response, response_with_headers, StubServer};

fn client_for(server: &StubServer) -> SpeakerIdentificationClient {
    let config = ClientConfig::new("integration-test-key")
        .with_poll_interval(Duration::from_millis(10))
        .with_poll_max_attempts(10);
    SpeakerIdentificationClient::with_endpoint(server.url(), &config).unwrap()
}

#[tokio::test]
async fn create_profile_returns_new_id() {
    let server = StubServer::spawn(vec![json_response(
        200,
        r#"{"identificationProfileId":"111f427c-3791-468f-b709-fcef7660fff9"}"#,
    )])
    .await;
    let client = client_for(&server);

    let created = client.create_profile().await.unwrap();
    assert_eq!(
        created.identification_profile_id,
        "111f427c-3791-468f-b709-fcef7660fff9"
    );

    let requests = server.requests().await;
    assert!(requests[0].starts_with("POST /identificationProfiles"));
    assert!(requests[0].contains(r#"{"locale":"en-US"}"#));
}

#[tokio::test]
async fn list_profiles_with_empty_body_is_empty() {
    let server = StubServer::spawn(vec![empty_response(200)]).await;
    let client = client_for(&server);

    let profiles = client.list_profiles().await.unwrap();
    assert!(profiles.is_empty());
}

#[tokio::test]
async fn enroll_then_track_to_completion() {
    let server = StubServer::spawn(vec![
        response_with_headers(
            202,
            &[("Operation-Location", "{{base}}/operations/enroll-1")],
            "",
        ),
        json_response(200, r#"{"status":"running"}"#),
        json_response(
            200,
            r#"{"status":"succeeded","processingResult":{"enrollmentStatus":"Enrolled","remainingEnrollmentSpeechTime":0.0,"speechTime":31.5}}"#,
        ),
    ])
    .await;
    let client = client_for(&server);

    let audio = Bytes::from_static(&[0u8; 32]);
    let location = client.enroll("profile-1", audio, true).await.unwrap();
    assert_eq!(location.as_str(), server.url_for("/operations/enroll-1"));

    let terminal = client.track_enrollment(&location, None).await.unwrap();
    assert_eq!(terminal.status, OperationStatus::Succeeded);
    let result = terminal.processing_result.unwrap();
    assert_eq!(result.enrollment_status.as_deref(), Some("Enrolled"));

    let requests = server.requests().await;
    assert!(requests[0].starts_with("POST /identificationProfiles/profile-1/enroll?shortAudio=true"));
    assert!(requests[0]
        .to_lowercase()
        .contains("content-type: application/octet-stream"));
}

#[tokio::test]
async fn identify_builds_candidate_list() {
    let server = StubServer::spawn(vec![response_with_headers(
        202,
        &[("Operation-Location", "{{base}}/operations/identify-1")],
        "",
    )])
    .await;
    let client = client_for(&server);

    let audio = Bytes::from_static(&[0u8; 32]);
    let candidates = vec!["profile-1".to_string(), "profile-2".to_string()];
    let _location = client.identify(audio, &candidates, false).await.unwrap();

    let requests = server.requests().await;
    assert!(requests[0]
        .starts_with("POST /identify?identificationProfileIds=profile-1,profile-2&shortAudio=false"));
}

#[tokio::test]
async fn delete_profile_succeeds_on_ok() {
    let server = StubServer::spawn(vec![empty_response(200)]).await;
    let client = client_for(&server);

    client.delete_profile("profile-1").await.unwrap();

    let requests = server.requests().await;
    assert!(requests[0].starts_with("DELETE /identificationProfiles/profile-1"));
}
