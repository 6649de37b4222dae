// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the MGit API client using wiremock.
//!
//! Covers:
//! - Bearer authentication and User-Agent
//! - Repository info decoding
//! - Raw metadata bytes
//! - Error handling (HTTP errors, bad bodies, timeouts)

use std::time::Duration;

use mgit_bridge::config::types::ServerConfig;
use mgit_bridge::error::{MgitError, NetworkError};
use mgit_bridge::net::{MgitApi, user_agent};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INFO_PATH: &str = "/api/mgit/repos/abc123/info";
const METADATA_PATH: &str = "/api/mgit/repos/abc123/metadata";

fn api(token: &str) -> MgitApi {
    MgitApi::new(token, &ServerConfig::default())
}

fn network_error(err: MgitError) -> NetworkError {
    match err {
        MgitError::Network(e) => *e,
        other => panic!("expected network error, got {other:?}"),
    }
}

// =============================================================================
// repository_info
// =============================================================================

#[tokio::test]
async fn test_repository_info_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INFO_PATH))
        .and(header("authorization", "Bearer tok-123"))
        .and(header("user-agent", user_agent().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id":"abc123","name":"notes","access":"admin","extra":"ignored"}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}{INFO_PATH}", mock_server.uri());
    let info = api("tok-123").repository_info(&url).await.unwrap();

    assert_eq!(info.id, "abc123");
    assert_eq!(info.name, "notes");
    assert_eq!(info.access, "admin");
}

#[tokio::test]
async fn test_repository_info_http_error() {
    for status in [401u16, 404, 500] {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(INFO_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("denied\n"))
            .mount(&mock_server)
            .await;

        let url = format!("{}{INFO_PATH}", mock_server.uri());
        let err = network_error(api("t").repository_info(&url).await.unwrap_err());

        match err {
            NetworkError::HttpError {
                status: got,
                url: err_url,
                body,
            } => {
                assert_eq!(got, status);
                assert_eq!(err_url, url);
                assert_eq!(body, "denied");
            }
            other => panic!("expected HttpError, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_repository_info_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INFO_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let url = format!("{}{INFO_PATH}", mock_server.uri());
    let err = network_error(api("t").repository_info(&url).await.unwrap_err());
    assert!(
        matches!(err, NetworkError::InvalidResponse { url: ref u, .. } if *u == url),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_request_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(INFO_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let server = ServerConfig {
        api_base: None,
        timeout_secs: 1,
    };
    let url = format!("{}{INFO_PATH}", mock_server.uri());
    let err = network_error(
        MgitApi::new("t", &server)
            .repository_info(&url)
            .await
            .unwrap_err(),
    );
    assert!(matches!(err, NetworkError::Reqwest(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused() {
    // Port 1 (tcpmux) is not served on test hosts.
    let url = format!("http://127.0.0.1:1{INFO_PATH}");

    let err = network_error(api("t").repository_info(&url).await.unwrap_err());
    assert!(matches!(err, NetworkError::Reqwest(_)), "got {err:?}");
}

// =============================================================================
// metadata
// =============================================================================

#[tokio::test]
async fn test_metadata_returns_raw_bytes() {
    let mock_server = MockServer::start().await;
    let body = b"[ {\"git_hash\":\"a\",  \"mgit_hash\":\"b\"} ]\n".to_vec();

    Mock::given(method("GET"))
        .and(path(METADATA_PATH))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&mock_server)
        .await;

    let url = format!("{}{METADATA_PATH}", mock_server.uri());
    assert_eq!(api("tok").metadata(&url).await.unwrap(), body);
}

#[test]
fn test_api_debug_hides_token() {
    let debug = format!("{:?}", api("s3cr3t"));
    assert!(!debug.contains("s3cr3t"));
}
