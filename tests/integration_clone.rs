// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end clone tests.
//!
//! The git side is a local repository served over `file://`; the MGit API
//! side is a wiremock server reached through `server.api_base`.

use std::fs;
use std::path::Path;
use std::process::Command;

use mgit_bridge::bridge::clone_with_config;
use mgit_bridge::config::Config;
use mgit_bridge::config::types::GitBackendKind;
use mgit_bridge::mgit::sidecar::SidecarLayout;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPO_ID: &str = "abc123";
const INFO_BODY: &str = r#"{"id":"abc123","name":"notes","access":"admin"}"#;
const METADATA_BODY: &[u8] =
    b"[{\"git_hash\":\"0a1b\",\"mgit_hash\":\"9f8e\"},\n {\"git_hash\":\"2c3d\",\"mgit_hash\":\"7a6b\"}]";

struct Fixture {
    temp: TempDir,
    server: MockServer,
}

impl Fixture {
    async fn new() -> Self {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let source = temp.path().join(REPO_ID);
        fs::create_dir(&source).unwrap();
        init_source_repo(&source);
        Self {
            temp,
            server: MockServer::start().await,
        }
    }

    fn repo_url(&self) -> String {
        format!("file://{}", self.temp.path().join(REPO_ID).display())
    }

    fn dest(&self, name: &str) -> String {
        self.temp.path().join(name).display().to_string()
    }

    fn config(&self, backend: GitBackendKind) -> Config {
        Config::parse(&format!(
            "[server]\napi_base = \"{}\"\ntimeout_secs = 10\n\n[git]\nbackend = \"{backend}\"\n",
            self.server.uri()
        ))
        .expect("valid test config")
    }

    async fn mount(&self, leaf: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/api/mgit/repos/{REPO_ID}/{leaf}")))
            .and(header("authorization", "Bearer tok"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }
}

fn init_source_repo(dir: &Path) {
    let git = |args: &[&str]| {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("GIT_AUTHOR_NAME", "Test")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .status()
            .expect("git must be installed");
        assert!(status.success(), "git {args:?} failed");
    };
    git(&["init", "--quiet"]);
    fs::write(dir.join("notes.md"), "hello\n").unwrap();
    git(&["add", "notes.md"]);
    git(&["commit", "-m", "Initial commit", "--quiet"]);
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn clone_writes_checkout_and_sidecar() {
    let fx = Fixture::new().await;
    fx.mount("info", ResponseTemplate::new(200).set_body_string(INFO_BODY))
        .await;
    fx.mount(
        "metadata",
        ResponseTemplate::new(200).set_body_bytes(METADATA_BODY.to_vec()),
    )
    .await;

    for backend in [GitBackendKind::Embedded, GitBackendKind::System] {
        let dest = fx.dest(&format!("checkout-{backend}"));
        let result = clone_with_config(&fx.repo_url(), &dest, "tok", &fx.config(backend)).await;

        assert!(result.success, "{backend}: {}", result.message);
        assert_eq!(result.message, "Repository cloned successfully");
        assert_eq!(result.repo_id, REPO_ID);
        assert_eq!(result.repo_name, "notes");
        assert_eq!(result.local_path, dest);

        assert_eq!(fs::read_to_string(Path::new(&dest).join("notes.md")).unwrap(), "hello\n");

        let layout = SidecarLayout::new(&dest);
        assert_eq!(fs::read(layout.hash_mappings_path()).unwrap(), METADATA_BODY);
        assert_eq!(fs::read(layout.nostr_mappings_path()).unwrap(), METADATA_BODY);
        assert_eq!(
            fs::read_to_string(layout.config_path()).unwrap(),
            "[repository]\n\tid = abc123\n\tname = notes\n\taccess = admin\n\n\
             [mgit]\n\tversion = 1.0\n\tinitialized = true\n"
        );
    }
}

#[tokio::test]
async fn clone_creates_missing_parent_directories() {
    let fx = Fixture::new().await;
    fx.mount("info", ResponseTemplate::new(200).set_body_string(INFO_BODY))
        .await;
    fx.mount(
        "metadata",
        ResponseTemplate::new(200).set_body_bytes(METADATA_BODY.to_vec()),
    )
    .await;

    for backend in [GitBackendKind::Embedded, GitBackendKind::System] {
        let dest = fx.dest(&format!("{backend}/not/yet/there"));
        let result = clone_with_config(&fx.repo_url(), &dest, "tok", &fx.config(backend)).await;

        assert!(result.success, "{backend}: {}", result.message);
        assert!(Path::new(&dest).join("notes.md").is_file(), "{backend}: no checkout");
        assert!(SidecarLayout::new(&dest).config_path().is_file());
    }
}

#[tokio::test]
async fn clone_survives_metadata_failure() {
    let fx = Fixture::new().await;
    fx.mount("info", ResponseTemplate::new(200).set_body_string(INFO_BODY))
        .await;
    fx.mount("metadata", ResponseTemplate::new(500).set_body_string("boom"))
        .await;

    let dest = fx.dest("checkout");
    let result =
        clone_with_config(&fx.repo_url(), &dest, "tok", &fx.config(GitBackendKind::Embedded)).await;

    assert!(result.success, "{}", result.message);
    let layout = SidecarLayout::new(&dest);
    assert!(layout.config_path().is_file());
    assert!(!layout.hash_mappings_path().exists());
    assert!(!layout.nostr_mappings_path().exists());
}

#[tokio::test]
async fn clone_skips_metadata_that_is_not_an_array() {
    let fx = Fixture::new().await;
    fx.mount("info", ResponseTemplate::new(200).set_body_string(INFO_BODY))
        .await;
    fx.mount(
        "metadata",
        ResponseTemplate::new(200).set_body_string(r#"{"mappings":[]}"#),
    )
    .await;

    let dest = fx.dest("checkout");
    let result =
        clone_with_config(&fx.repo_url(), &dest, "tok", &fx.config(GitBackendKind::Embedded)).await;

    assert!(result.success, "{}", result.message);
    assert!(!SidecarLayout::new(&dest).hash_mappings_path().exists());
}

// =============================================================================
// Failure
// =============================================================================

#[tokio::test]
async fn clone_stops_when_info_is_rejected() {
    let fx = Fixture::new().await;
    fx.mount("info", ResponseTemplate::new(401).set_body_string("bad token"))
        .await;

    let dest = fx.dest("checkout");
    let result =
        clone_with_config(&fx.repo_url(), &dest, "tok", &fx.config(GitBackendKind::Embedded)).await;

    assert!(!result.success);
    assert!(result.message.starts_with("Clone failed: "), "{}", result.message);
    assert!(result.message.contains("status 401"), "{}", result.message);
    assert!(result.message.contains("bad token"), "{}", result.message);
    assert!(result.repo_id.is_empty());
    assert_eq!(result.local_path, dest);
    assert!(!Path::new(&dest).exists(), "git clone must not run");
}

#[tokio::test]
async fn clone_reports_git_failure() {
    let fx = Fixture::new().await;
    Mock::given(method("GET"))
        .and(path("/api/mgit/repos/missing/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INFO_BODY))
        .mount(&fx.server)
        .await;

    let url = format!("file://{}", fx.temp.path().join("missing").display());
    for backend in [GitBackendKind::Embedded, GitBackendKind::System] {
        let dest = fx.dest(&format!("checkout-{backend}"));
        let result = clone_with_config(&url, &dest, "s3cr3t", &fx.config(backend)).await;

        assert!(!result.success, "{backend}");
        assert!(result.message.starts_with("Clone failed: "), "{}", result.message);
        assert!(!result.message.contains("s3cr3t"), "{backend} leaked token");
        assert!(!SidecarLayout::new(&dest).config_path().exists());
    }
}

#[tokio::test]
async fn clone_rejects_existing_destination_before_any_request() {
    let fx = Fixture::new().await;
    fx.mount("info", ResponseTemplate::new(200).set_body_string(INFO_BODY))
        .await;

    let dest = fx.dest("taken");
    fs::create_dir(&dest).unwrap();
    let result =
        clone_with_config(&fx.repo_url(), &dest, "tok", &fx.config(GitBackendKind::Embedded)).await;

    assert!(!result.success);
    assert_eq!(result.message, format!("Destination path already exists: {dest}"));
    assert!(fx.server.received_requests().await.unwrap_or_default().is_empty());
}
