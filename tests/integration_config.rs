// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::fs;

use mgit_bridge::config::Config;
use mgit_bridge::config::loader::ConfigLoader;
use mgit_bridge::config::types::GitBackendKind;
use mgit_bridge::logging::LogLevel;

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("mgit-bridge.toml");
    fs::write(
        &file,
        r#"
[global]
output_log_level = 4
log_file = "bridge.log"

[server]
api_base = "https://mgit.example.com/"
timeout_secs = 15

[git]
backend = "system"
remote_name = "upstream"
"#,
    )
    .unwrap();

    let config = Config::from_file(&file).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.server.api_base.as_deref(), Some("https://mgit.example.com/"));
    assert_eq!(config.server.timeout_secs, 15);
    assert_eq!(config.git.backend, GitBackendKind::System);
    assert_eq!(config.git.remote_name, "upstream");
}

#[test]
fn config_missing_required_file() {
    let temp = tempfile::tempdir().unwrap();
    assert!(Config::from_file(temp.path().join("absent.toml")).is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn later_files_override_earlier_ones() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    fs::write(&base, "[server]\ntimeout_secs = 10\n[git]\nremote_name = \"mgit\"\n").unwrap();
    fs::write(&local, "[server]\ntimeout_secs = 20\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file_optional(&local)
        .add_toml_file_optional(temp.path().join("absent.toml"));
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.server.timeout_secs, 20);
    assert_eq!(config.git.remote_name, "mgit");
}

#[test]
fn set_option_beats_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[git]\nbackend = \"system\"\n")
        .set_option("git.backend=embedded")
        .unwrap()
        .set_option("server.timeout_secs=3")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.git.backend, GitBackendKind::Embedded);
    assert_eq!(config.server.timeout_secs, 3);
}

#[test]
fn invalid_values_fail_to_build() {
    for toml in [
        "[server]\ntimeout_secs = 0\n",
        "[server]\napi_base = \"ftp://mgit.example.com\"\n",
        "[git]\nremote_name = \"\"\n",
        "[global]\noutput_log_level = 9\n",
        "[git]\nbackend = \"svn\"\n",
    ] {
        assert!(Config::parse(toml).is_err(), "accepted: {toml}");
    }
}

#[test]
fn format_loaded_files_numbers_sources() {
    let loader = ConfigLoader::new().add_toml_str("[git]\n");
    assert_eq!(loader.format_loaded_files(), ["1. [string] <string>"]);
}
