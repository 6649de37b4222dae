// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for mgit-bridge.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. mgit-bridge.toml (cwd, optional)
//! 3. --ini files
//! 4. MGIT_* env vars
//! 5. --set / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MGIT_GIT__BACKEND=system          → git.backend = "system"
//! MGIT_SERVER__TIMEOUT_SECS=30      → server.timeout_secs = 30
//! MGIT_SERVER__API_BASE=https://..  → server.api_base = "https://.."
//! ```
//!
//! Host applications calling the bridge get the same layering minus the
//! CLI, see [`Config::load_default`].

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, ServerConfig};

/// File picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "mgit-bridge.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "MGIT";

/// Complete application configuration.
///
/// Unknown top-level keys are tolerated: `MGIT_TOKEN` and `MGIT_LOG` share
/// the environment prefix without being configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// MGit server API options.
    pub server: ServerConfig,
    /// Git transfer options.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mgit_bridge::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("mgit-bridge.toml")
    ///     .with_env_prefix("MGIT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Defaults, then the optional working-directory file, then `MGIT_*`.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source is malformed.
    pub fn load_default() -> Result<Self> {
        Self::builder()
            .add_toml_file_optional(DEFAULT_CONFIG_FILE)
            .with_env_prefix(ENV_PREFIX)
            .build()
    }

    /// Reject values that deserialize but cannot work.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for a zero timeout, an empty
    /// remote name, or an `api_base` that is not an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if self.server.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                section: "server".to_string(),
                key: "timeout_secs".to_string(),
                message: "timeout must be at least one second".to_string(),
            }
            .into());
        }

        if self.git.remote_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "remote_name".to_string(),
                message: "remote name cannot be empty".to_string(),
            }
            .into());
        }

        if let Some(api_base) = &self.server.api_base {
            let parsed = reqwest::Url::parse(api_base).map_err(|e| ConfigError::InvalidValue {
                section: "server".to_string(),
                key: "api_base".to_string(),
                message: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidValue {
                    section: "server".to_string(),
                    key: "api_base".to_string(),
                    message: format!("unsupported scheme '{}'", parsed.scheme()),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert(
                "global.log_file".to_string(),
                log_file.display().to_string(),
            );
        }
        if let Some(api_base) = &self.server.api_base {
            options.insert("server.api_base".to_string(), api_base.clone());
        }
        options.insert(
            "server.timeout_secs".to_string(),
            self.server.timeout_secs.to_string(),
        );
        options.insert("git.backend".to_string(), self.git.backend.to_string());
        options.insert("git.remote_name".to_string(), self.git.remote_name.clone());

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
