// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config: GlobalConfig, ServerConfig, GitConfig
//! GitBackendKind: Embedded (gix, default) | System (git CLI)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Which git implementation performs the object transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitBackendKind {
    /// Pure Rust `gix`; works where no `git` binary is available.
    #[default]
    Embedded,
    /// The `git` executable found on `PATH`.
    System,
}

impl std::fmt::Display for GitBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for GitBackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "embedded" | "gix" => Ok(Self::Embedded),
            "system" | "git" => Ok(Self::System),
            _ => Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "backend".to_string(),
                message: format!("expected 'embedded' or 'system', got '{s}'"),
            }),
        }
    }
}

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Optional path to a log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// MGit server API options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Server root used for API calls instead of the one derived from the
    /// repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            timeout_secs: 60,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Git transfer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    pub backend: GitBackendKind,
    /// Name given to the cloned remote.
    pub remote_name: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            backend: GitBackendKind::default(),
            remote_name: "origin".to_string(),
        }
    }
}
