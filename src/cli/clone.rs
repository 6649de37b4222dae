// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone command arguments.
//!
//! ```text
//! clone URL PATH --token T      → bridge clone
//!   --backend embedded|system   → git.backend override
//!   --api-base URL              → server.api_base override
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::types::GitBackendKind;

/// Arguments for the `clone` command.
#[derive(Clone, Args)]
pub struct CloneArgs {
    /// Repository URL, e.g. `https://host/api/mgit/repos/<id>`.
    pub url: String,

    /// Destination directory; must not exist.
    pub path: PathBuf,

    /// Bearer token for the MGit server.
    #[arg(long, env = "MGIT_TOKEN", hide_env_values = true, default_value = "")]
    pub token: String,

    /// Git backend to use for the transfer.
    #[arg(long, value_name = "BACKEND")]
    pub backend: Option<GitBackendKind>,

    /// Server root for the MGit API instead of the one derived from the URL.
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,
}

impl std::fmt::Debug for CloneArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloneArgs")
            .field("url", &self.url)
            .field("path", &self.path)
            .field("token", &crate::logging::REDACTED)
            .field("backend", &self.backend)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl CloneArgs {
    /// Config overrides implied by the flags.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = Vec::new();
        if let Some(backend) = self.backend {
            overrides.push(format!("git.backend={backend}"));
        }
        if let Some(ref api_base) = self.api_base {
            overrides.push(format!("server.api_base={api_base}"));
        }
        overrides
    }
}
