// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `.mgit` sidecar directory written next to `.git`.
//!
//! ```text
//! <checkout>/
//!   .git/
//!   .mgit/
//!     config                      static key/value text
//!     nostr_mappings.json         metadata bytes (verbatim)
//!     mappings/
//!       hash_mappings.json        metadata bytes (verbatim)
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsError, MgitResult};
use crate::types::RepositoryInfo;

pub const MGIT_DIR: &str = ".mgit";
pub const CONFIG_FILE: &str = "config";
pub const MAPPINGS_DIR: &str = "mappings";
pub const HASH_MAPPINGS_FILE: &str = "hash_mappings.json";
pub const NOSTR_MAPPINGS_FILE: &str = "nostr_mappings.json";

/// Version recorded in `.mgit/config`.
pub const SIDECAR_VERSION: &str = "1.0";

/// Paths of the sidecar files for one checkout.
#[derive(Debug, Clone)]
pub struct SidecarLayout {
    mgit_dir: PathBuf,
}

impl SidecarLayout {
    pub fn new(checkout: impl AsRef<Path>) -> Self {
        Self {
            mgit_dir: checkout.as_ref().join(MGIT_DIR),
        }
    }

    #[must_use]
    pub fn mgit_dir(&self) -> &Path {
        &self.mgit_dir
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.mgit_dir.join(CONFIG_FILE)
    }

    #[must_use]
    pub fn mappings_dir(&self) -> PathBuf {
        self.mgit_dir.join(MAPPINGS_DIR)
    }

    #[must_use]
    pub fn hash_mappings_path(&self) -> PathBuf {
        self.mappings_dir().join(HASH_MAPPINGS_FILE)
    }

    #[must_use]
    pub fn nostr_mappings_path(&self) -> PathBuf {
        self.mgit_dir.join(NOSTR_MAPPINGS_FILE)
    }
}

/// Number of entries in a metadata blob.
///
/// # Errors
///
/// Returns a `serde_json::Error` unless `bytes` is a JSON array.
pub fn count_mappings(bytes: &[u8]) -> serde_json::Result<usize> {
    let entries: Vec<serde::de::IgnoredAny> = serde_json::from_slice(bytes)?;
    Ok(entries.len())
}

/// Write the metadata blob, untouched, to both mapping files.
///
/// # Errors
///
/// Returns an `FsError` if a directory or file cannot be written.
pub async fn write_mappings(checkout: &Path, bytes: &[u8]) -> MgitResult<()> {
    let layout = SidecarLayout::new(checkout);

    let mappings_dir = layout.mappings_dir();
    tokio::fs::create_dir_all(&mappings_dir)
        .await
        .map_err(|e| FsError::create_dir(&mappings_dir, e))?;

    for path in [layout.hash_mappings_path(), layout.nostr_mappings_path()] {
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| FsError::write(&path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote mappings");
    }

    Ok(())
}

/// Render `.mgit/config` for a repository.
#[must_use]
pub fn render_config(info: &RepositoryInfo) -> String {
    format!(
        "[repository]\n\tid = {}\n\tname = {}\n\taccess = {}\n\n[mgit]\n\tversion = {SIDECAR_VERSION}\n\tinitialized = true\n",
        info.id, info.name, info.access
    )
}

/// Write `.mgit/config`, creating `.mgit` if needed.
///
/// # Errors
///
/// Returns an `FsError` if the directory or file cannot be written.
pub async fn write_config(checkout: &Path, info: &RepositoryInfo) -> MgitResult<PathBuf> {
    let layout = SidecarLayout::new(checkout);

    tokio::fs::create_dir_all(layout.mgit_dir())
        .await
        .map_err(|e| FsError::create_dir(layout.mgit_dir(), e))?;

    let path = layout.config_path();
    tokio::fs::write(&path, render_config(info))
        .await
        .map_err(|e| FsError::write(&path, e))?;

    Ok(path)
}
