// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! MGit clone flow.
//!
//! ```text
//! CloneRequest::validate     empty url/path/token, destination exists
//!        |
//! RepoUrl::parse
//!        |
//! GET .../info         ----> RepositoryInfo        (fatal)
//!        |
//! create parent dirs   ----> <dest>/..             (fatal)
//!        |
//! git clone (backend)  ----> <dest>/.git           (fatal)
//!        |
//! GET .../metadata     ----> .mgit mapping files   (warning only)
//!        |
//! render_config        ----> .mgit/config          (fatal)
//! ```
//!
//! No step is retried and nothing is rolled back on failure.

use bon::Builder;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{CloneError, FsError, GitError, MgitResult};
use crate::git::cmd::clone_with_token;
use crate::git::query::{current_branch, is_git_repo};
use crate::logging::REDACTED;
use crate::net::MgitApi;
use crate::types::RepositoryInfo;

use super::sidecar::{count_mappings, write_config, write_mappings};
use super::url::RepoUrl;

/// Inputs of one clone call.
#[derive(Clone, Builder)]
pub struct CloneRequest {
    #[builder(into)]
    url: String,
    #[builder(into)]
    local_path: PathBuf,
    #[builder(into)]
    token: String,
}

impl std::fmt::Debug for CloneRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloneRequest")
            .field("url", &self.url)
            .field("local_path", &self.local_path)
            .field("token", &REDACTED)
            .finish()
    }
}

impl CloneRequest {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Check the request before any network or filesystem work.
    ///
    /// Checks run in order: URL, path, token (empty, then control
    /// characters), destination.
    ///
    /// # Errors
    ///
    /// Returns the first `CloneError` that applies. Anything other than a
    /// clean "not found" when probing the destination counts as existing.
    pub fn validate(&self) -> Result<(), CloneError> {
        if self.url.is_empty() {
            return Err(CloneError::EmptyUrl);
        }
        if self.local_path.as_os_str().is_empty() {
            return Err(CloneError::EmptyPath);
        }
        if self.token.is_empty() {
            return Err(CloneError::EmptyToken);
        }
        if self.token.chars().any(char::is_control) {
            return Err(CloneError::InvalidToken);
        }
        match std::fs::symlink_metadata(&self.local_path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            _ => Err(CloneError::DestinationExists {
                path: self.local_path.display().to_string(),
            }),
        }
    }
}

/// What a successful clone produced.
#[derive(Debug, Clone)]
pub struct CloneOutcome {
    pub repo_id: String,
    pub info: RepositoryInfo,
    /// Number of hash mappings written; `None` if the metadata step failed.
    pub mappings: Option<usize>,
    pub branch: Option<String>,
}

/// Run the clone flow.
///
/// # Errors
///
/// Returns a `CloneError` for rejected requests, a `NetworkError` if the
/// repository info cannot be fetched, a `GitError`/`ProcessError` if the
/// transfer fails, or an `FsError` if the destination's parent or
/// `.mgit/config` cannot be created.
/// Metadata failures are logged and never returned.
pub async fn clone_repository(request: &CloneRequest, config: &Config) -> MgitResult<CloneOutcome> {
    info!(
        url = %request.url,
        path = %request.local_path.display(),
        token = REDACTED,
        "clone requested"
    );
    request.validate()?;

    let repo_url = RepoUrl::parse(&request.url)?;
    let api = MgitApi::new(request.token.clone(), &config.server);
    let api_base = config.server.api_base.as_deref();

    info!(repo = repo_url.repo_id(), "fetching repository metadata");
    let info = api.repository_info(&repo_url.info_url(api_base)).await?;
    info!(name = %info.name, access = %info.access, "repository info received");

    if let Some(parent) = request
        .local_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| FsError::create_dir(parent, e))?;
    }

    let backend = config.git.backend;
    let url = repo_url.as_str().to_string();
    let dest = request.local_path.clone();
    let token = request.token.clone();
    let remote_name = config.git.remote_name.clone();
    tokio::task::spawn_blocking(move || {
        clone_with_token(backend, &url, &dest, &token, &remote_name)
    })
    .await
    .map_err(|e| GitError::clone_failed(repo_url.as_str(), e))??;

    if !is_git_repo(&request.local_path) {
        return Err(GitError::clone_failed(repo_url.as_str(), "no repository at destination").into());
    }
    let branch = current_branch(&request.local_path).ok().flatten();

    info!("setting up MGit metadata");
    let mappings = match fetch_mappings(&api, &repo_url, api_base, &request.local_path).await {
        Ok(count) => {
            info!(count, "stored MGit metadata");
            Some(count)
        }
        Err(e) => {
            warn!(error = %e, "failed to fetch MGit metadata");
            None
        }
    };

    let config_path = write_config(&request.local_path, &info).await?;
    info!(path = %config_path.display(), "MGit config created");

    info!(repo = repo_url.repo_id(), branch = ?branch, "clone completed");
    Ok(CloneOutcome {
        repo_id: repo_url.repo_id().to_string(),
        info,
        mappings,
        branch,
    })
}

async fn fetch_mappings(
    api: &MgitApi,
    repo_url: &RepoUrl,
    api_base: Option<&str>,
    checkout: &Path,
) -> MgitResult<usize> {
    let url = repo_url.metadata_url(api_base);
    let bytes = api.metadata(&url).await?;
    let count = count_mappings(&bytes).map_err(|e| crate::error::NetworkError::InvalidResponse {
        url,
        message: format!("metadata is not a JSON array: {e}"),
    })?;
    write_mappings(checkout, &bytes).await?;
    Ok(count)
}
