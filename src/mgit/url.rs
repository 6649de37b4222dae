// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository URL helpers.
//!
//! ```text
//! https://host/api/mgit/repos/abc123.git/
//! '----------'  '-------------' '----'
//!  server root     API_PREFIX    repo id
//!
//! info     = {root}/api/mgit/repos/{id}/info
//! metadata = {root}/api/mgit/repos/{id}/metadata
//! ```

use crate::error::NetworkError;

/// Path segment under which the server exposes repository endpoints.
pub const API_PREFIX: &str = "/api/mgit/repos";

/// Strip one trailing `/`, then one trailing `.git`.
fn trim_repo_suffixes(url: &str) -> &str {
    let url = url.strip_suffix('/').unwrap_or(url);
    url.strip_suffix(".git").unwrap_or(url)
}

/// Last path segment of a repository URL, without `.git`.
#[must_use]
pub fn extract_repo_id(url: &str) -> &str {
    let trimmed = trim_repo_suffixes(url);
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Repository URL with its ID segment removed.
#[must_use]
pub fn extract_server_base(url: &str) -> &str {
    let trimmed = trim_repo_suffixes(url);
    let id = extract_repo_id(url);
    let base = trimmed.strip_suffix(id).unwrap_or(trimmed);
    base.strip_suffix('/').unwrap_or(base)
}

/// A validated MGit repository URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoUrl {
    raw: String,
    repo_id: String,
    server_root: String,
}

impl RepoUrl {
    /// Validate `url` and derive the repository ID and server root.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::InvalidUrl` if `url` is not an absolute URL or
    /// has no repository segment.
    pub fn parse(url: &str) -> Result<Self, NetworkError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| NetworkError::InvalidUrl(format!("{url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(NetworkError::InvalidUrl(format!(
                "{url}: not a hierarchical url"
            )));
        }

        let repo_id = extract_repo_id(url);
        let base = extract_server_base(url);
        if repo_id.is_empty() || base.ends_with(':') || base.ends_with(":/") {
            return Err(NetworkError::InvalidUrl(format!(
                "{url}: missing repository id"
            )));
        }

        let server_root = base.strip_suffix(API_PREFIX).unwrap_or(base);

        Ok(Self {
            raw: url.to_string(),
            repo_id: repo_id.to_string(),
            server_root: server_root.to_string(),
        })
    }

    /// The URL as given, used for the git transfer.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn repo_id(&self) -> &str {
        &self.repo_id
    }

    /// Server root derived from the URL (no trailing `/`).
    #[must_use]
    pub fn server_root(&self) -> &str {
        &self.server_root
    }

    /// Repository info endpoint; `api_base` replaces the derived root.
    #[must_use]
    pub fn info_url(&self, api_base: Option<&str>) -> String {
        self.endpoint(api_base, "info")
    }

    /// Hash-mapping metadata endpoint; `api_base` replaces the derived root.
    #[must_use]
    pub fn metadata_url(&self, api_base: Option<&str>) -> String {
        self.endpoint(api_base, "metadata")
    }

    fn endpoint(&self, api_base: Option<&str>, leaf: &str) -> String {
        let root = api_base.map_or(self.server_root.as_str(), |b| b.trim_end_matches('/'));
        format!("{root}{API_PREFIX}/{}/{leaf}", self.repo_id)
    }
}

impl std::fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
