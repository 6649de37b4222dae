// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! MGit server API client.
//!
//! ```text
//! MgitApi::new(token, &ServerConfig)
//!        |
//!        +----------------+
//!        v                v
//!  repository_info()   metadata()
//!  GET .../info        GET .../metadata
//!  -> RepositoryInfo   -> raw bytes
//!
//! Every request: Authorization: Bearer <token>, per-request timeout
//! Non-200:       HttpError { status, url, body }
//! Global client: OnceLock, connection pool, keep-alive
//! ```

use reqwest::{Client, StatusCode};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::config::types::ServerConfig;
use crate::error::{MgitResult, NetworkError};
use crate::logging::REDACTED;
use crate::types::RepositoryInfo;

/// Global HTTP client - initialized once, reused across all requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(user_agent())
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// User-Agent sent with every API request.
#[must_use]
pub fn user_agent() -> String {
    format!("mgit-bridge/{}", env!("CARGO_PKG_VERSION"))
}

/// Authenticated client for the MGit repository endpoints.
pub struct MgitApi {
    client: Client,
    token: String,
    timeout: Duration,
}

impl std::fmt::Debug for MgitApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MgitApi")
            .field("token", &REDACTED)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl MgitApi {
    pub fn new(token: impl Into<String>, server: &ServerConfig) -> Self {
        Self {
            client: global_client().clone(),
            token: token.into(),
            timeout: server.timeout(),
        }
    }

    /// Fetch repository information.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails, the server answers with
    /// anything but 200, or the body is not a repository info object.
    #[instrument(skip(self), level = "debug")]
    pub async fn repository_info(&self, url: &str) -> MgitResult<RepositoryInfo> {
        let body = self.get(url).await?;
        serde_json::from_slice(&body).map_err(|e| {
            NetworkError::InvalidResponse {
                url: url.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Fetch the hash-mapping metadata as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails or the server answers
    /// with anything but 200.
    #[instrument(skip(self), level = "debug")]
    pub async fn metadata(&self, url: &str) -> MgitResult<Vec<u8>> {
        self.get(url).await
    }

    async fn get(&self, url: &str) -> MgitResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        let status = response.status();
        if status != StatusCode::OK {
            // Body is best effort; the status alone is enough to fail on
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
                body: body.trim().to_string(),
            }
            .into());
        }

        let bytes = response.bytes().await.map_err(NetworkError::Reqwest)?;
        debug!(url, bytes = bytes.len(), "api response");
        Ok(bytes.to_vec())
    }
}
