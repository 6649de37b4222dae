// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Result records exchanged with the host application.
//!
//! ```text
//! bridge::clone         --> CloneResult
//! bridge::help_result   --> HelpResult
//! bridge::test_logging  --> LogResult
//! bridge::simple_add    --> MathResult
//! server /info          --> RepositoryInfo
//! commit / push / pull  --> CommitResult, PushResult, PullResult
//!                           MCommitInfo { MGitSignature x2 }
//! ```
//!
//! Everything is plain strings, booleans and integers so binding
//! generators can map the records without custom converters. JSON keys are
//! snake_case and stable.

use serde::{Deserialize, Serialize};

/// Serialise a record for the host side of the bridge.
///
/// Records only contain strings, numbers and booleans, so serialisation
/// cannot fail; the `Result` is kept for callers that prefer `?`.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialisation fails.
pub fn to_json<T: Serialize>(record: &T) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Repository information returned by `GET .../repos/{id}/info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub id: String,
    pub name: String,
    /// Access level granted to the token (e.g. `admin`, `read-write`).
    pub access: String,
}

/// Outcome of [`crate::bridge::clone`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneResult {
    pub success: bool,
    pub message: String,
    pub repo_id: String,
    pub repo_name: String,
    pub local_path: String,
}

impl CloneResult {
    /// A failed clone; `local_path` is echoed back unchanged.
    pub fn failure(local_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            repo_id: String::new(),
            repo_name: String::new(),
            local_path: local_path.into(),
        }
    }

    pub fn ok(
        local_path: impl Into<String>,
        repo_id: impl Into<String>,
        repo_name: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            message: "Repository cloned successfully".to_string(),
            repo_id: repo_id.into(),
            repo_name: repo_name.into(),
            local_path: local_path.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpResult {
    pub success: bool,
    pub help_text: String,
    pub message: String,
}

impl HelpResult {
    pub fn ok(help_text: impl Into<String>) -> Self {
        Self {
            success: true,
            help_text: help_text.into(),
            message: "Help text generated successfully".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResult {
    pub success: bool,
    pub result: String,
    pub message: String,
}

impl LogResult {
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: result.into(),
            message: "Logging test completed".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathResult {
    pub success: bool,
    pub result: i64,
    pub message: String,
}

impl MathResult {
    #[must_use]
    pub fn ok(result: i64) -> Self {
        Self {
            success: true,
            result,
            message: "Addition completed".to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: 0,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResult {
    pub success: bool,
    pub message: String,
    pub git_hash: String,
    pub mgit_hash: String,
    #[serde(rename = "commit_message")]
    pub commit_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushResult {
    pub success: bool,
    pub message: String,
    pub commit_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullResult {
    pub success: bool,
    pub message: String,
    pub changes: i64,
}

/// Signature on an MGit commit.
///
/// `when` stays a string (RFC 3339) so hosts need no date type mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MGitSignature {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pubkey: String,
    pub when: String,
}

/// MGit commit as seen by the host: both hashes plus the git commit fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MCommitInfo {
    pub mgit_hash: String,
    pub git_hash: String,
    pub message: String,
    pub author: MGitSignature,
    pub committer: MGitSignature,
    pub parent_hashes: Vec<String>,
    pub tree_hash: String,
}
