// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              MgitError (~24 bytes)
//!                     |
//!   +-------+-------+-------+-------+-------+
//!   |       |       |       |       |       |
//!   v       v       v       v       v       v
//!  Git    Net     Cfg    Clone   Proc     Fs
//!  Box    Box     Box     Box    Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Git     Gix, CommandFailed, CloneFailed
//!   Network Reqwest, HttpError, InvalidResponse
//!   Config  InvalidValue
//!   Clone   EmptyUrl, EmptyPath, EmptyToken, InvalidToken,
//!           DestinationExists
//!   Process ExecutableNotFound, SpawnFailed
//!   Fs      CreateDir, Write
//! ```
//!
//! At the bridge boundary every error collapses to its display chain.

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MgitError`].
pub type MgitResult<T> = std::result::Result<T, MgitError>;

/// Top-level bridge error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MgitError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Clone request was rejected before any work started.
    #[error("{0}")]
    Clone(#[from] Box<CloneError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MgitError {
                fn from(err: $error) -> Self {
                    MgitError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    NetworkError => Network,
    ConfigError => Config,
    CloneError => Clone,
    ProcessError => Process,
    FsError => Fs,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Clone operation failed.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },
}

impl GitError {
    /// Build a [`GitError::CloneFailed`] from any displayable cause.
    pub fn clone_failed(url: &str, cause: impl std::fmt::Display) -> Self {
        Self::CloneFailed {
            url: url.to_string(),
            message: cause.to_string(),
        }
    }
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Non-success HTTP response; the body carries the server's explanation.
    #[error("error response from server (status {status}) for {url}: {body}")]
    HttpError {
        status: u16,
        url: String,
        body: String,
    },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Response body could not be decoded.
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Clone Request Errors ---

/// Reasons a clone request is rejected up front.
///
/// Display strings are shown verbatim to the host application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloneError {
    #[error("Repository URL cannot be empty")]
    EmptyUrl,

    #[error("Local path cannot be empty")]
    EmptyPath,

    #[error("Authentication token cannot be empty")]
    EmptyToken,

    /// Control characters would break the HTTP header carrying the token.
    #[error("Authentication token contains invalid characters")]
    InvalidToken,

    #[error("Destination path already exists: {path}")]
    DestinationExists { path: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Directory could not be created.
    #[error("error creating {path} directory: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File could not be written.
    #[error("error writing {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub fn create_dir(path: &Path, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }
}
