// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)    --> GixBackend (pure Rust gix)
//!                    --> ShellBackend (git CLI)
//! GitClone (write)   --> GixBackend (embedded, in-memory credentials)
//!                    --> ShellBackend (git CLI, header via GIT_CONFIG_* env)
//! ```
//!
//! The MGit server authenticates git transfers with HTTP Basic: empty
//! username, the bearer token as password. Neither backend persists the
//! token into the checkout or passes it on a command line.

use crate::error::{GitError, GixError, MgitResult, ProcessError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use tracing::debug;

/// Username presented alongside the token; the server ignores it.
pub const TOKEN_USERNAME: &str = "";


// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> MgitResult<Option<String>>;
}

// --- Clone Trait (Write operations) ---

/// Token-authenticated clone.
pub trait GitClone {
    /// Clone `url` into `dest` (which must not exist), checking out the
    /// default branch and fetching all branches at full depth.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the transfer or checkout fails, or a
    /// `ProcessError` if the backend's tooling is unavailable.
    fn clone_with_token(url: &str, dest: &Path, token: &str, remote_name: &str)
    -> MgitResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Blocking: callers on an async executor go through `spawn_blocking`.
pub struct GixBackend;

impl GixBackend {
    /// Credential helper answering every `get` with the token.
    fn token_credentials(
        action: gix::credentials::helper::Action,
        token: &str,
    ) -> gix::credentials::protocol::Result {
        match action {
            gix::credentials::helper::Action::Get(ctx) => {
                Ok(Some(gix::credentials::protocol::Outcome {
                    identity: gix::sec::identity::Account {
                        username: TOKEN_USERNAME.to_string(),
                        password: token.to_string(),
                        oauth_refresh_token: None,
                    },
                    next: ctx.into(),
                }))
            }
            gix::credentials::helper::Action::Store(_)
            | gix::credentials::helper::Action::Erase(_) => Ok(None),
        }
    }
}

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> MgitResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}

impl GitClone for GixBackend {
    fn clone_with_token(
        url: &str,
        dest: &Path,
        token: &str,
        remote_name: &str,
    ) -> MgitResult<()> {
        let interrupt = AtomicBool::new(false);
        let token = token.to_string();

        let mut prepare = gix::prepare_clone(url, dest)
            .map_err(|e| GitError::clone_failed(url, e))?
            .with_remote_name(remote_name)
            .map_err(|e| GitError::clone_failed(url, e))?
            .configure_connection(move |connection| {
                let token = token.clone();
                connection.set_credentials(move |action| Self::token_credentials(action, &token));
                Ok(())
            });

        debug!(url, dest = %dest.display(), "gix fetch");
        let (mut checkout, _) = prepare
            .fetch_then_checkout(gix::progress::Discard, &interrupt)
            .map_err(|e| GitError::clone_failed(url, e))?;

        debug!(dest = %dest.display(), "gix checkout");
        checkout
            .main_worktree(gix::progress::Discard, &interrupt)
            .map_err(|e| GitError::clone_failed(url, e))?;

        Ok(())
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
pub struct ShellBackend;

impl ShellBackend {
    /// `Authorization` header for the token.
    ///
    /// git drops the password when the username is empty, so the header is
    /// sent up front instead of going through a credential helper.
    fn auth_header(token: &str) -> String {
        format!(
            "Authorization: Basic {}",
            BASE64.encode(format!("{TOKEN_USERNAME}:{token}"))
        )
    }

    /// Config entries passed through the environment; never persisted and
    /// never visible on the command line.
    fn auth_env(header: &str) -> [(&'static str, &str); 3] {
        [
            ("GIT_CONFIG_COUNT", "1"),
            ("GIT_CONFIG_KEY_0", "http.extraHeader"),
            ("GIT_CONFIG_VALUE_0", header),
        ]
    }

    /// First argument that is neither an option nor the value of `-c`.
    fn subcommand<'a>(args: &[&'a str]) -> &'a str {
        let mut iter = args.iter();
        while let Some(&arg) = iter.next() {
            if arg == "-c" {
                iter.next();
            } else if !arg.starts_with('-') {
                return arg;
            }
        }
        ""
    }

    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> MgitResult<String> {
        Self::git_command_with_env(args, cwd, &[])
    }

    fn git_command_with_env(
        args: &[&str],
        cwd: &Path,
        env: &[(&str, &str)],
    ) -> MgitResult<String> {
        use std::process::Command;

        let git = which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        })?;

        let output = Command::new(git)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .envs(env.iter().copied())
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: format!("git {}", Self::subcommand(args)),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitClone for ShellBackend {
    fn clone_with_token(
        url: &str,
        dest: &Path,
        token: &str,
        remote_name: &str,
    ) -> MgitResult<()> {
        // Relative to the process, not to whatever directory git runs in
        let dest = std::path::absolute(dest).map_err(|e| GitError::clone_failed(url, e))?;
        let dest_str = dest.to_str().ok_or_else(|| GitError::CloneFailed {
            url: url.to_string(),
            message: "invalid destination path".to_string(),
        })?;

        // Reset inherited helpers so a keychain cannot answer for the token
        let args = [
            "-c",
            "credential.helper=",
            "clone",
            "--quiet",
            "--origin",
            remote_name,
            url,
            dest_str,
        ];

        let header = Self::auth_header(token);
        let cwd = std::env::current_dir().map_err(|e| GitError::clone_failed(url, e))?;

        Self::git_command_with_env(&args, &cwd, &Self::auth_env(&header)).map_err(|e| match e {
            crate::error::MgitError::Git(boxed) => match *boxed {
                GitError::CommandFailed { message, .. } => GitError::clone_failed(url, message).into(),
                other => other.into(),
            },
            other => other,
        })?;
        Ok(())
    }
}

impl GitQuery for ShellBackend {
    fn is_git_repo(path: &Path) -> bool {
        Self::git_command(&["rev-parse", "--is-inside-work-tree"], path).is_ok()
    }

    fn current_branch(path: &Path) -> MgitResult<Option<String>> {
        Self::git_command(&["symbolic-ref", "--short", "HEAD"], path)
            .map_or_else(|_| Ok(None), |branch| Ok(Some(branch)))
    }
}
