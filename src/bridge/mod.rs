// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Functions exposed to the host application.
//!
//! ```text
//! host (gomobile-style binding)
//!   |
//!   +-- clone(url, path, token) --> CloneResult
//!   |     '-- current-thread runtime --> mgit::clone::clone_repository
//!   +-- help()                  --> String / HelpResult
//!   +-- test_logging()          --> String / LogResult
//!   '-- simple_add(a, b)        --> MathResult
//! ```
//!
//! Nothing here returns `Result`: hosts receive plain records and read the
//! `success` flag. Errors collapse into `message`.

use tracing::{debug, error, info, trace, warn};

use crate::config::Config;
use crate::error::MgitError;
use crate::logging::{REDACTED, ensure_bridge_logging};
use crate::mgit::clone::{CloneRequest, clone_repository};
use crate::types::{CloneResult, HelpResult, LogResult, MathResult};

/// Usage text of the `mgit` command line tool.
pub const MGIT_HELP_TEXT: &str = "\
mgit - A go-git wrapper
Usage: mgit <command> [args]
Commands:
  init                        Initialize a new repository
  clone [-jwt <token>] <url>  Clone a repository
  add <files...>              Add files to staging
  commit -m <msg>             Commit staged changes
  push                        Push commits to remote
  pull                        Pull changes from remote
  status                      Show repository status
  branch                      List branches
  branch <name>               Create a new branch
  checkout <ref>              Checkout a branch or commit
  log                         Show commit history
  show [commit]               Show commit details and changes
  config                      Get and set configuration values
  verify                      Verify MGit commit chain integrity
";

/// Value returned by [`test_logging`].
pub const TEST_LOGGING_RESULT: &str =
    "Comprehensive logging test completed. Check console/logs for output.";

/// Clone an MGit repository into `local_path`.
///
/// Configuration comes from `mgit-bridge.toml` in the working directory and
/// `MGIT_*` variables, falling back to defaults if it cannot be loaded.
///
/// Blocks on a private current-thread runtime; do not call from inside an
/// async task (use [`clone_with_config`] there).
#[must_use]
pub fn clone(url: &str, local_path: &str, token: &str) -> CloneResult {
    ensure_bridge_logging();
    info!(url, path = local_path, token = REDACTED, "bridge clone called");

    let request = CloneRequest::builder()
        .url(url)
        .local_path(local_path)
        .token(token)
        .build();
    if let Err(e) = request.validate() {
        warn!(error = %e, "clone request rejected");
        return CloneResult::failure(local_path, e.to_string());
    }

    let config = Config::load_default().unwrap_or_else(|e| {
        warn!(error = %format!("{e:#}"), "failed to load configuration, using defaults");
        Config::default()
    });

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to start async runtime");
            return CloneResult::failure(local_path, format!("Clone failed: {e}"));
        }
    };

    runtime.block_on(run_clone(&request, &config))
}

/// Async form of [`clone`] with an explicit configuration.
pub async fn clone_with_config(
    url: &str,
    local_path: &str,
    token: &str,
    config: &Config,
) -> CloneResult {
    let request = CloneRequest::builder()
        .url(url)
        .local_path(local_path)
        .token(token)
        .build();
    run_clone(&request, config).await
}

async fn run_clone(request: &CloneRequest, config: &Config) -> CloneResult {
    let local_path = request.local_path().display().to_string();
    match clone_repository(request, config).await {
        Ok(outcome) => {
            info!(repo = %outcome.repo_id, name = %outcome.info.name, "repository cloned successfully");
            CloneResult::ok(local_path, outcome.repo_id, outcome.info.name)
        }
        Err(MgitError::Clone(e)) => {
            warn!(error = %e, "clone request rejected");
            CloneResult::failure(local_path, e.to_string())
        }
        Err(e) => {
            error!(error = %e, "clone failed");
            CloneResult::failure(local_path, format!("Clone failed: {e}"))
        }
    }
}

/// MGit usage text.
#[must_use]
pub fn help() -> String {
    ensure_bridge_logging();
    debug!(len = MGIT_HELP_TEXT.len(), "help text requested");
    MGIT_HELP_TEXT.to_string()
}

#[must_use]
pub fn help_result() -> HelpResult {
    HelpResult::ok(help())
}

/// Emit a message at every level plus runtime details.
///
/// Lets host developers check that bridge logging reaches their console.
#[must_use]
pub fn test_logging() -> String {
    ensure_bridge_logging();

    trace!("logging test: trace");
    debug!("logging test: debug");
    info!("logging test: info");
    warn!("logging test: warn");
    error!("logging test: error (not a failure)");

    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|e| format!("<unavailable: {e}>"));
    let cpus = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
    info!(
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        cpus,
        version = env!("CARGO_PKG_VERSION"),
        cwd = %cwd,
        "runtime information"
    );

    println!("mgit-bridge: logging test (stdout)");
    eprintln!("mgit-bridge: logging test (stderr)");

    info!("logging test finished");
    TEST_LOGGING_RESULT.to_string()
}

#[must_use]
pub fn test_logging_result() -> LogResult {
    LogResult::ok(test_logging())
}

/// Add two integers. Overflow is reported instead of wrapping.
#[must_use]
pub fn simple_add(a: i64, b: i64) -> MathResult {
    ensure_bridge_logging();
    match a.checked_add(b) {
        Some(sum) => {
            info!(a, b, sum, "simple add");
            MathResult::ok(sum)
        }
        None => {
            warn!(a, b, "simple add overflowed");
            MathResult::failure(format!("integer overflow adding {a} and {b}"))
        }
    }
}

#[cfg(test)]
mod tests;
