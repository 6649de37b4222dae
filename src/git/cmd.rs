// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone dispatch by configured backend.
//!
//! ```text
//! clone_with_token(kind, ..)
//!   Embedded --> GixBackend   (no subprocess)
//!   System   --> ShellBackend --> git (PATH)
//! ```

use crate::config::types::GitBackendKind;
use crate::error::MgitResult;
use std::path::Path;
use tracing::info;

use super::backend::{GitClone, GixBackend, ShellBackend};

/// Clone with the selected backend.
///
/// # Errors
///
/// Returns a `GitError` if the clone fails, or a `ProcessError` if the
/// system backend cannot find or start `git`.
pub fn clone_with_token(
    backend: GitBackendKind,
    url: &str,
    dest: &Path,
    token: &str,
    remote_name: &str,
) -> MgitResult<()> {
    info!(%backend, url, dest = %dest.display(), "cloning git repository");
    match backend {
        GitBackendKind::Embedded => GixBackend::clone_with_token(url, dest, token, remote_name),
        GitBackendKind::System => ShellBackend::clone_with_token(url, dest, token, remote_name),
    }
}
