// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!     query.rs   cmd.rs
//!         \        /
//!          v      v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GixBackend  ShellBackend
//!    .is_repo    .is_repo
//!    .branch     .branch
//!    .clone      .clone
//! ```
//!
//! **`GixBackend`**: pure Rust, no subprocess; the default on devices.
//! **`ShellBackend`**: git CLI, for hosts that ship `git`.

pub mod backend;
pub mod cmd;
pub mod query;
