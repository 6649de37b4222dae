// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!     host app (binding)          main.rs
//!            |                       |
//!            v                +------+------+
//!         bridge  <---------- v             v
//!   clone/help/add/log     cli (clap)   cmd (handlers)
//!            |
//!            v
//!      ,-----------------------------,
//!      |      mgit::clone flow       |
//!      '--+-----------+----------+---'
//!         |           |          |
//!         v           v          v
//!       net          git      mgit::sidecar
//!    MGit API     gix/CLI     .mgit/ files
//!
//!   +--------------------------------------------+
//!   |  foundation   config, error, logging, types |
//!   +--------------------------------------------+
//! ```

pub mod bridge;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod mgit;
pub mod net;
pub mod types;
