// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! MGit repository handling.
//!
//! ```text
//! clone.rs    request validation + the clone flow
//!   |-- url.rs      repo id, server root, endpoint URLs
//!   |-- net.rs      authenticated GETs (crate::net)
//!   |-- git/        transfer via the configured backend
//!   '-- sidecar.rs  .mgit/ layout and writers
//! ```

pub mod clone;
pub mod sidecar;
pub mod url;
