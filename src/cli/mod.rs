// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for mgit-bridge using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! mgit-bridge [global options] <command>
//! version
//! options | inis
//! usage            (alias mgit-help)
//! test-logging
//! add <A> <B>
//! clone <URL> <PATH> [--token T] [--backend embedded|system] [--api-base URL]
//! ```

pub mod clone;
pub mod global;


use crate::cli::clone::CloneArgs;
use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// MGit mobile bridge
///
/// Desktop front end for the functions the bridge exposes to host apps.
#[derive(Debug, Parser)]
#[command(
    name = "mgit-bridge",
    author,
    version,
    about = "MGit mobile bridge",
    long_about = "mgit-bridge Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs the MGit bridge functions from a terminal. Every command\n\
                  prints the same result a host application would receive; use\n\
                  --json to get the record as JSON.",
    after_help = "CONFIGURATION:\n\n\
                  mgit-bridge reads `mgit-bridge.toml` from the current directory if\n\
                  present, then any files given with --ini, then MGIT_* environment\n\
                  variables (MGIT_SERVER__TIMEOUT_SECS=30), then --set overrides."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Prints the MGit usage text.
    #[command(visible_alias = "mgit-help")]
    Usage,

    /// Emits log messages at every level.
    #[command(name = "test-logging")]
    TestLogging,

    /// Adds two integers.
    Add(AddArgs),

    /// Clones an MGit repository.
    Clone(CloneArgs),
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// First operand.
    #[arg(allow_negative_numbers = true)]
    pub a: i64,

    /// Second operand.
    #[arg(allow_negative_numbers = true)]
    pub b: i64,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
