// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `clone` command.

use anyhow::bail;

use crate::bridge::clone_with_config;
use crate::cli::clone::CloneArgs;
use crate::config::Config;
use crate::error::Result;

use super::print_json;

/// Clone a repository through the bridge and report the result.
///
/// # Errors
///
/// Returns an error carrying the result message if the clone failed.
pub async fn run_clone_command(args: &CloneArgs, config: &Config, json: bool) -> Result<()> {
    let path = args.path.to_string_lossy();
    let result = clone_with_config(&args.url, &path, &args.token, config).await;

    if json {
        print_json(&result)?;
    } else if result.success {
        println!("{}", result.message);
        println!("  id:   {}", result.repo_id);
        println!("  name: {}", result.repo_name);
        println!("  path: {}", result.local_path);
    }

    if !result.success {
        bail!("{}", result.message);
    }
    Ok(())
}
