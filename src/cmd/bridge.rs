// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commands that call the plain bridge functions.

use anyhow::bail;

use crate::bridge;
use crate::cli::AddArgs;
use crate::error::Result;

use super::print_json;

/// Print the MGit usage text.
///
/// # Errors
///
/// Returns an error only if JSON output fails.
pub fn run_usage_command(json: bool) -> Result<()> {
    if json {
        return print_json(&bridge::help_result());
    }
    print!("{}", bridge::help());
    Ok(())
}

/// Run the logging self-test.
///
/// # Errors
///
/// Returns an error only if JSON output fails.
pub fn run_test_logging_command(json: bool) -> Result<()> {
    let result = bridge::test_logging_result();
    if json {
        return print_json(&result);
    }
    println!("{}", result.result);
    Ok(())
}

/// Add two integers.
///
/// # Errors
///
/// Returns an error if the addition overflows.
pub fn run_add_command(args: &AddArgs, json: bool) -> Result<()> {
    let result = bridge::simple_add(args.a, args.b);
    if json {
        print_json(&result)?;
    } else if result.success {
        println!("{}", result.result);
    }
    if !result.success {
        bail!("{}", result.message);
    }
    Ok(())
}
