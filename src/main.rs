// mgit-bridge: MGit mobile bridge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Version | Options | Inis | Usage | TestLogging | Add | Clone
//! ```

use std::process::ExitCode;

use mgit_bridge::cli::global::GlobalOptions;
use mgit_bridge::cli::{self, Command};
use mgit_bridge::cmd::bridge::{run_add_command, run_test_logging_command, run_usage_command};
use mgit_bridge::cmd::clone::run_clone_command;
use mgit_bridge::cmd::config::{run_inis_command, run_options_command};
use mgit_bridge::config::loader::ConfigLoader;
use mgit_bridge::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use mgit_bridge::logging::init_logging;
use mgit_bridge::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let json = cli.global.json;
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global, &[]).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => build_config_loader(&cli.global, &[])
            .map(|loader| run_inis_command(&loader.format_loaded_files())),
        Some(Command::Usage) => run_usage_command(json),
        Some(Command::TestLogging) => run_test_logging_command(json),
        Some(Command::Add(args)) => run_add_command(args, json),
        Some(Command::Clone(args)) => match load_config(&cli.global, &args.to_config_overrides()) {
            Ok(config) => run_clone_command(args, &config, json).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(
    global: &GlobalOptions,
    extra: &[String],
) -> mgit_bridge::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_CONFIG_FILE);
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in global.to_config_overrides().iter().chain(extra) {
        loader = loader.set_option(option)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions, extra: &[String]) -> mgit_bridge::error::Result<Config> {
    build_config_loader(global, extra)?.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
