// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Command line interface.

mod auth_plugins;
mod configuration;
mod format;

use crate::client_manager::ClientManager;
use crate::config::ClientConfig;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::path::PathBuf;

/// Command line Arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Show debug information.
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Path to configuration file.
    #[arg(short, long, env = "CLOUDCONF_CONFIG", global = true)]
    config_path: Option<PathBuf>,
    /// Authentication type to use (overrides the configured `auth_type`).
    #[arg(long, value_name = "AUTH_TYPE", global = true)]
    os_auth_type: Option<String>,
    /// Ignore `OS_*` environment variables.
    #[arg(long, global = true)]
    no_env: bool,
    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration related commands.
    Configuration(configuration::Args),
    /// List the built-in auth plugins and their secret options.
    AuthPlugins(auth_plugins::Args),
}

impl Args {
    /// Get the desired log level, depending on the verbose flag passed on the command line.
    fn log_level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Get the current configuration.
    fn config(&self) -> crate::Result<ClientConfig> {
        ClientConfig::load(self.config_path.as_deref(), !self.no_env)
    }

    /// Create the client manager for the current configuration.
    fn client_manager(&self) -> crate::Result<ClientManager> {
        let config = self.config()?;
        Ok(ClientManager::from_config(config, self.os_auth_type.as_deref()))
    }
}

/// Main entry point.
///
/// # Errors
///
/// Can returns errors if the command line arguments are incorrect or the executed programs lead to
/// an error.
pub fn main() -> crate::Result<()> {
    let args = Args::parse();

    TermLogger::init(
        args.log_level_filter(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    match &args.command {
        Commands::Configuration(cmd_args) => {
            let client_manager = args.client_manager()?;
            configuration::run(&client_manager, cmd_args)
        }
        Commands::AuthPlugins(cmd_args) => auth_plugins::run(cmd_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = Args::try_parse_from([
            "cloudconf",
            "configuration",
            "show",
            "--unmask",
            "--os-auth-type",
            "v3token",
            "--no-env",
            "-v",
        ])
        .unwrap();
        assert!(args.verbose);
        assert!(args.no_env);
        assert_eq!(args.os_auth_type.as_deref(), Some("v3token"));
        assert_eq!(args.log_level_filter(), LevelFilter::Debug);
        assert!(matches!(args.command, Commands::Configuration(_)));
    }

    #[test]
    fn test_auth_plugins_command() {
        let args = Args::try_parse_from(["cloudconf", "auth-plugins"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.log_level_filter(), LevelFilter::Info);
        assert!(matches!(args.command, Commands::AuthPlugins(_)));
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Args::try_parse_from(["cloudconf"]).is_err());
    }
}
