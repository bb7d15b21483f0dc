// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `configuration` CLI subcommand.

use super::format::{select_columns, OutputFormat};
use crate::auth_plugin::{BuiltinAuthPlugins, PluginOptionsProvider};
use crate::client_manager::ClientManagerLike;
use crate::show::show_configuration;
use clap::{Parser, Subcommand};
use std::io::{self, Write};

/// Command line arguments for the `configuration` CLI command.
#[derive(Parser, Debug)]
pub struct Args {
    /// Configuration action.
    #[command(subcommand)]
    command: Command,
}

/// Actions of the `configuration` CLI command.
#[derive(Subcommand, Debug)]
enum Command {
    /// Display configuration details.
    Show(ShowArgs),
}

/// Command line arguments for `configuration show`.
#[derive(Parser, Debug)]
struct ShowArgs {
    /// Attempt to mask passwords (default).
    #[arg(long, conflicts_with = "unmask")]
    mask: bool,
    /// Show password in clear text.
    #[arg(long)]
    unmask: bool,
    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
    /// Only show this column (can be repeated).
    #[arg(long = "column", value_name = "COLUMN")]
    columns: Vec<String>,
}

impl ShowArgs {
    /// Whether secret fields should be masked. Masking is the default unless `--unmask` is given.
    fn mask(&self) -> bool {
        self.mask || !self.unmask
    }
}

/// Run `configuration show` and write the result to `out`.
fn show<W: Write>(
    client_manager: &impl ClientManagerLike,
    plugins: &impl PluginOptionsProvider,
    args: &ShowArgs,
    out: &mut W,
) -> crate::Result<()> {
    let (columns, values) = show_configuration(client_manager, plugins, args.mask())?;
    let (columns, values) = select_columns(columns, values, &args.columns);
    args.format.write(out, &columns, &values)
}

/// Run the `configuration` command.
pub fn run(client_manager: &impl ClientManagerLike, args: &Args) -> crate::Result<()> {
    match &args.command {
        Command::Show(show_args) => show(
            client_manager,
            &BuiltinAuthPlugins,
            show_args,
            &mut io::stdout().lock(),
        ),
    }
}
