// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `auth-plugins` CLI subcommand.

use crate::auth_plugin::{BuiltinAuthPlugins, PluginOptionsProvider};
use clap::Parser;
use itertools::Itertools;
use std::io::{self, Write};

/// Command line arguments for the `auth-plugins` CLI command.
#[derive(Parser, Debug)]
pub struct Args;

/// Write each plugin name together with its secret options.
fn list_plugins<W: Write>(
    plugins: &impl PluginOptionsProvider,
    names: &[&str],
    out: &mut W,
) -> crate::Result<()> {
    for name in names {
        let secrets = plugins
            .plugin_options(name)?
            .into_iter()
            .filter(|option| option.secret)
            .map(|option| option.dest)
            .join(", ");
        if secrets.is_empty() {
            writeln!(out, "{name}")?;
        } else {
            writeln!(out, "{name} (secret: {secrets})")?;
        }
    }
    Ok(())
}

/// Run the `auth-plugins` command.
pub fn run(_args: &Args) -> crate::Result<()> {
    list_plugins(
        &BuiltinAuthPlugins,
        BuiltinAuthPlugins::names(),
        &mut io::stdout().lock(),
    )
}
