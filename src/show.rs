// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Display of the effective configuration with credentials masked.

use crate::auth_plugin::PluginOptionsProvider;
use crate::client_manager::ClientManagerLike;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Marker that replaces the value of masked fields.
pub const REDACTED: &str = "<redacted>";

/// Secret options assumed if no auth plugin is active.
pub const DEFAULT_SECRET_OPTIONS: [&str; 2] = ["password", "token"];

/// Key of the nested auth options in the configuration.
const AUTH_KEY: &str = "auth";

/// Determine the names of the options that need to be masked.
///
/// If the client manager has an active auth plugin, the secret options of that plugin are used
/// *instead of* the default ones, so a plugin without secret options yields an empty set.
///
/// # Errors
///
/// Fails if the plugin options cannot be looked up.
pub fn secret_options(
    client_manager: &impl ClientManagerLike,
    plugins: &impl PluginOptionsProvider,
) -> crate::Result<BTreeSet<String>> {
    let Some(plugin_name) = client_manager
        .auth_plugin_name()
        .filter(|name| !name.is_empty())
    else {
        log::debug!("No auth plugin active, using default secret options");
        return Ok(DEFAULT_SECRET_OPTIONS.iter().map(|&name| name.to_owned()).collect());
    };

    let options: BTreeSet<String> = plugins
        .plugin_options(plugin_name)?
        .into_iter()
        .filter(|option| option.secret)
        .map(|option| option.dest)
        .collect();
    log::debug!("Using secret options {options:?} of auth plugin {plugin_name}");
    Ok(options)
}

/// Flatten and mask the configuration for display.
///
/// Every entry of the nested `auth` mapping is moved to the top level as `auth.<key>`. If `mask`
/// is set, secret auth entries (compared case-insensitively) are replaced with [`REDACTED`], and
/// every secret option name is set to [`REDACTED`] at the top level as well. Note that the latter
/// adds the key if the configuration did not contain it.
///
/// Returns the sorted column names and their values. The configuration of the client manager is
/// left untouched.
///
/// # Errors
///
/// Fails if the plugin options cannot be looked up or if the `auth` entry is not a mapping.
pub fn show_configuration(
    client_manager: &impl ClientManagerLike,
    plugins: &impl PluginOptionsProvider,
    mask: bool,
) -> crate::Result<(Vec<String>, Vec<Value>)> {
    let secret_options = secret_options(client_manager, plugins)?;

    let mut info: BTreeMap<String, Value> = client_manager.configuration().into_iter().collect();
    let auth = match info.remove(AUTH_KEY) {
        None | Some(Value::Null) => serde_json::Map::new(),
        Some(Value::Object(auth)) => auth,
        Some(_) => return Err(crate::Error::MalformedAuth),
    };
    log::debug!("Flattening {} auth options", auth.len());

    info.extend(auth.into_iter().map(|(key, value)| {
        let value = if mask && secret_options.contains(&key.to_lowercase()) {
            Value::from(REDACTED)
        } else {
            value
        };
        (format!("{AUTH_KEY}.{key}"), value)
    }));

    if mask {
        info.extend(
            secret_options
                .iter()
                .map(|name| (name.clone(), Value::from(REDACTED))),
        );
    }

    Ok(info.into_iter().unzip())
}
