// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Fakes for the collaborators of the configuration display.

use crate::auth_plugin::{PluginOption, PluginOptionsProvider};
use crate::client_manager::ClientManagerLike;
use crate::config::ConfigMap;
use serde_json::Value;
use std::cell::RefCell;

/// Username used in fake configurations.
pub const USERNAME: &str = "admin";
/// Password used in fake configurations.
pub const PASSWORD: &str = "secret123";
/// Token used in fake configurations.
pub const AUTH_TOKEN: &str = "foobar";
/// Region name used in fake configurations.
pub const REGION_NAME: &str = "RegionOne";
/// Identity API version used in fake configurations.
pub const VERSION: &str = "3";

/// A client manager that returns a fixed configuration.
#[derive(Debug, Clone)]
pub struct FakeClientManager {
    /// The configuration snapshot handed out by [`ClientManagerLike::configuration`].
    pub configuration: ConfigMap,
    /// The active auth plugin.
    pub auth_plugin_name: Option<String>,
}

impl FakeClientManager {
    /// Create a fake from a JSON object.
    ///
    /// # Panics
    ///
    /// Panics if `configuration` is not a JSON object.
    #[must_use]
    pub fn new(configuration: Value, auth_plugin_name: Option<&str>) -> Self {
        let Value::Object(configuration) = configuration else {
            panic!("fake configuration must be a JSON object");
        };
        Self {
            configuration,
            auth_plugin_name: auth_plugin_name.map(ToOwned::to_owned),
        }
    }

    /// The configuration used by the command tests, with the password plugin active.
    #[must_use]
    pub fn with_password_plugin() -> Self {
        Self::new(
            serde_json::json!({
                "region": REGION_NAME,
                "identity_api_version": VERSION,
                "auth": {
                    "username": USERNAME,
                    "password": PASSWORD,
                    "token": AUTH_TOKEN,
                },
            }),
            Some("password"),
        )
    }
}

impl ClientManagerLike for FakeClientManager {
    fn configuration(&self) -> ConfigMap {
        self.configuration.clone()
    }

    fn auth_plugin_name(&self) -> Option<&str> {
        self.auth_plugin_name.as_deref()
    }
}

/// A plugin options provider that returns the same options for every plugin and records the
/// names it was asked for.
#[derive(Debug, Default)]
pub struct FakePluginOptions {
    /// Options returned for any plugin.
    pub options: Vec<PluginOption>,
    /// Plugin names that were looked up.
    pub requested: RefCell<Vec<String>>,
}

impl FakePluginOptions {
    /// Create a provider that reports the given `(dest, secret)` pairs.
    #[must_use]
    pub fn new(options: &[(&str, bool)]) -> Self {
        let options = options
            .iter()
            .map(|&(dest, secret)| PluginOption::new(dest, secret, ""))
            .collect();
        Self {
            options,
            requested: RefCell::default(),
        }
    }
}

impl PluginOptionsProvider for FakePluginOptions {
    fn plugin_options(&self, plugin_name: &str) -> crate::Result<Vec<PluginOption>> {
        self.requested.borrow_mut().push(plugin_name.to_owned());
        Ok(self.options.clone())
    }
}
