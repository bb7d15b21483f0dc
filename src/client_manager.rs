// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! The client manager owns the effective configuration of the current session.

use crate::config::{ClientConfig, ConfigMap};

/// Access to the effective client configuration.
pub trait ClientManagerLike {
    /// A snapshot of the current effective configuration.
    fn configuration(&self) -> ConfigMap;

    /// Name of the active auth plugin, if one has been selected.
    fn auth_plugin_name(&self) -> Option<&str>;
}

/// Client manager backed by an already assembled configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientManager {
    /// The effective configuration.
    configuration: ConfigMap,
    /// The active auth plugin.
    auth_plugin_name: Option<String>,
}

impl ClientManager {
    /// Create a new client manager.
    #[must_use]
    pub fn new(configuration: ConfigMap, auth_plugin_name: Option<String>) -> Self {
        Self {
            configuration,
            auth_plugin_name: auth_plugin_name.filter(|name| !name.is_empty()),
        }
    }

    /// Create a client manager from a loaded configuration.
    ///
    /// The auth plugin is `auth_type_override` if given, and the configured `auth_type` otherwise.
    #[must_use]
    pub fn from_config(config: ClientConfig, auth_type_override: Option<&str>) -> Self {
        let auth_plugin_name = auth_type_override
            .filter(|name| !name.is_empty())
            .or_else(|| config.auth_type())
            .map(ToOwned::to_owned);
        Self::new(config.into_map(), auth_plugin_name)
    }
}

impl ClientManagerLike for ClientManager {
    fn configuration(&self) -> ConfigMap {
        self.configuration.clone()
    }

    fn auth_plugin_name(&self) -> Option<&str> {
        self.auth_plugin_name.as_deref()
    }
}
