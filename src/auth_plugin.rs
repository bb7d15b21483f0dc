// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Auth plugin option metadata.
//!
//! Every auth plugin declares the options it accepts. Options that carry credentials are flagged as
//! secret, which is what decides whether a configuration field gets masked for display.

use std::collections::BTreeSet;

/// A single option accepted by an auth plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOption {
    /// Option name as used on the command line (e.g. `auth-url`).
    pub name: String,
    /// Destination name of the option in the configuration (e.g. `auth_url`).
    pub dest: String,
    /// Whether the option holds a credential.
    pub secret: bool,
    /// Help text.
    pub help: String,
}

impl PluginOption {
    /// Create a new option. The destination is derived from the name.
    #[must_use]
    pub fn new(name: impl Into<String>, secret: bool, help: impl Into<String>) -> Self {
        let name = name.into();
        let dest = name.replace('-', "_");
        Self {
            name,
            dest,
            secret,
            help: help.into(),
        }
    }
}

/// Provides the option definitions of auth plugins.
pub trait PluginOptionsProvider {
    /// Get the options of the auth plugin with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoMatchingPlugin`] if no plugin with this name exists.
    fn plugin_options(&self, plugin_name: &str) -> crate::Result<Vec<PluginOption>>;
}

/// Static description of a plugin option: `(name, secret, help)`.
type OptionSpec = (&'static str, bool, &'static str);

/// Options for the URL of the identity service.
const AUTH_URL_OPTIONS: &[OptionSpec] = &[("auth-url", false, "Authentication URL")];

/// Options for scoping a token to a domain, project, trust or system.
const SCOPE_OPTIONS: &[OptionSpec] = &[
    ("system-scope", false, "Scope for system operations"),
    ("domain-id", false, "Domain ID to scope to"),
    ("domain-name", false, "Domain name to scope to"),
    ("project-id", false, "Project ID to scope to"),
    ("project-name", false, "Project name to scope to"),
    ("project-domain-id", false, "Domain ID containing project"),
    ("project-domain-name", false, "Domain name containing project"),
    ("trust-id", false, "ID of the trust to use as a trustee use"),
    ("default-domain-id", false, "Optional domain ID to use with v3 and v2 parameters"),
    ("default-domain-name", false, "Optional domain name to use with v3 and v2 parameters"),
];

/// Options identifying a user.
const USER_OPTIONS: &[OptionSpec] = &[
    ("user-id", false, "User ID"),
    ("username", false, "Username"),
    ("user-domain-id", false, "User's domain id"),
    ("user-domain-name", false, "User's domain name"),
];

/// Identity v2 tenant options.
const TENANT_OPTIONS: &[OptionSpec] = &[
    ("tenant-id", false, "Tenant ID"),
    ("tenant-name", false, "Tenant Name"),
    ("trust-id", false, "ID of the trust to use as a trustee use"),
];

/// Identity v2 user options.
const V2_USER_OPTIONS: &[OptionSpec] = &[
    ("user-id", false, "User ID"),
    ("username", false, "Username"),
];

/// Password credential.
const PASSWORD_OPTIONS: &[OptionSpec] = &[("password", true, "User's password")];

/// Token credential.
const TOKEN_OPTIONS: &[OptionSpec] = &[("token", true, "Token to authenticate with")];

/// Application credential options.
const APPLICATION_CREDENTIAL_OPTIONS: &[OptionSpec] = &[
    ("application-credential-id", false, "Application credential ID"),
    ("application-credential-name", false, "Application credential name"),
    ("application-credential-secret", true, "Application credential auth secret"),
];

/// TOTP passcode.
const TOTP_OPTIONS: &[OptionSpec] = &[("passcode", true, "User's TOTP passcode")];

/// OpenID Connect options.
const OIDC_OPTIONS: &[OptionSpec] = &[
    ("identity-provider", false, "Identity Provider's name"),
    ("protocol", false, "Protocol for federated plugin"),
    ("client-id", false, "OAuth 2.0 Client ID"),
    ("client-secret", true, "OAuth 2.0 Client Secret"),
    ("discovery-endpoint", false, "OpenID Connect Discovery Document URL"),
    ("access-token-type", false, "OAuth 2.0 Authorization Server Introspection token type"),
];

/// Static option endpoint for the `admin_token` plugin.
const ENDPOINT_OPTIONS: &[OptionSpec] =
    &[("endpoint", false, "The endpoint that will always be used")];

/// Username for the OpenID Connect password grant.
const OIDC_USERNAME_OPTIONS: &[OptionSpec] = &[("username", false, "Username")];

/// Registry of the built-in auth plugins.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAuthPlugins;

impl BuiltinAuthPlugins {
    /// The option groups that make up the plugin with the given name.
    fn option_groups(plugin_name: &str) -> Option<&'static [&'static [OptionSpec]]> {
        let groups: &'static [&'static [OptionSpec]] = match plugin_name {
            "password" | "v3password" => &[
                AUTH_URL_OPTIONS,
                SCOPE_OPTIONS,
                USER_OPTIONS,
                PASSWORD_OPTIONS,
            ],
            "token" | "v3token" => &[AUTH_URL_OPTIONS, SCOPE_OPTIONS, TOKEN_OPTIONS],
            "v2password" => &[
                AUTH_URL_OPTIONS,
                TENANT_OPTIONS,
                V2_USER_OPTIONS,
                PASSWORD_OPTIONS,
            ],
            "v2token" => &[AUTH_URL_OPTIONS, TENANT_OPTIONS, TOKEN_OPTIONS],
            "v3applicationcredential" => &[
                AUTH_URL_OPTIONS,
                SCOPE_OPTIONS,
                APPLICATION_CREDENTIAL_OPTIONS,
                USER_OPTIONS,
            ],
            "v3totp" => &[AUTH_URL_OPTIONS, SCOPE_OPTIONS, USER_OPTIONS, TOTP_OPTIONS],
            "v3oidcpassword" => &[
                AUTH_URL_OPTIONS,
                SCOPE_OPTIONS,
                OIDC_OPTIONS,
                OIDC_USERNAME_OPTIONS,
                PASSWORD_OPTIONS,
            ],
            "admin_token" => &[ENDPOINT_OPTIONS, TOKEN_OPTIONS],
            "none" => &[],
            _ => return None,
        };
        Some(groups)
    }

    /// Names of all registered plugins, in sorted order.
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        &[
            "admin_token",
            "none",
            "password",
            "token",
            "v2password",
            "v2token",
            "v3applicationcredential",
            "v3oidcpassword",
            "v3password",
            "v3token",
            "v3totp",
        ]
    }
}

impl PluginOptionsProvider for BuiltinAuthPlugins {
    fn plugin_options(&self, plugin_name: &str) -> crate::Result<Vec<PluginOption>> {
        let groups = Self::option_groups(plugin_name)
            .ok_or_else(|| crate::Error::NoMatchingPlugin(plugin_name.to_owned()))?;

        // Groups may overlap (e.g. `trust-id`), the first definition wins.
        let mut seen = BTreeSet::new();
        let options = groups
            .iter()
            .flat_map(|group| group.iter())
            .filter(|(name, _, _)| seen.insert(*name))
            .map(|&(name, secret, help)| PluginOption::new(name, secret, help))
            .collect();
        Ok(options)
    }
}
