// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Configuration loading.
//!
//! The effective client configuration is assembled from layered sources: the built-in defaults,
//! an optional TOML configuration file and `OS_*` environment variables. Later layers override
//! earlier ones, nested tables are merged key by key.

use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File, FileFormat};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use xdg::BaseDirectories;

/// Encountered when the configuration cannot be loaded.
#[derive(Error, Debug)]
#[error("Configuration Error: {0}")]
pub struct ConfigError(#[source] Box<::config::ConfigError>);

impl From<::config::ConfigError> for ConfigError {
    fn from(err: ::config::ConfigError) -> Self {
        Self(Box::new(err))
    }
}

/// A configuration mapping from option name to value.
pub type ConfigMap = serde_json::Map<String, Value>;

/// Default configuration TOML string.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Prefix used for the XDG base directories.
const XDG_PREFIX: &str = "cloudconf";

/// Name of the configuration file inside the XDG config directories.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix of environment variables that are taken into account.
const ENV_PREFIX: &str = "OS";

/// Separator for nested keys in environment variable names.
const ENV_SEPARATOR: &str = "__";

/// The assembled client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig(ConfigMap);

impl ClientConfig {
    /// A configuration builder that has the built-in defaults as its lowest layer.
    fn builder() -> ConfigBuilder<DefaultState> {
        ::config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    /// Environment variable source (`OS_REGION_NAME`, `OS_AUTH__PASSWORD`, ...).
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
    }

    /// Build all layers and deserialize the result.
    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let map = builder.build()?.try_deserialize::<ConfigMap>()?;
        Ok(Self(map))
    }

    /// Load the default configuration.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded defaults are malformed.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::build(Self::builder())
    }

    /// Load the configuration from a TOML string slice, on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text contains malformed configuration markup.
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Self::build(Self::builder().add_source(File::from_str(text, FileFormat::Toml)))
    }

    /// Load the configuration from a file located at the given path, on top of the defaults.
    ///
    /// # Errors
    ///
    /// This method can fail if the file does not exist or if it contains malformed configuration
    /// markup.
    pub fn load_from_path<T: AsRef<Path>>(path: T) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(crate::Error::ConfigFileNotFound(path.to_path_buf()));
        }
        let config = Self::build(
            Self::builder().add_source(File::from(path).format(FileFormat::Toml)),
        )?;
        Ok(config)
    }

    /// Load the effective configuration.
    ///
    /// If `path` is `None`, the configuration file is looked up in the XDG config directories and
    /// skipped if it does not exist. Environment variables are applied last unless
    /// `use_environment` is `false`.
    ///
    /// # Errors
    ///
    /// Fails if an explicitly given path does not exist, or if any layer is malformed.
    pub fn load(path: Option<&Path>, use_environment: bool) -> crate::Result<Self> {
        let mut builder = Self::builder();
        if let Some(path) = find_config_file(path)? {
            log::debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
        } else {
            log::debug!("No configuration file found, using defaults");
        }
        if use_environment {
            builder = builder.add_source(Self::environment());
        }
        let config = Self::build(builder)?;
        Ok(config)
    }

    /// The name of the configured auth plugin (the `auth_type` option), if any.
    #[must_use]
    pub fn auth_type(&self) -> Option<&str> {
        self.0
            .get("auth_type")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Access the underlying configuration mapping.
    #[must_use]
    pub fn as_map(&self) -> &ConfigMap {
        &self.0
    }

    /// Consume this configuration and return the underlying mapping.
    #[must_use]
    pub fn into_map(self) -> ConfigMap {
        self.0
    }
}

impl From<ConfigMap> for ClientConfig {
    fn from(map: ConfigMap) -> Self {
        Self(map)
    }
}

/// Resolve the path of the configuration file to load.
///
/// An explicitly given path has `~` expanded and must exist. Otherwise the XDG config directories
/// are searched.
fn find_config_file(path: Option<&Path>) -> crate::Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            let expanded = expanduser::expanduser(path.to_string_lossy())?;
            if expanded.is_file() {
                Ok(Some(expanded))
            } else {
                Err(crate::Error::ConfigFileNotFound(expanded))
            }
        }
        None => Ok(BaseDirectories::with_prefix(XDG_PREFIX).find_config_file(CONFIG_FILE_NAME)),
    }
}
