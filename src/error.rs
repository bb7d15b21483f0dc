// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Error and result types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum ErrorType {
    /// Configuration error.
    #[error("Configuration Error ({0})")]
    Config(#[from] crate::config::ConfigError),
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),
    /// I/O Error.
    #[error("Input/Output error ({:?})", .0)]
    Io(#[from] io::Error),
    /// The plugin options provider does not know the requested auth plugin.
    #[error("The plugin {0} could not be found")]
    NoMatchingPlugin(String),
    /// The `auth` entry of the configuration is not a mapping.
    #[error("The auth configuration is not a mapping")]
    MalformedAuth,
    /// The logger could not be initialized.
    #[error("Failed to initialize logger ({0})")]
    Logger(#[from] log::SetLoggerError),
    /// Output serialization failed.
    #[error("Serialization failed ({0})")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type.
pub type Result<T> = std::result::Result<T, ErrorType>;
