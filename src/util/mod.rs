// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Utility functions

#[cfg(test)]
mod testing;

#[cfg(test)]
pub use testing::{
    FakeClientManager, FakePluginOptions, AUTH_TOKEN, PASSWORD, REGION_NAME, USERNAME, VERSION,
};
