// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed response shapes returned by the Hyperion server.

mod server_info;
mod system_info;

pub use server_info::{
    ActiveEffect, Component, Grabber, Grabbers, Instance, Led, LedDevices, PrioritySource,
    PriorityValue, ServerInfo,
};
pub use system_info::{HostInfo, HyperionInfo, SystemInfo};

use serde::Deserialize;

/// The envelope every server reply is wrapped in.
///
/// `info` carries the command-dependent payload and is only meaningful
/// when `success` is true; control commands return no `info` at all.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope<T> {
    #[serde(default)]
    pub command: String,

    #[serde(default)]
    pub instance: i64,

    pub success: bool,

    #[serde(default)]
    pub error: String,

    #[serde(default)]
    pub tan: i64,

    pub info: Option<T>,
}
