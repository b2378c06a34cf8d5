// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static system information returned by the `sysinfo` command.

use serde::Deserialize;

/// Basic information about the Hyperion server and its host.
///
/// Returned by [`Client::system_info`](crate::Client::system_info).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemInfo {
    /// Hyperion build metadata.
    pub hyperion: HyperionInfo,

    /// Host machine metadata.
    pub system: HostInfo,
}

/// Build metadata of the Hyperion daemon.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HyperionInfo {
    /// Build identifier.
    pub build: String,

    /// Git remote the build came from.
    #[serde(rename = "gitremote")]
    pub git_remote: String,

    /// Unique server id.
    pub id: String,

    /// Whether the server runs in GUI mode.
    pub is_gui_mode: bool,

    /// Whether the configuration is read-only.
    pub read_only_mode: bool,

    /// Configuration root path.
    pub root_path: String,

    /// Build timestamp.
    pub time: String,

    /// Server version.
    pub version: String,
}

/// Metadata of the machine the server runs on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostInfo {
    /// CPU architecture, e.g. `arm` or `x86_64`.
    pub architecture: String,

    /// CPU hardware description.
    pub cpu_hardware: String,

    /// CPU model name.
    pub cpu_model_name: String,

    /// CPU model type.
    pub cpu_model_type: String,

    /// CPU revision.
    pub cpu_revision: String,

    /// DNS domain name.
    pub domain_name: String,

    /// Host name.
    pub host_name: String,

    /// Whether the server process has admin rights.
    pub is_user_admin: bool,

    /// Kernel type, e.g. `linux`.
    pub kernel_type: String,

    /// Kernel version.
    pub kernel_version: String,

    /// Pretty OS name.
    pub pretty_name: String,

    /// OS product type.
    pub product_type: String,

    /// OS product version.
    pub product_version: String,

    /// Python version the effect engine runs on.
    pub py_version: String,

    /// Qt version the server was built with.
    pub qt_version: String,

    /// Word size of the build, e.g. `64`.
    pub word_size: String,
}
