// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server state queries.

use crate::client::Client;
use crate::command::{CMD_SERVER_INFO, CMD_SYSTEM_INFO, Envelope};
use crate::error::Result;
use crate::response::{ServerInfo, SystemInfo};

impl Client {
    /// Retrieves the live state of the server: components, effects,
    /// calibration, priorities, instances and LED layout.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn server_info(&self) -> Result<ServerInfo> {
        self.fetch(&Envelope {
            command: CMD_SERVER_INFO,
            tan: Some(1),
            ..Envelope::default()
        })
        .await
    }

    /// Retrieves static build and host information about the server.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn system_info(&self) -> Result<SystemInfo> {
        self.fetch(&Envelope {
            command: CMD_SYSTEM_INFO,
            tan: Some(1),
            ..Envelope::default()
        })
        .await
    }
}
