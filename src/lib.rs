// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hyperion Lib - A Rust client for Hyperion ambient lighting servers.
//!
//! This library talks to the [Hyperion](https://hyperion-project.org)
//! JSON-RPC API over HTTP/S. It covers the control commands (colors,
//! effects, images, source selection, calibration, components, video
//! mode, instances) and the state queries (`serverinfo`, `sysinfo`).
//!
//! Transport failures are retried transparently; once a response is
//! received it is final, and server-reported failures come back as typed
//! errors.
//!
//! # Quick Start
//!
//! ```no_run
//! use hyperion_lib::{Client, ClientConfig, Effect};
//!
//! #[tokio::main]
//! async fn main() -> hyperion_lib::Result<()> {
//!     let config = ClientConfig::new("192.168.1.50")
//!         .with_port(8090)
//!         .with_token("6c224a4c-6ebf-491a-9d70-fb7681ca2a59");
//!
//!     let client = Client::new(config)?;
//!
//!     // Solid red at priority 50 for 5 seconds
//!     client.set_color(&[255, 0, 0], 50, "my-app", Some(5000)).await?;
//!
//!     // Start a named effect
//!     let effect = Effect::new("Blue mood blobs");
//!     client.set_effect(&effect, 50, "my-app", None).await?;
//!
//!     // Inspect the server
//!     let info = client.server_info().await?;
//!     for instance in &info.instances {
//!         println!("{} running={}", instance.name, instance.running);
//!     }
//!
//!     client.clear_priority(50).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Custom Logger
//!
//! Retry warnings and verbose request dumps go through the [`Logger`]
//! trait; the default forwards to `tracing`. Substitute your own sink:
//!
//! ```no_run
//! use hyperion_lib::{Client, ClientConfig, Logger};
//!
//! struct Stderr;
//!
//! impl Logger for Stderr {
//!     fn info(&self, msg: &str) {
//!         eprintln!("[INFO] {msg}");
//!     }
//!     fn warn(&self, msg: &str) {
//!         eprintln!("[WARN] {msg}");
//!     }
//!     fn error(&self, msg: &str) {
//!         eprintln!("[ERROR] {msg}");
//!     }
//! }
//!
//! # fn example() -> hyperion_lib::Result<()> {
//! let client = Client::new(ClientConfig::new("192.168.1.50"))?.with_logger(Stderr);
//! # Ok(())
//! # }
//! ```

mod client;
mod command;
mod config;
mod control;
pub mod error;
mod info;
mod logger;
pub mod response;
pub mod types;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, ParseError, ProtocolError, Result, ServerError, ValueError};
pub use logger::{Logger, TracingLogger};
pub use response::{Component, Instance, ServerInfo, SystemInfo};
pub use types::{Adjustment, Effect, Image, InstanceCommand, LedMappingMode, VideoMode};

// Extra headers are plain reqwest header maps; re-exported so callers
// don't need a direct reqwest dependency.
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
