// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pluggable logging sink for the client.
//!
//! The client reports retry warnings and, in verbose mode, full request
//! and response dumps through a [`Logger`]. The default implementation
//! forwards to the `tracing` macros; applications with their own logging
//! setup can substitute any conforming implementation via
//! [`Client::with_logger`](crate::Client::with_logger).

/// Severity-tagged logging sink.
///
/// # Examples
///
/// ```
/// use hyperion_lib::Logger;
///
/// struct Collector(std::sync::Mutex<Vec<String>>);
///
/// impl Logger for Collector {
///     fn info(&self, msg: &str) {
///         self.0.lock().unwrap().push(msg.to_string());
///     }
///     fn warn(&self, msg: &str) {
///         self.0.lock().unwrap().push(msg.to_string());
///     }
///     fn error(&self, msg: &str) {
///         self.0.lock().unwrap().push(msg.to_string());
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Logs an informational message.
    fn info(&self, msg: &str);

    /// Logs a warning.
    fn warn(&self, msg: &str);

    /// Logs an error.
    fn error(&self, msg: &str);
}

impl<L: Logger + ?Sized> Logger for std::sync::Arc<L> {
    fn info(&self, msg: &str) {
        (**self).info(msg);
    }

    fn warn(&self, msg: &str) {
        (**self).warn(msg);
    }

    fn error(&self, msg: &str) {
        (**self).error(msg);
    }
}

/// Default logger forwarding to the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}
