// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection configuration for a Hyperion server.

use std::time::Duration;

/// Configuration for connecting to a Hyperion server over HTTP/S.
///
/// The configuration is consumed once by [`Client::new`](crate::Client::new);
/// the client derives its endpoint URL and request timeout from it and is
/// immutable afterwards.
///
/// # Examples
///
/// ```
/// use hyperion_lib::ClientConfig;
/// use std::time::Duration;
///
/// // Minimal configuration
/// let config = ClientConfig::new("192.168.1.50");
///
/// // With all options
/// let config = ClientConfig::new("192.168.1.50")
///     .with_port(8090)
///     .with_tls()
///     .with_token("6c224a4c-6ebf-491a-9d70-fb7681ca2a59")
///     .with_timeout(Duration::from_secs(10))
///     .with_verbose_logging();
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    host: String,
    port: u16,
    use_tls: bool,
    token: Option<String>,
    timeout: Duration,
    verbose_logging: bool,
}

impl ClientConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the Hyperion server
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 0,
            use_tls: false,
            token: None,
            timeout: Self::DEFAULT_TIMEOUT,
            verbose_logging: false,
        }
    }

    /// Sets the server port. Port 0 leaves the port out of the URL.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables TLS (`https` scheme).
    #[must_use]
    pub fn with_tls(mut self) -> Self {
        self.use_tls = true;
        self
    }

    /// Sets the authentication token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the request timeout. A zero duration falls back to
    /// [`DEFAULT_TIMEOUT`](Self::DEFAULT_TIMEOUT).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables dumping of full requests and responses to the logger.
    #[must_use]
    pub fn with_verbose_logging(mut self) -> Self {
        self.verbose_logging = true;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port (0 when unset).
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether TLS is enabled.
    #[must_use]
    pub fn use_tls(&self) -> bool {
        self.use_tls
    }

    /// Returns the token if set.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the configured or default timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            Self::DEFAULT_TIMEOUT
        } else {
            self.timeout
        }
    }

    /// Returns whether verbose logging is enabled.
    #[must_use]
    pub fn verbose_logging(&self) -> bool {
        self.verbose_logging
    }

    /// Builds the JSON-RPC endpoint URL from this configuration.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        let port_suffix = if self.port > 0 {
            format!(":{}", self.port)
        } else {
            String::new()
        };
        format!("{scheme}://{}{port_suffix}/json-rpc", self.host)
    }

    pub(crate) fn take_token(&mut self) -> Option<String> {
        self.token.take()
    }
}
