// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON-RPC client session for a Hyperion server.
//!
//! [`Client`] owns the endpoint URL, authentication token, headers and
//! retry behavior. Every command method serializes a request envelope,
//! POSTs it and decodes the response envelope; transport-level failures
//! are retried, a received response never is.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ParseError, ProtocolError, Result, ServerError};
use crate::logger::{Logger, TracingLogger};
use crate::response::ResponseEnvelope;

const CLIENT_NAME: &str = "hyperion-ng";
const CLIENT_HEADER: HeaderName = HeaderName::from_static("x-client");

/// Error text the server replies with when a token is missing.
const AUTH_ERROR: &str = "no authorization";

const ATTEMPT_COUNT: u32 = 5;
const ATTEMPT_DELAY: Duration = Duration::from_secs(5);

/// Client session for a Hyperion server.
///
/// The session is immutable after construction and can be shared across
/// tasks; every call is independent.
///
/// # Examples
///
/// ```no_run
/// use hyperion_lib::{Client, ClientConfig};
///
/// #[tokio::main]
/// async fn main() -> hyperion_lib::Result<()> {
///     let config = ClientConfig::new("192.168.1.50")
///         .with_port(8090)
///         .with_token("6c224a4c-6ebf-491a-9d70-fb7681ca2a59");
///
///     let client = Client::new(config)?;
///     client.set_color(&[255, 0, 0], 50, "my-app", None).await?;
///     Ok(())
/// }
/// ```
pub struct Client {
    http: reqwest::Client,
    url: String,
    token: Option<String>,
    headers: HeaderMap,
    verbose_logging: bool,
    logger: Arc<dyn Logger>,
    attempt_delay: Duration,
}

impl Client {
    /// Creates a new client from a connection configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created or the token
    /// is not a valid header value.
    pub fn new(mut config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ProtocolError::Http)?;

        let token = config.take_token();

        let mut headers = HeaderMap::new();
        if let Some(token) = &token {
            let value = HeaderValue::from_str(&format!("token {token}"))
                .map_err(|e| ProtocolError::InvalidHeader(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CLIENT_HEADER, HeaderValue::from_static(CLIENT_NAME));

        Ok(Self {
            http,
            url: config.endpoint_url(),
            token,
            headers,
            verbose_logging: config.verbose_logging(),
            logger: Arc::new(TracingLogger),
            attempt_delay: ATTEMPT_DELAY,
        })
    }

    /// Replaces the default logger.
    #[must_use]
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Adds extra request headers, applied on top of the defaults.
    ///
    /// A colliding key replaces the built-in header, including the
    /// `X-Client` identification and the `Authorization` token.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        for (name, value) in &headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// Returns the JSON-RPC endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.url
    }

    #[cfg(test)]
    pub(crate) fn with_attempt_delay(mut self, delay: Duration) -> Self {
        self.attempt_delay = delay;
        self
    }

    /// Executes a request whose reply carries no `info` payload.
    pub(crate) async fn send<R>(&self, request: &R) -> Result<()>
    where
        R: Serialize + ?Sized,
    {
        self.roundtrip::<R, serde::de::IgnoredAny>(request)
            .await
            .map(|_| ())
    }

    /// Executes a request and decodes the reply's `info` payload into `T`.
    pub(crate) async fn fetch<R, T>(&self, request: &R) -> Result<T>
    where
        R: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.roundtrip(request).await? {
            Some(info) => Ok(info),
            None => Err(ParseError::MissingField("info").into()),
        }
    }

    async fn roundtrip<R, T>(&self, request: &R) -> Result<Option<T>>
    where
        R: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(request).map_err(ParseError::Json)?;

        if self.verbose_logging {
            self.log_request(&body);
        }

        let response = self.attempt_request(&body).await?;

        let status = response.status();
        let text = response.text().await.map_err(ProtocolError::Http)?;

        if self.verbose_logging {
            self.logger.info(&format!("<<< {status}\n{text}"));
        }

        // The HTTP status is not consulted: the envelope's success flag is
        // the protocol's failure signal.
        let envelope: ResponseEnvelope<T> =
            serde_json::from_str(&text).map_err(ParseError::Json)?;

        tracing::debug!(
            command = %envelope.command,
            instance = envelope.instance,
            tan = envelope.tan,
            success = envelope.success,
            "decoded response envelope"
        );

        if !envelope.success {
            if self.token.is_none() && envelope.error.eq_ignore_ascii_case(AUTH_ERROR) {
                return Err(ServerError::TokenRequired.into());
            }
            return Err(ServerError::Rejected(envelope.error).into());
        }

        Ok(envelope.info)
    }

    /// POSTs the body, retrying transport-level failures. Any received
    /// response ends the loop.
    async fn attempt_request(&self, body: &[u8]) -> Result<reqwest::Response> {
        let mut attempt = 1;
        loop {
            let result = self
                .http
                .post(&self.url)
                .headers(self.headers.clone())
                .body(body.to_vec())
                .send()
                .await;

            match result {
                Ok(response) => return Ok(response),
                Err(err) => {
                    self.logger.warn(&format!(
                        "could not connect to Hyperion [{}] (attempt {attempt}): {err}",
                        self.url
                    ));

                    if attempt == ATTEMPT_COUNT {
                        return Err(ProtocolError::Http(err).into());
                    }

                    attempt += 1;
                    tokio::time::sleep(self.attempt_delay).await;
                }
            }
        }
    }

    fn log_request(&self, body: &[u8]) {
        let mut dump = format!(">>> POST {}\n", self.url);
        for (name, value) in &self.headers {
            dump.push_str(name.as_str());
            dump.push_str(": ");
            dump.push_str(value.to_str().unwrap_or("<binary>"));
            dump.push('\n');
        }
        dump.push('\n');
        dump.push_str(&String::from_utf8_lossy(body));
        self.logger.info(&dump);
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use super::*;
    use crate::error::Error;

    const SUCCESS_BODY: &str = r#"{"command":"color","instance":0,"success":true,"error":"","tan":0}"#;

    #[derive(Default)]
    struct Collector {
        infos: Mutex<Vec<String>>,
        warns: Mutex<Vec<String>>,
    }

    impl Logger for Collector {
        fn info(&self, msg: &str) {
            self.infos.lock().unwrap().push(msg.to_string());
        }

        fn warn(&self, msg: &str) {
            self.warns.lock().unwrap().push(msg.to_string());
        }

        fn error(&self, _msg: &str) {}
    }

    /// Reads one HTTP request (headers plus content-length body).
    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }

            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..pos]).to_ascii_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);

                if buf.len() >= pos + 4 + content_length {
                    return;
                }
            }
        }
    }

    /// Minimal server that drops the first `failures` connections before
    /// replying, so the client sees transport errors, then responses.
    async fn flaky_server(failures: usize, body: &'static str) -> (SocketAddr, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let connections = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&connections);

        tokio::spawn(async move {
            let mut remaining = failures;
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                counter.fetch_add(1, Ordering::SeqCst);

                if remaining > 0 {
                    remaining -= 1;
                    drop(socket);
                    continue;
                }

                read_request(&mut socket).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (addr, connections)
    }

    fn test_client(addr: SocketAddr, logger: Arc<Collector>) -> Client {
        let config = ClientConfig::new(addr.ip().to_string()).with_port(addr.port());
        Client::new(config)
            .unwrap()
            .with_attempt_delay(Duration::from_millis(1))
            .with_logger(logger)
    }

    #[tokio::test]
    async fn recovers_after_transport_failures() {
        let (addr, connections) = flaky_server(2, SUCCESS_BODY).await;
        let logger = Arc::new(Collector::default());
        let client = test_client(addr, Arc::clone(&logger));

        client
            .send(&serde_json::json!({"command": "color"}))
            .await
            .unwrap();

        assert_eq!(connections.load(Ordering::SeqCst), 3);
        let warns = logger.warns.lock().unwrap();
        assert_eq!(warns.len(), 2);
        assert!(warns[1].contains("(attempt 2)"));
    }

    #[tokio::test]
    async fn gives_up_after_five_attempts() {
        // Bind and drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let logger = Arc::new(Collector::default());
        let client = test_client(addr, Arc::clone(&logger));

        let err = client
            .send(&serde_json::json!({"command": "color"}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Protocol(ProtocolError::Http(_))));
        let warns = logger.warns.lock().unwrap();
        assert_eq!(warns.len(), 5);
        assert!(warns[4].contains("(attempt 5)"));
    }

    #[tokio::test]
    async fn received_response_is_not_retried() {
        let failure = r#"{"command":"sourceselect","instance":0,"success":false,"error":"Priority invalid","tan":0}"#;
        let (addr, connections) = flaky_server(0, failure).await;
        let logger = Arc::new(Collector::default());
        let client = test_client(addr, Arc::clone(&logger));

        let err = client
            .send(&serde_json::json!({"command": "sourceselect", "priority": -1}))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Server(ServerError::Rejected(ref msg)) if msg == "Priority invalid"
        ));
        assert_eq!(connections.load(Ordering::SeqCst), 1);
        assert!(logger.warns.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn verbose_logging_dumps_request_and_response() {
        let (addr, _) = flaky_server(0, SUCCESS_BODY).await;
        let logger = Arc::new(Collector::default());
        let config = ClientConfig::new(addr.ip().to_string())
            .with_port(addr.port())
            .with_token("secret")
            .with_verbose_logging();
        let client = Client::new(config)
            .unwrap()
            .with_logger(Arc::clone(&logger));

        client
            .send(&serde_json::json!({"command": "color"}))
            .await
            .unwrap();

        let infos = logger.infos.lock().unwrap();
        assert_eq!(infos.len(), 2);
        assert!(infos[0].starts_with(">>> POST http://"));
        assert!(infos[0].contains("authorization: token secret"));
        assert!(infos[0].contains("x-client: hyperion-ng"));
        assert!(infos[0].contains(r#"{"command":"color"}"#));
        assert!(infos[1].starts_with("<<< 200 OK"));
        assert!(infos[1].contains(r#""success":true"#));
    }

    #[tokio::test]
    async fn auth_failure_without_token_asks_for_token() {
        let body = r#"{"command":"color","instance":0,"success":false,"error":"No Authorization","tan":0}"#;
        let (addr, _) = flaky_server(0, body).await;
        let client = test_client(addr, Arc::new(Collector::default()));

        let err = client
            .send(&serde_json::json!({"command": "color"}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Server(ServerError::TokenRequired)));
    }

    #[tokio::test]
    async fn auth_failure_with_token_keeps_server_text() {
        let body = r#"{"command":"color","instance":0,"success":false,"error":"No Authorization","tan":0}"#;
        let (addr, _) = flaky_server(0, body).await;
        let config = ClientConfig::new(addr.ip().to_string())
            .with_port(addr.port())
            .with_token("expired");
        let client = Client::new(config)
            .unwrap()
            .with_attempt_delay(Duration::from_millis(1));

        let err = client
            .send(&serde_json::json!({"command": "color"}))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Server(ServerError::Rejected(ref msg)) if msg == "No Authorization"
        ));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_parse_error() {
        let (addr, _) = flaky_server(0, "not json").await;
        let client = test_client(addr, Arc::new(Collector::default()));

        let err = client
            .send(&serde_json::json!({"command": "color"}))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }
}
