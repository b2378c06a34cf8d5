// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Hyperion client.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: input validation, transport, response decoding, and errors
//! reported by the Hyperion server itself.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when talking
/// to a Hyperion server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during input validation, before any network call.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred at the transport level.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding a response body.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The server processed the request and reported a failure.
    #[error("server error: {0}")]
    Server(#[from] ServerError),
}

/// Errors raised by command input validation.
///
/// These are produced by the command methods on [`Client`](crate::Client)
/// before a request is constructed; no network traffic happens when one of
/// them is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Priority must be a positive integer.
    #[error("priority must be >= 1, got {0}")]
    InvalidPriority(i32),

    /// Origin must identify the caller with at least 3 characters.
    #[error("origin must be at least 3 characters, got {0:?}")]
    InvalidOrigin(String),

    /// Duration must be non-negative when given.
    #[error("duration must be >= 0, got {0}")]
    InvalidDuration(i32),

    /// A color needs at least 2 components ([R, G, B] or repeated).
    #[error("color requires at least 2 components, got {0}")]
    ColorRequired(usize),
}

/// Errors related to the HTTP transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed. After the retry loop is exhausted this holds
    /// the error of the final attempt.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured header value is not valid for HTTP transmission.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

/// Errors related to decoding server responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding of the response envelope failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(&'static str),
}

/// Failures reported by the Hyperion server in the response envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// The server rejected the request for lack of authorization and the
    /// client has no token configured.
    #[error("token is required")]
    TokenRequired,

    /// Any other rejection, carrying the server's literal error text.
    #[error("{0}")]
    Rejected(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidPriority(0);
        assert_eq!(err.to_string(), "priority must be >= 1, got 0");

        let err = ValueError::ColorRequired(1);
        assert_eq!(err.to_string(), "color requires at least 2 components, got 1");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidDuration(-5).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidDuration(-5))));
    }

    #[test]
    fn server_error_uses_literal_text() {
        let err = ServerError::Rejected("Priority 1 is not allowed".to_string());
        assert_eq!(err.to_string(), "Priority 1 is not allowed");
    }

    #[test]
    fn token_required_display() {
        let err: Error = ServerError::TokenRequired.into();
        assert_eq!(err.to_string(), "server error: token is required");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("info");
        assert_eq!(err.to_string(), "missing field in response: info");
    }
}
