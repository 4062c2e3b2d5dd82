// OpenStack Rust SDK for Object Storage and Identity
// Copyright 2025 The OpenStack Rust SDK Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for OpenStack service operations

use crate::core::utils::UtcTime;
use thiserror::Error;

/// Errors raised while validating caller input, before any request is sent.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid container name: {0}")]
    InvalidContainerName(String),

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("URL build error: {0}")]
    UrlBuildError(String),

    #[error("invalid header value for '{name}': {source}")]
    InvalidHeader {
        name: String,
        #[source]
        source: http::Error,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while interpreting a response that the server returned
/// successfully.
#[derive(Error, Debug)]
pub enum DecodingErr {
    #[error("JSON decoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("header '{0}' is not valid UTF-8")]
    HeaderNotUtf8(String),

    #[error("header '{name}' has invalid integer value '{value}'")]
    InvalidInteger { name: String, value: String },

    #[error("header '{name}' has invalid boolean value '{value}'")]
    InvalidBool { name: String, value: String },

    #[error("header '{name}' has invalid time value '{value}': {source}")]
    InvalidTime {
        name: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("response body does not match expected shape: {0}")]
    UnexpectedShape(String),
}

/// Error type returned by every operation of this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP-layer failure, surfaced verbatim.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status the operation does not accept.
    #[error("server failed with HTTP status {status} for {method} {url}: {body}")]
    Server {
        status: u16,
        method: String,
        url: String,
        body: String,
    },

    /// An `If-Unmodified-Since` condition did not hold.
    #[error(
        "conditional request failed: resource last modified at {}, required unmodified since {}",
        .last_modified.map_or_else(|| "<unknown>".to_string(), |t| t.to_rfc2822()),
        .unmodified_since.map_or_else(|| "<unknown>".to_string(), |t| t.to_rfc2822())
    )]
    ConditionalRequestFailed {
        last_modified: Option<UtcTime>,
        unmodified_since: Option<UtcTime>,
    },

    /// A value the operation depends on is not configured, e.g. the account
    /// has no temp URL key.
    #[error("prerequisite missing: {0}")]
    PrerequisiteMissing(String),

    #[error(transparent)]
    Decoding(#[from] DecodingErr),

    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for transport-level failures: connection problems and
    /// unexpected HTTP statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Server { .. })
    }

    /// Returns the HTTP status of a [`Error::Server`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            Error::ConditionalRequestFailed { .. } => Some(412),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decoding(DecodingErr::Json(err))
    }
}
