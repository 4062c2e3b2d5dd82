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

//! Core traits for request and response handling.

use crate::core::error::Error;
use crate::core::request::ServiceRequest;
use async_trait::async_trait;
use futures_util::Stream;

/// Trait for converting a request builder into a concrete HTTP request.
///
/// Implemented by the request builders that need no I/O before sending.
/// Validation of names and options happens here, before anything is sent.
/// Uploads read their content first and therefore build their request in an
/// async `send` of their own.
///
/// # See Also
///
/// * [`ServiceApi`] - drives `to_request`, execution and response extraction
/// * [`FromServiceResponse`] - the counterpart for responses
pub trait ToServiceRequest: Sized {
    /// Consumes this request builder and returns a [`ServiceRequest`].
    fn to_request(self) -> Result<ServiceRequest, Error>;
}

/// Trait for converting HTTP responses into strongly typed response objects.
///
/// Extraction is all-or-nothing: if any part of the response cannot be
/// interpreted, an error is returned and nothing that was already parsed is
/// handed back.
#[async_trait]
pub trait FromServiceResponse: Sized {
    /// Converts the outcome of executing `req` into a typed response.
    ///
    /// # Parameters
    ///
    /// * `req` - The request that was executed
    /// * `response` - The HTTP response, or the error raised while executing
    async fn from_response(
        req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all request builders.
///
/// # Type Parameters
///
/// * `Response` - The response type produced by [`ServiceApi::send`].
#[async_trait]
pub trait ServiceApi: ToServiceRequest {
    type Response: FromServiceResponse;

    /// Sends the request and returns the corresponding typed response.
    ///
    /// This performs exactly one HTTP round trip; nothing is retried.
    async fn send(self) -> Result<Self::Response, Error> {
        let mut req: ServiceRequest = self.to_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::Response::from_response(req, resp).await
    }
}

#[async_trait]
/// Trait for types that can be converted to a stream of items.
pub trait ToStream: Sized {
    type Item;
    async fn to_stream(self) -> Box<dyn Stream<Item = Result<Self::Item, Error>> + Unpin + Send>;
}
