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

use crate::core::error::Error;
use crate::core::request::ServiceRequest;
use crate::core::traits::FromServiceResponse;
use crate::objectstorage::header_codec::ObjectHeaders;
use crate::objectstorage::response::take_names;
use async_trait::async_trait;
use http::HeaderMap;
use std::collections::HashMap;
use std::mem;

/// Response of [`ServiceClient::get_object`](crate::core::client::ServiceClient::get_object).
#[derive(Clone, Debug)]
pub struct GetObjectResponse {
    pub headers: HeaderMap,
    pub container: String,
    pub object: String,
    pub object_headers: ObjectHeaders,
}

impl GetObjectResponse {
    /// User metadata, keyed by the name without the `X-Object-Meta-` prefix.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.object_headers.metadata
    }

    pub fn static_large_object(&self) -> bool {
        self.object_headers.static_large_object
    }

    pub fn etag(&self) -> &str {
        &self.object_headers.etag
    }

    pub fn content_length(&self) -> u64 {
        self.object_headers.content_length
    }
}

#[async_trait]
impl FromServiceResponse for GetObjectResponse {
    async fn from_response(
        mut req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let (container, object) = take_names(&mut req);

        Ok(Self {
            object_headers: ObjectHeaders::from_headers(&headers)?,
            headers,
            container,
            object,
        })
    }
}
