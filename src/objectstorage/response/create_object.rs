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
use crate::core::multimap_ext::MultimapExt;
use crate::core::request::ServiceRequest;
use crate::core::traits::FromServiceResponse;
use crate::core::utils::{UtcTime, header_etag, header_http_date, header_str, header_u64};
use crate::objectstorage::header_constants::*;
use crate::objectstorage::response::take_names;
use async_trait::async_trait;
use http::HeaderMap;
use std::mem;

/// Response of [`ServiceClient::create_object`](crate::core::client::ServiceClient::create_object).
///
/// The server ETag is not compared with the local checksum; both are exposed
/// so callers can check them.
#[derive(Clone, Debug)]
pub struct CreateObjectResponse {
    pub headers: HeaderMap,
    pub container: String,
    pub object: String,
    /// ETag returned by the server.
    pub etag: String,
    /// Checksum sent with the upload, if any.
    pub local_checksum: Option<String>,
    pub content_length: Option<u64>,
    pub date: Option<UtcTime>,
    pub last_modified: Option<UtcTime>,
    pub trans_id: Option<String>,
}

impl CreateObjectResponse {
    /// Returns true when a checksum was sent and the server reported the same
    /// value.
    pub fn checksum_matches(&self) -> bool {
        self.local_checksum
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(&self.etag))
    }
}

#[async_trait]
impl FromServiceResponse for CreateObjectResponse {
    async fn from_response(
        mut req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let (container, object) = take_names(&mut req);

        Ok(Self {
            etag: header_etag(&headers, ETAG)?,
            local_checksum: req.headers.get_ignore_case(ETAG).cloned(),
            content_length: header_u64(&headers, CONTENT_LENGTH)?,
            date: header_http_date(&headers, DATE)?,
            last_modified: header_http_date(&headers, LAST_MODIFIED)?,
            trans_id: header_str(&headers, X_TRANS_ID)?.map(str::to_string),
            headers,
            container,
            object,
        })
    }
}
