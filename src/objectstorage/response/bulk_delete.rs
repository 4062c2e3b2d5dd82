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
use async_trait::async_trait;
use http::HeaderMap;
use serde::Deserialize;
use std::mem;

/// Counts and failures reported by a bulk delete.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BulkDeleteResult {
    #[serde(rename = "Response Status")]
    pub response_status: String,
    #[serde(rename = "Response Body", default)]
    pub response_body: String,
    #[serde(rename = "Number Deleted", default)]
    pub number_deleted: u64,
    #[serde(rename = "Number Not Found", default)]
    pub number_not_found: u64,
    /// `[path, status]` pairs for objects that could not be deleted.
    #[serde(rename = "Errors", default)]
    pub errors: Vec<Vec<String>>,
}

/// Response of [`ServiceClient::bulk_delete`](crate::core::client::ServiceClient::bulk_delete).
#[derive(Clone, Debug)]
pub struct BulkDeleteResponse {
    pub headers: HeaderMap,
    pub result: BulkDeleteResult,
}

#[async_trait]
impl FromServiceResponse for BulkDeleteResponse {
    async fn from_response(
        _req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await?;
        let result: BulkDeleteResult = serde_json::from_slice(&body)?;

        Ok(Self { headers, result })
    }
}
