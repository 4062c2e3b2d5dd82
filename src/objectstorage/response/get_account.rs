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
use crate::core::utils::{UtcTime, header_http_date, header_str, header_u64};
use crate::objectstorage::header_codec::metadata_from_headers;
use crate::objectstorage::header_constants::*;
use async_trait::async_trait;
use http::HeaderMap;
use std::collections::HashMap;
use std::mem;

/// Response of [`ServiceClient::get_account`](crate::core::client::ServiceClient::get_account).
#[derive(Clone, Debug)]
pub struct GetAccountResponse {
    pub headers: HeaderMap,
    pub bytes_used: u64,
    pub container_count: u64,
    pub object_count: u64,
    pub quota_bytes: Option<u64>,
    /// Key used to sign temp URLs.
    pub temp_url_key: Option<String>,
    pub temp_url_key_2: Option<String>,
    /// User metadata, keyed by the name without the `X-Account-Meta-` prefix.
    pub metadata: HashMap<String, String>,
    pub date: Option<UtcTime>,
    pub trans_id: Option<String>,
}

#[async_trait]
impl FromServiceResponse for GetAccountResponse {
    async fn from_response(
        _req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());

        Ok(Self {
            bytes_used: header_u64(&headers, X_ACCOUNT_BYTES_USED)?.unwrap_or(0),
            container_count: header_u64(&headers, X_ACCOUNT_CONTAINER_COUNT)?.unwrap_or(0),
            object_count: header_u64(&headers, X_ACCOUNT_OBJECT_COUNT)?.unwrap_or(0),
            quota_bytes: header_u64(&headers, X_ACCOUNT_BYTES_USED_QUOTA)?,
            temp_url_key: header_str(&headers, X_ACCOUNT_META_TEMP_URL_KEY)?.map(str::to_string),
            temp_url_key_2: header_str(&headers, X_ACCOUNT_META_TEMP_URL_KEY_2)?
                .map(str::to_string),
            metadata: metadata_from_headers(X_ACCOUNT_META_PREFIX, &headers)?,
            date: header_http_date(&headers, DATE)?,
            trans_id: header_str(&headers, X_TRANS_ID)?.map(str::to_string),
            headers,
        })
    }
}
