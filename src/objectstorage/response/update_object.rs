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
use crate::core::utils::{UtcTime, header_http_date, header_str};
use crate::objectstorage::header_constants::{CONTENT_TYPE, DATE, X_TRANS_ID};
use crate::objectstorage::response::take_names;
use async_trait::async_trait;
use http::HeaderMap;
use std::mem;

/// Response of [`ServiceClient::update_object`](crate::core::client::ServiceClient::update_object).
#[derive(Clone, Debug)]
pub struct UpdateObjectResponse {
    pub headers: HeaderMap,
    pub container: String,
    pub object: String,
    pub content_type: Option<String>,
    pub date: Option<UtcTime>,
    pub trans_id: Option<String>,
}

#[async_trait]
impl FromServiceResponse for UpdateObjectResponse {
    async fn from_response(
        mut req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let (container, object) = take_names(&mut req);

        Ok(Self {
            content_type: header_str(&headers, CONTENT_TYPE)?.map(str::to_string),
            date: header_http_date(&headers, DATE)?,
            trans_id: header_str(&headers, X_TRANS_ID)?.map(str::to_string),
            headers,
            container,
            object,
        })
    }
}
