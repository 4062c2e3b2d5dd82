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
use crate::core::utils::{UtcTime, from_http_header_value};
use crate::objectstorage::header_codec::ObjectHeaders;
use crate::objectstorage::header_constants::{IF_MODIFIED_SINCE, IF_UNMODIFIED_SINCE};
use crate::objectstorage::object_content::ObjectContent;
use crate::objectstorage::response::take_names;
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use log::debug;
use std::mem;

/// Response of [`ServiceClient::download_object`](crate::core::client::ServiceClient::download_object).
///
/// The content streams from the open connection; dropping the response
/// without reading it releases the connection.
#[derive(Debug)]
pub struct DownloadObjectResponse {
    pub headers: HeaderMap,
    pub container: String,
    pub object: String,
    pub object_headers: ObjectHeaders,
    pub content: ObjectContent,
    /// Set when an `If-Modified-Since` or `If-None-Match` condition was not
    /// met; `content` is then empty.
    pub not_modified: bool,
}

fn request_bound(req: &ServiceRequest, name: &str) -> Option<UtcTime> {
    req.headers
        .get_ignore_case(name)
        .and_then(|v| from_http_header_value(v).ok())
}

#[async_trait]
impl FromServiceResponse for DownloadObjectResponse {
    async fn from_response(
        mut req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let object_headers = ObjectHeaders::from_headers(&headers)?;
        let last_modified = object_headers.last_modified;

        if let (Some(bound), Some(lm)) = (request_bound(&req, IF_UNMODIFIED_SINCE), last_modified)
            && lm >= bound
        {
            return Err(Error::ConditionalRequestFailed {
                last_modified: Some(lm),
                unmodified_since: Some(bound),
            });
        }

        let mut not_modified = resp.status() == StatusCode::NOT_MODIFIED;
        if let (Some(bound), Some(lm)) = (request_bound(&req, IF_MODIFIED_SINCE), last_modified)
            && lm <= bound
        {
            not_modified = true;
        }

        let content = if not_modified {
            debug!("object not modified, returning empty content");
            ObjectContent::empty()
        } else {
            ObjectContent::from_response(resp)
        };

        let (container, object) = take_names(&mut req);
        Ok(Self {
            headers,
            container,
            object,
            object_headers,
            content,
            not_modified,
        })
    }
}
