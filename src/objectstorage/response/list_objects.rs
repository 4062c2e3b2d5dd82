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

use crate::core::error::{DecodingErr, Error};
use crate::core::request::ServiceRequest;
use crate::core::traits::FromServiceResponse;
use crate::objectstorage::types::ObjectInfo;
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use std::mem;

/// One page of [`ServiceClient::list_objects`](crate::core::client::ServiceClient::list_objects).
#[derive(Clone, Debug)]
pub struct ListObjectsResponse {
    pub headers: HeaderMap,
    pub container: String,
    pub objects: Vec<ObjectInfo>,
}

impl ListObjectsResponse {
    /// Object names of this page, with pseudo directories as their prefix.
    pub fn names(&self) -> Vec<String> {
        self.objects.iter().map(|o| o.key().to_string()).collect()
    }

    /// The marker continuing after this page.
    pub(crate) fn last_marker(&self) -> Option<String> {
        self.objects.last().map(|o| o.key().to_string())
    }
}

fn parse_listing(body: &[u8], full: bool) -> Result<Vec<ObjectInfo>, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    if full {
        return Ok(serde_json::from_slice(body)?);
    }
    let text = String::from_utf8(body.to_vec()).map_err(DecodingErr::from)?;
    Ok(text
        .lines()
        .filter(|l| !l.is_empty())
        .map(ObjectInfo::from_name)
        .collect())
}

#[async_trait]
impl FromServiceResponse for ListObjectsResponse {
    async fn from_response(
        mut req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let full = req
            .query_params
            .get("format")
            .is_some_and(|f| f == "json");

        let objects = if resp.status() == StatusCode::NO_CONTENT {
            Vec::new()
        } else {
            parse_listing(&resp.bytes().await?, full)?
        };

        Ok(Self {
            headers,
            container: req.container.take().unwrap_or_default(),
            objects,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        let objects = parse_listing(b"hello\ngoodbye\n", false).unwrap();
        let names: Vec<&str> = objects.iter().map(ObjectInfo::key).collect();
        assert_eq!(names, vec!["hello", "goodbye"]);
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_listing(b"", true).unwrap().is_empty());
        assert!(parse_listing(b"\n", false).unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        assert!(matches!(
            parse_listing(b"[{\"bytes\": \"many\"}]", true),
            Err(Error::Decoding(DecodingErr::Json(_)))
        ));
    }
}
