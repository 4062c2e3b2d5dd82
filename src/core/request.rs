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

//! ServiceRequest struct and implementation for executing HTTP requests.

use crate::core::client::ServiceClient;
use crate::core::error::Error;
use crate::core::http::Url;
use crate::core::multimap_ext::Multimap;
use crate::core::utils::{urlencode_object_key, urlencode_segment};
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
/// Generic request against an OpenStack service endpoint.
///
/// The target is either the client's endpoint followed by
/// `container/object/path...`, or an absolute `url` (used when following a
/// `next` link).
pub struct ServiceRequest {
    #[builder(!default)] // force required
    pub(crate) client: ServiceClient,

    #[builder(!default)] // force required
    pub(crate) method: Method,

    #[builder(default, setter(into))]
    pub(crate) container: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    /// Additional raw path segments appended after container and object.
    #[builder(default)]
    pub(crate) path: Vec<String>,

    #[builder(default, setter(into))]
    pub(crate) url: Option<Url>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    pub(crate) headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<reqwest::Body>,
}

impl ServiceRequest {
    /// Resolves the URL this request is sent to.
    pub fn target_url(&self) -> Url {
        if let Some(url) = &self.url {
            return url.clone();
        }

        let mut parts: Vec<String> = Vec::new();
        if let Some(c) = &self.container {
            parts.push(urlencode_segment(c));
        }
        if let Some(o) = &self.object {
            parts.push(urlencode_object_key(o));
        }
        parts.extend(self.path.iter().map(|p| urlencode_segment(p)));

        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
        self.client.base_url().build_url(&parts, &self.query_params)
    }

    /// Execute the request, returning the response.
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        let url = self.target_url();
        self.client
            .execute(self.method.clone(), &url, &self.headers, self.body.take())
            .await
    }
}
