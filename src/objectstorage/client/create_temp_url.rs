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

use crate::core::client::ServiceClient;
use crate::objectstorage::temp_url::{CreateTempUrl, CreateTempUrlBldr};
use http::Method;

impl ServiceClient {
    /// Creates a [`CreateTempUrl`] builder producing a signed URL that grants
    /// `method` access to one object until it expires.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use http::Method;
    /// use openstack::core::client::ServiceClient;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = ServiceClient::from_env().unwrap();
    ///     let resp = client
    ///         .create_temp_url("container", "report.pdf", Method::GET)
    ///         .ttl(3600)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{}", resp.url);
    /// }
    /// ```
    pub fn create_temp_url(
        &self,
        container: impl Into<String>,
        object: impl Into<String>,
        method: Method,
    ) -> CreateTempUrlBldr {
        CreateTempUrl::builder()
            .client(self.clone())
            .container(container)
            .object(object)
            .method(method)
    }
}
