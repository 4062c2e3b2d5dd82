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
use crate::objectstorage::builders::{CreateObject, CreateObjectBldr};
use crate::objectstorage::content::ContentSource;

impl ServiceClient {
    /// Creates a [`CreateObject`] request builder to upload an object.
    ///
    /// To execute the request, call [`CreateObject::send()`](crate::core::traits::ServiceApi::send),
    /// which returns a [`Result`] containing a [`CreateObjectResponse`](crate::objectstorage::response::CreateObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::core::client::ServiceClient;
    /// use openstack::core::creds::StaticProvider;
    /// use openstack::core::http::BaseUrl;
    /// use openstack::core::traits::ServiceApi;
    /// use openstack::objectstorage::response::CreateObjectResponse;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "https://swift.example.com/v1/AUTH_test".parse::<BaseUrl>().unwrap();
    ///     let provider = StaticProvider::new("token");
    ///     let client = ServiceClient::new(base_url, Some(provider), None, None).unwrap();
    ///     let resp: CreateObjectResponse = client
    ///         .create_object("container", "hello.txt", "Did gyre and gimble in the wabe")
    ///         .content_type("text/plain".to_string())
    ///         .build().send().await.unwrap();
    ///     println!("stored object with etag '{}'", resp.etag);
    /// }
    /// ```
    pub fn create_object<C: Into<ContentSource>>(
        &self,
        container: impl Into<String>,
        object: impl Into<String>,
        content: C,
    ) -> CreateObjectBldr {
        CreateObject::builder()
            .client(self.clone())
            .container(container)
            .object(object)
            .content(content)
    }
}
