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
use crate::objectstorage::builders::{DownloadObject, DownloadObjectBldr};

impl ServiceClient {
    /// Creates a [`DownloadObject`] request builder to read an object's content.
    ///
    /// To execute the request, call [`DownloadObject::send()`](crate::core::traits::ServiceApi::send),
    /// which returns a [`Result`] containing a [`DownloadObjectResponse`](crate::objectstorage::response::DownloadObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::core::client::ServiceClient;
    /// use openstack::core::traits::ServiceApi;
    /// use openstack::objectstorage::response::DownloadObjectResponse;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = ServiceClient::from_env().unwrap();
    ///     let resp: DownloadObjectResponse =
    ///         client.download_object("container", "hello.txt").build().send().await.unwrap();
    ///     let content = resp.content.to_bytes().await.unwrap();
    ///     println!("retrieved content '{}'", String::from_utf8_lossy(&content));
    /// }
    /// ```
    pub fn download_object(
        &self,
        container: impl Into<String>,
        object: impl Into<String>,
    ) -> DownloadObjectBldr {
        DownloadObject::builder()
            .client(self.clone())
            .container(container)
            .object(object)
    }
}
