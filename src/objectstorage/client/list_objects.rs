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
use crate::objectstorage::builders::{ListObjects, ListObjectsBldr};

impl ServiceClient {
    /// Creates a [`ListObjects`] request builder for the objects of a container.
    ///
    /// [`ListObjects::send()`](crate::core::traits::ServiceApi::send) returns one page;
    /// [`ListObjects::to_stream()`](crate::core::traits::ToStream::to_stream) walks
    /// all of them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    /// use openstack::core::client::ServiceClient;
    /// use openstack::core::traits::ToStream;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = ServiceClient::from_env().unwrap();
    ///     let mut pages = client
    ///         .list_objects("container")
    ///         .full(true)
    ///         .limit(100_u32)
    ///         .build()
    ///         .to_stream()
    ///         .await;
    ///     while let Some(page) = pages.next().await {
    ///         for object in page.unwrap().objects {
    ///             println!("{} ({} bytes)", object.name, object.bytes);
    ///         }
    ///     }
    /// }
    /// ```
    pub fn list_objects(&self, container: impl Into<String>) -> ListObjectsBldr {
        ListObjects::builder()
            .client(self.clone())
            .container(container)
    }
}
