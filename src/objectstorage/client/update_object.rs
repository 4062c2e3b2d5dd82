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
use crate::objectstorage::builders::{UpdateObject, UpdateObjectBldr};

impl ServiceClient {
    /// Creates an [`UpdateObject`] request builder to change an object's
    /// metadata in place.
    ///
    /// To execute the request, call [`UpdateObject::send()`](crate::core::traits::ServiceApi::send),
    /// which returns a [`Result`] containing an [`UpdateObjectResponse`](crate::objectstorage::response::UpdateObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::core::client::ServiceClient;
    /// use openstack::core::traits::ServiceApi;
    /// use openstack::objectstorage::header_codec::HeaderUpdate;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = ServiceClient::from_env().unwrap();
    ///     client
    ///         .update_object("container", "hello.txt")
    ///         .content_type("text/markdown")
    ///         .content_disposition(HeaderUpdate::<String>::Clear)
    ///         .build().send().await.unwrap();
    /// }
    /// ```
    pub fn update_object(
        &self,
        container: impl Into<String>,
        object: impl Into<String>,
    ) -> UpdateObjectBldr {
        UpdateObject::builder()
            .client(self.clone())
            .container(container)
            .object(object)
    }
}
