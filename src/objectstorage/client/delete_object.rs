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
use crate::objectstorage::builders::{BulkDelete, BulkDeleteBldr, DeleteObject, DeleteObjectBldr};

impl ServiceClient {
    /// Creates a [`DeleteObject`] request builder to delete a single object.
    ///
    /// To execute the request, call [`DeleteObject::send()`](crate::core::traits::ServiceApi::send),
    /// which returns a [`Result`] containing a [`DeleteObjectResponse`](crate::objectstorage::response::DeleteObjectResponse).
    pub fn delete_object(
        &self,
        container: impl Into<String>,
        object: impl Into<String>,
    ) -> DeleteObjectBldr {
        DeleteObject::builder()
            .client(self.clone())
            .container(container)
            .object(object)
    }

    /// Creates a [`BulkDelete`] request builder to delete several objects of
    /// one container with a single request.
    ///
    /// To execute the request, call [`BulkDelete::send()`](crate::core::traits::ServiceApi::send),
    /// which returns a [`Result`] containing a [`BulkDeleteResponse`](crate::objectstorage::response::BulkDeleteResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openstack::core::client::ServiceClient;
    /// use openstack::core::traits::ServiceApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = ServiceClient::from_env().unwrap();
    ///     let resp = client
    ///         .bulk_delete("container", vec!["a.txt".to_string(), "b.txt".to_string()])
    ///         .build().send().await.unwrap();
    ///     println!("deleted {} objects", resp.result.number_deleted);
    /// }
    /// ```
    pub fn bulk_delete(&self, container: impl Into<String>, objects: Vec<String>) -> BulkDeleteBldr {
        BulkDelete::builder()
            .client(self.clone())
            .container(container)
            .objects(objects)
    }
}
