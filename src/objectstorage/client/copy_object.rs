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
use crate::objectstorage::builders::{CopyObject, CopyObjectBldr};

impl ServiceClient {
    /// Creates a [`CopyObject`] request builder for a server-side copy to
    /// `destination` (`/container/object`).
    ///
    /// To execute the request, call [`CopyObject::send()`](crate::core::traits::ServiceApi::send),
    /// which returns a [`Result`] containing a [`CopyObjectResponse`](crate::objectstorage::response::CopyObjectResponse).
    pub fn copy_object(
        &self,
        container: impl Into<String>,
        object: impl Into<String>,
        destination: impl Into<String>,
    ) -> CopyObjectBldr {
        CopyObject::builder()
            .client(self.clone())
            .container(container)
            .object(object)
            .destination(destination)
    }
}
