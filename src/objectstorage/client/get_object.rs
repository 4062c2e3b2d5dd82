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
use crate::objectstorage::builders::{GetObject, GetObjectBldr};

impl ServiceClient {
    /// Creates a [`GetObject`] request builder to read an object's metadata
    /// without its content.
    ///
    /// To execute the request, call [`GetObject::send()`](crate::core::traits::ServiceApi::send),
    /// which returns a [`Result`] containing a [`GetObjectResponse`](crate::objectstorage::response::GetObjectResponse).
    pub fn get_object(
        &self,
        container: impl Into<String>,
        object: impl Into<String>,
    ) -> GetObjectBldr {
        GetObject::builder()
            .client(self.clone())
            .container(container)
            .object(object)
    }
}
