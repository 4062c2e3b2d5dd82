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
use crate::core::error::Error;
use crate::core::multimap_ext::{Multimap, MultimapExt};
use crate::core::request::ServiceRequest;
use crate::core::traits::{ServiceApi, ToServiceRequest};
use crate::core::utils::{check_container_name, check_object_name};
use crate::objectstorage::header_constants::{MULTIPART_MANIFEST, VERSION_ID};
use crate::objectstorage::response::DeleteObjectResponse;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the object delete (`DELETE`) operation.
///
/// This struct constructs the parameters required for the
/// [`ServiceClient::delete_object`] method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteObject {
    #[builder(!default)] // force required
    client: ServiceClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    container: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,

    /// `delete` removes a static large object together with its segments.
    #[builder(default, setter(into))]
    multipart_manifest: Option<String>,
    #[builder(default, setter(into))]
    version_id: Option<String>,
}

/// Builder type alias for [`DeleteObject`].
pub type DeleteObjectBldr =
    DeleteObjectBuilder<((ServiceClient,), (), (), (String,), (String,), (), ())>;

impl ServiceApi for DeleteObject {
    type Response = DeleteObjectResponse;
}

impl ToServiceRequest for DeleteObject {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add_opt(MULTIPART_MANIFEST, self.multipart_manifest);
        query_params.add_opt(VERSION_ID, self.version_id);

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .container(self.container)
            .object(self.object)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
