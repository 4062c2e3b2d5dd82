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
use crate::objectstorage::header_codec::HeaderEncodeExt;
use crate::objectstorage::header_constants::*;
use crate::objectstorage::response::GetObjectResponse;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for reading object metadata (`HEAD`).
///
/// This struct constructs the parameters required for the
/// [`ServiceClient::get_object`] method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetObject {
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

    #[builder(default)]
    newest: bool,
    #[builder(default, setter(into))]
    expires: Option<String>,
    #[builder(default, setter(into))]
    signature: Option<String>,
    #[builder(default, setter(into))]
    version_id: Option<String>,
}

/// Builder type alias for [`GetObject`].
pub type GetObjectBldr =
    GetObjectBuilder<((ServiceClient,), (), (), (String,), (String,), (), (), (), ())>;

impl ServiceApi for GetObject {
    type Response = GetObjectResponse;
}

impl ToServiceRequest for GetObject {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add_flag(X_NEWEST, self.newest);

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add_opt("expires", self.expires);
        query_params.add_opt("signature", self.signature);
        query_params.add_opt(VERSION_ID, self.version_id);

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::HEAD)
            .container(self.container)
            .object(self.object)
            .query_params(query_params)
            .headers(headers)
            .build())
    }
}
