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
use crate::core::error::{Error, ValidationErr};
use crate::core::multimap_ext::{Multimap, MultimapExt};
use crate::core::request::ServiceRequest;
use crate::core::traits::{ServiceApi, ToServiceRequest};
use crate::core::utils::{check_container_name, check_object_name};
use crate::objectstorage::header_codec::{HeaderEncodeExt, encode_metadata};
use crate::objectstorage::header_constants::*;
use crate::objectstorage::response::CopyObjectResponse;
use http::Method;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for the server-side object copy (`COPY`) operation.
///
/// This struct constructs the parameters required for the
/// [`ServiceClient::copy_object`] method. `destination` has the form
/// `/container/object`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CopyObject {
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
    #[builder(setter(into))] // force required + accept Into<String>
    destination: String,

    #[builder(default)]
    metadata: HashMap<String, String>,
    #[builder(default, setter(into))]
    content_disposition: Option<String>,
    #[builder(default, setter(into))]
    content_encoding: Option<String>,
    #[builder(default, setter(into))]
    content_type: Option<String>,
    /// Copy a static large object manifest itself instead of its segments.
    #[builder(default)]
    copy_manifest: bool,
    /// Drop the source metadata instead of carrying it over.
    #[builder(default)]
    fresh_metadata: bool,
    #[builder(default, setter(into))]
    version_id: Option<String>,
}

/// Builder type alias for [`CopyObject`].
pub type CopyObjectBldr = CopyObjectBuilder<(
    (ServiceClient,),
    (),
    (),
    (String,),
    (String,),
    (String,),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
)>;

impl ServiceApi for CopyObject {
    type Response = CopyObjectResponse;
}

fn copy_method() -> Result<Method, ValidationErr> {
    Method::from_bytes(b"COPY")
        .map_err(|e| ValidationErr::InvalidArgument(format!("COPY method: {e}")))
}

impl ToServiceRequest for CopyObject {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;
        if self.destination.trim_start_matches('/').is_empty() {
            return Err(ValidationErr::InvalidArgument("copy destination is empty".into()).into());
        }

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(DESTINATION, self.destination);
        headers.add_multimap(encode_metadata(X_OBJECT_META_PREFIX, &self.metadata));
        headers.add_opt(CONTENT_DISPOSITION, self.content_disposition);
        headers.add_opt(CONTENT_ENCODING, self.content_encoding);
        headers.add_opt(CONTENT_TYPE, self.content_type);
        headers.add_flag(X_FRESH_METADATA, self.fresh_metadata);

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        if self.copy_manifest {
            query_params.add(MULTIPART_MANIFEST, "get");
        }
        query_params.add_opt(VERSION_ID, self.version_id);

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(copy_method()?)
            .container(self.container)
            .object(self.object)
            .query_params(query_params)
            .headers(headers)
            .build())
    }
}
