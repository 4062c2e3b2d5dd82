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
use crate::core::utils::{UtcTime, check_container_name, check_object_name};
use crate::objectstorage::header_codec::{
    HeaderEncodeExt, HeaderUpdate, encode_delete_at, encode_metadata, encode_remove_metadata,
};
use crate::objectstorage::header_constants::*;
use crate::objectstorage::response::UpdateObjectResponse;
use http::Method;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for updating object metadata (`POST`).
///
/// This struct constructs the parameters required for the
/// [`ServiceClient::update_object`] method. Fields left
/// [`HeaderUpdate::Untouched`] keep their stored value; `Clear` removes it.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateObject {
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
    metadata: HashMap<String, String>,
    /// Metadata keys to delete. Keys also present in `metadata` are kept.
    #[builder(default)]
    remove_metadata: Vec<String>,
    #[builder(default, setter(into))]
    content_disposition: HeaderUpdate<String>,
    #[builder(default, setter(into))]
    content_encoding: HeaderUpdate<String>,
    #[builder(default, setter(into))]
    content_type: HeaderUpdate<String>,
    #[builder(default, setter(into))]
    delete_after: Option<u64>,
    #[builder(default, setter(into))]
    delete_at: HeaderUpdate<UtcTime>,
    #[builder(default, setter(into))]
    detect_content_type: Option<bool>,
}

/// Builder type alias for [`UpdateObject`].
pub type UpdateObjectBldr = UpdateObjectBuilder<(
    (ServiceClient,),
    (),
    (),
    (String,),
    (String,),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
    (),
)>;

impl ServiceApi for UpdateObject {
    type Response = UpdateObjectResponse;
}

impl ToServiceRequest for UpdateObject {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add_multimap(encode_metadata(X_OBJECT_META_PREFIX, &self.metadata));
        headers.add_multimap(encode_remove_metadata(
            X_REMOVE_OBJECT_META_PREFIX,
            &self.remove_metadata,
            &self.metadata,
        ));
        headers.add_update(CONTENT_DISPOSITION, &self.content_disposition);
        headers.add_update(CONTENT_ENCODING, &self.content_encoding);
        headers.add_update(CONTENT_TYPE, &self.content_type);
        headers.add_opt(X_DELETE_AFTER, self.delete_after.map(|v| v.to_string()));
        encode_delete_at(&mut headers, &self.delete_at);
        headers.add_opt_bool(X_DETECT_CONTENT_TYPE, self.detect_content_type);

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
