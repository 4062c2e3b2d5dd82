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
use crate::core::utils::{UtcTime, check_container_name, check_object_name};
use crate::objectstorage::header_codec::HeaderEncodeExt;
use crate::objectstorage::header_constants::*;
use crate::objectstorage::response::DownloadObjectResponse;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the object download (`GET`) operation.
///
/// This struct constructs the parameters required for the
/// [`ServiceClient::download_object`] method.
///
/// The conditional bounds are checked again against the returned
/// `Last-Modified`: a violated `if_unmodified_since` is an error, while an
/// unmet `if_modified_since` yields empty content.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DownloadObject {
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

    #[builder(default, setter(into))]
    if_match: Option<String>,
    #[builder(default, setter(into))]
    if_modified_since: Option<UtcTime>,
    #[builder(default, setter(into))]
    if_none_match: Option<String>,
    #[builder(default, setter(into))]
    if_unmodified_since: Option<UtcTime>,
    /// Ask every replica and return the newest copy.
    #[builder(default)]
    newest: bool,
    /// First byte to return.
    #[builder(default, setter(into))]
    offset: Option<u64>,
    /// Number of bytes to return.
    #[builder(default, setter(into))]
    length: Option<u64>,
    #[builder(default, setter(into))]
    multipart_manifest: Option<String>,
    #[builder(default, setter(into))]
    expires: Option<String>,
    #[builder(default, setter(into))]
    signature: Option<String>,
    #[builder(default, setter(into))]
    version_id: Option<String>,
}

/// Builder type alias for [`DownloadObject`].
pub type DownloadObjectBldr = DownloadObjectBuilder<(
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
    (),
    (),
    (),
)>;

impl ServiceApi for DownloadObject {
    type Response = DownloadObjectResponse;
}

impl DownloadObject {
    fn range_header_value(&self) -> Result<Option<String>, ValidationErr> {
        let (offset, length) = match self.length {
            Some(_) => (Some(self.offset.unwrap_or(0_u64)), self.length),
            None => (self.offset, None),
        };

        let Some(o) = offset else {
            return Ok(None);
        };
        let mut range = format!("bytes={o}-");
        if let Some(l) = length {
            if l == 0 {
                return Err(ValidationErr::InvalidArgument(
                    "range length must be greater than zero".into(),
                ));
            }
            let last = o.checked_add(l - 1).ok_or_else(|| {
                ValidationErr::InvalidArgument(format!(
                    "range of {l} bytes at offset {o} ends past the largest addressable byte"
                ))
            })?;
            range.push_str(&last.to_string());
        }
        Ok(Some(range))
    }
}

impl ToServiceRequest for DownloadObject {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut headers: Multimap = self.extra_headers.clone().unwrap_or_default();
        headers.add_opt(RANGE, self.range_header_value()?);
        headers.add_opt(IF_MATCH, self.if_match);
        headers.add_opt(IF_NONE_MATCH, self.if_none_match);
        headers.add_http_date(IF_MODIFIED_SINCE, self.if_modified_since);
        headers.add_http_date(IF_UNMODIFIED_SINCE, self.if_unmodified_since);
        headers.add_flag(X_NEWEST, self.newest);

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add_opt(MULTIPART_MANIFEST, self.multipart_manifest);
        query_params.add_opt("expires", self.expires);
        query_params.add_opt("signature", self.signature);
        query_params.add_opt(VERSION_ID, self.version_id);

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .container(self.container)
            .object(self.object)
            .query_params(query_params)
            .headers(headers)
            .build())
    }
}
