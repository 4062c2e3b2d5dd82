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
use crate::core::traits::FromServiceResponse;
use crate::core::utils::{UtcTime, check_container_name, check_object_name};
use crate::objectstorage::content::{ChecksumPolicy, ContentSource, encode_content};
use crate::objectstorage::header_codec::{HeaderEncodeExt, encode_metadata};
use crate::objectstorage::header_constants::*;
use crate::objectstorage::response::CreateObjectResponse;
use http::Method;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for the object create (`PUT`) operation.
///
/// This struct constructs the parameters required for the
/// [`ServiceClient::create_object`] method. Unless `etag` is given or
/// `no_etag` is set, the MD5 of the content is computed and sent as `ETag`.
///
/// Computing the checksum reads the content to the end, so this builder is
/// sent with its own async [`send`](CreateObject::send) rather than through
/// [`ServiceApi`](crate::core::traits::ServiceApi).
#[derive(Debug, TypedBuilder)]
pub struct CreateObject {
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
    #[builder(!default, setter(into))]
    content: ContentSource,

    /// User metadata, sent as `X-Object-Meta-<key>`.
    #[builder(default)]
    metadata: HashMap<String, String>,
    #[builder(default, setter(into))]
    cache_control: Option<String>,
    #[builder(default, setter(into))]
    content_disposition: Option<String>,
    #[builder(default, setter(into))]
    content_encoding: Option<String>,
    /// Overrides the length determined from the content.
    #[builder(default, setter(into))]
    content_length: Option<u64>,
    #[builder(default, setter(into))]
    content_type: Option<String>,
    /// `container/object` to copy the content from instead of uploading.
    #[builder(default, setter(into))]
    copy_from: Option<String>,
    /// Seconds after which the object is deleted.
    #[builder(default, setter(into))]
    delete_after: Option<u64>,
    #[builder(default, setter(into))]
    delete_at: Option<UtcTime>,
    /// Let the server guess the content type from the object name.
    #[builder(default)]
    detect_content_type: bool,
    /// Checksum to send as-is instead of computing one.
    #[builder(default, setter(into))]
    etag: Option<String>,
    /// Send no checksum at all. Takes precedence over `etag`.
    #[builder(default)]
    no_etag: bool,
    #[builder(default, setter(into))]
    object_manifest: Option<String>,
    #[builder(default, setter(into))]
    transfer_encoding: Option<String>,
    #[builder(default, setter(into))]
    expires: Option<String>,
    #[builder(default, setter(into))]
    multipart_manifest: Option<String>,
    #[builder(default, setter(into))]
    signature: Option<String>,
}

/// Builder type alias for [`CreateObject`].
///
/// Constructed via [`ServiceClient::create_object`] and used to build a [`CreateObject`] instance.
pub type CreateObjectBldr = CreateObjectBuilder<(
    (ServiceClient,),
    (),
    (),
    (String,),
    (String,),
    (ContentSource,),
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
    (),
    (),
    (),
    (),
    (),
    (),
)>;

impl CreateObject {
    fn checksum_policy(&self) -> ChecksumPolicy {
        if self.no_etag {
            ChecksumPolicy::Disabled
        } else if let Some(etag) = &self.etag {
            ChecksumPolicy::Supplied(etag.clone())
        } else {
            ChecksumPolicy::Compute
        }
    }

    /// Encodes the content and uploads it in a single `PUT`.
    pub async fn send(self) -> Result<CreateObjectResponse, Error> {
        let mut req: ServiceRequest = self.to_request().await?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        CreateObjectResponse::from_response(req, resp).await
    }

    async fn to_request(mut self) -> Result<ServiceRequest, Error> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let policy = self.checksum_policy();
        let encoded = encode_content(std::mem::take(&mut self.content), &policy).await?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add_multimap(encode_metadata(X_OBJECT_META_PREFIX, &self.metadata));
        headers.add_opt(CACHE_CONTROL, self.cache_control);
        headers.add_opt(CONTENT_DISPOSITION, self.content_disposition);
        headers.add_opt(CONTENT_ENCODING, self.content_encoding);
        headers.add_opt(CONTENT_TYPE, self.content_type);
        headers.add_opt(X_COPY_FROM, self.copy_from);
        headers.add_opt(X_DELETE_AFTER, self.delete_after.map(|v| v.to_string()));
        headers.add_unix_time(X_DELETE_AT, self.delete_at);
        headers.add_flag(X_DETECT_CONTENT_TYPE, self.detect_content_type);
        headers.add_opt(X_OBJECT_MANIFEST, self.object_manifest);
        headers.add_opt(TRANSFER_ENCODING, self.transfer_encoding);

        headers.add_multimap(encoded.headers);
        if let Some(len) = self.content_length.or(encoded.content_length) {
            headers.add(CONTENT_LENGTH, len.to_string());
        }

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add_opt("expires", self.expires);
        query_params.add_opt(MULTIPART_MANIFEST, self.multipart_manifest);
        query_params.add_opt("signature", self.signature);

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .container(self.container)
            .object(self.object)
            .query_params(query_params)
            .headers(headers)
            .body(encoded.body.into_body())
            .build())
    }
}
