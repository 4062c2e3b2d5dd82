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
use crate::core::multimap_ext::Multimap;
use crate::core::request::ServiceRequest;
use crate::core::traits::{ServiceApi, ToServiceRequest};
use crate::objectstorage::header_codec::HeaderEncodeExt;
use crate::objectstorage::header_constants::X_NEWEST;
use crate::objectstorage::response::GetAccountResponse;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for reading account metadata (`HEAD` on the endpoint).
///
/// This struct constructs the parameters required for the
/// [`ServiceClient::get_account`] method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetAccount {
    #[builder(!default)] // force required
    client: ServiceClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(default)]
    newest: bool,
}

/// Builder type alias for [`GetAccount`].
pub type GetAccountBldr = GetAccountBuilder<((ServiceClient,), (), (), ())>;

impl ServiceApi for GetAccount {
    type Response = GetAccountResponse;
}

impl ToServiceRequest for GetAccount {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add_flag(X_NEWEST, self.newest);

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::HEAD)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
