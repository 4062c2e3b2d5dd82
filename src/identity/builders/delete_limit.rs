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
use crate::core::multimap_ext::Multimap;
use crate::core::request::ServiceRequest;
use crate::core::traits::{ServiceApi, ToServiceRequest};
use crate::identity::LIMITS_PATH;
use crate::identity::response::DeleteLimitResponse;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for deleting one limit.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteLimit {
    #[builder(!default)] // force required
    client: ServiceClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    id: String,
}

/// Builder type alias for [`DeleteLimit`].
pub type DeleteLimitBldr = DeleteLimitBuilder<((ServiceClient,), (), (), (String,))>;

impl ServiceApi for DeleteLimit {
    type Response = DeleteLimitResponse;
}

impl ToServiceRequest for DeleteLimit {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        if self.id.is_empty() {
            return Err(ValidationErr::InvalidArgument("limit id cannot be empty".into()).into());
        }

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .path(vec![LIMITS_PATH.to_string(), self.id])
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
