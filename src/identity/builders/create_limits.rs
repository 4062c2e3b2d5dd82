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
use crate::identity::LIMITS_PATH;
use crate::identity::response::CreateLimitsResponse;
use crate::identity::types::{CreateLimit, CreateLimitsBody};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for creating several limits in one request.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateLimits {
    #[builder(!default)] // force required
    client: ServiceClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(!default)] // force required
    limits: Vec<CreateLimit>,
}

/// Builder type alias for [`CreateLimits`].
pub type CreateLimitsBldr = CreateLimitsBuilder<((ServiceClient,), (), (), (Vec<CreateLimit>,))>;

impl ServiceApi for CreateLimits {
    type Response = CreateLimitsResponse;
}

impl ToServiceRequest for CreateLimits {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        if self.limits.is_empty() {
            return Err(ValidationErr::InvalidArgument("no limits to create".into()).into());
        }
        let body = serde_json::to_vec(&CreateLimitsBody {
            limits: &self.limits,
        })?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add("Accept", "application/json");
        headers.add("Content-Type", "application/json");

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .path(vec![LIMITS_PATH.to_string()])
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(reqwest::Body::from(body))
            .build())
    }
}
