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
use crate::identity::response::UpdateLimitResponse;
use crate::identity::types::{LimitUpdate, UpdateLimitBody};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for changing one limit (`PATCH`).
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateLimit {
    #[builder(!default)] // force required
    client: ServiceClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    id: String,

    #[builder(default, setter(into))]
    resource_limit: Option<i64>,
    #[builder(default, setter(into))]
    description: Option<String>,
}

/// Builder type alias for [`UpdateLimit`].
pub type UpdateLimitBldr = UpdateLimitBuilder<((ServiceClient,), (), (), (String,), (), ())>;

impl ServiceApi for UpdateLimit {
    type Response = UpdateLimitResponse;
}

impl UpdateLimit {
    fn body(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&UpdateLimitBody {
            limit: LimitUpdate {
                resource_limit: self.resource_limit,
                description: self.description.clone(),
            },
        })
    }
}

impl ToServiceRequest for UpdateLimit {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        if self.id.is_empty() {
            return Err(ValidationErr::InvalidArgument("limit id cannot be empty".into()).into());
        }
        let body = self.body()?;

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add("Accept", "application/json");
        headers.add("Content-Type", "application/json");

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::PATCH)
            .path(vec![LIMITS_PATH.to_string(), self.id])
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(reqwest::Body::from(body))
            .build())
    }
}
