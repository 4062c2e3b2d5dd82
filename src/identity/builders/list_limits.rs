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
use crate::core::http::Url;
use crate::core::multimap_ext::{Multimap, MultimapExt};
use crate::core::pagination::{PageCursor, Paginated, pages};
use crate::core::request::ServiceRequest;
use crate::core::traits::{FromServiceResponse, ServiceApi, ToServiceRequest, ToStream};
use crate::identity::LIMITS_PATH;
use crate::identity::response::ListLimitsResponse;
use async_trait::async_trait;
use futures_util::Stream;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for listing limits.
///
/// This struct constructs the parameters required for the
/// [`IdentityClient::list_limits`](crate::identity::IdentityClient::list_limits) method.
/// Pages are chained through the `links.next` URL of each response.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListLimits {
    #[builder(!default)] // force required
    client: ServiceClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,

    #[builder(default, setter(into))]
    service_id: Option<String>,
    #[builder(default, setter(into))]
    region_id: Option<String>,
    #[builder(default, setter(into))]
    resource_name: Option<String>,
    #[builder(default, setter(into))]
    project_id: Option<String>,
    #[builder(default, setter(into))]
    domain_id: Option<String>,
}

/// Builder type alias for [`ListLimits`].
pub type ListLimitsBldr = ListLimitsBuilder<((ServiceClient,), (), (), (), (), (), (), ())>;

impl ServiceApi for ListLimits {
    type Response = ListLimitsResponse;
}

impl ListLimits {
    pub fn to_paginated(self) -> ListLimitsPaginated {
        ListLimitsPaginated {
            args: self,
            cursor: PageCursor::Start,
        }
    }

    fn page_request(&self, next: Option<&str>) -> Result<ServiceRequest, Error> {
        let mut headers: Multimap = self.extra_headers.clone().unwrap_or_default();
        headers.add("Accept", "application/json");

        let builder = ServiceRequest::builder()
            .client(self.client.clone())
            .method(Method::GET);

        // A next link already carries the filters.
        if let Some(link) = next {
            return Ok(builder.url(Url::parse(link)?).headers(headers).build());
        }

        let mut query_params: Multimap = self.extra_query_params.clone().unwrap_or_default();
        query_params.add_opt("service_id", self.service_id.clone());
        query_params.add_opt("region_id", self.region_id.clone());
        query_params.add_opt("resource_name", self.resource_name.clone());
        query_params.add_opt("project_id", self.project_id.clone());
        query_params.add_opt("domain_id", self.domain_id.clone());

        Ok(builder
            .path(vec![LIMITS_PATH.to_string()])
            .query_params(query_params)
            .headers(headers)
            .build())
    }
}

impl ToServiceRequest for ListLimits {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        self.page_request(None)
    }
}

/// Link-driven walk over the limits listing.
#[derive(Debug)]
pub struct ListLimitsPaginated {
    args: ListLimits,
    cursor: PageCursor,
}

#[async_trait]
impl Paginated for ListLimitsPaginated {
    type Item = ListLimitsResponse;

    async fn next_page(&mut self) -> Option<Result<Self::Item, Error>> {
        if self.cursor.is_done() {
            return None;
        }
        let first = self.cursor == PageCursor::Start;

        let mut req = match self.args.page_request(self.cursor.marker()) {
            Ok(req) => req,
            Err(e) => {
                self.cursor = PageCursor::Done;
                return Some(Err(e));
            }
        };
        let resp = req.execute().await;
        let page = match ListLimitsResponse::from_response(req, resp).await {
            Ok(page) => page,
            Err(e) => {
                self.cursor = PageCursor::Done;
                return Some(Err(e));
            }
        };

        if page.limits.is_empty() {
            self.cursor.advance(None);
            return first.then_some(Ok(page));
        }
        self.cursor.advance(page.next.clone());
        Some(Ok(page))
    }
}

#[async_trait]
impl ToStream for ListLimits {
    type Item = ListLimitsResponse;

    async fn to_stream(self) -> Box<dyn Stream<Item = Result<Self::Item, Error>> + Unpin + Send> {
        pages(self.to_paginated())
    }
}
