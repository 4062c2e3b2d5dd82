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
use crate::core::pagination::{PageCursor, Paginated, pages};
use crate::core::request::ServiceRequest;
use crate::core::traits::{FromServiceResponse, ServiceApi, ToServiceRequest, ToStream};
use crate::core::utils::check_container_name;
use crate::objectstorage::header_constants::ACCEPT;
use crate::objectstorage::response::ListObjectsResponse;
use async_trait::async_trait;
use futures_util::Stream;
use http::Method;
use log::debug;
use typed_builder::TypedBuilder;

/// Argument builder for listing the objects of a container.
///
/// This struct constructs the parameters required for the
/// [`ServiceClient::list_objects`] method. [`send`](ServiceApi::send) fetches
/// a single page; [`to_stream`](ToStream::to_stream) and
/// [`to_paginated`](ListObjects::to_paginated) walk the whole listing,
/// continuing from the last name of each page.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListObjects {
    #[builder(!default)] // force required
    client: ServiceClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    container: String,

    /// Return full object records (JSON) instead of bare names.
    #[builder(default)]
    full: bool,
    #[builder(default, setter(into))]
    prefix: Option<String>,
    #[builder(default, setter(into))]
    delimiter: Option<String>,
    #[builder(default, setter(into))]
    path: Option<String>,
    /// Only list names after this one.
    #[builder(default, setter(into))]
    marker: Option<String>,
    /// Only list names before this one.
    #[builder(default, setter(into))]
    end_marker: Option<String>,
    /// Maximum number of entries per page.
    #[builder(default, setter(into))]
    limit: Option<u32>,
    /// List every version of each object.
    #[builder(default)]
    versions: bool,
}

/// Builder type alias for [`ListObjects`].
pub type ListObjectsBldr = ListObjectsBuilder<(
    (ServiceClient,),
    (),
    (),
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

impl ServiceApi for ListObjects {
    type Response = ListObjectsResponse;
}

impl ListObjects {
    /// Returns a page-by-page view over the whole listing.
    pub fn to_paginated(self) -> ListObjectsPaginated {
        ListObjectsPaginated {
            args: self,
            cursor: PageCursor::Start,
        }
    }

    fn page_request(&self, marker: Option<&str>) -> Result<ServiceRequest, Error> {
        check_container_name(&self.container)?;

        let mut headers: Multimap = self.extra_headers.clone().unwrap_or_default();
        let mut query_params: Multimap = self.extra_query_params.clone().unwrap_or_default();
        if self.full {
            query_params.add("format", "json");
            headers.add(ACCEPT, "application/json");
        } else {
            headers.add(ACCEPT, "text/plain");
        }
        query_params.add_opt("prefix", self.prefix.clone());
        query_params.add_opt("delimiter", self.delimiter.clone());
        query_params.add_opt("path", self.path.clone());
        query_params.add_opt("marker", marker.or(self.marker.as_deref()));
        query_params.add_opt("end_marker", self.end_marker.clone());
        query_params.add_opt("limit", self.limit.map(|l| l.to_string()));
        if self.versions {
            query_params.add("versions", "");
        }

        Ok(ServiceRequest::builder()
            .client(self.client.clone())
            .method(Method::GET)
            .container(self.container.clone())
            .query_params(query_params)
            .headers(headers)
            .build())
    }
}

impl ToServiceRequest for ListObjects {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        self.page_request(None)
    }
}

/// Marker-driven walk over an object listing.
#[derive(Debug)]
pub struct ListObjectsPaginated {
    args: ListObjects,
    cursor: PageCursor,
}

impl ListObjectsPaginated {
    async fn fetch(&self) -> Result<ListObjectsResponse, Error> {
        let mut req = self.args.page_request(self.cursor.marker())?;
        let resp = req.execute().await;
        ListObjectsResponse::from_response(req, resp).await
    }
}

#[async_trait]
impl Paginated for ListObjectsPaginated {
    type Item = ListObjectsResponse;

    async fn next_page(&mut self) -> Option<Result<Self::Item, Error>> {
        if self.cursor.is_done() {
            return None;
        }
        let first = self.cursor == PageCursor::Start;

        let page = match self.fetch().await {
            Ok(page) => page,
            Err(e) => {
                self.cursor = PageCursor::Done;
                return Some(Err(e));
            }
        };

        if page.objects.is_empty() {
            self.cursor.advance(None);
            // Only the very first page may be empty.
            return first.then_some(Ok(page));
        }

        let short_page = self
            .args
            .limit
            .is_some_and(|limit| page.objects.len() < limit as usize);
        if short_page {
            debug!("short page of {} entries", page.objects.len());
            self.cursor.advance(None);
        } else {
            self.cursor.advance(page.last_marker());
        }
        Some(Ok(page))
    }
}

#[async_trait]
impl ToStream for ListObjects {
    type Item = ListObjectsResponse;

    async fn to_stream(self) -> Box<dyn Stream<Item = Result<Self::Item, Error>> + Unpin + Send> {
        pages(self.to_paginated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ServiceClient {
        ServiceClient::new::<crate::core::creds::StaticProvider>(
            "http://localhost:8080/v1/AUTH_test".parse().unwrap(),
            None,
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_full_listing_query() {
        let req = client()
            .list_objects("testContainer")
            .full(true)
            .prefix("dir/".to_string())
            .limit(2_u32)
            .build()
            .to_request()
            .unwrap();
        assert_eq!(
            req.target_url().to_string(),
            "http://localhost:8080/v1/AUTH_test/testContainer?format=json&limit=2&prefix=dir%2F"
        );
        assert_eq!(
            req.headers.get(ACCEPT).map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_cursor_marker_overrides_initial_marker() {
        let args = client()
            .list_objects("testContainer")
            .marker("a".to_string())
            .build();
        let req = args.page_request(Some("b")).unwrap();
        assert_eq!(req.query_params.get("marker").map(String::as_str), Some("b"));
        let req = args.page_request(None).unwrap();
        assert_eq!(req.query_params.get("marker").map(String::as_str), Some("a"));
    }
}
