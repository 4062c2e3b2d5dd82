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
use crate::core::utils::{check_container_name, check_object_name, urlencode_segment};
use crate::objectstorage::header_constants::{ACCEPT, BULK_DELETE, CONTENT_TYPE};
use crate::objectstorage::response::BulkDeleteResponse;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for deleting many objects of one container in a single
/// request.
///
/// This struct constructs the parameters required for the
/// [`ServiceClient::bulk_delete`] method. The request goes to the account
/// endpoint with `?bulk-delete=true` and a plain-text body listing one
/// `container/object` path per line.
#[derive(Clone, Debug, TypedBuilder)]
pub struct BulkDelete {
    #[builder(!default)] // force required
    client: ServiceClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    container: String,
    #[builder(!default)] // force required
    objects: Vec<String>,
}

/// Builder type alias for [`BulkDelete`].
pub type BulkDeleteBldr =
    BulkDeleteBuilder<((ServiceClient,), (), (), (String,), (Vec<String>,))>;

impl ServiceApi for BulkDelete {
    type Response = BulkDeleteResponse;
}

impl BulkDelete {
    fn body(&self) -> String {
        let container = urlencode_segment(&self.container);
        self.objects
            .iter()
            .map(|o| format!("{container}/{}\n", urlencode_segment(o)))
            .collect()
    }
}

impl ToServiceRequest for BulkDelete {
    fn to_request(self) -> Result<ServiceRequest, Error> {
        check_container_name(&self.container)?;
        if self.objects.is_empty() {
            return Err(ValidationErr::InvalidArgument("no objects to delete".into()).into());
        }
        for o in &self.objects {
            check_object_name(o)?;
        }

        let body = self.body();

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(ACCEPT, "application/json");
        headers.add(CONTENT_TYPE, "text/plain");

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add(BULK_DELETE, "true");

        Ok(ServiceRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .query_params(query_params)
            .headers(headers)
            .body(reqwest::Body::from(body))
            .build())
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
    fn test_body_lists_encoded_paths() {
        let builder = BulkDelete::builder()
            .client(client())
            .container("testContainer")
            .objects(vec!["testObject1".to_string(), "dir/with space".to_string()])
            .build();
        assert_eq!(
            builder.body(),
            "testContainer/testObject1\ntestContainer/dir%2Fwith%20space\n"
        );

        let req = builder.to_request().unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(
            req.target_url().to_string(),
            "http://localhost:8080/v1/AUTH_test/?bulk-delete=true"
        );
        assert_eq!(req.headers.get(CONTENT_TYPE).map(String::as_str), Some("text/plain"));
    }

    #[test]
    fn test_empty_object_list_is_rejected() {
        assert!(client().bulk_delete("testContainer", vec![]).build().to_request().is_err());
    }
}
