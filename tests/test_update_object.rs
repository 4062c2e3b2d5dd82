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

use httpmock::Method::POST;
use openstack::core::traits::ServiceApi;
use openstack::objectstorage::HeaderUpdate;
use openstack_common::{TEST_TOKEN, TestContext, object_path};
use std::collections::HashMap;

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn update_object_metadata() {
    let ctx = TestContext::new().await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path(object_path("testContainer", "testObject"))
                .header("x-auth-token", TEST_TOKEN)
                .header("x-object-meta-gophercloud-test", "objects")
                .header("x-remove-object-meta-gophercloud-test-remove", "remove")
                .header("content-type", "text/plain")
                .header("x-delete-after", "60");
            then.status(202)
                .header("Content-Type", "text/html; charset=UTF-8")
                .header("X-Trans-Id", "tx0123456789");
        })
        .await;

    let resp = ctx
        .client
        .update_object("testContainer", "testObject")
        .metadata(HashMap::from([(
            "Gophercloud-Test".to_string(),
            "objects".to_string(),
        )]))
        .remove_metadata(vec!["Gophercloud-Test-Remove".to_string()])
        .content_type("text/plain")
        .delete_after(60_u64)
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.container, "testContainer");
    assert_eq!(resp.object, "testObject");
    assert_eq!(resp.trans_id.as_deref(), Some("tx0123456789"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn update_object_clears_delete_at() {
    let ctx = TestContext::new().await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path(object_path("testContainer", "testObject"))
                .header("x-remove-delete-at", "1")
                .header_missing("x-delete-at")
                .header_missing("content-type");
            then.status(202);
        })
        .await;

    ctx.client
        .update_object("testContainer", "testObject")
        .delete_at(HeaderUpdate::<openstack::core::utils::UtcTime>::Clear)
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
}
