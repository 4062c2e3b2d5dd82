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

use httpmock::Method::HEAD;
use openstack::core::traits::ServiceApi;
use openstack_common::{TEST_TOKEN, TestContext, object_path};

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn get_object_metadata() {
    let ctx = TestContext::new().await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD)
                .path(object_path("testContainer", "testObject"))
                .header("x-auth-token", TEST_TOKEN);
            then.status(200)
                .header("Content-Type", "text/plain; charset=utf-8")
                .header("ETag", "\"8ddd8be4b179a529afa5f2ffae4b9858\"")
                .header("Last-Modified", "Tue, 10 Nov 2009 23:00:00 GMT")
                .header("X-Static-Large-Object", "True")
                .header("X-Object-Meta-Gophercloud-Test", "objects");
        })
        .await;

    let resp = ctx
        .client
        .get_object("testContainer", "testObject")
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.container, "testContainer");
    assert_eq!(resp.object, "testObject");
    assert_eq!(resp.etag(), "8ddd8be4b179a529afa5f2ffae4b9858");
    assert!(resp.static_large_object());
    assert_eq!(resp.metadata().len(), 1);
    assert_eq!(
        resp.metadata().get("Gophercloud-Test").map(String::as_str),
        Some("objects")
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn get_object_newest() {
    let ctx = TestContext::new().await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD)
                .path(object_path("testContainer", "testObject"))
                .header("x-newest", "true");
            then.status(200);
        })
        .await;

    let resp = ctx
        .client
        .get_object("testContainer", "testObject")
        .newest(true)
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(resp.metadata().is_empty());
    assert!(!resp.static_large_object());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn get_missing_object() {
    let ctx = TestContext::new().await;

    let _mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path(object_path("testContainer", "missing"));
            then.status(404);
        })
        .await;

    let err = ctx
        .client
        .get_object("testContainer", "missing")
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}
