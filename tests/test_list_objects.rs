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

use futures_util::StreamExt;
use httpmock::Method::GET;
use openstack::core::pagination::Paginated;
use openstack::core::traits::{ServiceApi, ToStream};
use openstack::objectstorage::response::ListObjectsResponse;
use openstack_common::{ACCOUNT_PATH, TEST_TOKEN, TestContext};
use serde_json::json;

fn container_path() -> String {
    format!("{ACCOUNT_PATH}/testContainer")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_objects_full() {
    let ctx = TestContext::new().await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(container_path())
                .header("x-auth-token", TEST_TOKEN)
                .header("accept", "application/json")
                .query_param("format", "json");
            then.status(200).json_body(json!([
                {
                    "hash": "451e372e48e0f6b1114fa0724aa79fa1",
                    "last_modified": "2016-08-17T22:11:58.602650",
                    "bytes": 14,
                    "name": "goodbye",
                    "content_type": "application/octet-stream"
                },
                {
                    "hash": "451e372e48e0f6b1114fa0724aa79fa1",
                    "last_modified": "2016-08-17T22:11:58.602650",
                    "bytes": 14,
                    "name": "hello",
                    "content_type": "application/octet-stream"
                },
                { "subdir": "pseudo-dir/" }
            ]));
        })
        .await;

    let resp: ListObjectsResponse = ctx
        .client
        .list_objects("testContainer")
        .full(true)
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.container, "testContainer");
    assert_eq!(resp.names(), vec!["goodbye", "hello", "pseudo-dir/"]);
    let goodbye = &resp.objects[0];
    assert_eq!(goodbye.bytes, 14);
    assert_eq!(
        goodbye.hash.as_deref(),
        Some("451e372e48e0f6b1114fa0724aa79fa1")
    );
    assert!(goodbye.last_modified.is_some());
    assert_eq!(resp.objects[2].subdir.as_deref(), Some("pseudo-dir/"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_object_names() {
    let ctx = TestContext::new().await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(container_path())
                .header("accept", "text/plain")
                .query_param("prefix", "he");
            then.status(200)
                .header("Content-Type", "text/plain; charset=utf-8")
                .body("hello\nhelp\n");
        })
        .await;

    let resp = ctx
        .client
        .list_objects("testContainer")
        .prefix("he".to_string())
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.names(), vec!["hello", "help"]);
    assert!(resp.objects.iter().all(|o| o.hash.is_none()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_empty_container() {
    let ctx = TestContext::new().await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET).path(container_path());
            then.status(204);
        })
        .await;

    let pages: Vec<_> = ctx
        .client
        .list_objects("testContainer")
        .full(true)
        .build()
        .to_stream()
        .await
        .collect()
        .await;

    mock.assert_hits_async(1).await;
    assert_eq!(pages.len(), 1);
    assert!(pages[0].as_ref().unwrap().objects.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_objects_stream_follows_marker() {
    let ctx = TestContext::new().await;

    let first = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(container_path())
                .query_param("limit", "2")
                .query_param("marker", "a");
            then.status(200).body("b\nhello\n");
        })
        .await;
    let second = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(container_path())
                .query_param("limit", "2")
                .query_param("marker", "hello");
            then.status(200).body("world\n");
        })
        .await;

    let mut stream = ctx
        .client
        .list_objects("testContainer")
        .marker("a".to_string())
        .limit(2_u32)
        .build()
        .to_stream()
        .await;

    let mut names = Vec::new();
    while let Some(page) = stream.next().await {
        names.extend(page.unwrap().names());
    }

    first.assert_async().await;
    // The short second page ends the listing without a third request.
    second.assert_async().await;
    assert_eq!(names, vec!["b", "hello", "world"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_objects_page_by_page() {
    let ctx = TestContext::new().await;

    let mut first = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET).path(container_path());
            then.status(200).body("goodbye\nhello\n");
        })
        .await;

    let mut listing = ctx.client.list_objects("testContainer").build().to_paginated();

    let page = listing.next_page().await.unwrap().unwrap();
    assert_eq!(page.names(), vec!["goodbye", "hello"]);
    first.assert_async().await;
    first.delete_async().await;

    let last = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path(container_path())
                .query_param("marker", "hello");
            then.status(200).body("");
        })
        .await;

    // Without a limit, only an empty page ends the listing.
    assert!(listing.next_page().await.is_none());
    last.assert_async().await;
    assert!(listing.next_page().await.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_objects_error_ends_listing() {
    let ctx = TestContext::new().await;

    let _mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(GET).path(container_path());
            then.status(401).body("Unauthorized");
        })
        .await;

    let mut listing = ctx.client.list_objects("testContainer").build().to_paginated();
    let err = listing.next_page().await.unwrap().unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(listing.next_page().await.is_none());
}
