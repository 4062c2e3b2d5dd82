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

use httpmock::Method::PUT;
use openstack::core::utils::md5_hex;
use openstack::objectstorage::ContentSource;
use openstack_common::{RandReader, TEST_TOKEN, TestContext, object_path};

const CONTENT: &str = "Did gyre and gimble in the wabe";

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_object_sends_checksum_and_length() {
    let ctx = TestContext::new().await;
    let etag = md5_hex(CONTENT.as_bytes());

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(object_path("testContainer", "testObject"))
                .header("x-auth-token", TEST_TOKEN)
                .header("content-type", "text/plain")
                .header("etag", etag.as_str())
                .header("content-length", CONTENT.len().to_string())
                .body(CONTENT);
            then.status(201)
                .header("ETag", etag.as_str())
                .header("Last-Modified", "Tue, 10 Nov 2009 23:00:00 GMT")
                .header("X-Trans-Id", "tx0123456789");
        })
        .await;

    let resp = ctx
        .client
        .create_object("testContainer", "testObject", CONTENT)
        .content_type("text/plain".to_string())
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.container, "testContainer");
    assert_eq!(resp.object, "testObject");
    assert_eq!(resp.etag, etag);
    assert!(resp.checksum_matches());
    assert_eq!(resp.trans_id.as_deref(), Some("tx0123456789"));
    assert!(resp.last_modified.is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_object_with_cache_control() {
    let ctx = TestContext::new().await;
    let cache_control = r#"max-age="3600", public"#;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(object_path("testContainer", "testObject"))
                .header("cache-control", cache_control)
                .header("x-object-meta-gophercloud-test", "objects");
            then.status(201).header("ETag", md5_hex(CONTENT.as_bytes()));
        })
        .await;

    ctx.client
        .create_object("testContainer", "testObject", CONTENT)
        .cache_control(cache_control.to_string())
        .metadata([("Gophercloud-Test".to_string(), "objects".to_string())].into())
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_object_from_forward_only_stream() {
    let ctx = TestContext::new().await;
    let size = 64 * 1024_u64;
    let expected = md5_hex(&RandReader::new(size, 7).into_vec());

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(object_path("testContainer", "random.bin"))
                .header("etag", expected.as_str())
                .header("content-length", size.to_string());
            then.status(201).header("ETag", expected.as_str());
        })
        .await;

    let resp = ctx
        .client
        .create_object(
            "testContainer",
            "random.bin",
            ContentSource::stream(RandReader::new(size, 7)),
        )
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.local_checksum.as_deref(), Some(expected.as_str()));
    assert!(resp.checksum_matches());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_object_without_etag() {
    let ctx = TestContext::new().await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(object_path("testContainer", "testObject"))
                .header_missing("etag");
            then.status(201).header("ETag", md5_hex(CONTENT.as_bytes()));
        })
        .await;

    let resp = ctx
        .client
        .create_object("testContainer", "testObject", CONTENT)
        .no_etag(true)
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(resp.local_checksum.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_object_server_error() {
    let ctx = TestContext::new().await;

    let _mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(PUT).path(object_path("testContainer", "testObject"));
            then.status(500).body("internal failure");
        })
        .await;

    let err = ctx
        .client
        .create_object("testContainer", "testObject", CONTENT)
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), Some(500));
}
