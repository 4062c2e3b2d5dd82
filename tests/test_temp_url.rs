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

use chrono::{TimeZone, Utc};
use httpmock::Method::HEAD;
use openstack::core::error::Error;
use openstack::objectstorage::temp_url::temp_url_signature;
use openstack_common::{TEST_TOKEN, TestContext};

const SIGNED_PATH: &str = "/v1/testContainer/testObject/testFile.txt";
const EXPIRES: i64 = 1593565980;

fn timestamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 7, 1, 1, 12, 0).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_temp_url_with_container_key() {
    let ctx = TestContext::with_path("/v1").await;

    let container = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD)
                .path("/v1/testContainer")
                .header("x-auth-token", TEST_TOKEN);
            then.status(204)
                .header("X-Container-Object-Count", "1")
                .header("X-Container-Meta-Temp-Url-Key", "testsecret");
        })
        .await;
    let account = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/");
            then.status(204)
                .header("X-Account-Meta-Temp-Url-Key", "accountsecret");
        })
        .await;

    let resp = ctx
        .client
        .create_temp_url(
            "testContainer",
            "testObject/testFile.txt",
            http::Method::GET,
        )
        .ttl(60)
        .timestamp(timestamp())
        .build()
        .send()
        .await
        .unwrap();

    container.assert_async().await;
    account.assert_hits_async(0).await;
    assert!(resp.url.ends_with(
        "?temp_url_sig=89be454a9c7e2e9f3f50a8441815e0b5801cba5b&temp_url_expires=1593565980"
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_temp_url_with_account_key() {
    let ctx = TestContext::with_path("/v1").await;

    let container = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/testContainer");
            then.status(204).header("X-Container-Object-Count", "1");
        })
        .await;
    let account = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/").header("x-auth-token", TEST_TOKEN);
            then.status(204)
                .header("X-Account-Container-Count", "2")
                .header("X-Account-Object-Count", "5")
                .header("X-Account-Bytes-Used", "14")
                .header("X-Account-Meta-Temp-Url-Key", "testsecret");
        })
        .await;

    let resp = ctx
        .client
        .create_temp_url(
            "testContainer",
            "testObject/testFile.txt",
            http::Method::GET,
        )
        .ttl(60)
        .timestamp(timestamp())
        .build()
        .send()
        .await
        .unwrap();

    container.assert_async().await;
    account.assert_async().await;
    assert_eq!(
        resp.url,
        format!(
            "http://127.0.0.1:{}/v1/testContainer/testObject/testFile.txt?temp_url_sig=89be454a9c7e2e9f3f50a8441815e0b5801cba5b&temp_url_expires=1593565980",
            ctx.port()
        )
    );
    assert_eq!(resp.expires.timestamp(), EXPIRES);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_temp_url_picks_up_rotated_key() {
    let ctx = TestContext::with_path("/v1").await;

    let container = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/testContainer");
            then.status(204);
        })
        .await;
    let mut account = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/");
            then.status(204)
                .header("X-Account-Meta-Temp-Url-Key", "testsecret");
        })
        .await;

    let build = || {
        ctx.client
            .create_temp_url(
                "testContainer",
                "testObject/testFile.txt",
                http::Method::GET,
            )
            .ttl(60)
            .timestamp(timestamp())
            .build()
    };

    let before = build().send().await.unwrap();
    account.assert_async().await;
    account.delete_async().await;

    let rotated = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/");
            then.status(204)
                .header("X-Account-Meta-Temp-Url-Key", "rotatedsecret");
        })
        .await;

    let after = build().send().await.unwrap();
    rotated.assert_async().await;
    container.assert_hits_async(2).await;

    let expected = temp_url_signature(&http::Method::GET, EXPIRES, SIGNED_PATH, "rotatedsecret")
        .unwrap();
    assert_ne!(before.url, after.url);
    assert!(before
        .url
        .contains("temp_url_sig=89be454a9c7e2e9f3f50a8441815e0b5801cba5b"));
    assert!(after.url.contains(&format!("temp_url_sig={expected}")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_temp_url_with_given_key() {
    let ctx = TestContext::with_path("/v1").await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD);
            then.status(204);
        })
        .await;

    let resp = ctx
        .client
        .create_temp_url(
            "testContainer",
            "testObject/testFile.txt",
            http::Method::GET,
        )
        .ttl(60)
        .timestamp(timestamp())
        .temp_url_key("testsecret".to_string())
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_hits_async(0).await;
    assert!(resp.url.ends_with(
        "?temp_url_sig=89be454a9c7e2e9f3f50a8441815e0b5801cba5b&temp_url_expires=1593565980"
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_temp_url_without_any_key() {
    let ctx = TestContext::with_path("/v1").await;

    let _container = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/testContainer");
            then.status(204).header("X-Container-Meta-Temp-Url-Key", "");
        })
        .await;
    let _account = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/");
            then.status(204).header("X-Account-Object-Count", "0");
        })
        .await;

    let err = ctx
        .client
        .create_temp_url("testContainer", "testObject", http::Method::GET)
        .ttl(60)
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::PrerequisiteMissing(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_temp_url_for_missing_container() {
    let ctx = TestContext::with_path("/v1").await;

    let _container = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/testContainer");
            then.status(404);
        })
        .await;
    let account = ctx
        .server
        .mock_async(|when, then| {
            when.method(HEAD).path("/v1/");
            then.status(204).header("X-Account-Meta-Temp-Url-Key", "testsecret");
        })
        .await;

    let err = ctx
        .client
        .create_temp_url("testContainer", "testObject", http::Method::GET)
        .ttl(60)
        .build()
        .send()
        .await
        .unwrap_err();

    account.assert_hits_async(0).await;
    assert_eq!(err.status(), Some(404));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn create_temp_url_missing_split() {
    let ctx = TestContext::with_path("/v1").await;

    let err = ctx
        .client
        .create_temp_url("testContainer", "testObject", http::Method::GET)
        .temp_url_key("testsecret".to_string())
        .split("/v2/".to_string())
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
}
