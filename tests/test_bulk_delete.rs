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
use openstack_common::{ACCOUNT_PATH, TEST_TOKEN, TestContext};
use serde_json::json;

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn bulk_delete() {
    let ctx = TestContext::new().await;

    let mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{ACCOUNT_PATH}/"))
                .query_param("bulk-delete", "true")
                .header("x-auth-token", TEST_TOKEN)
                .header("accept", "application/json")
                .header("content-type", "text/plain")
                .body("testContainer/testObject1\ntestContainer/testObject2\n");
            then.status(200).json_body(json!({
                "Number Not Found": 0,
                "Response Status": "foo",
                "Response Body": "bar",
                "Errors": [],
                "Number Deleted": 2
            }));
        })
        .await;

    let resp = ctx
        .client
        .bulk_delete(
            "testContainer",
            vec!["testObject1".to_string(), "testObject2".to_string()],
        )
        .build()
        .send()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.result.response_status, "foo");
    assert_eq!(resp.result.response_body, "bar");
    assert_eq!(resp.result.number_deleted, 2);
    assert_eq!(resp.result.number_not_found, 0);
    assert!(resp.result.errors.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn bulk_delete_reports_failures() {
    let ctx = TestContext::new().await;

    let _mock = ctx
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{ACCOUNT_PATH}/"))
                .query_param("bulk-delete", "true");
            then.status(200).json_body(json!({
                "Number Not Found": 1,
                "Response Status": "400 Bad Request",
                "Response Body": "",
                "Errors": [["/testContainer/locked", "409 Conflict"]],
                "Number Deleted": 0
            }));
        })
        .await;

    let resp = ctx
        .client
        .bulk_delete(
            "testContainer",
            vec!["locked".to_string(), "missing".to_string()],
        )
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.result.number_not_found, 1);
    assert_eq!(
        resp.result.errors,
        vec![vec!["/testContainer/locked".to_string(), "409 Conflict".to_string()]]
    );
}
