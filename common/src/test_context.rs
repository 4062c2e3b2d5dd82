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

use crate::utils::{ACCOUNT_PATH, TEST_TOKEN};
use httpmock::MockServer;
use openstack::core::client::ServiceClient;
use openstack::core::creds::StaticProvider;
use openstack::core::http::BaseUrl;
use openstack::identity::IdentityClient;

/// A mock OpenStack endpoint and a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: ServiceClient,
    pub base_url: BaseUrl,
}

impl TestContext {
    /// Object storage context for the `AUTH_test` account.
    pub async fn new() -> Self {
        Self::with_path(ACCOUNT_PATH).await
    }

    /// Context whose endpoint is the mock server followed by `path`.
    pub async fn with_path(path: &str) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let server = MockServer::start_async().await;
        let base_url: BaseUrl = format!("{}{path}", server.base_url()).parse().unwrap();
        let client = ServiceClient::new(
            base_url.clone(),
            Some(StaticProvider::new(TEST_TOKEN)),
            None,
            None,
        )
        .unwrap();

        Self {
            server,
            client,
            base_url,
        }
    }

    /// Identity context rooted at `/v3`.
    pub async fn identity() -> (Self, IdentityClient) {
        let ctx = Self::with_path("/v3").await;
        let identity = IdentityClient::new(ctx.client.clone());
        (ctx, identity)
    }

    pub fn port(&self) -> u16 {
        self.server.port()
    }
}
