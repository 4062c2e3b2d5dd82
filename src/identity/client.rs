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

//! Client for the identity (Keystone v3) limits API.

use crate::core::client::{ENV_AUTH_TOKEN, ENV_IDENTITY_URL, ServiceClient};
use crate::core::error::Error;
use crate::identity::builders::*;
use crate::identity::types::CreateLimit;

/// Client for the identity service, e.g. `https://keystone.example.com/v3/`.
///
/// Wraps a [`ServiceClient`] configured with the identity endpoint; cloning is
/// cheap and clones share the connection pool.
#[derive(Clone, Debug)]
pub struct IdentityClient {
    inner: ServiceClient,
}

impl From<ServiceClient> for IdentityClient {
    fn from(inner: ServiceClient) -> Self {
        Self { inner }
    }
}

impl IdentityClient {
    pub fn new(inner: ServiceClient) -> Self {
        Self { inner }
    }

    /// Returns a client configured from `OS_IDENTITY_URL` and `OS_AUTH_TOKEN`.
    pub fn from_env() -> Result<Self, Error> {
        ServiceClient::from_env_vars(ENV_IDENTITY_URL, ENV_AUTH_TOKEN).map(Self::new)
    }

    pub fn service_client(&self) -> &ServiceClient {
        &self.inner
    }

    /// Creates a [`ListLimits`] request builder.
    ///
    /// [`ListLimits::to_stream()`](crate::core::traits::ToStream::to_stream)
    /// follows the `next` link of every page.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    /// use openstack::core::traits::ToStream;
    /// use openstack::identity::IdentityClient;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = IdentityClient::from_env().unwrap();
    ///     let mut pages = client
    ///         .list_limits()
    ///         .resource_name("snapshot".to_string())
    ///         .build()
    ///         .to_stream()
    ///         .await;
    ///     while let Some(page) = pages.next().await {
    ///         for limit in page.unwrap().limits {
    ///             println!("{}: {}", limit.id, limit.resource_limit);
    ///         }
    ///     }
    /// }
    /// ```
    pub fn list_limits(&self) -> ListLimitsBldr {
        ListLimits::builder().client(self.inner.clone())
    }

    pub fn get_limit(&self, id: impl Into<String>) -> GetLimitBldr {
        GetLimit::builder().client(self.inner.clone()).id(id)
    }

    /// Creates a [`CreateLimits`] request builder. All limits are created
    /// in one request.
    pub fn create_limits(&self, limits: Vec<CreateLimit>) -> CreateLimitsBldr {
        CreateLimits::builder()
            .client(self.inner.clone())
            .limits(limits)
    }

    /// Creates an [`UpdateLimit`] request builder. Only the fields that are
    /// set are changed.
    pub fn update_limit(&self, id: impl Into<String>) -> UpdateLimitBldr {
        UpdateLimit::builder().client(self.inner.clone()).id(id)
    }

    pub fn delete_limit(&self, id: impl Into<String>) -> DeleteLimitBldr {
        DeleteLimit::builder().client(self.inner.clone()).id(id)
    }

    /// Creates a [`GetEnforcementModel`] request builder.
    pub fn get_enforcement_model(&self) -> GetEnforcementModelBldr {
        GetEnforcementModel::builder().client(self.inner.clone())
    }
}
