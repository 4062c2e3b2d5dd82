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

//! Responses for [`IdentityClient`](crate::identity::IdentityClient) APIs.

use crate::core::error::Error;
use crate::core::request::ServiceRequest;
use crate::core::traits::FromServiceResponse;
use crate::identity::types::{EnforcementModel, Limit};
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::mem;

async fn json_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let body = resp.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[derive(Deserialize)]
struct LimitOutput {
    limit: Limit,
}

#[derive(Deserialize)]
struct LimitsOutput {
    #[serde(default)]
    limits: Vec<Limit>,
}

#[derive(Default, Deserialize)]
struct PageLinks {
    #[serde(default)]
    next: Option<String>,
}

#[derive(Deserialize)]
struct LimitsPage {
    #[serde(default)]
    limits: Vec<Limit>,
    #[serde(default)]
    links: PageLinks,
}

#[derive(Deserialize)]
struct ModelOutput {
    model: EnforcementModel,
}

/// One page of [`IdentityClient::list_limits`](crate::identity::IdentityClient::list_limits).
#[derive(Clone, Debug)]
pub struct ListLimitsResponse {
    pub headers: HeaderMap,
    pub limits: Vec<Limit>,
    /// Link to the following page; absent or empty on the last one.
    pub next: Option<String>,
}

#[async_trait]
impl FromServiceResponse for ListLimitsResponse {
    async fn from_response(
        _req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(Self {
                headers,
                limits: Vec::new(),
                next: None,
            });
        }
        let page: LimitsPage = json_body(resp).await?;
        Ok(Self {
            headers,
            limits: page.limits,
            next: page.links.next.filter(|n| !n.is_empty()),
        })
    }
}

/// Response of [`IdentityClient::get_limit`](crate::identity::IdentityClient::get_limit).
#[derive(Clone, Debug)]
pub struct GetLimitResponse {
    pub headers: HeaderMap,
    pub limit: Limit,
}

#[async_trait]
impl FromServiceResponse for GetLimitResponse {
    async fn from_response(
        _req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let out: LimitOutput = json_body(resp).await?;
        Ok(Self {
            headers,
            limit: out.limit,
        })
    }
}

/// Response of [`IdentityClient::update_limit`](crate::identity::IdentityClient::update_limit).
#[derive(Clone, Debug)]
pub struct UpdateLimitResponse {
    pub headers: HeaderMap,
    pub limit: Limit,
}

#[async_trait]
impl FromServiceResponse for UpdateLimitResponse {
    async fn from_response(
        _req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let out: LimitOutput = json_body(resp).await?;
        Ok(Self {
            headers,
            limit: out.limit,
        })
    }
}

/// Response of [`IdentityClient::create_limits`](crate::identity::IdentityClient::create_limits).
#[derive(Clone, Debug)]
pub struct CreateLimitsResponse {
    pub headers: HeaderMap,
    /// The created limits, in request order.
    pub limits: Vec<Limit>,
}

#[async_trait]
impl FromServiceResponse for CreateLimitsResponse {
    async fn from_response(
        _req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let out: LimitsOutput = json_body(resp).await?;
        Ok(Self {
            headers,
            limits: out.limits,
        })
    }
}

/// Response of [`IdentityClient::delete_limit`](crate::identity::IdentityClient::delete_limit).
#[derive(Clone, Debug)]
pub struct DeleteLimitResponse {
    pub headers: HeaderMap,
}

#[async_trait]
impl FromServiceResponse for DeleteLimitResponse {
    async fn from_response(
        _req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        Ok(Self {
            headers: mem::take(resp.headers_mut()),
        })
    }
}

/// Response of [`IdentityClient::get_enforcement_model`](crate::identity::IdentityClient::get_enforcement_model).
#[derive(Clone, Debug)]
pub struct GetEnforcementModelResponse {
    pub headers: HeaderMap,
    pub model: EnforcementModel,
}

#[async_trait]
impl FromServiceResponse for GetEnforcementModelResponse {
    async fn from_response(
        _req: ServiceRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        let headers = mem::take(resp.headers_mut());
        let out: ModelOutput = json_body(resp).await?;
        Ok(Self {
            headers,
            model: out.model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_next_link() {
        let page: LimitsPage = serde_json::from_str(
            r#"{"links": {"self": "http://localhost/v3/limits", "next": "http://localhost/v3/limits?marker=1", "previous": null},
                "limits": []}"#,
        )
        .unwrap();
        assert_eq!(page.links.next.as_deref(), Some("http://localhost/v3/limits?marker=1"));

        let page: LimitsPage =
            serde_json::from_str(r#"{"links": {"next": null}, "limits": []}"#).unwrap();
        assert_eq!(page.links.next, None);
    }
}
