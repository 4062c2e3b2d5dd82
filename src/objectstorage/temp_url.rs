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

//! Temporary URL signing.
//!
//! A temp URL grants time-limited access to one object. The signature is a
//! hex HMAC-SHA1 over `METHOD\nEXPIRES\nPATH`, keyed by the container's
//! `X-Container-Meta-Temp-Url-Key` or, when the container has none, by the
//! account's `X-Account-Meta-Temp-Url-Key`.

use crate::core::client::ServiceClient;
use crate::core::error::{Error, ValidationErr};
use crate::core::multimap_ext::Multimap;
use crate::core::request::ServiceRequest;
use crate::core::traits::ServiceApi;
use crate::core::utils::{
    UtcTime, check_container_name, check_object_name, from_unix_seconds, header_str,
    truncate_to_second, urldecode_path, urlencode_object_key, urlencode_segment, utc_now,
};
use crate::objectstorage::header_constants::{
    TEMP_URL_EXPIRES, TEMP_URL_SIG, X_CONTAINER_META_TEMP_URL_KEY,
};
use hmac::{Hmac, Mac};
use http::Method;
use log::debug;
use sha1::Sha1;
use typed_builder::TypedBuilder;

/// API version marker the signed path starts at.
pub const DEFAULT_SPLIT: &str = "/v1/";

/// Returns the hex HMAC-SHA1 signature of a temp URL.
///
/// `path` must be the decoded resource path including the API version, e.g.
/// `/v1/AUTH_account/container/object`.
pub fn temp_url_signature(
    method: &Method,
    expires: i64,
    path: &str,
    key: &str,
) -> Result<String, ValidationErr> {
    let body = format!("{}\n{}\n{}", method.as_str(), expires, path);
    let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
        .map_err(|e| ValidationErr::InvalidArgument(format!("temp URL key: {e}")))?;
    mac.update(body.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Argument builder for [`ServiceClient::create_temp_url`].
///
/// Unless `temp_url_key` is given, the key is fetched on every call so a
/// rotated key takes effect immediately. The container's key is preferred and
/// the account's key is used when the container has none.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateTempUrl {
    #[builder(!default)] // force required
    client: ServiceClient,
    #[builder(setter(into))] // force required + accept Into<String>
    container: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(!default)] // force required
    method: Method,
    /// Seconds the URL stays valid after `timestamp`.
    #[builder(default)]
    ttl: u64,
    /// Start of validity; defaults to now.
    #[builder(default, setter(into))]
    timestamp: Option<UtcTime>,
    /// Marker where the signed path begins; defaults to [`DEFAULT_SPLIT`].
    #[builder(default, setter(into))]
    split: Option<String>,
    #[builder(default, setter(into))]
    temp_url_key: Option<String>,
}

/// Builder type alias for [`CreateTempUrl`].
pub type CreateTempUrlBldr =
    CreateTempUrlBuilder<((ServiceClient,), (String,), (String,), (Method,), (), (), (), ())>;

#[derive(Clone, Debug)]
/// Response of [`CreateTempUrl::send`].
pub struct CreateTempUrlResponse {
    pub container: String,
    pub object: String,
    pub method: Method,
    /// Instant the URL stops being valid.
    pub expires: UtcTime,
    /// The signed URL.
    pub url: String,
}

impl CreateTempUrl {
    /// Looks up the signing key: the container's first, then the account's.
    async fn fetch_key(&self) -> Result<String, Error> {
        let mut req = ServiceRequest::builder()
            .client(self.client.clone())
            .method(Method::HEAD)
            .container(self.container.clone())
            .build();
        let resp = req.execute().await?;
        if let Some(key) = header_str(resp.headers(), X_CONTAINER_META_TEMP_URL_KEY)?
            .filter(|k| !k.is_empty())
        {
            debug!("signing temp URL with the key of container {}", self.container);
            return Ok(key.to_string());
        }

        let account = self.client.get_account().build().send().await?;
        account
            .temp_url_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::PrerequisiteMissing(format!(
                    "neither container {} nor the account has a temp URL key \
                     (X-Container-Meta-Temp-Url-Key, X-Account-Meta-Temp-Url-Key)",
                    self.container
                ))
            })
    }

    pub async fn send(self) -> Result<CreateTempUrlResponse, Error> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let key = match self.temp_url_key.clone().filter(|k| !k.is_empty()) {
            Some(k) => k,
            None => self.fetch_key().await?,
        };

        let timestamp = truncate_to_second(self.timestamp.unwrap_or_else(utc_now));
        let ttl = i64::try_from(self.ttl)
            .map_err(|_| ValidationErr::InvalidArgument(format!("ttl {} is too large", self.ttl)))?;
        let expires = timestamp.timestamp() + ttl;
        let expires_at = from_unix_seconds(expires).ok_or_else(|| {
            ValidationErr::InvalidArgument(format!("expiry {expires} is out of range"))
        })?;

        let url = self.client.base_url().build_url(
            &[
                &urlencode_segment(&self.container),
                &urlencode_object_key(&self.object),
            ],
            &Multimap::new(),
        );
        let full = url.without_query();
        let split = self.split.as_deref().unwrap_or(DEFAULT_SPLIT);
        let idx = full.find(split).ok_or_else(|| {
            ValidationErr::UrlBuildError(format!("'{full}' does not contain '{split}'"))
        })?;
        let (base, object_path) = full.split_at(idx);

        let signature =
            temp_url_signature(&self.method, expires, &urldecode_path(object_path), &key)?;
        debug!(
            "created temp URL for {}/{} valid until {expires}",
            self.container, self.object
        );

        Ok(CreateTempUrlResponse {
            container: self.container,
            object: self.object,
            method: self.method,
            expires: expires_at,
            url: format!("{base}{object_path}?{TEMP_URL_SIG}={signature}&{TEMP_URL_EXPIRES}={expires}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_vector() {
        let sig = temp_url_signature(
            &Method::GET,
            1593565980,
            "/v1/testContainer/testObject/testFile.txt",
            "testsecret",
        )
        .unwrap();
        assert_eq!(sig, "89be454a9c7e2e9f3f50a8441815e0b5801cba5b");
    }

    #[test]
    fn test_signature_depends_on_every_input() {
        let base = temp_url_signature(&Method::GET, 1, "/v1/a/b", "k").unwrap();
        assert_eq!(base, temp_url_signature(&Method::GET, 1, "/v1/a/b", "k").unwrap());
        assert_ne!(base, temp_url_signature(&Method::PUT, 1, "/v1/a/b", "k").unwrap());
        assert_ne!(base, temp_url_signature(&Method::GET, 2, "/v1/a/b", "k").unwrap());
        assert_ne!(base, temp_url_signature(&Method::GET, 1, "/v1/a/c", "k").unwrap());
        assert_ne!(base, temp_url_signature(&Method::GET, 1, "/v1/a/b", "j").unwrap());
    }
}
