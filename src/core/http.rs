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

use crate::core::error::ValidationErr;
use crate::core::multimap_ext::{Multimap, MultimapExt};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Service endpoint, e.g. `https://swift.example.com/v1/AUTH_account/`.
///
/// The path always ends with `/`, so service URLs are built by appending
/// encoded path parts.
pub struct BaseUrl {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl BaseUrl {
    /// Returns the endpoint as a string, always with a trailing slash.
    pub fn endpoint(&self) -> String {
        let mut s = String::new();
        s.push_str(if self.https { "https://" } else { "http://" });
        s.push_str(&self.host_header_value());
        s.push_str(&self.path);
        s
    }

    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }

    /// Builds a service URL from already-encoded path parts. Empty parts are
    /// skipped; parts are joined with `/`.
    pub fn build_url(&self, encoded_parts: &[&str], query: &Multimap) -> Url {
        let mut path = self.path.clone();
        let joined = encoded_parts
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.trim_start_matches('/'))
            .collect::<Vec<_>>()
            .join("/");
        path.push_str(&joined);

        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path,
            query: query.clone(),
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = url::Url::parse(s)
            .map_err(|e| ValidationErr::InvalidBaseUrl(format!("'{s}': {e}")))?;

        let https = match url.scheme() {
            "https" => true,
            "http" => false,
            other => {
                return Err(ValidationErr::InvalidBaseUrl(format!(
                    "scheme '{other}' is not supported; use http or https"
                )));
            }
        };

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ValidationErr::InvalidBaseUrl(format!("'{s}' has no host")))?
            .to_string();

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(format!(
                "'{s}' must not carry a query or fragment"
            )));
        }

        let mut path = url.path().to_string();
        if !path.ends_with('/') {
            path.push('/');
        }

        Ok(BaseUrl {
            https,
            host,
            port: url.port().unwrap_or(0),
            path,
        })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.endpoint())
    }
}

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    /// Parses an absolute URL, e.g. a `next` link returned by a listing.
    pub fn parse(s: &str) -> Result<Url, ValidationErr> {
        let parsed = url::Url::parse(s)
            .map_err(|e| ValidationErr::UrlBuildError(format!("'{s}': {e}")))?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ValidationErr::UrlBuildError(format!("'{s}' has no host")))?
            .to_string();
        let mut query = Multimap::new();
        for (k, v) in parsed.query_pairs() {
            query.add(k.into_owned(), v.into_owned());
        }
        Ok(Url {
            https: parsed.scheme() == "https",
            host,
            port: parsed.port().unwrap_or(0),
            path: parsed.path().to_string(),
            query,
        })
    }

    /// URL without its query string.
    pub fn without_query(&self) -> String {
        let mut s = String::new();
        s.push_str(if self.https { "https://" } else { "http://" });
        if self.port > 0 {
            s.push_str(&format!("{}:{}", self.host, self.port));
        } else {
            s.push_str(&self.host);
        }
        if !self.path.starts_with('/') {
            s.push('/');
        }
        s.push_str(&self.path);
        s
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }
        f.write_str(&self.without_query())?;
        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }
        Ok(())
    }
}
