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

//! Service client shared by all operations.
//!
//! # HTTP Version Support
//!
//! The client supports both HTTP/1.1 and HTTP/2. When connecting over TLS,
//! HTTP/2 is negotiated via ALPN if the server supports it, otherwise the
//! client falls back to HTTP/1.1. HTTP/2 support is enabled by default via
//! the `http2` feature flag.

use crate::core::creds::{Provider, StaticProvider};
use crate::core::error::Error;
use crate::core::http::{BaseUrl, Url};
use crate::core::multimap_ext::{Multimap, MultimapExt};
use crate::core::utils::{from_http_header_value, header_http_date};
use http::header::{IF_UNMODIFIED_SINCE, LAST_MODIFIED};
use http::{Method, StatusCode};
use log::{debug, trace, warn};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Header carrying the authentication token.
pub const X_AUTH_TOKEN: &str = "X-Auth-Token";

/// Environment variable holding the object storage endpoint.
pub const ENV_STORAGE_URL: &str = "OS_STORAGE_URL";
/// Environment variable holding the identity endpoint.
pub const ENV_IDENTITY_URL: &str = "OS_IDENTITY_URL";
/// Environment variable holding the authentication token.
pub const ENV_AUTH_TOKEN: &str = "OS_AUTH_TOKEN";

/// Configuration for the HTTP connection pool.
///
/// # Example
///
/// ```
/// use openstack::core::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(4)
///     .idle_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: std::time::Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: std::time::Duration,

    /// Enable TCP_NODELAY. Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: std::time::Duration::from_secs(90),
            tcp_keepalive: std::time::Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: std::time::Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Client Builder manufactures a [`ServiceClient`] for one service endpoint.
#[derive(Debug)]
pub struct ServiceClientBuilder {
    base_url: BaseUrl,
    /// Credential provider. Without one, requests carry no token.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// File for loading CA certs to trust, in addition to the system trust store.
    ssl_cert_file: Option<PathBuf>,
    /// Ignore certificate checks. Insecure, for testing only.
    ignore_cert_check: Option<bool>,
    /// (app_name, app_version) pair appended to the user agent.
    app_info: Option<(String, String)>,
    connection_pool_config: ConnectionPoolConfig,
}

impl ServiceClientBuilder {
    /// Creates a builder given the base URL of the service endpoint, e.g.
    /// `https://swift.example.com/v1/AUTH_account`.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Set the credential provider. If not set, requests are anonymous.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. The file must contain PEM
    /// encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<ServiceClient, Error> {
        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        #[cfg(feature = "http2")]
        {
            builder = builder.http2_adaptive_window(true);
        }

        let mut user_agent = String::from("OpenStack (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") openstack-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v)?;
            file.read_to_end(&mut buf)?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(ServiceClient {
            http_client: builder.build()?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider: self.provider,
            }),
        })
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

/// Client for one OpenStack service endpoint.
///
/// Cloning is cheap and clones share the connection pool. The client holds no
/// per-call mutable state, so it can be used from many tasks at once.
#[derive(Clone, Debug)]
pub struct ServiceClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl ServiceClient {
    /// Returns a client with given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use openstack::core::client::ServiceClient;
    /// use openstack::core::creds::StaticProvider;
    /// use openstack::core::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://swift.example.com/v1/AUTH_test".parse().unwrap();
    /// let provider = StaticProvider::new("gAAAAABfExampleToken");
    /// let client = ServiceClient::new(base_url, Some(provider), None, None).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
        ssl_cert_file: Option<&Path>,
        ignore_cert_check: Option<bool>,
    ) -> Result<Self, Error> {
        ServiceClientBuilder::new(base_url)
            .provider(provider)
            .ssl_cert_file(ssl_cert_file)
            .ignore_cert_check(ignore_cert_check)
            .build()
    }

    /// Returns an object storage client configured from `OS_STORAGE_URL` and
    /// `OS_AUTH_TOKEN`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_env_vars(ENV_STORAGE_URL, ENV_AUTH_TOKEN)
    }

    pub(crate) fn from_env_vars(url_var: &str, token_var: &str) -> Result<Self, Error> {
        let endpoint = std::env::var(url_var)
            .map_err(|_| Error::PrerequisiteMissing(format!("environment variable {url_var}")))?;
        let base_url: BaseUrl = endpoint.parse()?;
        let provider = std::env::var(token_var).ok().map(|t| StaticProvider::new(&t));
        if provider.is_none() {
            warn!("{token_var} is not set, requests are sent without a token");
        }
        ServiceClientBuilder::new(base_url).provider(provider).build()
    }

    /// Returns the endpoint this client talks to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Returns whether this client is configured to use HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    /// Sends one request. 2xx and `304 Not Modified` are returned as-is,
    /// `412 Precondition Failed` becomes [`Error::ConditionalRequestFailed`]
    /// and any other status becomes [`Error::Server`].
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: &Url,
        headers: &Multimap,
        body: Option<reqwest::Body>,
    ) -> Result<reqwest::Response, Error> {
        let url_str = url.to_string();
        let mut req = self.http_client.request(method.clone(), &url_str);

        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }
        if let Some(p) = &self.shared.provider {
            req = req.header(X_AUTH_TOKEN, p.fetch().token);
        }
        if let Some(b) = body {
            req = req.body(b);
        }

        trace!(
            "request headers: {:?}",
            headers.keys().collect::<Vec<&String>>()
        );
        let resp = req.send().await?;
        let status = resp.status();
        debug!("{method} {url_str} -> {}", status.as_u16());

        if status.is_success() || status == StatusCode::NOT_MODIFIED {
            return Ok(resp);
        }

        if status == StatusCode::PRECONDITION_FAILED {
            let last_modified = header_http_date(resp.headers(), LAST_MODIFIED.as_str())
                .ok()
                .flatten();
            let unmodified_since = headers
                .get_ignore_case(IF_UNMODIFIED_SINCE.as_str())
                .and_then(|v| from_http_header_value(v).ok());
            return Err(Error::ConditionalRequestFailed {
                last_modified,
                unmodified_since,
            });
        }

        let body = error_body(resp).await;
        warn!(
            "{method} {url_str} failed with status {}: {body}",
            status.as_u16()
        );
        Err(Error::Server {
            status: status.as_u16(),
            method: method.to_string(),
            url: url.without_query(),
            body,
        })
    }
}

/// Reads the body of an error response. A body that cannot be read is
/// logged and reported as empty so the status still reaches the caller.
async fn error_body(resp: reqwest::Response) -> String {
    match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("failed to read error response body: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn response_with_body(body: reqwest::Body) -> reqwest::Response {
        let mut resp = http::Response::new(body);
        *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        reqwest::Response::from(resp)
    }

    #[tokio::test]
    async fn test_error_body_is_returned() {
        let resp = response_with_body(reqwest::Body::from("internal failure"));
        assert_eq!(error_body(resp).await, "internal failure");
    }

    #[tokio::test]
    async fn test_unreadable_error_body_becomes_empty() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(std::io::Error::other("connection reset")),
        ];
        let resp = response_with_body(reqwest::Body::wrap_stream(futures_util::stream::iter(
            chunks,
        )));
        assert_eq!(error_body(resp).await, "");
    }

    #[test]
    fn test_client_is_send_sync_clone() {
        fn assert_traits<T: Send + Sync + Clone>() {}
        assert_traits::<ServiceClient>();
    }

    #[test]
    fn test_builder_keeps_base_url() {
        let base_url: BaseUrl = "http://localhost:8080/v1/AUTH_test".parse().unwrap();
        let client = ServiceClientBuilder::new(base_url)
            .provider(Some(StaticProvider::new("token")))
            .app_info(Some(("demo".into(), "1.0".into())))
            .build()
            .unwrap();
        assert!(!client.is_secure());
        assert_eq!(client.base_url().endpoint(), "http://localhost:8080/v1/AUTH_test/");
    }
}
