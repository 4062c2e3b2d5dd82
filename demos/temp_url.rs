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

use std::path::PathBuf;

use clap::Parser;
use http::Method;
use log::info;
use openstack::core::client::ServiceClient;
use openstack::objectstorage::ContentSource;

/// Upload a file (optionally) and print a temporary URL for it.
///
/// The endpoint and token are read from OS_STORAGE_URL and OS_AUTH_TOKEN.
#[derive(Parser)]
struct Cli {
    /// Container holding the object.
    container: String,
    /// Object to sign.
    object: String,
    /// File to upload to the object first.
    #[arg(long)]
    file: Option<PathBuf>,
    /// HTTP method the URL grants.
    #[arg(long, default_value = "GET")]
    method: String,
    /// Seconds the URL stays valid.
    #[arg(long, default_value_t = 3600)]
    ttl: u64,
    /// Signing key; fetched from the container or the account when omitted.
    #[arg(long)]
    key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();
    let args = Cli::parse();

    let client = ServiceClient::from_env()?;

    if let Some(file) = &args.file {
        let resp = client
            .create_object(
                &args.container,
                &args.object,
                ContentSource::from_file(file).await?,
            )
            .detect_content_type(true)
            .build()
            .send()
            .await?;
        info!(
            "uploaded {:?} to {}/{} (etag {})",
            file, args.container, args.object, resp.etag
        );
    }

    let resp = client
        .create_temp_url(
            &args.container,
            &args.object,
            Method::from_bytes(args.method.to_uppercase().as_bytes())?,
        )
        .ttl(args.ttl)
        .temp_url_key(args.key)
        .build()
        .send()
        .await?;

    info!("URL expires at {}", resp.expires);
    println!("{}", resp.url);

    Ok(())
}
