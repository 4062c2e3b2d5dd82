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

//! Service-independent plumbing: client, credentials, errors, URLs and the
//! request/response pipeline.

pub mod client;
pub mod creds;
pub mod error;
pub mod http;
pub mod multimap_ext;
pub mod pagination;
pub mod request;
pub mod traits;
pub mod utils;

pub use client::{ServiceClient, ServiceClientBuilder};
pub use error::Error;
pub use traits::{FromServiceResponse, ServiceApi, ToServiceRequest, ToStream};
