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

//! # OpenStack Rust SDK (`openstack`)
//!
//! A strongly-typed, async interface to the OpenStack Object Storage (Swift)
//! API and the Identity (Keystone v3) limits API.
//!
//! Each supported operation has a corresponding request builder (e.g.,
//! [`objectstorage::builders::CreateObject`], [`identity::builders::ListLimits`]),
//! which allows users to configure request parameters using a fluent builder
//! pattern.
//!
//! Request builders implement the [`core::traits::ServiceApi`] trait, which
//! provides the async [`send`](crate::core::traits::ServiceApi::send) method
//! to execute the request and return a typed response. Uploads and temp URLs
//! do I/O before the request is built and have an async `send` of their own.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use openstack::core::client::ServiceClient;
//! use openstack::core::traits::ServiceApi;
//! use openstack::objectstorage::response::GetObjectResponse;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ServiceClient::from_env().unwrap(); // reads OS_STORAGE_URL and OS_AUTH_TOKEN
//!
//!     let resp: GetObjectResponse = client
//!         .get_object("my-container", "my-object")
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("object is {} bytes", resp.content_length());
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`core::client::ServiceClient`] returns a builder struct
//! - Builders implement [`core::traits::ToServiceRequest`] for request conversion and [`core::traits::ServiceApi`] for execution
//! - Responses implement [`core::traits::FromServiceResponse`]; headers are parsed once into typed fields
//! - Every call is one HTTP request; nothing is retried

#![allow(clippy::result_large_err)]
pub mod core;
pub mod identity;
pub mod objectstorage;
