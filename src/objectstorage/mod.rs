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

//! Object storage (Swift) API.
//!
//! Each operation is a method on [`ServiceClient`](crate::core::client::ServiceClient)
//! returning a request builder; see [`builders`] and [`response`].

pub mod builders;
mod client;
pub mod content;
pub mod header_codec;
pub mod header_constants;
pub mod object_content;
pub mod response;
pub mod temp_url;
pub mod types;

pub use content::{ChecksumPolicy, ContentSource};
pub use header_codec::HeaderUpdate;
pub use object_content::ObjectContent;
