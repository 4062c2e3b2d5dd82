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

//! Argument builders for [`IdentityClient`](crate::identity::IdentityClient) APIs

mod create_limits;
mod delete_limit;
mod get_enforcement_model;
mod get_limit;
mod list_limits;
mod update_limit;

pub use create_limits::*;
pub use delete_limit::*;
pub use get_enforcement_model::*;
pub use get_limit::*;
pub use list_limits::*;
pub use update_limit::*;
