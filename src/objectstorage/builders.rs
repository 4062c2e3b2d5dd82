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

//! Argument builders for [`ServiceClient`](crate::core::client::ServiceClient) object storage APIs

mod bulk_delete;
mod copy_object;
mod create_object;
mod delete_object;
mod download_object;
mod get_account;
mod get_object;
mod list_objects;
mod update_object;

pub use bulk_delete::*;
pub use copy_object::*;
pub use create_object::*;
pub use delete_object::*;
pub use download_object::*;
pub use get_account::*;
pub use get_object::*;
pub use list_objects::*;
pub use update_object::*;
