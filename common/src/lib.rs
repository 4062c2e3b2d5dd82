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

//! Shared fixtures for the integration tests.

pub mod rand_reader;
pub mod test_context;
pub mod utils;

pub use rand_reader::RandReader;
pub use test_context::TestContext;
pub use utils::*;
