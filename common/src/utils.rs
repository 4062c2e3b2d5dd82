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

use rand::distr::{Alphanumeric, SampleString};

/// Token every mock expects in `X-Auth-Token`.
pub const TEST_TOKEN: &str = "gAAAAABfTestToken";

/// Account path of the object storage endpoint used by [`TestContext`](crate::TestContext).
pub const ACCOUNT_PATH: &str = "/v1/AUTH_test";

pub fn rand_container_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
}

pub fn rand_object_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}

/// Path of an object below [`ACCOUNT_PATH`].
pub fn object_path(container: &str, object: &str) -> String {
    format!("{ACCOUNT_PATH}/{container}/{object}")
}
