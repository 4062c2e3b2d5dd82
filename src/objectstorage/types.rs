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

//! Types shared by object storage requests and responses.

use crate::core::utils::{UtcTime, from_listing_timestamp};
use serde::{Deserialize, Deserializer};

fn deserialize_listing_time<'de, D>(deserializer: D) -> Result<Option<UtcTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value {
        Some(s) if !s.is_empty() => from_listing_timestamp(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// One entry of an object listing.
///
/// Name-only listings fill in `name` alone. With a delimiter, pseudo
/// directories come back with only `subdir` set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ObjectInfo {
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default, deserialize_with = "deserialize_listing_time")]
    pub last_modified: Option<UtcTime>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subdir: Option<String>,
}

impl ObjectInfo {
    pub(crate) fn from_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Returns the name, or the pseudo directory for `subdir` entries.
    pub fn key(&self) -> &str {
        match &self.subdir {
            Some(s) if self.name.is_empty() => s,
            _ => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Utc};

    #[test]
    fn test_object_info_from_json() {
        let info: ObjectInfo = serde_json::from_str(
            r#"{"hash": "451e372e48e0f6b1114fa0724aa79fa1", "last_modified": "2016-08-17T22:11:58.602650",
                "bytes": 14, "name": "goodbye", "content_type": "application/octet-stream"}"#,
        )
        .unwrap();
        assert_eq!(info.bytes, 14);
        assert_eq!(info.key(), "goodbye");
        let lm = info.last_modified.unwrap();
        assert_eq!(lm.with_nanosecond(0).unwrap(), Utc.with_ymd_and_hms(2016, 8, 17, 22, 11, 58).unwrap());
        assert_eq!(lm.nanosecond(), 602_650_000);
    }

    #[test]
    fn test_subdir_entry() {
        let info: ObjectInfo = serde_json::from_str(r#"{"subdir": "directory/"}"#).unwrap();
        assert!(info.name.is_empty());
        assert_eq!(info.key(), "directory/");
        assert_eq!(info.last_modified, None);
    }
}
