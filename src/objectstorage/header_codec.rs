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

//! Conversion between typed options and wire headers.
//!
//! Encoding is pure and total: every option value maps to zero or more
//! headers and nothing is validated here. Decoding parses response headers
//! back into typed fields; timestamps use the same formats in both
//! directions and are always UTC.

use crate::core::error::DecodingErr;
use crate::core::multimap_ext::{Multimap, MultimapExt};
use crate::core::utils::{
    UtcTime, canonical_header_key, from_swift_timestamp, header_bool, header_etag,
    header_http_date, header_str, header_u64, header_unix_time, to_http_header_value,
    to_unix_seconds,
};
use crate::objectstorage::header_constants::*;
use http::HeaderMap;
use std::collections::HashMap;

/// Update of a header that distinguishes "leave alone" from "clear".
///
/// A bare `Option<String>` cannot tell "do not send the header" apart from
/// "send it empty", which is how a value is cleared on the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HeaderUpdate<T> {
    /// Emit nothing.
    #[default]
    Untouched,
    /// Clear the stored value.
    Clear,
    /// Replace the stored value.
    Set(T),
}

impl<T> HeaderUpdate<T> {
    pub fn is_untouched(&self) -> bool {
        matches!(self, HeaderUpdate::Untouched)
    }
}

impl<T> From<T> for HeaderUpdate<T> {
    fn from(value: T) -> Self {
        HeaderUpdate::Set(value)
    }
}

impl From<&str> for HeaderUpdate<String> {
    fn from(value: &str) -> Self {
        HeaderUpdate::Set(value.to_string())
    }
}

/// Header encoding helpers on top of [`Multimap`].
pub trait HeaderEncodeExt {
    /// Emits `name: true` only when `flag` is set.
    fn add_flag(&mut self, name: &str, flag: bool);

    /// Emits `name: true|false` when a value is present.
    fn add_opt_bool(&mut self, name: &str, value: Option<bool>);

    /// Emits a timestamp as whole Unix seconds.
    fn add_unix_time(&mut self, name: &str, value: Option<UtcTime>);

    /// Emits a timestamp as an HTTP date.
    fn add_http_date(&mut self, name: &str, value: Option<UtcTime>);

    /// Emits a string update; [`HeaderUpdate::Clear`] sends an empty value.
    fn add_update(&mut self, name: &str, value: &HeaderUpdate<String>);
}

impl HeaderEncodeExt for Multimap {
    fn add_flag(&mut self, name: &str, flag: bool) {
        if flag {
            self.add(name, "true");
        }
    }

    fn add_opt_bool(&mut self, name: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.add(name, v.to_string());
        }
    }

    fn add_unix_time(&mut self, name: &str, value: Option<UtcTime>) {
        if let Some(t) = value {
            self.add(name, to_unix_seconds(t));
        }
    }

    fn add_http_date(&mut self, name: &str, value: Option<UtcTime>) {
        if let Some(t) = value {
            self.add(name, to_http_header_value(t));
        }
    }

    fn add_update(&mut self, name: &str, value: &HeaderUpdate<String>) {
        match value {
            HeaderUpdate::Untouched => {}
            HeaderUpdate::Clear => self.add(name, ""),
            HeaderUpdate::Set(v) => self.add(name, v.as_str()),
        }
    }
}

/// Emits the delete-at update. Clearing uses the dedicated removal header,
/// since an empty `X-Delete-At` is rejected by the server.
pub fn encode_delete_at(headers: &mut Multimap, value: &HeaderUpdate<UtcTime>) {
    match value {
        HeaderUpdate::Untouched => {}
        HeaderUpdate::Clear => headers.add(X_REMOVE_DELETE_AT, "1"),
        HeaderUpdate::Set(t) => headers.add(X_DELETE_AT, to_unix_seconds(*t)),
    }
}

/// Emits one `prefix + key` header per metadata entry.
pub fn encode_metadata(prefix: &str, metadata: &HashMap<String, String>) -> Multimap {
    let mut headers = Multimap::new();
    for (k, v) in metadata {
        headers.add(format!("{prefix}{k}"), v.as_str());
    }
    headers
}

/// Emits removal headers for `keys`. A key that is also being set in
/// `metadata` (exact, case-sensitive match on the logical name) is skipped.
pub fn encode_remove_metadata(
    remove_prefix: &str,
    keys: &[String],
    metadata: &HashMap<String, String>,
) -> Multimap {
    let mut headers = Multimap::new();
    for k in keys {
        if metadata.contains_key(k) {
            continue;
        }
        headers.add(format!("{remove_prefix}{k}"), "remove");
    }
    headers
}

fn strip_prefix_ignore_case<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let head = key.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        key.get(prefix.len()..)
    } else {
        None
    }
}

/// Inverse of [`encode_metadata`]. Keys keep their exact case.
pub fn decode_metadata(prefix: &str, headers: &Multimap) -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    for (k, values) in headers.iter_all() {
        if let Some(name) = strip_prefix_ignore_case(k, prefix)
            && let Some(v) = values.first()
        {
            metadata.insert(name.to_string(), v.clone());
        }
    }
    metadata
}

/// Decodes metadata from response headers. Header names arrive lower-cased,
/// so each logical key is canonicalised (`gophercloud-test` becomes
/// `Gophercloud-Test`).
pub fn metadata_from_headers(
    prefix: &str,
    headers: &HeaderMap,
) -> Result<HashMap<String, String>, DecodingErr> {
    let mut metadata = HashMap::new();
    for (k, v) in headers.iter() {
        if let Some(name) = strip_prefix_ignore_case(k.as_str(), prefix) {
            let value = v
                .to_str()
                .map_err(|_| DecodingErr::HeaderNotUtf8(k.to_string()))?;
            metadata.insert(canonical_header_key(name), value.to_string());
        }
    }
    Ok(metadata)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Object metadata carried by `GET` and `HEAD` responses.
pub struct ObjectHeaders {
    pub content_length: u64,
    pub content_type: String,
    pub content_disposition: Option<String>,
    pub content_encoding: Option<String>,
    pub date: Option<UtcTime>,
    pub last_modified: Option<UtcTime>,
    pub delete_at: Option<UtcTime>,
    pub etag: String,
    /// Set when the object is a static large object made of segments.
    pub static_large_object: bool,
    pub object_manifest: Option<String>,
    pub timestamp: Option<UtcTime>,
    pub trans_id: Option<String>,
    pub version_id: Option<String>,
    pub metadata: HashMap<String, String>,
}

fn opt_string(headers: &HeaderMap, name: &str) -> Result<Option<String>, DecodingErr> {
    Ok(header_str(headers, name)?.map(str::to_string))
}

impl ObjectHeaders {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, DecodingErr> {
        let timestamp = match header_str(headers, X_TIMESTAMP)? {
            Some(v) => Some(from_swift_timestamp(v)?),
            None => None,
        };

        Ok(Self {
            content_length: header_u64(headers, CONTENT_LENGTH)?.unwrap_or(0),
            content_type: header_str(headers, CONTENT_TYPE)?
                .unwrap_or_default()
                .to_string(),
            content_disposition: opt_string(headers, CONTENT_DISPOSITION)?,
            content_encoding: opt_string(headers, CONTENT_ENCODING)?,
            date: header_http_date(headers, DATE)?,
            last_modified: header_http_date(headers, LAST_MODIFIED)?,
            delete_at: header_unix_time(headers, X_DELETE_AT)?,
            etag: header_etag(headers, ETAG)?,
            static_large_object: header_bool(headers, X_STATIC_LARGE_OBJECT)?,
            object_manifest: opt_string(headers, X_OBJECT_MANIFEST)?,
            timestamp,
            trans_id: opt_string(headers, X_TRANS_ID)?,
            version_id: opt_string(headers, X_OBJECT_VERSION_ID)?,
            metadata: metadata_from_headers(X_OBJECT_META_PREFIX, headers)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use http::HeaderValue;
    use quickcheck::quickcheck;

    quickcheck! {
        fn prop_metadata_round_trip(metadata: HashMap<String, String>) -> bool {
            let headers = encode_metadata(X_OBJECT_META_PREFIX, &metadata);
            decode_metadata(X_OBJECT_META_PREFIX, &headers) == metadata
        }

        fn prop_one_header_per_entry(metadata: HashMap<String, String>) -> bool {
            encode_metadata(X_OBJECT_META_PREFIX, &metadata).len() == metadata.len()
        }
    }

    #[test]
    fn test_remove_metadata_skips_keys_being_set() {
        let mut set = HashMap::new();
        set.insert("Color".to_string(), "blue".to_string());
        let remove = vec!["Color".to_string(), "color".to_string(), "Size".to_string()];

        let headers = encode_remove_metadata(X_REMOVE_OBJECT_META_PREFIX, &remove, &set);
        assert!(!headers.contains_key("X-Remove-Object-Meta-Color"));
        assert_eq!(
            headers
                .get("X-Remove-Object-Meta-color")
                .map(String::as_str),
            Some("remove")
        );
        assert_eq!(
            headers.get("X-Remove-Object-Meta-Size").map(String::as_str),
            Some("remove")
        );
    }

    #[test]
    fn test_flags_and_updates() {
        let mut headers = Multimap::new();
        headers.add_flag(X_NEWEST, false);
        headers.add_opt_bool(X_DETECT_CONTENT_TYPE, Some(false));
        headers.add_update(CONTENT_DISPOSITION, &HeaderUpdate::Untouched);
        headers.add_update(CONTENT_ENCODING, &HeaderUpdate::Clear);
        headers.add_update(CONTENT_TYPE, &"text/plain".into());

        assert!(!headers.contains_key(X_NEWEST));
        assert_eq!(
            headers.get(X_DETECT_CONTENT_TYPE).map(String::as_str),
            Some("false")
        );
        assert!(!headers.contains_key(CONTENT_DISPOSITION));
        assert_eq!(headers.get(CONTENT_ENCODING).map(String::as_str), Some(""));
        assert_eq!(
            headers.get(CONTENT_TYPE).map(String::as_str),
            Some("text/plain")
        );

        headers.add_flag(X_NEWEST, true);
        assert_eq!(headers.get(X_NEWEST).map(String::as_str), Some("true"));
    }

    #[test]
    fn test_delete_at_encoding() {
        let t = Utc.with_ymd_and_hms(2020, 7, 1, 1, 13, 0).unwrap();

        let mut headers = Multimap::new();
        encode_delete_at(&mut headers, &HeaderUpdate::Set(t));
        assert_eq!(headers.get(X_DELETE_AT).map(String::as_str), Some("1593565980"));

        let mut headers = Multimap::new();
        encode_delete_at(&mut headers, &HeaderUpdate::Clear);
        assert_eq!(headers.get(X_REMOVE_DELETE_AT).map(String::as_str), Some("1"));
        assert!(!headers.contains_key(X_DELETE_AT));

        let mut headers = Multimap::new();
        encode_delete_at(&mut headers, &HeaderUpdate::Untouched);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_conditional_dates() {
        let t = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
        let mut headers = Multimap::new();
        headers.add_http_date(IF_MODIFIED_SINCE, Some(t));
        headers.add_http_date(IF_UNMODIFIED_SINCE, None);
        assert_eq!(
            headers.get(IF_MODIFIED_SINCE).map(String::as_str),
            Some("Tue, 10 Nov 2009 23:00:00 GMT")
        );
        assert!(!headers.contains_key(IF_UNMODIFIED_SINCE));
    }

    #[test]
    fn test_object_headers_from_response() {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("36"));
        headers.insert(
            "content-type",
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(
            "date",
            HeaderValue::from_static("Tue, 10 Nov 2009 23:00:00 GMT"),
        );
        headers.insert(
            "last-modified",
            HeaderValue::from_static("Tue, 10 Nov 2009 23:00:00 GMT"),
        );
        headers.insert("x-static-large-object", HeaderValue::from_static("True"));
        headers.insert("x-object-meta-gophercloud-test", HeaderValue::from_static("objects"));
        headers.insert("x-delete-at", HeaderValue::from_static("1593565980"));

        let parsed = ObjectHeaders::from_headers(&headers).unwrap();
        let t = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
        assert_eq!(parsed.content_length, 36);
        assert_eq!(parsed.content_type, "text/plain; charset=utf-8");
        assert_eq!(parsed.date, Some(t));
        assert_eq!(parsed.last_modified, Some(t));
        assert!(parsed.static_large_object);
        assert_eq!(parsed.delete_at.map(|t| t.timestamp()), Some(1593565980));
        assert_eq!(
            parsed.metadata.get("Gophercloud-Test").map(String::as_str),
            Some("objects")
        );
    }

    #[test]
    fn test_malformed_header_fails_whole_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert("content-length", HeaderValue::from_static("36"));
        headers.insert("last-modified", HeaderValue::from_static("yesterday"));
        assert!(ObjectHeaders::from_headers(&headers).is_err());
    }
}
