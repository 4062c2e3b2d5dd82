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

//! Various utility and helper functions

use crate::core::error::{DecodingErr, ValidationErr};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use http::HeaderMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Gets current UTC time, truncated to the second.
pub fn utc_now() -> UtcTime {
    truncate_to_second(Utc::now())
}

/// Drops the sub-second part of a timestamp.
pub fn truncate_to_second(time: UtcTime) -> UtcTime {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .unwrap_or(time)
}

/// Gets HTTP header value of given time, e.g. `Tue, 10 Nov 2009 23:00:00 GMT`
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parses HTTP header value to time
pub fn from_http_header_value(s: &str) -> Result<UtcTime, chrono::ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT")?,
        Utc,
    ))
}

/// Renders a time as whole Unix seconds.
pub fn to_unix_seconds(time: UtcTime) -> String {
    time.timestamp().to_string()
}

/// Parses whole Unix seconds into a UTC time.
pub fn from_unix_seconds(secs: i64) -> Option<UtcTime> {
    Utc.timestamp_opt(secs, 0).single()
}

/// Parses a Swift `X-Timestamp` value such as `1471298837.95721` into UTC.
pub fn from_swift_timestamp(s: &str) -> Result<UtcTime, DecodingErr> {
    let (secs, frac) = s.split_once('.').unwrap_or((s, ""));
    let secs: i64 = secs
        .parse()
        .map_err(|_| DecodingErr::InvalidTimestamp(s.to_string()))?;
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodingErr::InvalidTimestamp(s.to_string()));
    }
    let nanos: u32 = if frac.is_empty() {
        0
    } else {
        let digits = &frac[..frac.len().min(9)];
        let scale = 10_u32.pow(9 - digits.len() as u32);
        digits
            .parse::<u32>()
            .map_err(|_| DecodingErr::InvalidTimestamp(s.to_string()))?
            * scale
    };
    Utc.timestamp_opt(secs, nanos)
        .single()
        .ok_or_else(|| DecodingErr::InvalidTimestamp(s.to_string()))
}

/// Parses the timestamp format used in JSON listings, e.g.
/// `2016-08-17T22:11:58.602650`, which carries no zone and is UTC.
pub fn from_listing_timestamp(s: &str) -> Result<UtcTime, chrono::ParseError> {
    let naive = match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(v) => v,
        Err(_) => NaiveDateTime::parse_from_str(s.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f")?,
    };
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
}

/// Incremental MD5 hasher rendering lowercase hex.
pub struct Md5Hasher(md5::Context);

impl Default for Md5Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5Hasher {
    pub fn new() -> Self {
        Self(md5::Context::new())
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.consume(data);
    }

    #[allow(deprecated)]
    pub fn hex_digest(self) -> String {
        format!("{:x}", self.0.compute())
    }
}

impl std::fmt::Debug for Md5Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Md5Hasher")
    }
}

/// Gets lowercase hex encoded MD5 hash of given data
pub fn md5_hex(data: &[u8]) -> String {
    let mut hasher = Md5Hasher::new();
    hasher.update(data);
    hasher.hex_digest()
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes an object name, keeping `/` separators.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Percent-encodes a single path segment, including any `/`.
pub fn urlencode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).collect()
}

/// Percent-decodes a URL path. Invalid UTF-8 sequences are replaced.
pub fn urldecode_path(path: &str) -> String {
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}

/// Validates given container name
pub fn check_container_name(name: &str) -> Result<(), ValidationErr> {
    if name.is_empty() {
        return Err(ValidationErr::InvalidContainerName(
            "container name cannot be empty".into(),
        ));
    }
    if name.contains('/') {
        return Err(ValidationErr::InvalidContainerName(format!(
            "container name '{name}' cannot contain '/'"
        )));
    }
    if name.len() > 256 {
        return Err(ValidationErr::InvalidContainerName(format!(
            "container name '{name}' exceeds 256 characters"
        )));
    }
    Ok(())
}

/// Validates given object name
pub fn check_object_name(name: &str) -> Result<(), ValidationErr> {
    if name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    Ok(())
}

/// Canonicalises a header name the way HTTP/1 servers spell it:
/// `x-object-meta-foo-bar` becomes `X-Object-Meta-Foo-Bar`.
pub fn canonical_header_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = true;
    for c in key.chars() {
        if upper {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        upper = c == '-';
    }
    out
}

// region: header getters

/// Gets the value of a header as a string, failing if it is not valid UTF-8.
pub fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, DecodingErr> {
    match headers.get(name) {
        Some(v) => v
            .to_str()
            .map(Some)
            .map_err(|_| DecodingErr::HeaderNotUtf8(name.to_string())),
        None => Ok(None),
    }
}

pub fn header_u64(headers: &HeaderMap, name: &str) -> Result<Option<u64>, DecodingErr> {
    match header_str(headers, name)? {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| DecodingErr::InvalidInteger {
                name: name.to_string(),
                value: v.to_string(),
            }),
        None => Ok(None),
    }
}

pub fn header_i64(headers: &HeaderMap, name: &str) -> Result<Option<i64>, DecodingErr> {
    match header_str(headers, name)? {
        Some(v) => v
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| DecodingErr::InvalidInteger {
                name: name.to_string(),
                value: v.to_string(),
            }),
        None => Ok(None),
    }
}

/// Parses a boolean header. Swift spells these `True`/`true`/`1`.
pub fn header_bool(headers: &HeaderMap, name: &str) -> Result<bool, DecodingErr> {
    match header_str(headers, name)? {
        Some(v) => match v.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" | "" => Ok(false),
            _ => Err(DecodingErr::InvalidBool {
                name: name.to_string(),
                value: v.to_string(),
            }),
        },
        None => Ok(false),
    }
}

pub fn header_http_date(headers: &HeaderMap, name: &str) -> Result<Option<UtcTime>, DecodingErr> {
    match header_str(headers, name)? {
        Some(v) => from_http_header_value(v)
            .map(Some)
            .map_err(|source| DecodingErr::InvalidTime {
                name: name.to_string(),
                value: v.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

pub fn header_unix_time(headers: &HeaderMap, name: &str) -> Result<Option<UtcTime>, DecodingErr> {
    match header_i64(headers, name)? {
        Some(secs) => from_unix_seconds(secs)
            .map(Some)
            .ok_or_else(|| DecodingErr::InvalidTimestamp(secs.to_string())),
        None => Ok(None),
    }
}

/// ETag header with surrounding quotes removed.
pub fn header_etag(headers: &HeaderMap, name: &str) -> Result<String, DecodingErr> {
    Ok(header_str(headers, name)?
        .map(|v| v.trim_matches('"').to_string())
        .unwrap_or_default())
}

// endregion: header getters
