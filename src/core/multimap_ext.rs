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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

// RFC 3986 unreserved characters stay as-is in query strings.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn query_escape(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ESCAPE).collect()
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a key-value pair only when the value is present
    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Returns the first value stored for a key, ignoring ASCII case.
    fn get_ignore_case(&self, key: &str) -> Option<&String>;

    /// Converts multimap to HTTP query string. Keys are sorted so the output
    /// is stable.
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key.into(), v.into());
        }
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn get_ignore_case(&self, key: &str) -> Option<&String> {
        self.iter_all()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .and_then(|(_, vs)| vs.first())
    }

    fn to_query_string(&self) -> String {
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();

        let mut query = String::new();
        for key in keys {
            for value in self.get_vec(key).into_iter().flatten() {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&query_escape(key));
                query.push('=');
                query.push_str(&query_escape(value));
            }
        }
        query
    }
}
