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

pub const IF_MATCH: &str = "If-Match";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_ENCODING: &str = "Content-Encoding";
pub const CACHE_CONTROL: &str = "Cache-Control";
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
pub const ACCEPT: &str = "Accept";
pub const RANGE: &str = "Range";
pub const ETAG: &str = "ETag";
pub const EXPIRES: &str = "Expires";
pub const DATE: &str = "Date";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const DESTINATION: &str = "Destination";

pub const X_OBJECT_META_PREFIX: &str = "X-Object-Meta-";
pub const X_REMOVE_OBJECT_META_PREFIX: &str = "X-Remove-Object-Meta-";
pub const X_ACCOUNT_META_PREFIX: &str = "X-Account-Meta-";

pub const X_COPY_FROM: &str = "X-Copy-From";
pub const X_DELETE_AFTER: &str = "X-Delete-After";
pub const X_DELETE_AT: &str = "X-Delete-At";
pub const X_REMOVE_DELETE_AT: &str = "X-Remove-Delete-At";
pub const X_DETECT_CONTENT_TYPE: &str = "X-Detect-Content-Type";
pub const X_OBJECT_MANIFEST: &str = "X-Object-Manifest";
pub const X_NEWEST: &str = "X-Newest";
pub const X_FRESH_METADATA: &str = "X-Fresh-Metadata";
pub const X_STATIC_LARGE_OBJECT: &str = "X-Static-Large-Object";
pub const X_TIMESTAMP: &str = "X-Timestamp";
pub const X_TRANS_ID: &str = "X-Trans-Id";
pub const X_OPENSTACK_REQUEST_ID: &str = "X-Openstack-Request-Id";
pub const X_OBJECT_VERSION_ID: &str = "X-Object-Version-Id";
pub const X_COPIED_FROM: &str = "X-Copied-From";
pub const X_COPIED_FROM_LAST_MODIFIED: &str = "X-Copied-From-Last-Modified";

pub const X_ACCOUNT_META_TEMP_URL_KEY: &str = "X-Account-Meta-Temp-Url-Key";
pub const X_ACCOUNT_META_TEMP_URL_KEY_2: &str = "X-Account-Meta-Temp-Url-Key-2";
pub const X_CONTAINER_META_TEMP_URL_KEY: &str = "X-Container-Meta-Temp-Url-Key";
pub const X_ACCOUNT_BYTES_USED: &str = "X-Account-Bytes-Used";
pub const X_ACCOUNT_CONTAINER_COUNT: &str = "X-Account-Container-Count";
pub const X_ACCOUNT_OBJECT_COUNT: &str = "X-Account-Object-Count";
pub const X_ACCOUNT_BYTES_USED_QUOTA: &str = "X-Account-Meta-Quota-Bytes";

pub const MULTIPART_MANIFEST: &str = "multipart-manifest";
pub const TEMP_URL_SIG: &str = "temp_url_sig";
pub const TEMP_URL_EXPIRES: &str = "temp_url_expires";
pub const VERSION_ID: &str = "version-id";
pub const BULK_DELETE: &str = "bulk-delete";
