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

//! Downloaded object content.

use async_std::io::WriteExt;
use bytes::{Bytes, BytesMut};
use futures_util::stream::{self, Stream, StreamExt};
use std::path::Path;
use std::pin::Pin;
use uuid::Uuid;

type IoResult<T> = core::result::Result<T, std::io::Error>;

// region: Size

#[derive(Debug, Clone, PartialEq, Eq, Copy, Default)]
pub enum Size {
    Known(u64),
    #[default]
    Unknown,
}

impl Size {
    pub fn is_known(&self) -> bool {
        matches!(self, Size::Known(_))
    }

    /// Returns the size if known, otherwise returns `None`.
    pub fn value(&self) -> Option<u64> {
        match self {
            Size::Known(v) => Some(*v),
            Size::Unknown => None,
        }
    }
}

impl From<Option<u64>> for Size {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(v) => Size::Known(v),
            None => Size::Unknown,
        }
    }
}

// endregion: Size

/// Body of a downloaded object.
///
/// The content is streamed from the open connection. Consuming it with
/// [`to_bytes`](Self::to_bytes), [`to_file`](Self::to_file) or
/// [`into_stream`](Self::into_stream) reads it; dropping it releases the
/// connection without reading the rest.
pub struct ObjectContent {
    r: Pin<Box<dyn Stream<Item = IoResult<Bytes>> + Send>>,
    size: Size,
}

impl std::fmt::Debug for ObjectContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectContent")
            .field("size", &self.size)
            .finish()
    }
}

impl Default for ObjectContent {
    fn default() -> Self {
        ObjectContent::empty()
    }
}

impl ObjectContent {
    pub fn new(r: impl Stream<Item = IoResult<Bytes>> + Send + 'static, size: impl Into<Size>) -> Self {
        Self {
            r: Box::pin(r),
            size: size.into(),
        }
    }

    /// Content of a response body.
    pub(crate) fn from_response(resp: reqwest::Response) -> Self {
        let size = resp.content_length();
        let r = resp
            .bytes_stream()
            .map(|chunk| chunk.map_err(std::io::Error::other));
        Self::new(r, size)
    }

    /// Zero-length content, e.g. for a download whose condition was not met.
    pub fn empty() -> Self {
        Self {
            r: Box::pin(stream::iter(vec![])),
            size: Size::Known(0),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn into_stream(self) -> Pin<Box<dyn Stream<Item = IoResult<Bytes>> + Send>> {
        self.r
    }

    /// Reads the whole content into memory.
    pub async fn to_bytes(self) -> IoResult<Bytes> {
        let mut buf = BytesMut::with_capacity(self.size.value().unwrap_or(0) as usize);
        let mut r = self.r;
        while let Some(bytes) = r.next().await {
            buf.extend_from_slice(&bytes?);
        }
        Ok(buf.freeze())
    }

    /// Write the content to a file, returning the number of bytes written.
    ///
    /// The content goes to a temporary file next to `file_path` first, which
    /// is then renamed. An existing file is replaced and a missing parent
    /// directory is created.
    pub async fn to_file(self, file_path: &Path) -> IoResult<u64> {
        if file_path.is_dir() {
            return Err(std::io::Error::other("path is a directory"));
        }
        let parent_dir = file_path.parent().ok_or(std::io::Error::other(format!(
            "path {file_path:?} does not have a parent directory"
        )))?;
        if !parent_dir.as_os_str().is_empty() && !parent_dir.is_dir() {
            async_std::fs::create_dir_all(parent_dir).await?;
        }
        let file_name = file_path.file_name().ok_or(std::io::Error::other(
            "could not get filename-component of path",
        ))?;
        let mut tmp_file_name = file_name.to_os_string();
        tmp_file_name.push(format!("_{}", Uuid::new_v4().to_string().replace('-', "_")));
        let tmp_file_path = parent_dir.join(tmp_file_name);

        let mut total_bytes_written = 0;
        let mut fp = async_std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_file_path)
            .await?;
        let mut r = self.r;
        while let Some(bytes) = r.next().await {
            let bytes = bytes?;
            total_bytes_written += bytes.len() as u64;
            fp.write_all(&bytes).await?;
        }
        fp.flush().await?;
        drop(fp);
        async_std::fs::rename(&tmp_file_path, file_path).await?;
        Ok(total_bytes_written)
    }
}
