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

//! Content transfer encoder for uploads.
//!
//! A [`ContentSource`] is either seekable or a plain stream. When a checksum
//! has to be computed, a seekable source is hashed in place and rewound to
//! where it started, so it is sent without being copied. A plain stream
//! cannot be read twice, so it is buffered in memory while it is hashed and
//! the buffer is sent instead. All reads go through async I/O.

use crate::core::multimap_ext::{Multimap, MultimapExt};
use crate::core::utils::Md5Hasher;
use crate::objectstorage::header_constants::ETAG;
use async_std::io::{
    self, Cursor, ErrorKind, Read as AsyncRead, ReadExt, Seek as AsyncSeek, SeekExt, SeekFrom,
};
use bytes::{Bytes, BytesMut};
use futures_util::Stream;
use log::debug;
use std::fmt;
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

const CHUNK_SIZE: usize = 64 * 1024;

/// Anything that can be read and repositioned asynchronously.
pub trait AsyncReadSeek: AsyncRead + AsyncSeek {}

impl<T: AsyncRead + AsyncSeek> AsyncReadSeek for T {}

/// Upload content, tagged with whether it can be re-read.
pub enum ContentSource {
    /// Supports random access; re-readable from the position it had when
    /// handed over.
    Seekable(Box<dyn AsyncReadSeek + Send + Unpin>),
    /// Forward-only stream.
    Stream(Box<dyn AsyncRead + Send + Unpin>),
}

/// How the encoder gets a checksum and a sendable body out of a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferStrategy {
    /// Hash in a first pass, rewind and send the source itself.
    ReplayInPlace,
    /// Copy into memory while hashing and send the copy.
    BufferThenSend,
}

impl ContentSource {
    pub fn seekable<R: AsyncRead + AsyncSeek + Send + Unpin + 'static>(reader: R) -> Self {
        ContentSource::Seekable(Box::new(reader))
    }

    pub fn stream<R: AsyncRead + Send + Unpin + 'static>(reader: R) -> Self {
        ContentSource::Stream(Box::new(reader))
    }

    /// Opens a file as a seekable source.
    pub async fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = async_std::fs::File::open(path.as_ref()).await?;
        Ok(ContentSource::seekable(file))
    }

    pub fn empty() -> Self {
        ContentSource::from(Bytes::new())
    }

    pub fn strategy(&self) -> TransferStrategy {
        match self {
            ContentSource::Seekable(_) => TransferStrategy::ReplayInPlace,
            ContentSource::Stream(_) => TransferStrategy::BufferThenSend,
        }
    }
}

impl Default for ContentSource {
    fn default() -> Self {
        ContentSource::empty()
    }
}

impl fmt::Debug for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Seekable(_) => f.write_str("ContentSource::Seekable"),
            ContentSource::Stream(_) => f.write_str("ContentSource::Stream"),
        }
    }
}

impl From<Bytes> for ContentSource {
    fn from(value: Bytes) -> Self {
        ContentSource::seekable(Cursor::new(value))
    }
}

impl From<Vec<u8>> for ContentSource {
    fn from(value: Vec<u8>) -> Self {
        ContentSource::from(Bytes::from(value))
    }
}

impl From<String> for ContentSource {
    fn from(value: String) -> Self {
        ContentSource::from(Bytes::from(value))
    }
}

impl From<&'static str> for ContentSource {
    fn from(value: &'static str) -> Self {
        ContentSource::from(Bytes::from_static(value.as_bytes()))
    }
}

impl From<&'static [u8]> for ContentSource {
    fn from(value: &'static [u8]) -> Self {
        ContentSource::from(Bytes::from_static(value))
    }
}

/// Where the `ETag` of an upload comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ChecksumPolicy {
    /// Send no `ETag` header.
    Disabled,
    /// Send this value verbatim. It is not checked against the content.
    Supplied(String),
    /// Compute the MD5 of the content.
    #[default]
    Compute,
}

/// Body ready to be sent, produced by [`encode_content`].
pub enum TransferBody {
    Seekable {
        reader: Box<dyn AsyncReadSeek + Send + Unpin>,
        start: u64,
    },
    Buffered(Cursor<Bytes>),
    Stream(Box<dyn AsyncRead + Send + Unpin>),
}

impl fmt::Debug for TransferBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferBody::Seekable { start, .. } => f
                .debug_struct("TransferBody::Seekable")
                .field("start", start)
                .finish(),
            TransferBody::Buffered(c) => f
                .debug_struct("TransferBody::Buffered")
                .field("len", &c.get_ref().len())
                .finish(),
            TransferBody::Stream(_) => f.write_str("TransferBody::Stream"),
        }
    }
}

impl AsyncRead for TransferBody {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        match self.get_mut() {
            TransferBody::Seekable { reader, .. } => Pin::new(reader).poll_read(cx, buf),
            TransferBody::Buffered(c) => Pin::new(c).poll_read(cx, buf),
            TransferBody::Stream(r) => Pin::new(r).poll_read(cx, buf),
        }
    }
}

impl TransferBody {
    /// Returns true when the body can be sent again after [`rewind`](Self::rewind).
    pub fn is_replayable(&self) -> bool {
        !matches!(self, TransferBody::Stream(_))
    }

    /// Repositions a replayable body at the start of its content.
    pub async fn rewind(&mut self) -> io::Result<()> {
        match self {
            TransferBody::Seekable { reader, start } => {
                reader.seek(SeekFrom::Start(*start)).await?;
                Ok(())
            }
            TransferBody::Buffered(c) => {
                c.set_position(0);
                Ok(())
            }
            TransferBody::Stream(_) => Err(io::Error::new(
                ErrorKind::Unsupported,
                "a forward-only stream cannot be rewound",
            )),
        }
    }

    /// Converts into a streaming request body, sending from the current
    /// position.
    pub fn into_body(self) -> reqwest::Body {
        match self {
            TransferBody::Buffered(c) => {
                let pos = (c.position() as usize).min(c.get_ref().len());
                reqwest::Body::from(c.into_inner().slice(pos..))
            }
            other => reqwest::Body::wrap_stream(chunks(other)),
        }
    }
}

/// Streams `reader` in chunks of up to [`CHUNK_SIZE`] bytes. The read buffer
/// is reclaimed once the previous chunk has been consumed.
fn chunks<R>(reader: R) -> impl Stream<Item = io::Result<Bytes>> + Send + 'static
where
    R: AsyncRead + Send + Unpin + 'static,
{
    let state = (reader, BytesMut::with_capacity(CHUNK_SIZE));
    futures_util::stream::try_unfold(state, |(mut reader, mut buf)| async move {
        buf.clear();
        buf.resize(CHUNK_SIZE, 0);
        let n = read_full(&mut reader, &mut buf[..]).await?;
        if n == 0 {
            return Ok(None);
        }
        let chunk = buf.split_to(n).freeze();
        Ok::<_, io::Error>(Some((chunk, (reader, buf))))
    })
}

/// Reads until `buf` is full or EOF, retrying on interruption.
async fn read_full<R: AsyncRead + Unpin + ?Sized>(
    reader: &mut R,
    buf: &mut [u8],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Output of [`encode_content`].
#[derive(Debug)]
pub struct EncodedContent {
    pub body: TransferBody,
    /// Headers contributed by the encoder, i.e. `ETag` when there is one.
    pub headers: Multimap,
    pub content_length: Option<u64>,
    /// The checksum sent as `ETag`, if any.
    pub checksum: Option<String>,
}

async fn remaining_len(reader: &mut (dyn AsyncReadSeek + Send + Unpin)) -> io::Result<(u64, u64)> {
    let start = reader.seek(SeekFrom::Current(0)).await?;
    let end = reader.seek(SeekFrom::End(0)).await?;
    reader.seek(SeekFrom::Start(start)).await?;
    Ok((start, end.saturating_sub(start)))
}

/// Prepares `source` for upload according to `policy`.
///
/// Computing a checksum reads the whole source, so this is awaited before
/// the request is built.
pub async fn encode_content(
    source: ContentSource,
    policy: &ChecksumPolicy,
) -> io::Result<EncodedContent> {
    let strategy = source.strategy();
    let (body, content_length, checksum) = match (source, policy) {
        (ContentSource::Seekable(mut reader), ChecksumPolicy::Compute) => {
            let start = reader.seek(SeekFrom::Current(0)).await?;
            let mut hasher = Md5Hasher::new();
            let mut buf = vec![0u8; CHUNK_SIZE];
            let mut len = 0_u64;
            loop {
                let n = read_full(&mut reader, &mut buf).await?;
                if n == 0 {
                    break;
                }
                hasher.update(&buf[..n]);
                len += n as u64;
            }
            reader.seek(SeekFrom::Start(start)).await?;
            (
                TransferBody::Seekable { reader, start },
                Some(len),
                Some(hasher.hex_digest()),
            )
        }
        (ContentSource::Stream(mut reader), ChecksumPolicy::Compute) => {
            let mut hasher = Md5Hasher::new();
            let mut data = BytesMut::new();
            let mut buf = vec![0u8; CHUNK_SIZE];
            loop {
                let n = read_full(&mut reader, &mut buf).await?;
                if n == 0 {
                    break;
                }
                hasher.update(&buf[..n]);
                data.extend_from_slice(&buf[..n]);
            }
            let len = data.len() as u64;
            (
                TransferBody::Buffered(Cursor::new(data.freeze())),
                Some(len),
                Some(hasher.hex_digest()),
            )
        }
        (ContentSource::Seekable(mut reader), policy) => {
            let (start, len) = remaining_len(reader.as_mut()).await?;
            (
                TransferBody::Seekable { reader, start },
                Some(len),
                supplied(policy),
            )
        }
        (ContentSource::Stream(reader), policy) => {
            (TransferBody::Stream(reader), None, supplied(policy))
        }
    };

    debug!(
        "encoded upload content: strategy={strategy:?}, length={content_length:?}, checksum={}",
        checksum.as_deref().unwrap_or("<none>")
    );

    let mut headers = Multimap::new();
    headers.add_opt(ETAG, checksum.clone());

    Ok(EncodedContent {
        body,
        headers,
        content_length,
        checksum,
    })
}

fn supplied(policy: &ChecksumPolicy) -> Option<String> {
    match policy {
        ChecksumPolicy::Supplied(etag) => Some(etag.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::md5_hex;
    use futures_util::TryStreamExt;
    use quickcheck::quickcheck;

    /// A reader that deliberately does not implement `Seek`.
    struct ForwardOnly(Cursor<Vec<u8>>);

    impl AsyncRead for ForwardOnly {
        fn poll_read(
            mut self: Pin<&mut Self>,
            cx: &mut Context<'_>,
            buf: &mut [u8],
        ) -> Poll<io::Result<usize>> {
            Pin::new(&mut self.0).poll_read(cx, buf)
        }
    }

    fn forward_only(content: &[u8]) -> ContentSource {
        ContentSource::stream(ForwardOnly(Cursor::new(content.to_vec())))
    }

    async fn read_all(body: &mut TransferBody) -> Vec<u8> {
        let mut out = Vec::new();
        body.read_to_end(&mut out).await.unwrap();
        out
    }

    #[tokio::test]
    async fn test_stream_is_buffered_and_hashed() {
        let content = b"I do not implement Seek()".to_vec();
        let source = forward_only(&content);
        assert_eq!(source.strategy(), TransferStrategy::BufferThenSend);

        let mut encoded = encode_content(source, &ChecksumPolicy::Compute).await.unwrap();
        assert!(encoded.body.is_replayable());
        assert_eq!(encoded.content_length, Some(content.len() as u64));
        assert_eq!(
            encoded.headers.get(ETAG).cloned(),
            Some(md5_hex(&content))
        );
        assert_eq!(read_all(&mut encoded.body).await, content);
    }

    #[tokio::test]
    async fn test_seekable_is_replayed_in_place() {
        let content = b"I implement Seek()".to_vec();
        let source = ContentSource::from(content.clone());
        assert_eq!(source.strategy(), TransferStrategy::ReplayInPlace);

        let mut encoded = encode_content(source, &ChecksumPolicy::Compute).await.unwrap();
        assert!(matches!(encoded.body, TransferBody::Seekable { .. }));
        assert_eq!(encoded.checksum, Some(md5_hex(&content)));
        assert_eq!(read_all(&mut encoded.body).await, content);

        encoded.body.rewind().await.unwrap();
        assert_eq!(read_all(&mut encoded.body).await, content);
    }

    #[tokio::test]
    async fn test_seekable_keeps_its_starting_position() {
        let mut cursor = Cursor::new(b"skip:payload".to_vec());
        cursor.set_position(5);
        let mut encoded = encode_content(ContentSource::seekable(cursor), &ChecksumPolicy::Compute)
            .await
            .unwrap();
        assert_eq!(encoded.content_length, Some(7));
        assert_eq!(encoded.checksum, Some(md5_hex(b"payload")));
        assert_eq!(read_all(&mut encoded.body).await, b"payload");
        encoded.body.rewind().await.unwrap();
        assert_eq!(read_all(&mut encoded.body).await, b"payload");
    }

    #[tokio::test]
    async fn test_file_is_opened_and_hashed_asynchronously() {
        let content = b"file content read through async I/O".to_vec();
        let path = std::env::temp_dir().join(format!("openstack-content-{}", uuid::Uuid::new_v4()));
        std::fs::write(&path, &content).unwrap();

        let source = ContentSource::from_file(&path).await.unwrap();
        assert_eq!(source.strategy(), TransferStrategy::ReplayInPlace);
        let mut encoded = encode_content(source, &ChecksumPolicy::Compute).await.unwrap();
        assert_eq!(encoded.content_length, Some(content.len() as u64));
        assert_eq!(encoded.checksum, Some(md5_hex(&content)));
        assert_eq!(read_all(&mut encoded.body).await, content);

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("openstack-missing-{}", uuid::Uuid::new_v4()));
        let err = ContentSource::from_file(&path).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_chunked_body_spans_several_reads() {
        let content: Vec<u8> = (0..(CHUNK_SIZE * 2 + 17)).map(|i| (i % 251) as u8).collect();
        let sizes: Vec<usize> = chunks(ForwardOnly(Cursor::new(content.clone())))
            .map_ok(|chunk| chunk.len())
            .try_collect()
            .await
            .unwrap();
        assert_eq!(sizes, vec![CHUNK_SIZE, CHUNK_SIZE, 17]);

        let sent: Vec<Bytes> = chunks(ForwardOnly(Cursor::new(content.clone())))
            .try_collect()
            .await
            .unwrap();
        assert_eq!(sent.concat(), content);
    }

    #[tokio::test]
    async fn test_empty_content_checksum() {
        let encoded = encode_content(ContentSource::empty(), &ChecksumPolicy::Compute)
            .await
            .unwrap();
        assert_eq!(
            encoded.checksum.as_deref(),
            Some("d41d8cd98f00b204e9800998ecf8427e")
        );
        assert_eq!(encoded.content_length, Some(0));
    }

    #[tokio::test]
    async fn test_disabled_checksum_omits_etag() {
        let encoded = encode_content(
            ContentSource::from("some example object"),
            &ChecksumPolicy::Disabled,
        )
        .await
        .unwrap();
        assert!(!encoded.headers.contains_key(ETAG));
        assert_eq!(encoded.checksum, None);
        assert_eq!(encoded.content_length, Some(19));
    }

    #[tokio::test]
    async fn test_supplied_checksum_is_passed_verbatim() {
        let encoded = encode_content(
            ContentSource::from("some example object"),
            &ChecksumPolicy::Supplied("not-really-an-md5".into()),
        )
        .await
        .unwrap();
        assert_eq!(
            encoded.headers.get(ETAG).map(String::as_str),
            Some("not-really-an-md5")
        );
    }

    #[tokio::test]
    async fn test_passthrough_stream_cannot_rewind() {
        let mut encoded = encode_content(forward_only(b"abc"), &ChecksumPolicy::Disabled)
            .await
            .unwrap();
        assert_eq!(encoded.content_length, None);
        assert!(!encoded.body.is_replayable());
        assert!(encoded.body.rewind().await.is_err());
        assert_eq!(read_all(&mut encoded.body).await, b"abc");
    }

    quickcheck! {
        fn prop_checksum_matches_sent_bytes(content: Vec<u8>, seekable: bool) -> bool {
            async_std::task::block_on(async {
                let source = if seekable {
                    ContentSource::from(content.clone())
                } else {
                    forward_only(&content)
                };
                let mut encoded = match encode_content(source, &ChecksumPolicy::Compute).await {
                    Ok(v) => v,
                    Err(_) => return false,
                };
                let sent = read_all(&mut encoded.body).await;
                encoded.headers.get(ETAG).cloned() == Some(md5_hex(&sent)) && sent == content
            })
        }
    }
}
