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

use futures_io::AsyncRead;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Forward-only reader of `size` pseudo-random bytes, usable both as a
/// blocking and as an async reader. The same seed yields
/// the same bytes, so tests can compute the expected checksum separately.
pub struct RandReader {
    size: u64,
    rng: SmallRng,
}

impl RandReader {
    pub fn new(size: u64, seed: u64) -> RandReader {
        RandReader {
            size,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Reads everything into memory.
    pub fn into_vec(mut self) -> Vec<u8> {
        let mut buf = Vec::new();
        io::Read::read_to_end(&mut self, &mut buf).unwrap();
        buf
    }
}

impl io::Read for RandReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        let bytes_read: usize = match (self.size as usize) > buf.len() {
            true => buf.len(),
            false => self.size as usize,
        };

        if bytes_read > 0 {
            self.rng.fill_bytes(&mut buf[0..bytes_read]);
        }

        self.size -= bytes_read as u64;

        Ok(bytes_read)
    }
}

impl AsyncRead for RandReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(io::Read::read(self.get_mut(), buf))
    }
}
