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

//! Generic page-by-page driver for listing operations.
//!
//! A paginated listing is a lazy sequence of pages. It can only be restarted
//! by building the listing request again. The first call to
//! [`Paginated::next_page`] always sends a request, so an empty listing
//! produces exactly one empty page; the sequence ends once a page carries no
//! continuation (an absent or empty next marker or link).

use crate::core::error::Error;
use async_trait::async_trait;
use futures_util::{Stream, stream as futures_stream};
use log::debug;

/// A listing that is fetched one page at a time.
#[async_trait]
pub trait Paginated: Send {
    type Item: Send;

    /// Fetches the next page, or returns `None` once the listing is
    /// exhausted. After an error the listing is considered exhausted.
    async fn next_page(&mut self) -> Option<Result<Self::Item, Error>>;
}

/// Continuation state of a paginated listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageCursor {
    /// No page has been requested yet.
    #[default]
    Start,
    /// The next page continues from this marker or link.
    Next(String),
    /// The listing is exhausted.
    Done,
}

impl PageCursor {
    /// Advances the cursor from the continuation value returned by a page.
    /// Absent or empty values end the listing.
    pub fn advance(&mut self, next: Option<String>) {
        *self = match next {
            Some(v) if !v.is_empty() => PageCursor::Next(v),
            _ => {
                debug!("pagination finished");
                PageCursor::Done
            }
        };
    }

    pub fn is_done(&self) -> bool {
        matches!(self, PageCursor::Done)
    }

    /// The continuation value to send with the next request, if any.
    pub fn marker(&self) -> Option<&str> {
        match self {
            PageCursor::Next(v) => Some(v),
            _ => None,
        }
    }
}

/// Turns a [`Paginated`] listing into a stream of pages.
pub fn pages<P>(paginated: P) -> Box<dyn Stream<Item = Result<P::Item, Error>> + Unpin + Send>
where
    P: Paginated + 'static,
{
    Box::new(Box::pin(futures_stream::unfold(
        paginated,
        move |mut this| async move { this.next_page().await.map(|page| (page, this)) },
    )))
}
