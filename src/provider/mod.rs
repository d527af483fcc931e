// SPDX-License-Identifier: MPL-2.0
//! Image provider client.
//!
//! The gallery talks to the remote image service through the [`ImageProvider`]
//! trait. [`UnsplashClient`] is the production implementation; tests swap in
//! in-memory providers or point the client at a local fake server.

pub mod settings;
pub mod unsplash;

pub use settings::{AccessKey, ProviderSettings};
pub use unsplash::UnsplashClient;

use crate::domain::{Image, SearchPage};
use crate::error::Result;
use async_trait::async_trait;

/// Read-only access to a remote photo catalogue.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Fetches a small random sample (see [`crate::domain::search::RANDOM_SAMPLE_SIZE`]).
    async fn fetch_random(&self) -> Result<Vec<Image>>;

    /// Fetches one page of keyword results.
    ///
    /// `query` must not be blank; implementations reject it with
    /// [`crate::error::ProviderError::InvalidQuery`].
    async fn search(&self, query: &str, page: u32, page_size: u32) -> Result<SearchPage>;

    /// Downloads raw image bytes from a preview or full-resolution URL.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}
